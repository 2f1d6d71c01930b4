//! Desktop UI built on egui: controller, state, view models and renderer.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
