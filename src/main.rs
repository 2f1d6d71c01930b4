#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based wellness calculator.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use egui::viewport::IconData;
use wellness::egui_app::ui::{DEFAULT_VIEWPORT_SIZE, EguiApp, MIN_VIEWPORT_SIZE};
use wellness::logging;

const ICON_SIZE: u32 = 64;
const ICON_COLOR: [u8; 3] = [0x10, 0xb9, 0x81];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("Wellness Calculator")
        .with_inner_size(DEFAULT_VIEWPORT_SIZE)
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_icon(app_icon());

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Wellness Calculator",
        native_options,
        Box::new(|_cc| match EguiApp::launch() {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => {
                tracing::error!("Startup failed: {err}");
                Ok(Box::new(LaunchError {
                    message: err.to_string(),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Draw the window icon: a filled disc with a lighter ring.
fn app_icon() -> IconData {
    let size = ICON_SIZE as f32;
    let center = (size - 1.0) / 2.0;
    let outer = size / 2.0 - 1.0;
    let ring = outer - 6.0;
    let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let distance = (dx * dx + dy * dy).sqrt();
            let pixel = if distance > outer {
                [0, 0, 0, 0]
            } else if distance > ring {
                [0xec, 0xfd, 0xf5, 255]
            } else {
                [ICON_COLOR[0], ICON_COLOR[1], ICON_COLOR[2], 255]
            };
            rgba.extend_from_slice(&pixel);
        }
    }
    IconData {
        rgba,
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start Wellness Calculator");
                ui.label(&self.message);
            });
        });
    }
}
