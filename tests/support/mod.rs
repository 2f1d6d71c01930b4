pub mod wellness_env;
