pub mod stick_config;
pub mod stick_output;
pub mod stick_pad;
pub mod ui;
