pub mod stick_theme;
