pub mod cli;
pub mod ports;
pub mod render_controller;
