pub mod args;
pub mod render_cli;
