pub mod cli;
pub mod explorer;
