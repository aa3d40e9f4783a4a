pub mod command;
pub mod controller;
pub mod status;
