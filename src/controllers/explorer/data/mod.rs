pub mod explorer_config;
pub mod frame_data;
