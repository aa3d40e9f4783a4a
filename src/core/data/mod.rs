pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod resolution;
pub mod view_state;
