//! Synchronous frame loop for exploring the Mandelbrot set.
//!
//! Commands are queued by an input adapter, applied between frames, and
//! each frame is rendered from one frozen view snapshot before being handed
//! to a [`ports::frame_presenter::FramePresenterPort`].

pub mod data;
pub mod errors;
pub mod ports;
mod session;

pub use session::ExplorerSession;
