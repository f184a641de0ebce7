//! Fixed-frame-rate terminal runtime.
//!
//! [`Runtime::run`] takes over the terminal and drives an [`App`] one frame at a
//! time: deliver at most one pending terminal event, update, draw, then sleep
//! until the next frame is due.

pub use self::{app::App, runtime::Runtime};

mod app;
mod frame_clock;
mod runtime;
