//! UI components for the greeting app.

mod app;
mod greeting;
mod overlays;
mod surprise;

pub use app::*;
pub use greeting::*;
pub use overlays::*;
pub use surprise::*;
