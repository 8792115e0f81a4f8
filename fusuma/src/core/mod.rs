mod app;
mod geometry;
pub mod interaction;
pub mod launch;
mod registry;
mod stacking;
mod state;
mod taskbar;
mod window;

pub use app::*;
pub use geometry::*;
pub use interaction::Interactions;
pub use launch::LaunchDecision;
pub use registry::*;
pub use stacking::*;
pub use state::*;
pub use taskbar::*;
pub use window::*;
