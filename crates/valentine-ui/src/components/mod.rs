//! Reusable card components
//!
//! Styling lives in the desktop app's global stylesheet; components only
//! pick class names and inline custom properties.

mod button;
mod flip_clock;
mod location_card;
mod particle_layer;
mod theme_toggle;

pub use button::*;
pub use flip_clock::*;
pub use location_card::*;
pub use particle_layer::*;
pub use theme_toggle::*;
