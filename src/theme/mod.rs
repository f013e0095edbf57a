//! Stylesheet for the card window.

mod styles;

pub use styles::GLOBAL_STYLES;
