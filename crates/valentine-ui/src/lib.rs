//! Valentine Card UI Components
//!
//! Dioxus components shared by the card's screens. They render state owned
//! by `valentine-core` and hold no flow logic of their own.
//!
//! ## Look
//!
//! - **Rose (#e11d48)**: the "Yes" button and accents
//! - **Blush (#fff1f2)**: light background
//! - **Night (#140b12)**: dark background
//!
//! Colors come from CSS custom properties, so every component follows the
//! active `data-theme` without re-rendering.

pub mod components;
pub mod task;

pub use components::*;
pub use task::UiTask;
