//! Valentine Card Core Library
//!
//! The UI-free heart of the card: the screen flow, the countdown clock and
//! the timers that drive them.
//!
//! ## Overview
//!
//! The card walks through four screens. A question with a stubborn "No"
//! button, a short countdown after "Yes", and an accepted screen with a live
//! countdown to a fixed date. A location stays locked until that date.
//!
//! ```text
//! ┌───────┐ Continue ┌──────────┐ Accept ┌───────────┐ 5 ticks ┌──────────┐
//! │ Intro │ ───────▶ │ Question │ ─────▶ │ Countdown │ ──────▶ │ Accepted │
//! └───────┘          └──────────┘        └───────────┘         └──────────┘
//!     ▲                 │ Decline (stays)                            │
//!     └──────────────────────────────── Restart ─────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use valentine_core::{CardConfig, FlowEvent, Session, SessionOptions, SystemClock};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CardConfig::default();
//!     let session = Session::new(&config, SystemClock, SessionOptions::default())?;
//!
//!     session.dispatch(FlowEvent::Continue);
//!     session.dispatch(FlowEvent::Accept);
//!
//!     let mut rx = session.subscribe();
//!     while rx.changed().await.is_ok() {
//!         println!("{:?}", rx.borrow().state);
//!     }
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod escalation;
pub mod flow;
pub mod particles;
pub mod preview;
pub mod session;
pub mod storage;
pub mod theme;
pub mod timer;

// Re-exports
pub use clock::{
    compute_remaining, is_unlocked, Clock, ClockFace, ClockUnit, DigitSlide, FixedClock, RemainingTicker,
    SystemClock, TargetInstant, TimeRemaining, UnlockEdge, UnlockMonitor,
};
pub use config::CardConfig;
pub use error::{CardError, CardResult};
pub use escalation::{accept_scale, decline_scale, nudge_for, DeclineLines, Nudge};
pub use flow::{transition, Effect, Flow, FlowEvent, FlowState};
pub use particles::{Capabilities, Particle, ParticleKind, Viewport};
pub use preview::UnlockOverride;
pub use session::{CardEffect, Session, SessionOptions, SessionSnapshot};
pub use storage::PreferenceStore;
pub use theme::Theme;
pub use timer::{after, every, Cancel, DeferredSlot, TimerGuard};
