//! Card context for the screens.
//!
//! `App` builds one [`Card`] at startup and provides it together with the
//! reactive snapshot, theme and particle handles.
//!
//! ## Usage
//!
//! ```ignore
//! let card = use_card();
//! let snapshot = use_snapshot();
//!
//! card.session.dispatch(FlowEvent::Accept);
//! ```

use std::path::Path;
use std::sync::Arc;

use dioxus::prelude::*;
use valentine_core::{
    CardConfig, CardResult, PreferenceStore, Session, SessionOptions, SessionSnapshot, SystemClock, Theme,
};
use valentine_ui::Particles;

pub use crate::{launch_options, Launch};

/// One running card: its session and the config it was built from.
#[derive(Clone)]
pub struct Card {
    pub session: Session,
    pub config: Arc<CardConfig>,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.config, &other.config)
    }
}

impl Card {
    /// Load the config (falling back to defaults) and start a session.
    pub fn start(launch: &Launch) -> CardResult<Self> {
        let config = match load_config(&launch.data_dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default card config: {:#}", e);
                CardConfig::default()
            }
        };
        let options = SessionOptions {
            preview: launch.preview,
            capabilities: launch.capabilities,
        };
        let session = Session::new(&config, SystemClock, options)?;
        Ok(Self {
            session,
            config: Arc::new(config),
        })
    }
}

/// Read `card.json` from the data directory.
pub fn load_config(data_dir: &Path) -> anyhow::Result<CardConfig> {
    anyhow::Context::with_context(CardConfig::load_or_default(data_dir), || {
        format!("failed to load card config from {}", data_dir.display())
    })
}

/// Theme signal plus the store it is persisted to.
#[derive(Clone)]
pub struct ThemePreference {
    pub theme: Signal<Theme>,
    store: Option<PreferenceStore>,
}

impl ThemePreference {
    /// Open the store and resolve the starting theme.
    ///
    /// Storage failures are logged; the card then runs without persistence.
    pub fn open(launch: &Launch) -> (Option<PreferenceStore>, Theme) {
        let store = match PreferenceStore::open_in(&launch.data_dir) {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("Theme preference unavailable: {}", e);
                None
            }
        };
        let stored = store.as_ref().and_then(|s| match s.load_theme() {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Ignoring stored theme: {}", e);
                None
            }
        });
        (store, Theme::resolve(stored, launch.prefers_dark))
    }

    pub fn new(theme: Signal<Theme>, store: Option<PreferenceStore>) -> Self {
        Self { theme, store }
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self) {
        let next = self.theme.peek().toggled();
        self.theme.set(next);
        if let Some(store) = &self.store {
            if let Err(e) = store.save_theme(next) {
                tracing::warn!("Failed to save theme preference: {}", e);
            }
        }
    }
}

/// Hook to access the running card.
pub fn use_card() -> Card {
    use_context::<Card>()
}

/// Hook to access the latest session snapshot.
///
/// Updates every time the session publishes.
pub fn use_snapshot() -> Signal<SessionSnapshot> {
    use_context::<Signal<SessionSnapshot>>()
}

pub fn use_theme() -> ThemePreference {
    use_context::<ThemePreference>()
}

/// Hook to launch confetti and hearts on the shared particle layer.
pub fn use_card_particles() -> Particles {
    use_context::<Particles>()
}
