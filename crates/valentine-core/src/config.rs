//! Card configuration.
//!
//! Everything personal about the card (names, date, location, the escalating
//! "No" lines) lives here. Defaults describe the Feb 14 card; an optional
//! `card.json` in the data directory overrides any subset of fields.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::{TargetInstant, UNLOCK_POLL};
use crate::error::{CardError, CardResult};
use crate::escalation::DeclineLines;
use crate::flow::DEFAULT_COUNTDOWN_SECONDS;

/// File name of the optional card configuration inside the data directory
pub const CONFIG_FILE: &str = "card.json";

/// Longest accepted unlock re-check interval
pub const MAX_UNLOCK_POLL_SECS: u64 = 3_600;

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// Local calendar date and wall time of the target instant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
}

impl TargetSpec {
    pub fn resolve(&self) -> CardResult<TargetInstant> {
        TargetInstant::from_local(self.year, self.month, self.day, self.hour, self.minute)
    }
}

impl Default for TargetSpec {
    fn default() -> Self {
        Self {
            year: 2026,
            month: 2,
            day: 14,
            hour: 0,
            minute: 0,
        }
    }
}

/// A labelled outbound link
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Name shown in the question
    pub recipient: String,
    /// Subtitle on the accepted screen
    pub tagline: String,
    /// Footer line on the accepted screen
    pub signature: String,
    /// Location revealed once the target is reached
    pub location: String,
    /// Line shown under the revealed location
    pub reveal_note: String,
    /// Link under the question buttons
    pub verse: Option<Link>,
    /// When the location unlocks
    pub target: TargetSpec,
    /// Escalating labels of the "No" button
    pub decline_lines: DeclineLines,
    /// Length of the countdown after "Yes"
    pub countdown_seconds: u32,
    /// How often the unlock flag is re-checked
    pub unlock_poll_secs: u64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            recipient: "Janice Eugenia Amoaku".to_string(),
            tagline: "Jay&Drew’s First of many 🫶".to_string(),
            signature: "Built with 💖 by Drew.".to_string(),
            location: "Victors Hale, Manchester".to_string(),
            reveal_note: "Today’s the day. Be ready 9pm. 🖤".to_string(),
            verse: Some(Link {
                label: "Ephesians 5:28".to_string(),
                url: "https://www.bible.com/bible/111/EPH.5.28".to_string(),
            }),
            target: TargetSpec::default(),
            decline_lines: DeclineLines::default(),
            countdown_seconds: DEFAULT_COUNTDOWN_SECONDS,
            unlock_poll_secs: UNLOCK_POLL.as_secs(),
        }
    }
}

impl CardConfig {
    /// Load `card.json` from the data directory, or defaults if absent.
    pub fn load_or_default(data_dir: impl AsRef<Path>) -> CardResult<Self> {
        let path = data_dir.as_ref().join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(?path, "no card config, using defaults");
            return Ok(Self::default());
        }

        let bytes = std::fs::read(&path)?;
        let config: Self = serde_json::from_slice(&bytes)?;
        config.validate()?;
        tracing::info!(?path, "loaded card config");
        Ok(config)
    }

    /// Reject values the flow cannot run with.
    pub fn validate(&self) -> CardResult<()> {
        if self.countdown_seconds == 0 {
            return Err(CardError::InvalidConfig(
                "countdown_seconds must be at least 1".to_string(),
            ));
        }
        if self.unlock_poll_secs == 0 {
            return Err(CardError::InvalidConfig(
                "unlock_poll_secs must be at least 1".to_string(),
            ));
        }
        if self.unlock_poll_secs > MAX_UNLOCK_POLL_SECS {
            return Err(CardError::InvalidConfig(format!(
                "unlock_poll_secs must be at most {MAX_UNLOCK_POLL_SECS}"
            )));
        }
        self.target.resolve()?;
        Ok(())
    }

    pub fn target_instant(&self) -> CardResult<TargetInstant> {
        self.target.resolve()
    }

    pub fn unlock_poll(&self) -> Duration {
        Duration::from_secs(self.unlock_poll_secs)
    }

    /// Maps search link for the revealed location.
    pub fn maps_url(&self) -> String {
        format!("{}{}", MAPS_SEARCH_URL, encode_uri_component(&self.location))
    }
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`,
/// i.e. the RFC 3986 unreserved set plus the sub-delims browsers keep.
fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_valid() {
        let config = CardConfig::default();
        config.validate().unwrap();
        assert_eq!(config.countdown_seconds, 5);
        assert_eq!(config.unlock_poll(), Duration::from_secs(3));
        assert_eq!(config.decline_lines.len(), 10);
    }

    #[test]
    fn maps_url_is_encoded() {
        let config = CardConfig::default();
        assert_eq!(
            config.maps_url(),
            "https://www.google.com/maps/search/?api=1&query=Victors%20Hale%2C%20Manchester"
        );
    }

    #[test]
    fn encode_handles_multibyte() {
        assert_eq!(encode_uri_component("café & co"), "caf%C3%A9%20%26%20co");
        assert_eq!(encode_uri_component("a-b_c.d!~*'()"), "a-b_c.d!~*'()");
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = CardConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config, CardConfig::default());
    }

    #[test]
    fn partial_file_overrides_fields() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "recipient": "Sam", "countdown_seconds": 3, "decline_lines": ["no", "still no"] }"#,
        )
        .unwrap();

        let config = CardConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.recipient, "Sam");
        assert_eq!(config.countdown_seconds, 3);
        assert_eq!(config.decline_lines.label(7), "still no");
        assert_eq!(config.location, "Victors Hale, Manchester");
    }

    #[test]
    fn unlock_poll_is_bounded() {
        let mut config = CardConfig {
            unlock_poll_secs: MAX_UNLOCK_POLL_SECS,
            ..CardConfig::default()
        };
        config.validate().unwrap();

        config.unlock_poll_secs = MAX_UNLOCK_POLL_SECS + 1;
        assert!(matches!(config.validate(), Err(CardError::InvalidConfig(_))));

        config.unlock_poll_secs = u64::MAX;
        assert!(matches!(config.validate(), Err(CardError::InvalidConfig(_))));
    }

    #[test]
    fn invalid_values_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{ "countdown_seconds": 0 }"#).unwrap();
        assert!(matches!(
            CardConfig::load_or_default(dir.path()),
            Err(CardError::InvalidConfig(_))
        ));

        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "unlock_poll_secs": 18446744073709551615 }"#,
        )
        .unwrap();
        assert!(matches!(
            CardConfig::load_or_default(dir.path()),
            Err(CardError::InvalidConfig(_))
        ));

        std::fs::write(dir.path().join(CONFIG_FILE), r#"{ "decline_lines": [] }"#).unwrap();
        assert!(matches!(
            CardConfig::load_or_default(dir.path()),
            Err(CardError::Serialization(_))
        ));

        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "target": { "year": 2026, "month": 2, "day": 31 } }"#,
        )
        .unwrap();
        assert!(matches!(
            CardConfig::load_or_default(dir.path()),
            Err(CardError::InvalidTarget(_))
        ));
    }
}
