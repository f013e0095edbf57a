//! Decline escalation
//!
//! Every press of the "No" button picks a pushier label, grows the "Yes"
//! button, shrinks the "No" button and shoves it sideways for a moment.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Growth of the accept button per decline press
pub const ACCEPT_SCALE_STEP: f32 = 0.035;
/// Upper bound of the accept button scale
pub const ACCEPT_SCALE_MAX: f32 = 1.18;
/// Shrink of the decline button per decline press
pub const DECLINE_SCALE_STEP: f32 = 0.08;
/// Lower bound of the decline button scale
pub const DECLINE_SCALE_MIN: f32 = 0.55;

/// How long the decline button stays nudged after the latest press
pub const NUDGE_RESET: Duration = Duration::from_millis(520);
/// How long the wiggle animation class stays on after a press
pub const JIGGLE_RESET: Duration = Duration::from_millis(220);

const DEFAULT_LINES: [&str; 10] = [
    "No 🙄",
    "Bro 🤨",
    "Be serious",
    "Get a FAT grip.",
    "That’s not an option",
    "Stop playing",
    "Ok you’re doing too much",
    "Behave.",
    "calm.",
    "Minor your clapped anyways",
];

/// Ordered, non-empty list of decline button labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct DeclineLines(Vec<String>);

impl DeclineLines {
    /// Build a label list. An empty list has no label to clamp to.
    pub fn new(lines: Vec<String>) -> CardResult<Self> {
        if lines.is_empty() {
            return Err(CardError::InvalidConfig(
                "decline lines must not be empty".to_string(),
            ));
        }
        Ok(Self(lines))
    }

    /// Label for the given press count, clamped to the last entry.
    pub fn label(&self, count: u32) -> &str {
        let index = (count as usize).min(self.0.len() - 1);
        &self.0[index]
    }

    /// The label shown before any press.
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a list built through `new`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for DeclineLines {
    fn default() -> Self {
        Self(DEFAULT_LINES.iter().map(|s| s.to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for DeclineLines {
    type Error = CardError;

    fn try_from(lines: Vec<String>) -> CardResult<Self> {
        Self::new(lines)
    }
}

impl From<DeclineLines> for Vec<String> {
    fn from(lines: DeclineLines) -> Self {
        lines.0
    }
}

/// Scale of the accept button after `count` decline presses.
pub fn accept_scale(count: u32) -> f32 {
    (1.0 + count as f32 * ACCEPT_SCALE_STEP).min(ACCEPT_SCALE_MAX)
}

/// Scale of the decline button after `count` decline presses.
pub fn decline_scale(count: u32) -> f32 {
    (1.0 - count as f32 * DECLINE_SCALE_STEP).max(DECLINE_SCALE_MIN)
}

/// Pixel offset applied to the decline button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nudge {
    pub x: i32,
    pub y: i32,
}

impl Nudge {
    pub const ZERO: Nudge = Nudge { x: 0, y: 0 };

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Nudge for the press that brought the counter to `count`.
///
/// Even counts push right, odd counts push left and drop two pixels.
pub fn nudge_for(count: u32) -> Nudge {
    let direction = if count % 2 == 0 { 1 } else { -1 };
    Nudge {
        x: direction * (10 + (count % 3) as i32 * 4),
        y: (count % 2) as i32 * 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lines_have_ten_entries() {
        let lines = DeclineLines::default();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines.first(), "No 🙄");
    }

    #[test]
    fn label_clamps_to_last_entry() {
        let lines = DeclineLines::default();
        assert_eq!(lines.label(0), "No 🙄");
        assert_eq!(lines.label(1), "Bro 🤨");
        assert_eq!(lines.label(9), "Minor your clapped anyways");
        assert_eq!(lines.label(12), "Minor your clapped anyways");
        assert_eq!(lines.label(u32::MAX), "Minor your clapped anyways");
    }

    #[test]
    fn empty_lines_rejected() {
        assert!(matches!(
            DeclineLines::new(Vec::new()),
            Err(CardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn single_line_always_selected() {
        let lines = DeclineLines::new(vec!["nope".to_string()]).unwrap();
        assert_eq!(lines.label(0), "nope");
        assert_eq!(lines.label(40), "nope");
    }

    #[test]
    fn scales_start_at_one() {
        assert_eq!(accept_scale(0), 1.0);
        assert_eq!(decline_scale(0), 1.0);
    }

    #[test]
    fn scales_hit_their_bounds() {
        assert!((accept_scale(2) - 1.07).abs() < 1e-6);
        assert_eq!(accept_scale(6), ACCEPT_SCALE_MAX);
        assert_eq!(accept_scale(1_000), ACCEPT_SCALE_MAX);

        assert!((decline_scale(3) - 0.76).abs() < 1e-6);
        assert_eq!(decline_scale(6), DECLINE_SCALE_MIN);
        assert_eq!(decline_scale(1_000), DECLINE_SCALE_MIN);
    }

    #[test]
    fn nudge_alternates_direction() {
        assert_eq!(nudge_for(1), Nudge { x: -14, y: 2 });
        assert_eq!(nudge_for(2), Nudge { x: 18, y: 0 });
        assert_eq!(nudge_for(3), Nudge { x: -10, y: 2 });
        assert_eq!(nudge_for(4), Nudge { x: 14, y: 0 });
        assert_eq!(nudge_for(6), Nudge { x: 10, y: 0 });
    }

    #[test]
    fn lines_deserialize_through_validation() {
        let ok: DeclineLines = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(ok.label(5), "b");

        let empty = serde_json::from_str::<DeclineLines>("[]");
        assert!(empty.is_err());
    }
}
