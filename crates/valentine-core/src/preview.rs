//! Preview override for the location reveal.
//!
//! `?unlock=1` forces the unlocked state so the reveal can be checked before
//! the target date. It is read once at startup and never re-evaluated.

/// Query key that enables the preview
pub const UNLOCK_KEY: &str = "unlock";
/// Value the key must carry
pub const UNLOCK_VALUE: &str = "1";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnlockOverride(bool);

impl UnlockOverride {
    pub const OFF: UnlockOverride = UnlockOverride(false);
    pub const ON: UnlockOverride = UnlockOverride(true);

    /// Parse a query string such as `?unlock=1&foo=bar`.
    ///
    /// Only the first `unlock` pair counts, matching `URLSearchParams::get`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let value = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(key, _)| *key == UNLOCK_KEY)
            .map(|(_, value)| value);
        Self(value == Some(UNLOCK_VALUE))
    }

    pub fn is_active(&self) -> bool {
        self.0
    }
}

impl From<bool> for UnlockOverride {
    fn from(active: bool) -> Self {
        Self(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unlock_flag() {
        assert!(UnlockOverride::from_query("?unlock=1").is_active());
        assert!(UnlockOverride::from_query("unlock=1").is_active());
        assert!(UnlockOverride::from_query("?a=b&unlock=1").is_active());
    }

    #[test]
    fn other_values_do_not_unlock() {
        assert!(!UnlockOverride::from_query("").is_active());
        assert!(!UnlockOverride::from_query("?unlock=0").is_active());
        assert!(!UnlockOverride::from_query("?unlock").is_active());
        assert!(!UnlockOverride::from_query("?unlock=true").is_active());
        assert!(!UnlockOverride::from_query("?UNLOCK=1").is_active());
    }

    #[test]
    fn first_pair_wins() {
        assert!(!UnlockOverride::from_query("?unlock=0&unlock=1").is_active());
        assert!(UnlockOverride::from_query("?unlock=1&unlock=0").is_active());
    }
}
