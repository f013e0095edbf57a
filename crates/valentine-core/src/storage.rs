//! Persistent preference storage using redb.
//!
//! The card stores exactly one thing: the theme. Read once at startup,
//! written on every change.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::CardError;
use crate::theme::Theme;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");
const THEME_KEY: &str = "theme";

/// File name of the preference database inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.redb";

/// Preference store backed by a single redb file
#[derive(Clone)]
pub struct PreferenceStore {
    db: Arc<RwLock<Database>>,
}

impl PreferenceStore {
    /// Open (or create) the store at the given path.
    ///
    /// This will:
    /// - Create the parent directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the preferences table
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CardError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open the store inside a data directory.
    pub fn open_in(data_dir: impl AsRef<Path>) -> Result<Self, CardError> {
        Self::open(data_dir.as_ref().join(PREFERENCES_FILE))
    }

    /// Load the stored theme.
    ///
    /// Returns `None` if nothing was stored yet. A stored value other than
    /// "light"/"dark" is reported as [`CardError::InvalidTheme`].
    pub fn load_theme(&self) -> Result<Option<Theme>, CardError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        match table.get(THEME_KEY)? {
            Some(v) => Ok(Some(v.value().parse()?)),
            None => Ok(None),
        }
    }

    /// Save the theme, overwriting any previous value.
    pub fn save_theme(&self, theme: Theme) -> Result<(), CardError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(THEME_KEY, theme.as_str())?;
        }
        write_txn.commit()?;
        tracing::debug!(%theme, "saved theme preference");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_store_has_no_theme() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::open_in(dir.path()).unwrap();
        assert_eq!(store.load_theme().unwrap(), None);
    }

    #[test]
    fn theme_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = PreferenceStore::open_in(dir.path()).unwrap();
            store.save_theme(Theme::Dark).unwrap();
        }

        let store = PreferenceStore::open_in(dir.path()).unwrap();
        assert_eq!(store.load_theme().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn save_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = PreferenceStore::open_in(dir.path()).unwrap();
        store.save_theme(Theme::Dark).unwrap();
        store.save_theme(Theme::Light).unwrap();
        assert_eq!(store.load_theme().unwrap(), Some(Theme::Light));
    }

    #[test]
    fn open_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = PreferenceStore::open_in(&nested).unwrap();
        store.save_theme(Theme::Light).unwrap();
        assert!(nested.join(PREFERENCES_FILE).exists());
    }
}
