//! Board selection and presentation settings over a key-value store.
//!
//! # Invariants
//! - `activeBoard` is stored as a JSON string; JSON `null` reads as unset.
//! - `showSideBar` and `light-theme` keep the plain-text encodings of the
//!   browser build, and unknown text reads as the "off" value.

use crate::model::preferences::Theme;
use crate::repo::task_repo::{RepoError, RepoResult};
use crate::storage::{keys, KeyValueStore};

/// Persistence contract for session-level settings.
pub trait SettingsRepository {
    fn active_board(&self) -> RepoResult<Option<String>>;
    fn set_active_board(&self, name: &str) -> RepoResult<()>;
    /// `None` when the flag was never written.
    fn sidebar_visible(&self) -> RepoResult<Option<bool>>;
    fn set_sidebar_visible(&self, visible: bool) -> RepoResult<()>;
    fn theme(&self) -> RepoResult<Theme>;
    fn set_theme(&self, theme: Theme) -> RepoResult<()>;
}

/// Settings repository persisting through any [`KeyValueStore`].
pub struct KvSettingsRepository<'store, S: KeyValueStore> {
    store: &'store S,
}

impl<'store, S: KeyValueStore> KvSettingsRepository<'store, S> {
    pub fn new(store: &'store S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> SettingsRepository for KvSettingsRepository<'_, S> {
    fn active_board(&self) -> RepoResult<Option<String>> {
        let Some(raw) = self.store.get(keys::ACTIVE_BOARD)? else {
            return Ok(None);
        };
        serde_json::from_str::<Option<String>>(&raw).map_err(|err| {
            RepoError::InvalidData(format!("`{}` is not a board name: {err}", keys::ACTIVE_BOARD))
        })
    }

    fn set_active_board(&self, name: &str) -> RepoResult<()> {
        let encoded = serde_json::to_string(name).map_err(|err| {
            RepoError::InvalidData(format!("failed to encode board name: {err}"))
        })?;
        self.store.set(keys::ACTIVE_BOARD, &encoded)?;
        Ok(())
    }

    fn sidebar_visible(&self) -> RepoResult<Option<bool>> {
        Ok(self
            .store
            .get(keys::SHOW_SIDEBAR)?
            .map(|raw| raw == "true"))
    }

    fn set_sidebar_visible(&self, visible: bool) -> RepoResult<()> {
        let raw = if visible { "true" } else { "false" };
        self.store.set(keys::SHOW_SIDEBAR, raw)?;
        Ok(())
    }

    fn theme(&self) -> RepoResult<Theme> {
        let raw = self.store.get(keys::LIGHT_THEME)?;
        Ok(Theme::from_stored(raw.as_deref()))
    }

    fn set_theme(&self, theme: Theme) -> RepoResult<()> {
        self.store.set(keys::LIGHT_THEME, theme.as_stored())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KvSettingsRepository, SettingsRepository};
    use crate::model::preferences::Theme;
    use crate::repo::task_repo::RepoError;
    use crate::storage::{keys, KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn active_board_is_stored_as_json_text() {
        let store = MemoryKeyValueStore::new();
        let repo = KvSettingsRepository::new(&store);

        repo.set_active_board("Launch Career").unwrap();
        assert_eq!(
            store.get(keys::ACTIVE_BOARD).unwrap().as_deref(),
            Some("\"Launch Career\"")
        );
        assert_eq!(repo.active_board().unwrap().as_deref(), Some("Launch Career"));
    }

    #[test]
    fn json_null_active_board_reads_as_unset() {
        let store = MemoryKeyValueStore::new();
        store.set(keys::ACTIVE_BOARD, "null").unwrap();
        assert_eq!(KvSettingsRepository::new(&store).active_board().unwrap(), None);
    }

    #[test]
    fn bare_text_active_board_is_invalid_data() {
        let store = MemoryKeyValueStore::new();
        store.set(keys::ACTIVE_BOARD, "Roadmap").unwrap();
        let err = KvSettingsRepository::new(&store).active_board().unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(_)));
    }

    #[test]
    fn sidebar_and_theme_use_plain_text_flags() {
        let store = MemoryKeyValueStore::new();
        let repo = KvSettingsRepository::new(&store);
        assert_eq!(repo.sidebar_visible().unwrap(), None);

        repo.set_sidebar_visible(false).unwrap();
        repo.set_theme(Theme::Light).unwrap();

        assert_eq!(store.get(keys::SHOW_SIDEBAR).unwrap().as_deref(), Some("false"));
        assert_eq!(store.get(keys::LIGHT_THEME).unwrap().as_deref(), Some("enabled"));
        assert_eq!(repo.sidebar_visible().unwrap(), Some(false));
        assert_eq!(repo.theme().unwrap(), Theme::Light);
    }
}
