//! Sidebar and theme toggles.

use crate::model::preferences::{Theme, DEFAULT_SIDEBAR_VISIBLE};
use crate::repo::settings_repo::SettingsRepository;
use crate::repo::task_repo::RepoResult;
use log::debug;

pub struct PreferenceService<P: SettingsRepository> {
    settings: P,
}

impl<P: SettingsRepository> PreferenceService<P> {
    pub fn new(settings: P) -> Self {
        Self { settings }
    }

    pub fn sidebar_visible(&self) -> RepoResult<bool> {
        Ok(self
            .settings
            .sidebar_visible()?
            .unwrap_or(DEFAULT_SIDEBAR_VISIBLE))
    }

    pub fn set_sidebar_visible(&self, visible: bool) -> RepoResult<()> {
        self.settings.set_sidebar_visible(visible)?;
        debug!("event=sidebar_toggle module=service status=ok visible={visible}");
        Ok(())
    }

    pub fn theme(&self) -> RepoResult<Theme> {
        self.settings.theme()
    }

    /// Flips the theme and returns the one now in effect.
    pub fn toggle_theme(&self) -> RepoResult<Theme> {
        let next = self.settings.theme()?.toggled();
        self.settings.set_theme(next)?;
        debug!(
            "event=theme_toggle module=service status=ok light={}",
            next.is_light()
        );
        Ok(next)
    }
}
