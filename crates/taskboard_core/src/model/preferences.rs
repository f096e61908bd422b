//! Presentation flags persisted next to the board data.

/// Sidebar visibility written on first run.
pub const DEFAULT_SIDEBAR_VISIBLE: bool = true;

const LIGHT_ENABLED: &str = "enabled";
const LIGHT_DISABLED: &str = "disabled";

/// Board color theme. Dark unless light mode was switched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Decodes the `light-theme` entry. Anything but `"enabled"` is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(LIGHT_ENABLED) => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Light => LIGHT_ENABLED,
            Self::Dark => LIGHT_DISABLED,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}
