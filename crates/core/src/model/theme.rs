use serde::{Deserialize, Serialize};

/// Color scheme of the game window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// CSS class applied to the root element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    /// Label for the button that switches away from this theme.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark mode",
            Theme::Dark => "Light mode",
        }
    }
}
