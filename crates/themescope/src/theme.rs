//! The two-valued theme setting shared through an ambient scope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ThemeError;

/// The theme setting. A scope always holds exactly one of these two values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Every member of the enum, in toggle order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The value a freshly created scope starts with.
    ///
    /// ```
    /// use themescope::theme::Theme;
    ///
    /// assert_eq!(Theme::initialize(), Theme::Light);
    /// ```
    pub const fn initialize() -> Self {
        Theme::Light
    }

    /// Maps `Light` to `Dark` and `Dark` to `Light`.
    ///
    /// ```
    /// use themescope::theme::Theme;
    ///
    /// assert_eq!(Theme::Light.toggle(), Theme::Dark);
    /// assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    /// ```
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The theme a toggle would switch to. Labels name this, not the current value.
    pub const fn target(self) -> Self {
        self.toggle()
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ThemeError::Unknown(trimmed.to_string()))
    }
}
