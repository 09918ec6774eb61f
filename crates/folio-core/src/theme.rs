//! Light/dark theme selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The active color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Theme for a local wall-clock hour: light during the day (06:00 to
    /// 17:59), dark otherwise.
    pub fn from_hour(hour: u32) -> Self {
        if (6..18).contains(&hour) {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Switch to the other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// How the theme is chosen at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the time of day.
    #[default]
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    /// Resolve to a concrete theme given the current local hour.
    pub fn resolve(self, hour: u32) -> Theme {
        match self {
            ThemeMode::Auto => Theme::from_hour(hour),
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ThemeMode::Auto),
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(format!("unknown theme '{other}' (expected auto, dark or light)")),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        };
        f.write_str(name)
    }
}
