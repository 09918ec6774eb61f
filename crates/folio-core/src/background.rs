//! Background scene selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Section;

/// Which animated scene is drawn behind the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    /// Floating orbs on the home section, the particle field elsewhere.
    #[default]
    Auto,
    /// Mouse-reactive particle field.
    Blackhole,
    /// Slowly bobbing translucent orbs.
    Orbs,
    None,
}

impl BackgroundStyle {
    /// Cycle to the next style.
    pub fn next(self) -> Self {
        match self {
            BackgroundStyle::Auto => BackgroundStyle::Blackhole,
            BackgroundStyle::Blackhole => BackgroundStyle::Orbs,
            BackgroundStyle::Orbs => BackgroundStyle::None,
            BackgroundStyle::None => BackgroundStyle::Auto,
        }
    }

    /// Concrete scene to show while `section` is active. Never returns `Auto`.
    pub fn for_section(self, section: Section) -> Self {
        match self {
            BackgroundStyle::Auto if section == Section::Home => BackgroundStyle::Orbs,
            BackgroundStyle::Auto => BackgroundStyle::Blackhole,
            other => other,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BackgroundStyle::Auto => "auto",
            BackgroundStyle::Blackhole => "blackhole",
            BackgroundStyle::Orbs => "orbs",
            BackgroundStyle::None => "none",
        }
    }
}

impl FromStr for BackgroundStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(BackgroundStyle::Auto),
            "blackhole" => Ok(BackgroundStyle::Blackhole),
            "orbs" => Ok(BackgroundStyle::Orbs),
            "none" => Ok(BackgroundStyle::None),
            other => Err(format!(
                "unknown background '{other}' (expected auto, blackhole, orbs or none)"
            )),
        }
    }
}

impl fmt::Display for BackgroundStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follows_section() {
        assert_eq!(
            BackgroundStyle::Auto.for_section(Section::Home),
            BackgroundStyle::Orbs
        );
        assert_eq!(
            BackgroundStyle::Auto.for_section(Section::About),
            BackgroundStyle::Blackhole
        );
        assert_eq!(
            BackgroundStyle::None.for_section(Section::Home),
            BackgroundStyle::None
        );
    }

    #[test]
    fn test_next_visits_every_style() {
        let mut style = BackgroundStyle::Auto;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(style);
            style = style.next();
        }
        assert_eq!(style, BackgroundStyle::Auto);
        assert!(seen.contains(&BackgroundStyle::None));
        assert!(seen.contains(&BackgroundStyle::Orbs));
    }

    #[test]
    fn test_parse_name_round_trip() {
        for style in [
            BackgroundStyle::Auto,
            BackgroundStyle::Blackhole,
            BackgroundStyle::Orbs,
            BackgroundStyle::None,
        ] {
            assert_eq!(style.name().parse::<BackgroundStyle>(), Ok(style));
        }
    }
}
