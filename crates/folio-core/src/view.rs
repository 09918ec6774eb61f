//! Pure mapping from UI state to presentation attributes.
//!
//! The renderer never branches on the theme itself; it asks [`UiState::view`]
//! for a [`ViewAttrs`] and draws with whatever that returns.

use ratatui::style::{Color, Modifier, Style};

use crate::{Section, Theme};

/// Accent used for the active navigation marker and highlights.
pub const ACCENT: Rgb = Rgb::hex(0xBC002D);

/// A plain 24-bit color that can be blended before it becomes a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Self(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Linear blend toward `other`; `t = 0` keeps `self`, `t = 1` gives `other`.
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(lerp(self.0, other.0), lerp(self.1, other.1), lerp(self.2, other.2))
    }

    pub fn color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }
}

/// Base colors for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub border: Rgb,
    pub accent: Rgb,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => {
                let background = Rgb::hex(0x070707);
                let text = Rgb::hex(0xFFFFFF);
                Self {
                    background,
                    text,
                    muted: background.mix(text, 0.2),
                    border: background.mix(text, 0.05),
                    accent: ACCENT,
                }
            }
            Theme::Light => {
                let background = Rgb::hex(0xF5F5F7);
                let text = Rgb::hex(0x1D1D1F);
                Self {
                    background,
                    text,
                    muted: background.mix(Rgb::hex(0x000000), 0.3),
                    border: background.mix(Rgb::hex(0x000000), 0.1),
                    accent: ACCENT,
                }
            }
        }
    }
}

/// How the particle cloud is tinted for the current theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub color: Rgb,
    pub opacity: f32,
}

impl PointStyle {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                color: Rgb::hex(0xFFFFFF),
                opacity: 0.8,
            },
            // Softer in light mode.
            Theme::Light => Self {
                color: Rgb::hex(0x333333),
                opacity: 0.4,
            },
        }
    }
}

/// Style of one entry in the navigation rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItemStyle {
    pub section: Section,
    pub active: bool,
    pub label: Style,
    /// Marker drawn next to the label; `None` for inactive entries.
    pub marker: Option<Style>,
}

/// Everything the renderer needs to draw one frame of chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAttrs {
    pub palette: Palette,
    pub base: Style,
    pub nav: [NavItemStyle; 4],
    pub toast_visible: bool,
    pub points: PointStyle,
}

/// The single source of truth for page chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub theme: Theme,
    pub active: Section,
    /// Whether the "copied" toast is currently shown.
    pub copied: bool,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Map the state to presentation attributes.
    pub fn view(&self) -> ViewAttrs {
        let palette = Palette::for_theme(self.theme);
        let nav = Section::ALL.map(|section| {
            let active = section == self.active;
            if active {
                NavItemStyle {
                    section,
                    active,
                    label: Style::new()
                        .fg(palette.text.color())
                        .add_modifier(Modifier::BOLD),
                    marker: Some(Style::new().fg(palette.accent.color())),
                }
            } else {
                NavItemStyle {
                    section,
                    active,
                    label: Style::new().fg(palette.muted.color()),
                    marker: None,
                }
            }
        });

        ViewAttrs {
            palette,
            base: Style::new()
                .fg(palette.text.color())
                .bg(palette.background.color()),
            nav,
            toast_visible: self.copied,
            points: PointStyle::for_theme(self.theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::hex(0xBC002D), Rgb(0xBC, 0x00, 0x2D));
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Rgb(0, 0, 0);
        let b = Rgb(200, 100, 50);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
        assert_eq!(a.mix(b, 0.5), Rgb(100, 50, 25));
        assert_eq!(a.mix(b, 4.0), b);
    }

    #[test]
    fn test_view_is_deterministic() {
        let state = UiState {
            theme: Theme::Light,
            active: Section::Projects,
            copied: true,
        };
        assert_eq!(state.view(), state.view());
    }

    #[test]
    fn test_exactly_one_active_nav_item() {
        let state = UiState {
            theme: Theme::Dark,
            active: Section::Skills,
            copied: false,
        };
        let view = state.view();
        let active: Vec<_> = view.nav.iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].section, Section::Skills);
        assert!(active[0].marker.is_some());
        assert!(view.nav.iter().filter(|i| !i.active).all(|i| i.marker.is_none()));
    }

    #[test]
    fn test_theme_drives_point_style() {
        let dark = UiState::new(Theme::Dark).view().points;
        let light = UiState::new(Theme::Light).view().points;
        assert_eq!(dark.color, Rgb::hex(0xFFFFFF));
        assert_eq!(dark.opacity, 0.8);
        assert_eq!(light.color, Rgb::hex(0x333333));
        assert_eq!(light.opacity, 0.4);
    }

    #[test]
    fn test_point_style_is_tint_only() {
        let expected = PointStyle {
            color: Rgb::hex(0x333333),
            opacity: 0.4,
        };
        assert_eq!(PointStyle::for_theme(Theme::Light), expected);
    }

    #[test]
    fn test_toast_follows_copied_flag() {
        let mut state = UiState::new(Theme::Dark);
        assert!(!state.view().toast_visible);
        state.copied = true;
        assert!(state.view().toast_visible);
    }
}
