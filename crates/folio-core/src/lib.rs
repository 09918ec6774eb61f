//! Core types shared across the folio crates.
//!
//! Everything here is plain data: the theme, the page sections, the pointer
//! sample fed to the background scenes, and the pure mapping from [`UiState`]
//! to the attributes the renderer draws with.

mod background;
mod pointer;
mod section;
mod theme;
mod view;

pub use background::BackgroundStyle;
pub use pointer::Pointer;
pub use section::Section;
pub use theme::{Theme, ThemeMode};
pub use view::{ACCENT, NavItemStyle, Palette, PointStyle, Rgb, UiState, ViewAttrs};
