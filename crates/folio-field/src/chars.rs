//! Glyph ramps for terminal rendering.

/// Point-cloud glyphs from sparse to dense.
pub const DENSITY_CHARS: &[char] = &['·', '∙', '•', '●'];

/// Orb surface glyphs from dim to bright.
pub const SHADE_CHARS: &[char] = &['░', '▒', '▓', '█'];
