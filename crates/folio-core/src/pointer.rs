//! Normalized pointer samples.

/// Pointer position in normalized device coordinates.
///
/// Both axes span `[-1, 1]`: `x` grows to the right and `y` grows upward,
/// so the top-left corner of the surface is `(-1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    /// Create a pointer sample, clamping both axes into `[-1, 1]`.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    /// Normalize a cell position within a `width` x `height` grid.
    ///
    /// Returns the center `(0, 0)` for degenerate grids.
    pub fn from_cell(col: u16, row: u16, width: u16, height: u16) -> Self {
        let nx = if width > 1 {
            col as f32 / (width - 1) as f32 * 2.0 - 1.0
        } else {
            0.0
        };
        let ny = if height > 1 {
            -(row as f32 / (height - 1) as f32 * 2.0 - 1.0)
        } else {
            0.0
        };
        Self::new(nx, ny)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        let p = Pointer::new(3.0, -7.5);
        assert_eq!(p, Pointer { x: 1.0, y: -1.0 });
    }

    #[test]
    fn test_from_cell_corners() {
        assert_eq!(Pointer::from_cell(0, 0, 81, 25), Pointer { x: -1.0, y: 1.0 });
        assert_eq!(Pointer::from_cell(80, 24, 81, 25), Pointer { x: 1.0, y: -1.0 });
        assert_eq!(Pointer::from_cell(40, 12, 81, 25), Pointer { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_from_cell_degenerate() {
        assert_eq!(Pointer::from_cell(0, 0, 1, 0), Pointer::default());
    }

    #[test]
    fn test_from_cell_out_of_range_is_clamped() {
        let p = Pointer::from_cell(200, 0, 81, 25);
        assert_eq!(p.x, 1.0);
    }
}
