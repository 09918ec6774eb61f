//! The point buffer the particle scene writes into and the renderer reads.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::PointStyle;

/// Shared handle to a mounted point cloud.
pub type SharedCloud = Rc<RefCell<PointCloud>>;

/// A flat buffer of `x, y, z` triples plus the transform applied when it is drawn.
#[derive(Debug, Clone)]
pub struct PointCloud {
    positions: Vec<f32>,
    /// Set by the writer after each update, cleared once the frame is drawn.
    pub needs_update: bool,
    /// Rotation around the vertical axis, in radians.
    pub rotation_y: f32,
    pub style: PointStyle,
}

impl PointCloud {
    /// A cloud with room for `count` points, all at the origin.
    pub fn with_capacity(count: usize, style: PointStyle) -> Self {
        Self {
            positions: vec![0.0; count * 3],
            needs_update: true,
            rotation_y: 0.0,
            style,
        }
    }

    /// Wrap in the shared handle used by scenes and renderers.
    pub fn shared(self) -> SharedCloud {
        Rc::new(RefCell::new(self))
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [f32] {
        &mut self.positions
    }

    /// Iterate points as `[x, y, z]`.
    pub fn points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
    }

    /// Take the pending update flag, leaving it cleared.
    pub fn take_update(&mut self) -> bool {
        std::mem::take(&mut self.needs_update)
    }
}
