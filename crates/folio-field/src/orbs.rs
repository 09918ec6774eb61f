//! Floating orbs for the hero section.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use folio_core::Rgb;

use crate::scheduler::{FrameInfo, FrameScheduler, FrameSubscription};

/// Vertical bob amplitude in scene units.
const BOB_AMPLITUDE: f32 = 0.4;
/// Idle spin per frame, in radians.
const SPIN_STEP: f32 = 0.001;
/// Pointer influence on orb rotation.
const POINTER_TILT: f32 = 0.3;

/// Orb tint.
pub const ORB_COLOR: Rgb = Rgb::hex(0x4ADE80);
/// Orb opacity over the page background.
pub const ORB_OPACITY: f32 = 0.35;

/// Shared handle to a mounted orb cluster.
pub type SharedOrbs = Rc<RefCell<OrbCluster>>;

/// A single sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    /// Rest position.
    pub anchor: [f32; 3],
    /// Radius in scene units.
    pub scale: f32,
    /// Current bobbing height.
    pub y: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
}

impl Orb {
    pub fn new(anchor: [f32; 3], scale: f32) -> Self {
        Self {
            anchor,
            scale,
            y: anchor[1],
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }

    /// Current center.
    pub fn center(&self) -> [f32; 3] {
        [self.anchor[0], self.y, self.anchor[2]]
    }
}

/// The set of orbs drawn behind the hero.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbCluster {
    orbs: Vec<Orb>,
}

impl Default for OrbCluster {
    fn default() -> Self {
        Self {
            orbs: vec![
                Orb::new([-4.0, 0.0, -4.0], 1.4),
                Orb::new([3.0, 1.0, -3.0], 1.1),
                Orb::new([0.0, -2.0, -2.0], 1.6),
                Orb::new([2.0, -3.0, -5.0], 1.2),
            ],
        }
    }
}

impl OrbCluster {
    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn shared(self) -> SharedOrbs {
        Rc::new(RefCell::new(self))
    }

    /// Bob every orb along y and spin it, tilting toward the pointer.
    pub fn advance(&mut self, info: &FrameInfo) {
        let t = info.elapsed.as_secs_f32();
        let (px, py) = info.pointer.map_or((0.0, 0.0), |p| (p.x, p.y));
        for orb in &mut self.orbs {
            orb.y = orb.anchor[1] + (t + orb.anchor[0]).sin() * BOB_AMPLITUDE;
            orb.rotation_y += SPIN_STEP + px * POINTER_TILT;
            orb.rotation_x = py * POINTER_TILT;
        }
    }

    /// Drive `cluster` from `scheduler` until the subscription is dropped.
    #[must_use = "dropping the subscription unmounts the scene"]
    pub fn mount(cluster: &SharedOrbs, scheduler: &FrameScheduler) -> FrameSubscription {
        let cluster: Weak<RefCell<OrbCluster>> = Rc::downgrade(cluster);
        scheduler.register(move |info| {
            let Some(cluster) = cluster.upgrade() else {
                return;
            };
            if let Ok(mut cluster) = cluster.try_borrow_mut() {
                cluster.advance(info);
            }
        })
    }
}
