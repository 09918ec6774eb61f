//! Binds a particle field to a point cloud and drives it from the scheduler.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::field::{ParticleField, ROTATION_STEP};
use crate::scheduler::{FrameInfo, FrameScheduler, FrameSubscription};
use crate::surface::{PointCloud, SharedCloud};

/// The mouse-reactive particle scene.
#[derive(Debug, Clone)]
pub struct BlackholeScene {
    field: ParticleField,
    rotate: bool,
}

impl BlackholeScene {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            rotate: true,
        }
    }

    /// Enable or disable the slow spin around the vertical axis.
    pub fn with_rotation(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Start updating `surface` every frame.
    ///
    /// The scene only keeps a weak reference to the surface. The returned
    /// subscription is the mount: dropping it stops all further updates.
    #[must_use = "dropping the subscription unmounts the scene"]
    pub fn mount(mut self, surface: &SharedCloud, scheduler: &FrameScheduler) -> FrameSubscription {
        let surface = Rc::downgrade(surface);
        scheduler.register(move |info| self.update(&surface, info))
    }

    /// One frame. Skipped without a trace when the surface is gone or busy.
    fn update(&mut self, surface: &Weak<RefCell<PointCloud>>, info: &FrameInfo) {
        let Some(surface) = surface.upgrade() else {
            return;
        };
        let Ok(mut cloud) = surface.try_borrow_mut() else {
            return;
        };

        self.field.advance(info.pointer);
        self.field.write_positions(cloud.positions_mut());
        cloud.needs_update = true;
        if self.rotate {
            cloud.rotation_y += ROTATION_STEP;
        }
    }
}
