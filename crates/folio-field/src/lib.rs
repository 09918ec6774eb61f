//! Background scenes for the folio terminal portfolio.
//!
//! The centerpiece is a mouse-reactive particle field: a ring of points that
//! leans toward the pointer and eases back to rest every frame. A cluster of
//! floating orbs is provided for the hero section. Scenes are driven by a
//! single-threaded [`FrameScheduler`] and write into shared surfaces that
//! the renderer projects into terminal cells.

mod chars;
mod color;
pub mod field;
pub mod orbs;
pub mod render;
mod scene;
mod scheduler;
mod state;
mod surface;

pub use color::{hsl_to_rgb, rgb_to_hsl, shade};
pub use field::{Bounds, Particle, ParticleField};
pub use orbs::{Orb, OrbCluster, SharedOrbs};
pub use scene::BlackholeScene;
pub use scheduler::{FrameInfo, FrameScheduler, FrameSubscription};
pub use state::BackgroundState;
pub use surface::{PointCloud, SharedCloud};
