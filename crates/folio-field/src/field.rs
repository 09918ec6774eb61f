//! Mouse-reactive particle field.
//!
//! Every particle has a rest position (`base`) fixed at creation and a
//! current `position`. Each frame the current position is nudged toward an
//! attractor derived from the pointer, then relaxed back toward its base.
//! Relaxation runs every frame, so the field settles instead of drifting.

use std::f32::consts::TAU;

use folio_core::Pointer;
use rand::Rng;

/// Attractor x in scene units per unit of pointer x.
pub const ATTRACT_X_SCALE: f32 = 6.0;
/// Attractor y in scene units per unit of pointer y.
pub const ATTRACT_Y_SCALE: f32 = 4.0;
/// Added to the planar distance so the force stays finite at the attractor.
pub const DIST_OFFSET: f32 = 0.6;
/// Upper bound on the inverse-distance force.
pub const FORCE_CAP: f32 = 0.15;
/// Fraction of the attraction applied per frame on x and y.
pub const STEP: f32 = 0.05;
/// Pull toward the viewer per unit of force.
pub const DEPTH_PULL: f32 = 0.8;
/// Fraction of the remaining offset from base recovered per frame.
pub const RELAXATION: f32 = 0.01;
/// Rotation around the vertical axis per frame, in radians.
pub const ROTATION_STEP: f32 = 0.001;

/// Inner and outer radius of the ring the bases are scattered in.
const RADIUS_MIN: f32 = 1.0;
const RADIUS_MAX: f32 = 13.0;
/// Half-thickness of the ring along y.
const HALF_HEIGHT: f32 = 2.0;

/// A single point of the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    base: [f32; 3],
    /// Current displayed position.
    pub position: [f32; 3],
}

impl Particle {
    /// A particle resting at `base`.
    pub fn at_rest(base: [f32; 3]) -> Self {
        Self {
            base,
            position: base,
        }
    }

    pub fn base(&self) -> [f32; 3] {
        self.base
    }
}

/// Axis-aligned bounds of the base positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl Bounds {
    fn of(particles: &[Particle]) -> Self {
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        for p in particles {
            for axis in 0..3 {
                min[axis] = min[axis].min(p.base[axis]);
                max[axis] = max[axis].max(p.base[axis]);
            }
        }
        if particles.is_empty() {
            min = [0.0; 3];
            max = [0.0; 3];
        }
        Self { min, max }
    }

    pub fn contains(&self, point: [f32; 3]) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }
}

/// A fixed-size set of particles.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
}

impl ParticleField {
    /// Scatter `count` particles over a flat ring around the vertical axis.
    pub fn create<R: Rng>(count: usize, rng: &mut R) -> Self {
        let bases = (0..count).map(|_| {
            let r = rng.gen_range(RADIUS_MIN..RADIUS_MAX);
            let a = rng.gen_range(0.0..TAU);
            let y = rng.gen_range(-HALF_HEIGHT..HALF_HEIGHT);
            [a.cos() * r, y, a.sin() * r]
        });
        Self::from_bases(bases)
    }

    /// Build a field from explicit rest positions.
    pub fn from_bases<I>(bases: I) -> Self
    where
        I: IntoIterator<Item = [f32; 3]>,
    {
        let particles: Vec<Particle> = bases.into_iter().map(Particle::at_rest).collect();
        let bounds = Bounds::of(&particles);
        Self { particles, bounds }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Advance every particle by one frame.
    ///
    /// With `None` (no pointer over the surface) only relaxation runs, so the
    /// field eases back to rest.
    pub fn advance(&mut self, pointer: Option<Pointer>) {
        for p in &mut self.particles {
            if let Some(pointer) = pointer {
                let [sx, sy, sz] = attraction(p.base, pointer);
                p.position[0] += sx;
                p.position[1] += sy;
                p.position[2] += sz;
            }
            // Relaxation comes after attraction so it eats into this frame's pull.
            for axis in 0..3 {
                p.position[axis] += (p.base[axis] - p.position[axis]) * RELAXATION;
            }
        }
    }

    /// Copy current positions into a flat `x, y, z` buffer.
    ///
    /// Writes `min(buf.len() / 3, len())` points.
    pub fn write_positions(&self, buf: &mut [f32]) {
        for (chunk, p) in buf.chunks_exact_mut(3).zip(&self.particles) {
            chunk.copy_from_slice(&p.position);
        }
    }
}

/// Attractor in scene units for a pointer sample.
pub fn attractor(pointer: Pointer) -> [f32; 2] {
    [pointer.x * ATTRACT_X_SCALE, pointer.y * ATTRACT_Y_SCALE]
}

/// Inverse-distance force for a planar offset `(dx, dy)`, capped at [`FORCE_CAP`].
pub fn force(dx: f32, dy: f32) -> f32 {
    let dist = (dx * dx + dy * dy).sqrt() + DIST_OFFSET;
    (1.0 / dist).min(FORCE_CAP)
}

/// Per-frame displacement pulling a particle resting at `base` toward the
/// pointer's attractor.
///
/// Measured from the base, not the current position, so it is constant
/// while the pointer is held still.
pub fn attraction(base: [f32; 3], pointer: Pointer) -> [f32; 3] {
    let [ax, ay] = attractor(pointer);
    let dx = ax - base[0];
    let dy = ay - base[1];
    let f = force(dx, dy);
    [dx * f * STEP, dy * f * STEP, -f * DEPTH_PULL]
}

/// Position a particle settles at while `pointer` is held still.
///
/// Solves `p = (p + s) + (b - (p + s)) * k` for `p`, giving `b + s (1 - k) / k`.
pub fn equilibrium(base: [f32; 3], pointer: Pointer) -> [f32; 3] {
    let s = attraction(base, pointer);
    let gain = (1.0 - RELAXATION) / RELAXATION;
    [
        base[0] + s[0] * gain,
        base[1] + s[1] * gain,
        base[2] + s[2] * gain,
    ]
}
