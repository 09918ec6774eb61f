//! Background scene lifecycle.

use folio_core::{BackgroundStyle, PointStyle, Rgb};
use ratatui::{Frame, layout::Rect};

use crate::field::ParticleField;
use crate::orbs::{OrbCluster, SharedOrbs};
use crate::render::{self, PointRaster};
use crate::scene::BlackholeScene;
use crate::scheduler::{FrameInfo, FrameScheduler, FrameSubscription};
use crate::surface::{PointCloud, SharedCloud};

/// A scene that is currently mounted, together with its registration.
#[derive(Debug)]
enum Mounted {
    Blackhole {
        cloud: SharedCloud,
        raster: PointRaster,
        _subscription: FrameSubscription,
    },
    Orbs {
        cluster: SharedOrbs,
        _subscription: FrameSubscription,
    },
}

/// Owns the scheduler and whichever background scene is mounted.
#[derive(Debug)]
pub struct BackgroundState {
    scheduler: FrameScheduler,
    /// Particle count used whenever the field is (re)mounted.
    particle_count: usize,
    /// Spin the particle field.
    rotate: bool,
    mounted: Option<Mounted>,
}

impl BackgroundState {
    pub fn new(particle_count: usize, rotate: bool) -> Self {
        Self {
            scheduler: FrameScheduler::new(),
            particle_count,
            rotate,
            mounted: None,
        }
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// The scene currently mounted.
    pub fn style(&self) -> BackgroundStyle {
        match self.mounted {
            Some(Mounted::Blackhole { .. }) => BackgroundStyle::Blackhole,
            Some(Mounted::Orbs { .. }) => BackgroundStyle::Orbs,
            None => BackgroundStyle::None,
        }
    }

    /// Mount the scene for `style`, unmounting the previous one first.
    ///
    /// Showing the scene that is already mounted keeps it as is. `Auto` is
    /// treated as the particle field.
    pub fn show(&mut self, style: BackgroundStyle, points: PointStyle) {
        let style = match style {
            BackgroundStyle::Auto => BackgroundStyle::Blackhole,
            other => other,
        };
        if style == self.style() {
            return;
        }

        // The old scene is unregistered before the new one mounts.
        self.mounted = None;
        self.mounted = match style {
            BackgroundStyle::Blackhole => Some(self.mount_blackhole(points)),
            BackgroundStyle::Orbs => Some(self.mount_orbs()),
            BackgroundStyle::None | BackgroundStyle::Auto => None,
        };
    }

    fn mount_blackhole(&self, points: PointStyle) -> Mounted {
        let field = ParticleField::create(self.particle_count, &mut rand::thread_rng());
        let cloud = PointCloud::with_capacity(field.len(), points).shared();
        field.write_positions(cloud.borrow_mut().positions_mut());

        let subscription = BlackholeScene::new(field)
            .with_rotation(self.rotate)
            .mount(&cloud, &self.scheduler);
        Mounted::Blackhole {
            cloud,
            raster: PointRaster::default(),
            _subscription: subscription,
        }
    }

    fn mount_orbs(&self) -> Mounted {
        let cluster = OrbCluster::default().shared();
        let subscription = OrbCluster::mount(&cluster, &self.scheduler);
        Mounted::Orbs {
            cluster,
            _subscription: subscription,
        }
    }

    /// Retint the particle field, e.g. after a theme change.
    pub fn set_point_style(&mut self, points: PointStyle) {
        if let Some(Mounted::Blackhole { cloud, .. }) = &self.mounted {
            cloud.borrow_mut().style = points;
        }
    }

    /// Advance the mounted scene by one frame.
    pub fn tick(&self, info: &FrameInfo) {
        self.scheduler.tick(info);
    }

    /// Render the mounted scene into `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, background: Rgb) {
        match &mut self.mounted {
            Some(Mounted::Blackhole { cloud, raster, .. }) => {
                if let Ok(mut cloud) = cloud.try_borrow_mut() {
                    render::render_point_cloud(frame, area, &mut cloud, raster, background);
                }
            }
            Some(Mounted::Orbs { cluster, .. }) => {
                if let Ok(cluster) = cluster.try_borrow() {
                    render::render_orbs(frame, area, &cluster, background);
                }
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_core::{Pointer, Theme};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn dark() -> PointStyle {
        PointStyle::for_theme(Theme::Dark)
    }

    #[test]
    fn test_new_has_nothing_mounted() {
        let state = BackgroundState::new(100, true);
        assert_eq!(state.style(), BackgroundStyle::None);
        assert!(state.scheduler().is_empty());
    }

    #[test]
    fn test_switching_keeps_one_registration() {
        let mut state = BackgroundState::new(100, true);
        state.show(BackgroundStyle::Blackhole, dark());
        assert_eq!(state.scheduler().len(), 1);
        state.show(BackgroundStyle::Orbs, dark());
        assert_eq!(state.style(), BackgroundStyle::Orbs);
        assert_eq!(state.scheduler().len(), 1);
        state.show(BackgroundStyle::None, dark());
        assert!(state.scheduler().is_empty());
    }

    #[test]
    fn test_auto_mounts_field() {
        let mut state = BackgroundState::new(10, false);
        state.show(BackgroundStyle::Auto, dark());
        assert_eq!(state.style(), BackgroundStyle::Blackhole);
    }

    #[test]
    fn test_showing_same_style_keeps_scene() {
        let mut state = BackgroundState::new(50, true);
        state.show(BackgroundStyle::Blackhole, dark());
        state.tick(&FrameInfo::default());
        let Some(Mounted::Blackhole { cloud, .. }) = &state.mounted else {
            panic!("expected the particle field");
        };
        let rotation = cloud.borrow().rotation_y;
        assert!(rotation > 0.0);

        state.show(BackgroundStyle::Blackhole, dark());
        let Some(Mounted::Blackhole { cloud, .. }) = &state.mounted else {
            panic!("expected the particle field");
        };
        assert_eq!(cloud.borrow().rotation_y, rotation);
    }

    #[test]
    fn test_field_starts_at_rest_positions() {
        let mut state = BackgroundState::new(20, true);
        state.show(BackgroundStyle::Blackhole, dark());
        let Some(Mounted::Blackhole { cloud, .. }) = &state.mounted else {
            panic!("expected the particle field");
        };
        assert!(cloud.borrow().points().all(|p| {
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            r >= 1.0 - 1e-4
        }));
    }

    #[test]
    fn test_set_point_style_retints() {
        let mut state = BackgroundState::new(10, true);
        state.show(BackgroundStyle::Blackhole, dark());
        let light = PointStyle::for_theme(Theme::Light);
        state.set_point_style(light);
        let Some(Mounted::Blackhole { cloud, .. }) = &state.mounted else {
            panic!("expected the particle field");
        };
        assert_eq!(cloud.borrow().style, light);
    }

    #[test]
    fn test_render_each_style() {
        let mut state = BackgroundState::new(500, true);
        for (style, expect_paint) in [
            (BackgroundStyle::Blackhole, true),
            (BackgroundStyle::Orbs, true),
            (BackgroundStyle::None, false),
        ] {
            state.show(style, dark());
            state.tick(&FrameInfo {
                pointer: Some(Pointer::new(0.1, 0.1)),
                ..FrameInfo::default()
            });

            let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    state.render(frame, area, Rgb::hex(0x070707));
                })
                .unwrap();

            let painted = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .filter(|cell| cell.symbol() != " ")
                .count();
            assert_eq!(painted > 0, expect_paint, "{style:?} painted {painted} cells");
        }
    }
}
