//! Perspective projection of scenes into terminal cells.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use folio_core::Rgb;

use crate::chars::{DENSITY_CHARS, SHADE_CHARS};
use crate::color::shade;
use crate::orbs::{ORB_COLOR, ORB_OPACITY, Orb, OrbCluster};
use crate::surface::PointCloud;

/// Terminal cells are roughly twice as tall as they are wide.
pub const CELL_ASPECT: f32 = 2.0;

/// Points closer to the camera than this are dropped.
const NEAR_PLANE: f32 = 0.1;

/// Direction toward the key light, matching a light at (5, 5, 5).
const LIGHT_DIR: [f32; 3] = [0.577_350_26, 0.577_350_26, 0.577_350_26];

/// A perspective camera on the z axis looking toward -z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Camera position on the z axis.
    pub z: f32,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
}

impl Camera {
    /// Camera for the particle field.
    pub const FIELD: Camera = Camera {
        z: 20.0,
        fov_deg: 60.0,
    };

    /// Camera for the orb cluster.
    pub const ORBS: Camera = Camera {
        z: 10.0,
        fov_deg: 60.0,
    };

    /// Half the visible height at `depth` units in front of the camera.
    fn half_height(&self, depth: f32) -> f32 {
        depth * (self.fov_deg.to_radians() / 2.0).tan()
    }

    /// Project `point` onto a `width` x `height` grid.
    ///
    /// Returns `(col, row)` or `None` when the point is behind the camera or
    /// outside the view.
    pub fn project(&self, point: [f32; 3], width: u16, height: u16) -> Option<(u16, u16)> {
        if width == 0 || height == 0 {
            return None;
        }
        let depth = self.z - point[2];
        if depth < NEAR_PLANE {
            return None;
        }

        let half_h = self.half_height(depth);
        let aspect = width as f32 / (height as f32 * CELL_ASPECT);
        let nx = point[0] / (half_h * aspect);
        let ny = point[1] / half_h;
        if !(-1.0..=1.0).contains(&nx) || !(-1.0..=1.0).contains(&ny) {
            return None;
        }

        let col = ((nx + 1.0) / 2.0 * (width - 1) as f32).round() as u16;
        let row = ((1.0 - ny) / 2.0 * (height - 1) as f32).round() as u16;
        Some((col, row))
    }

    /// Scene-space `(x, y)` seen through cell `(col, row)` at `depth`.
    fn unproject(&self, col: u16, row: u16, width: u16, height: u16, depth: f32) -> (f32, f32) {
        let half_h = self.half_height(depth);
        let aspect = width as f32 / (height as f32 * CELL_ASPECT);
        let nx = if width > 1 {
            col as f32 / (width - 1) as f32 * 2.0 - 1.0
        } else {
            0.0
        };
        let ny = if height > 1 {
            1.0 - row as f32 / (height - 1) as f32 * 2.0
        } else {
            0.0
        };
        (nx * half_h * aspect, ny * half_h)
    }
}

/// Rotate `point` around the vertical axis.
pub fn rotate_y(point: [f32; 3], angle: f32) -> [f32; 3] {
    let (sin, cos) = angle.sin_cos();
    [
        point[0] * cos + point[2] * sin,
        point[1],
        -point[0] * sin + point[2] * cos,
    ]
}

/// Rotate `point` around the horizontal axis.
fn rotate_x(point: [f32; 3], angle: f32) -> [f32; 3] {
    let (sin, cos) = angle.sin_cos();
    [
        point[0],
        point[1] * cos - point[2] * sin,
        point[1] * sin + point[2] * cos,
    ]
}

/// Count how many points of `cloud` land in each cell, row-major.
pub fn rasterize(cloud: &PointCloud, camera: &Camera, width: u16, height: u16) -> Vec<u32> {
    let mut hits = vec![0u32; width as usize * height as usize];
    for point in cloud.points() {
        let rotated = rotate_y(point, cloud.rotation_y);
        if let Some((col, row)) = camera.project(rotated, width, height) {
            hits[row as usize * width as usize + col as usize] += 1;
        }
    }
    hits
}

/// Glyph and intensity for a cell with `hits` points, relative to `reference`.
fn density_glyph(hits: u32, reference: f32) -> Option<(char, f32)> {
    if hits == 0 {
        return None;
    }
    let level = hits as f32 / reference;
    let (idx, intensity) = if level < 0.25 {
        (0, 0.45)
    } else if level < 0.5 {
        (1, 0.6)
    } else if level < 1.0 {
        (2, 0.8)
    } else {
        (3, 1.0)
    };
    Some((DENSITY_CHARS[idx], intensity))
}

/// Per-cell hit counts of the point cloud, kept between frames.
#[derive(Debug, Default)]
pub struct PointRaster {
    hits: Vec<u32>,
    width: u16,
    height: u16,
    rotation: f32,
}

impl PointRaster {
    /// Re-rasterize `cloud` if it changed since the last call or the area
    /// was resized. Consumes the cloud's update flag and returns whether the
    /// hit counts were recomputed.
    pub fn refresh(
        &mut self,
        cloud: &mut PointCloud,
        camera: &Camera,
        width: u16,
        height: u16,
    ) -> bool {
        let updated = cloud.take_update();
        let stale = self.hits.is_empty()
            || self.width != width
            || self.height != height
            || self.rotation != cloud.rotation_y;
        if !updated && !stale {
            return false;
        }

        self.hits = rasterize(cloud, camera, width, height);
        self.width = width;
        self.height = height;
        self.rotation = cloud.rotation_y;
        true
    }

    pub fn hits(&self) -> &[u32] {
        &self.hits
    }
}

/// Draw the point cloud into `area` over `background`.
///
/// Positions are only re-projected when the cloud flagged an update, its
/// rotation moved or the area changed. Otherwise the cached raster is drawn.
pub fn render_point_cloud(
    frame: &mut Frame,
    area: Rect,
    cloud: &mut PointCloud,
    raster: &mut PointRaster,
    background: Rgb,
) {
    if area.width == 0 || area.height == 0 || cloud.is_empty() {
        cloud.take_update();
        return;
    }

    raster.refresh(cloud, &Camera::FIELD, area.width, area.height);
    let cells = raster.hits.len() as f32;
    // Cells at several times the mean occupancy render as the densest glyph.
    let reference = (cloud.len() as f32 / cells * 4.0).max(1.0);
    let style = cloud.style;

    let lines: Vec<Line> = raster
        .hits
        .chunks(area.width as usize)
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|&count| match density_glyph(count, reference) {
                    Some((ch, intensity)) => {
                        let color = background.mix(style.color, style.opacity * intensity);
                        Span::styled(ch.to_string(), Style::new().fg(color.color()))
                    }
                    None => Span::raw(" "),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Brightness of `orb` as seen through a cell, if the orb covers it.
fn orb_sample(orb: &Orb, camera: &Camera, col: u16, row: u16, width: u16, height: u16) -> Option<f32> {
    let center = orb.center();
    let depth = camera.z - center[2];
    if depth < NEAR_PLANE {
        return None;
    }
    let (sx, sy) = camera.unproject(col, row, width, height, depth);
    let dx = (sx - center[0]) / orb.scale;
    let dy = (sy - center[1]) / orb.scale;
    let d2 = dx * dx + dy * dy;
    if d2 > 1.0 {
        return None;
    }

    let normal = [dx, dy, (1.0 - d2).sqrt()];
    let lambert = (normal[0] * LIGHT_DIR[0] + normal[1] * LIGHT_DIR[1] + normal[2] * LIGHT_DIR[2])
        .max(0.0);

    // Bands in object space make the spin visible.
    let local = rotate_y(rotate_x(normal, -orb.rotation_x), -orb.rotation_y);
    let longitude = local[0].atan2(local[2]);
    let band = if (longitude * 4.0 / std::f32::consts::PI).floor() as i32 % 2 == 0 {
        0.08
    } else {
        0.0
    };

    Some((0.3 + 0.6 * lambert + band).min(1.0))
}

/// Draw the orb cluster into `area` over `background`.
pub fn render_orbs(frame: &mut Frame, area: Rect, cluster: &OrbCluster, background: Rgb) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    // Nearest orb last so it wins.
    let mut orbs: Vec<&Orb> = cluster.orbs().iter().collect();
    orbs.sort_by(|a, b| a.center()[2].total_cmp(&b.center()[2]));

    let camera = Camera::ORBS;
    let lines: Vec<Line> = (0..area.height)
        .map(|row| {
            let spans: Vec<Span> = (0..area.width)
                .map(|col| {
                    let brightness = orbs.iter().rev().find_map(|orb| {
                        orb_sample(orb, &camera, col, row, area.width, area.height)
                    });
                    match brightness {
                        Some(b) => {
                            let idx = ((b * SHADE_CHARS.len() as f32) as usize)
                                .min(SHADE_CHARS.len() - 1);
                            let lit = shade(ORB_COLOR, 0.5 + b * 0.6);
                            let color = background.mix(lit, ORB_OPACITY + 0.4 * b);
                            Span::styled(SHADE_CHARS[idx].to_string(), Style::new().fg(color.color()))
                        }
                        None => Span::raw(" "),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
