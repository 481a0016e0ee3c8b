use glam::Vec2;
use rand::Rng;

use crate::constants::*;
use crate::params::MeshParams;

/// Which side of the reserved content region a point calls home. Assigned
/// once from the base position and never reassigned, even while the live
/// bounds move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Content,
}

/// The reserved central rectangle, expressed as its left/right x bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentBounds {
    pub left: f32,
    pub right: f32,
}

impl ContentBounds {
    /// Derive bounds for a viewport and menu state: the content column plus
    /// padding, centered in whatever width the menu leaves free. Pure, so a
    /// resize with identical inputs re-derives identical bounds.
    pub fn derive(width: f32, menu_open: bool, menu_width: f32, params: &MeshParams) -> Self {
        let avail = if menu_open {
            (width - menu_width).max(0.0)
        } else {
            width
        };
        let reserved = (params.content_width + 2.0 * params.content_padding).min(avail);
        let left = ((avail - reserved) * 0.5).max(0.0);
        Self {
            left,
            right: left + reserved,
        }
    }

    /// Closed-interval membership test against the reserved rectangle.
    #[inline]
    pub fn contains(&self, x: f32) -> bool {
        x >= self.left && x <= self.right
    }

    #[inline]
    pub fn side_of(&self, x: f32) -> Side {
        if x < self.left {
            Side::Left
        } else if x > self.right {
            Side::Right
        } else {
            Side::Content
        }
    }
}

/// One lattice vertex. `base` is the jittered grid position of record and
/// never changes; `pos` is recomputed every animating frame.
#[derive(Clone, Debug)]
pub struct Point {
    pub base: Vec2,
    pub pos: Vec2,
    pub wobble: Vec2,
    pub phase: f32,
    pub amplitude: f32,
    pub speed: f32,
    pub side: Side,
}

impl Point {
    /// Rest position: base plus the fixed wobble offset, no sinusoidal term.
    #[inline]
    pub fn rest(&self) -> Vec2 {
        self.base + self.wobble
    }

    /// Recompute the live position for a time value. x rides a sine; y rides
    /// a cosine at 0.7x the speed and amplitude, so the axes stay
    /// decorrelated.
    pub fn animate(&mut self, time: f32) {
        let rest = self.rest();
        self.pos.x = rest.x + self.amplitude * (time * self.speed + self.phase).sin();
        self.pos.y = rest.y
            + self.amplitude * Y_AXIS_RATIO * (time * self.speed * Y_AXIS_RATIO + self.phase).cos();
    }
}

/// Build the jittered triangular lattice covering `width` x `height` with a
/// one-cell margin on every side. Odd rows are staggered by half a spacing.
pub fn generate<R: Rng>(
    params: &MeshParams,
    width: f32,
    height: f32,
    bounds: ContentBounds,
    rng: &mut R,
) -> Vec<Point> {
    let spacing = params.spacing;
    let row_h = spacing * ROW_HEIGHT_RATIO;
    let cols = (width / spacing).ceil() as i32 + 3;
    let rows = (height / row_h).ceil() as i32 + 3;
    let jitter = spacing * BASE_JITTER_RATIO;

    let mut points = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        let stagger = if row % 2 == 1 { spacing * 0.5 } else { 0.0 };
        let grid_y = row as f32 * row_h - row_h;
        for col in 0..cols {
            let grid_x = col as f32 * spacing - spacing + stagger;
            let base = Vec2::new(
                grid_x + (rng.gen::<f32>() - 0.5) * jitter,
                grid_y + (rng.gen::<f32>() - 0.5) * jitter,
            );
            let wobble = Vec2::new(
                rng.gen_range(-WOBBLE_MAX..=WOBBLE_MAX),
                rng.gen_range(-WOBBLE_MAX..=WOBBLE_MAX),
            );
            points.push(Point {
                base,
                pos: base + wobble,
                wobble,
                phase: rng.gen_range(0.0..std::f32::consts::TAU),
                amplitude: rng.gen_range(AMPLITUDE_MIN..AMPLITUDE_MAX),
                speed: rng.gen_range(SPEED_MIN..SPEED_MAX),
                side: bounds.side_of(base.x),
            });
        }
    }
    points
}
