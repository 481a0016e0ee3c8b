use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::boundary::BoundaryTransition;
use crate::constants::TIME_STEP;
use crate::lattice::{self, ContentBounds, Point};
use crate::params::MeshParams;
use crate::shortcut::ShortcutSet;

/// Menu state payload delivered by the frontend. The simulation knows
/// nothing about the menu DOM, only this event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub is_open: bool,
    pub menu_width: f32,
}

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("viewport {width}x{height} is degenerate")]
    DegenerateViewport { width: f32, height: f32 },
}

/// The whole animated field: point lattice, shortcut set, content bounds,
/// and the per-frame state machine. All external signals arrive through the
/// `on_*` methods, so the field can be driven deterministically without a
/// display.
pub struct MeshField {
    params: MeshParams,
    width: f32,
    height: f32,
    points: Vec<Point>,
    shortcuts: ShortcutSet,
    bounds: ContentBounds,
    transition: Option<BoundaryTransition>,
    menu: MenuState,
    time: f32,
    frame: u64,
    paused: bool,
    visible: bool,
    rng: StdRng,
}

impl MeshField {
    pub fn new(params: MeshParams, width: f32, height: f32, seed: u64) -> Result<Self, MeshError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(MeshError::DegenerateViewport { width, height });
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let menu = MenuState::default();
        let bounds = ContentBounds::derive(width, menu.is_open, menu.menu_width, &params);
        let points = lattice::generate(&params, width, height, bounds, &mut rng);
        let mut shortcuts = ShortcutSet::new();
        shortcuts.build_initial(&points, &params, &mut rng);
        log::debug!(
            "[mesh] built lattice: {} points, {} shortcuts",
            points.len(),
            shortcuts.len()
        );
        Ok(Self {
            params,
            width,
            height,
            points,
            shortcuts,
            bounds,
            transition: None,
            menu,
            time: 0.0,
            frame: 0,
            paused: false,
            visible: true,
            rng,
        })
    }

    pub fn params(&self) -> &MeshParams {
        &self.params
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn shortcuts(&self) -> &ShortcutSet {
        &self.shortcuts
    }

    pub fn bounds(&self) -> ContentBounds {
        self.bounds
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_animating(&self) -> bool {
        self.visible && !self.paused
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether the frontend should keep scheduling ticks.
    pub fn should_schedule(&self) -> bool {
        self.is_animating() || self.is_transitioning()
    }

    // --- external signals ---

    /// Viewport change: re-derive bounds and regenerate the whole lattice
    /// and shortcut set. Point indices are only stable between rebuilds.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0) || !(height > 0.0) {
            return;
        }
        self.width = width;
        self.height = height;
        self.transition = None;
        self.bounds =
            ContentBounds::derive(width, self.menu.is_open, self.menu.menu_width, &self.params);
        self.points = lattice::generate(&self.params, width, height, self.bounds, &mut self.rng);
        self.shortcuts = ShortcutSet::new();
        self.shortcuts
            .build_initial(&self.points, &self.params, &mut self.rng);
        log::debug!(
            "[mesh] resized to {width}x{height}: {} points, {} shortcuts",
            self.points.len(),
            self.shortcuts.len()
        );
    }

    pub fn on_visibility_change(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Flip the user pause flag; returns the new value.
    pub fn on_pause_toggle(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Menu open/close: compute target bounds and start an eased transition
    /// when they differ from the current bounds. The current (possibly
    /// mid-flight) bounds become the transition's "previous" side.
    pub fn on_menu_state_change(&mut self, menu: MenuState, now_ms: f64) {
        self.menu = menu;
        let target = ContentBounds::derive(self.width, menu.is_open, menu.menu_width, &self.params);
        if target == self.bounds {
            self.transition = None;
            return;
        }
        self.transition = Some(BoundaryTransition::new(
            self.bounds,
            target,
            now_ms,
            self.params.transition_ms,
        ));
    }

    // --- per-frame state advance ---

    /// Advance one tick. The animating portion (time, rewiring, fades, point
    /// motion) is gated on pause/visibility; the boundary transition always
    /// runs and tears itself down once complete.
    pub fn advance(&mut self, now_ms: f64) {
        if self.is_animating() {
            self.time += TIME_STEP;
            self.frame += 1;
            if self.frame % self.params.rewire_interval == 0 {
                self.shortcuts
                    .check_and_swap(&self.points, &self.params, &mut self.rng);
            }
            self.shortcuts.update_fades(self.params.fade_frames);
            let time = self.time;
            for p in &mut self.points {
                p.animate(time);
            }
        }
        if let Some(tr) = &self.transition {
            self.bounds = tr.bounds_at(now_ms);
            if tr.is_complete(now_ms) {
                self.bounds = tr.to;
                self.transition = None;
            }
        }
    }

    /// Visibility opacity for a point at this instant: the sweep value while
    /// a transition is in flight, otherwise binary margin membership of the
    /// fixed base position.
    pub fn point_opacity(&self, index: usize, now_ms: f64) -> f32 {
        let x = self.points[index].base.x;
        match &self.transition {
            Some(tr) => tr.node_opacity(x, now_ms),
            None => {
                if self.bounds.contains(x) {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }
}
