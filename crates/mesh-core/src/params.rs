use crate::constants::*;

/// Tunables for one mesh field instance. Defaults come from `constants`;
/// tests shrink some of these to force edge cases.
#[derive(Clone, Debug)]
pub struct MeshParams {
    pub spacing: f32,
    pub content_width: f32,
    pub content_padding: f32,
    pub shortcut_density: f32,
    pub min_long_per_side: usize,
    pub max_long_per_side: usize,
    pub fade_frames: u32,
    pub rewire_interval: u64,
    pub rewire_lambda: f64,
    pub transition_ms: f64,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            spacing: LATTICE_SPACING,
            content_width: CONTENT_WIDTH,
            content_padding: CONTENT_PADDING,
            shortcut_density: SHORTCUT_DENSITY,
            min_long_per_side: MIN_LONG_PER_SIDE,
            max_long_per_side: MAX_LONG_PER_SIDE,
            fade_frames: SHORTCUT_FADE_FRAMES,
            rewire_interval: REWIRE_CHECK_INTERVAL,
            rewire_lambda: REWIRE_LAMBDA,
            transition_ms: TRANSITION_DURATION_MS,
        }
    }
}

impl MeshParams {
    /// Shortest rest-position separation a shortcut may have.
    #[inline]
    pub fn min_shortcut_distance(&self) -> f32 {
        MIN_SHORTCUT_CELLS * self.spacing
    }

    /// Rest-position separation at which a shortcut counts as long.
    #[inline]
    pub fn long_shortcut_distance(&self) -> f32 {
        LONG_SHORTCUT_CELLS * self.spacing
    }

    /// Live-distance reach of the local proximity edges.
    #[inline]
    pub fn local_edge_distance(&self) -> f32 {
        LOCAL_EDGE_RANGE * self.spacing
    }
}
