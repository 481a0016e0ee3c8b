use crate::constants::SWEEP_FADE_PX;
use crate::lattice::ContentBounds;

/// Ease-out cubic, `1 - (1 - p)^3`.
#[inline]
pub fn ease_out_cubic(p: f32) -> f32 {
    let q = 1.0 - p.clamp(0.0, 1.0);
    1.0 - q * q * q
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// An in-flight move of the content region's bounds, driven by wall-clock
/// time so menu interaction stays responsive even while the point motion is
/// paused.
#[derive(Clone, Debug)]
pub struct BoundaryTransition {
    pub from: ContentBounds,
    pub to: ContentBounds,
    pub started_ms: f64,
    pub duration_ms: f64,
}

impl BoundaryTransition {
    pub fn new(from: ContentBounds, to: ContentBounds, now_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            started_ms: now_ms,
            duration_ms,
        }
    }

    /// Eased progress in [0, 1].
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let raw = ((now_ms - self.started_ms) / self.duration_ms).clamp(0.0, 1.0);
        ease_out_cubic(raw as f32)
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        now_ms - self.started_ms >= self.duration_ms
    }

    /// Bounds interpolated linearly on the eased progress.
    pub fn bounds_at(&self, now_ms: f64) -> ContentBounds {
        let p = self.progress(now_ms);
        ContentBounds {
            left: lerp(self.from.left, self.to.left, p),
            right: lerp(self.from.right, self.to.right, p),
        }
    }

    /// Directional sweep opacity for a point's fixed base x. The relevant
    /// bound is picked by comparing x to the mean of all four boundary
    /// values in play. Once the transition has run its course this equals
    /// the binary margin test against the target bounds.
    pub fn node_opacity(&self, x: f32, now_ms: f64) -> f32 {
        if self.is_complete(now_ms) {
            return if self.to.contains(x) { 0.0 } else { 1.0 };
        }
        let cur = self.bounds_at(now_ms);
        let mid = (self.from.left + self.from.right + self.to.left + self.to.right) * 0.25;
        if x < mid {
            sweep_left(x, self.from.left, cur.left, self.to.left)
        } else {
            sweep_right(x, self.from.right, cur.right, self.to.right)
        }
    }
}

/// Left margin: visible where x < bound. The bound moving left shrinks the
/// margin (hide sweep); moving right grows it (reveal sweep).
fn sweep_left(x: f32, prev: f32, cur: f32, target: f32) -> f32 {
    if target <= prev {
        // Hide sweep: still fully visible outside the target bound, gone
        // once the animated bound has passed, faded in the trailing zone.
        if x <= target {
            1.0
        } else if x >= cur {
            0.0
        } else {
            ((cur - x) / SWEEP_FADE_PX).clamp(0.0, 1.0)
        }
    } else {
        // Reveal sweep: hidden ahead of the animated bound, opacity
        // proportional to how far the sweep has come past the point.
        if x < prev {
            1.0
        } else if x >= cur {
            0.0
        } else {
            let swept = cur - prev;
            if swept <= f32::EPSILON {
                0.0
            } else {
                ((cur - x) / swept).clamp(0.0, 1.0)
            }
        }
    }
}

/// Right margin mirror: visible where x > bound.
fn sweep_right(x: f32, prev: f32, cur: f32, target: f32) -> f32 {
    if target >= prev {
        // Hide sweep, bound moving right into the margin.
        if x >= target {
            1.0
        } else if x <= cur {
            0.0
        } else {
            ((x - cur) / SWEEP_FADE_PX).clamp(0.0, 1.0)
        }
    } else {
        // Reveal sweep, bound retreating left.
        if x > prev {
            1.0
        } else if x <= cur {
            0.0
        } else {
            let swept = prev - cur;
            if swept <= f32::EPSILON {
                0.0
            } else {
                ((x - cur) / swept).clamp(0.0, 1.0)
            }
        }
    }
}
