use crate::constants::*;
use crate::field::MeshField;
use crate::surface::Surface;

impl MeshField {
    /// Draw one frame: local proximity edges, shortcut edges, the degree
    /// floor pass, then the points themselves. Pure read of the field state;
    /// `advance` has already run for this tick.
    pub fn draw<S: Surface>(&self, surface: &mut S, now_ms: f64) {
        surface.clear(self.width(), self.height());

        let points = self.points();
        let n = points.len();
        let opacity: Vec<f32> = (0..n).map(|i| self.point_opacity(i, now_ms)).collect();
        let mut connected = vec![false; n];

        // Local edges, by live distance.
        let reach = self.params().local_edge_distance();
        let reach_sq = reach * reach;
        for i in 0..n {
            for j in (i + 1)..n {
                let pair_opacity = opacity[i].min(opacity[j]);
                if pair_opacity <= 0.0 {
                    continue;
                }
                if points[i].pos.distance_squared(points[j].pos) > reach_sq {
                    continue;
                }
                let alpha = EDGE_BASE_ALPHA * pair_opacity;
                if alpha < MIN_DRAW_ALPHA {
                    continue;
                }
                surface.line(points[i].pos, points[j].pos, alpha);
                if alpha >= CONNECTED_ALPHA {
                    connected[i] = true;
                    connected[j] = true;
                }
            }
        }

        // Shortcuts compose their own fade with both endpoints' visibility.
        for edge in self.shortcuts().iter() {
            let (i, j) = edge.key.endpoints();
            if opacity[i] <= 0.0 || opacity[j] <= 0.0 {
                continue;
            }
            let alpha = EDGE_BASE_ALPHA * edge.opacity * opacity[i].min(opacity[j]);
            if alpha < MIN_DRAW_ALPHA {
                continue;
            }
            surface.line(points[i].pos, points[j].pos, alpha);
            if alpha >= CONNECTED_ALPHA {
                connected[i] = true;
                connected[j] = true;
            }
        }

        // Degree floor: a sufficiently visible point that picked up no
        // connection above gets a line to its nearest visible neighbor.
        // Full scan, the lattice is small.
        for i in 0..n {
            if connected[i] || opacity[i] <= DEGREE_FLOOR_OPACITY {
                continue;
            }
            let mut best: Option<(usize, f32)> = None;
            for j in 0..n {
                if j == i || opacity[j] <= DEGREE_FLOOR_OPACITY {
                    continue;
                }
                let dist_sq = points[i].pos.distance_squared(points[j].pos);
                match best {
                    Some((_, b)) if dist_sq >= b => {}
                    _ => best = Some((j, dist_sq)),
                }
            }
            if let Some((j, _)) = best {
                let alpha = EDGE_BASE_ALPHA * opacity[i].min(opacity[j]);
                surface.line(points[i].pos, points[j].pos, alpha);
            }
        }

        for (i, p) in points.iter().enumerate() {
            if opacity[i] > POINT_MIN_OPACITY {
                surface.circle(p.pos, POINT_RADIUS, POINT_BASE_ALPHA * opacity[i]);
            }
        }
    }
}
