use fnv::FnvHashMap;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use crate::constants::*;
use crate::lattice::{Point, Side};
use crate::params::MeshParams;

/// Unordered pair of point indices. The canonical form stores the smaller
/// index first, so (a, b) and (b, a) are the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey(u32, u32);

impl EdgeKey {
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self(a as u32, b as u32)
        } else {
            Self(b as u32, a as u32)
        }
    }

    #[inline]
    pub fn endpoints(&self) -> (usize, usize) {
        (self.0 as usize, self.1 as usize)
    }
}

/// Distance classification, relative to fixed multiples of lattice spacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeClass {
    Long,
    Medium,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fade {
    Steady,
    In,
    Out,
}

/// A long-range connection between two same-side points.
#[derive(Clone, Debug)]
pub struct ShortcutEdge {
    pub key: EdgeKey,
    pub side: Side,
    pub class: EdgeClass,
    pub fade: Fade,
    pub opacity: f32,
}

/// The owned shortcut collection, keyed by edge identity. Every insert and
/// remove goes through here, so at most one edge exists per unordered pair.
#[derive(Default)]
pub struct ShortcutSet {
    edges: FnvHashMap<EdgeKey, ShortcutEdge>,
}

impl ShortcutSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn contains(&self, key: EdgeKey) -> bool {
        self.edges.contains_key(&key)
    }

    pub fn get(&self, key: EdgeKey) -> Option<&ShortcutEdge> {
        self.edges.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShortcutEdge> {
        self.edges.values()
    }

    /// Insert an edge; a duplicate key is rejected.
    pub fn insert(&mut self, edge: ShortcutEdge) -> bool {
        if self.edges.contains_key(&edge.key) {
            return false;
        }
        self.edges.insert(edge.key, edge);
        true
    }

    pub fn remove(&mut self, key: EdgeKey) -> Option<ShortcutEdge> {
        self.edges.remove(&key)
    }

    /// Edges on a side, fading or not.
    pub fn side_count(&self, side: Side) -> usize {
        self.edges.values().filter(|e| e.side == side).count()
    }

    /// Long edges on a side, not counting ones already on their way out.
    pub fn long_count(&self, side: Side) -> usize {
        self.edges
            .values()
            .filter(|e| e.side == side && e.class == EdgeClass::Long && e.fade != Fade::Out)
            .count()
    }

    fn keys_not_fading_out(&self) -> Vec<EdgeKey> {
        self.edges
            .values()
            .filter(|e| e.fade != Fade::Out)
            .map(|e| e.key)
            .collect()
    }

    /// Populate both margins from scratch with steady edges. A side with
    /// fewer than two eligible points is skipped.
    pub fn build_initial<R: Rng>(&mut self, points: &[Point], params: &MeshParams, rng: &mut R) {
        for side in [Side::Left, Side::Right] {
            self.populate_side(points, params, side, rng);
        }
    }

    fn populate_side<R: Rng>(
        &mut self,
        points: &[Point],
        params: &MeshParams,
        side: Side,
        rng: &mut R,
    ) {
        let members = side_members(points, side);
        if members.len() < 2 {
            return;
        }
        let target = ((members.len() as f32 * params.shortcut_density).floor() as usize).max(1);

        // Guarantee the long-edge floor first.
        let mut attempts = 0;
        while self.long_count(side) < params.min_long_per_side && attempts < LONG_SEED_ATTEMPTS {
            attempts += 1;
            let Some((key, dist)) = sample_pair(&members, points, rng) else {
                continue;
            };
            if dist >= params.long_shortcut_distance() && !self.contains(key) {
                self.insert(ShortcutEdge {
                    key,
                    side,
                    class: EdgeClass::Long,
                    fade: Fade::Steady,
                    opacity: 1.0,
                });
            }
        }

        // Fill the remaining quota with anything past the minimum distance,
        // holding long edges to the per-side ceiling.
        let have = self.side_count(side);
        if have >= target {
            return;
        }
        let remaining = target - have;
        let budget = remaining as u32 * FILL_ATTEMPTS_PER_EDGE;
        let mut created = 0;
        attempts = 0;
        while created < remaining && attempts < budget {
            attempts += 1;
            let Some((key, dist)) = sample_pair(&members, points, rng) else {
                continue;
            };
            if dist < params.min_shortcut_distance() || self.contains(key) {
                continue;
            }
            let class = classify(dist, params);
            if class == EdgeClass::Long && self.long_count(side) >= params.max_long_per_side {
                continue;
            }
            self.insert(ShortcutEdge {
                key,
                side,
                class,
                fade: Fade::Steady,
                opacity: 1.0,
            });
            created += 1;
        }
    }

    /// Poisson-gated rewiring pass, run once per rewire interval. Draws the
    /// swap count with Knuth's method, retires that many non-fading edges
    /// without breaking a side's long-edge floor, and starts one fading-in
    /// replacement per retired edge.
    pub fn check_and_swap<R: Rng>(&mut self, points: &[Point], params: &MeshParams, rng: &mut R) {
        let num_swaps = poisson(params.rewire_lambda, rng);
        if num_swaps == 0 {
            return;
        }

        let mut candidates = self.keys_not_fading_out();
        candidates.shuffle(rng);

        let mut retired: SmallVec<[(Side, EdgeClass); 4]> = SmallVec::new();
        for key in candidates {
            if retired.len() >= num_swaps {
                break;
            }
            let Some(edge) = self.edges.get(&key) else {
                continue;
            };
            // A long edge whose side sits at the floor is protected; the
            // shuffle then lands on a medium edge instead.
            if edge.class == EdgeClass::Long
                && self.long_count(edge.side) <= params.min_long_per_side
            {
                continue;
            }
            let (side, class) = (edge.side, edge.class);
            if let Some(e) = self.edges.get_mut(&key) {
                e.fade = Fade::Out;
            }
            retired.push((side, class));
        }

        for (side, class) in retired {
            self.try_replace(points, params, side, class, rng);
        }
    }

    /// Search for one same-side replacement edge, preferring the class of
    /// the edge it replaces. Exhausting the attempt budget just leaves the
    /// side an edge short until a later cycle.
    fn try_replace<R: Rng>(
        &mut self,
        points: &[Point],
        params: &MeshParams,
        side: Side,
        prefer: EdgeClass,
        rng: &mut R,
    ) {
        let members = side_members(points, side);
        if members.len() < 2 {
            return;
        }
        for _ in 0..REPLACEMENT_ATTEMPTS {
            let Some((key, dist)) = sample_pair(&members, points, rng) else {
                continue;
            };
            if dist < params.min_shortcut_distance() || self.contains(key) {
                continue;
            }
            let class = classify(dist, params);
            if prefer == EdgeClass::Long && class != EdgeClass::Long {
                continue;
            }
            if class == EdgeClass::Long && self.long_count(side) >= params.max_long_per_side {
                continue;
            }
            self.insert(ShortcutEdge {
                key,
                side,
                class,
                fade: Fade::In,
                opacity: 0.0,
            });
            return;
        }
    }

    /// Step every fading edge by one frame. Fading-out edges are dropped once
    /// fully transparent; fading-in edges lock at full opacity and clear the
    /// flag.
    pub fn update_fades(&mut self, fade_frames: u32) {
        let step = 1.0 / fade_frames.max(1) as f32;
        let mut dead: SmallVec<[EdgeKey; 4]> = SmallVec::new();
        for e in self.edges.values_mut() {
            match e.fade {
                Fade::Out => {
                    e.opacity = (e.opacity - step).max(0.0);
                    if e.opacity <= 0.0 {
                        dead.push(e.key);
                    }
                }
                Fade::In => {
                    e.opacity += step;
                    if e.opacity >= 1.0 {
                        e.opacity = 1.0;
                        e.fade = Fade::Steady;
                    }
                }
                Fade::Steady => {}
            }
        }
        for key in dead {
            self.edges.remove(&key);
        }
    }

    /// Check structural invariants against the point set, returning the
    /// first violation found. Called from tests after every mutation batch.
    pub fn validate(&self, points: &[Point], params: &MeshParams) -> Result<(), String> {
        for e in self.edges.values() {
            let (a, b) = e.key.endpoints();
            if a == b {
                return Err(format!("self-loop on point {a}"));
            }
            if a >= points.len() || b >= points.len() {
                return Err(format!("edge ({a}, {b}) out of range"));
            }
            if e.side == Side::Content {
                return Err(format!("edge ({a}, {b}) owned by the content region"));
            }
            if points[a].side != e.side || points[b].side != e.side {
                return Err(format!(
                    "edge ({a}, {b}) endpoints not both on side {:?}",
                    e.side
                ));
            }
            let dist = points[a].base.distance(points[b].base);
            if dist < params.min_shortcut_distance() {
                return Err(format!(
                    "edge ({a}, {b}) rest distance {dist:.1} below minimum"
                ));
            }
            if !(0.0..=1.0).contains(&e.opacity) {
                return Err(format!("edge ({a}, {b}) opacity {} out of range", e.opacity));
            }
        }
        for side in [Side::Left, Side::Right] {
            if self.long_count(side) > params.max_long_per_side {
                return Err(format!("side {side:?} above the long-edge ceiling"));
            }
        }
        Ok(())
    }
}

/// Knuth's repeated-multiplication Poisson sampler: multiply uniforms until
/// the running product drops below e^-lambda; the draw is the number of
/// multiplications minus one. For small lambda this is almost always 0,
/// occasionally 1 or 2.
pub fn poisson<R: Rng>(lambda: f64, rng: &mut R) -> usize {
    let limit = (-lambda).exp();
    let mut product = rng.gen::<f64>();
    let mut k = 0usize;
    while product > limit {
        product *= rng.gen::<f64>();
        k += 1;
    }
    k
}

fn side_members(points: &[Point], side: Side) -> Vec<usize> {
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.side == side)
        .map(|(i, _)| i)
        .collect()
}

/// Draw a random unordered pair from `members` along with its rest-position
/// distance. A doubled index burns the attempt and returns None.
fn sample_pair<R: Rng>(
    members: &[usize],
    points: &[Point],
    rng: &mut R,
) -> Option<(EdgeKey, f32)> {
    if members.len() < 2 {
        return None;
    }
    let a = members[rng.gen_range(0..members.len())];
    let b = members[rng.gen_range(0..members.len())];
    if a == b {
        return None;
    }
    Some((EdgeKey::new(a, b), points[a].base.distance(points[b].base)))
}

fn classify(dist: f32, params: &MeshParams) -> EdgeClass {
    if dist >= params.long_shortcut_distance() {
        EdgeClass::Long
    } else {
        EdgeClass::Medium
    }
}
