// Shared tuning constants for the background mesh.

// Lattice geometry
pub const LATTICE_SPACING: f32 = 70.0; // nominal distance between adjacent grid points
pub const ROW_HEIGHT_RATIO: f32 = 0.866_025_4; // sqrt(3)/2, triangular row pitch
pub const BASE_JITTER_RATIO: f32 = 0.6; // total base-position jitter spread, as a fraction of spacing
pub const WOBBLE_MAX: f32 = 7.5; // fixed per-point offset, applied to the live position only

// Per-point animation parameter ranges
pub const AMPLITUDE_MIN: f32 = 2.0;
pub const AMPLITUDE_MAX: f32 = 6.0;
pub const SPEED_MIN: f32 = 0.5;
pub const SPEED_MAX: f32 = 1.5;
pub const Y_AXIS_RATIO: f32 = 0.7; // y runs at 0.7x the speed and amplitude of x

// Reserved content region
pub const CONTENT_WIDTH: f32 = 720.0;
pub const CONTENT_PADDING: f32 = 40.0;

// Shortcut tuning
pub const SHORTCUT_DENSITY: f32 = 0.08; // target edges per eligible point, per side
pub const MIN_SHORTCUT_CELLS: f32 = 3.0; // minimum endpoint separation, in lattice spacings
pub const LONG_SHORTCUT_CELLS: f32 = 6.0; // long classification threshold, in lattice spacings
pub const MIN_LONG_PER_SIDE: usize = 1;
pub const MAX_LONG_PER_SIDE: usize = 2;
pub const SHORTCUT_FADE_FRAMES: u32 = 45;
pub const REWIRE_CHECK_INTERVAL: u64 = 60; // frames between Poisson draws, ~1s at 60fps
pub const REWIRE_LAMBDA: f64 = 0.3;
pub const LONG_SEED_ATTEMPTS: u32 = 100;
pub const FILL_ATTEMPTS_PER_EDGE: u32 = 12;
pub const REPLACEMENT_ATTEMPTS: u32 = 50;

// Boundary transitions
pub const TRANSITION_DURATION_MS: f64 = 300.0;
pub const SWEEP_FADE_PX: f32 = 80.0; // width of the fade zone trailing a sweeping bound

// Frame stepping and drawing
pub const TIME_STEP: f32 = 0.015; // fixed per-frame time increment, assumes ~60fps
pub const LOCAL_EDGE_RANGE: f32 = 1.5; // local edges connect within this many spacings, live distance
pub const EDGE_BASE_ALPHA: f32 = 0.2;
pub const MIN_DRAW_ALPHA: f32 = 0.01; // fainter strokes are skipped entirely
pub const CONNECTED_ALPHA: f32 = 0.05; // edges this faint do not count toward the degree floor
pub const DEGREE_FLOOR_OPACITY: f32 = 0.3; // points above this must not end a frame isolated
pub const POINT_MIN_OPACITY: f32 = 0.02;
pub const POINT_RADIUS: f32 = 2.5;
pub const POINT_BASE_ALPHA: f32 = 0.55;
