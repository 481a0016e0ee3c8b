// Host-side tests for the frame state machine and the draw pass, driven
// through the same signal methods the frontend uses.

use glam::Vec2;
use mesh_core::constants::{DEGREE_FLOOR_OPACITY, POINT_MIN_OPACITY, TIME_STEP};
use mesh_core::{MenuState, MeshField, MeshParams, Side, Surface};

const T0: f64 = 50_000.0;

/// Records draw calls instead of stroking pixels.
#[derive(Default)]
struct RecordingSurface {
    clears: usize,
    lines: Vec<(Vec2, Vec2, f32)>,
    circles: Vec<(Vec2, f32, f32)>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
        self.lines.clear();
        self.circles.clear();
    }

    fn line(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        self.lines.push((from, to, alpha));
    }

    fn circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
        self.circles.push((center, radius, alpha));
    }
}

fn make_field() -> MeshField {
    MeshField::new(MeshParams::default(), 1200.0, 800.0, 42).expect("field builds")
}

#[test]
fn degenerate_viewport_is_an_error() {
    assert!(MeshField::new(MeshParams::default(), 0.0, 800.0, 1).is_err());
    assert!(MeshField::new(MeshParams::default(), 1200.0, -1.0, 1).is_err());
}

#[test]
fn advance_steps_time_only_while_animating() {
    let mut field = make_field();
    field.advance(T0);
    assert!((field.time() - TIME_STEP).abs() < 1e-6);
    assert_eq!(field.frame(), 1);

    field.on_pause_toggle();
    field.advance(T0 + 16.0);
    assert_eq!(field.frame(), 1, "paused tick must not advance the frame");

    field.on_pause_toggle();
    field.advance(T0 + 32.0);
    assert_eq!(field.frame(), 2);
}

#[test]
fn hidden_page_suspends_animation() {
    let mut field = make_field();
    field.on_visibility_change(false);
    assert!(!field.is_animating());
    field.advance(T0);
    assert_eq!(field.frame(), 0);
    field.on_visibility_change(true);
    assert!(field.is_animating());
}

#[test]
fn menu_event_starts_and_finishes_a_transition() {
    // Scenario: menu opens at 320px on a 1200px viewport with no prior
    // transition in flight.
    let mut field = make_field();
    let before = field.bounds();
    field.on_menu_state_change(
        MenuState {
            is_open: true,
            menu_width: 320.0,
        },
        T0,
    );
    assert!(field.is_transitioning());

    field.advance(T0 + 10.0);
    assert!(field.is_transitioning());
    assert!(field.bounds().left <= before.left);

    field.advance(T0 + field.params().transition_ms + 1.0);
    assert!(!field.is_transitioning());
    assert!(field.bounds().left < before.left);
}

#[test]
fn reopening_to_current_bounds_is_a_no_op() {
    let mut field = make_field();
    let menu = MenuState {
        is_open: false,
        menu_width: 320.0,
    };
    field.on_menu_state_change(menu, T0);
    assert!(
        !field.is_transitioning(),
        "closed menu matches the at-rest bounds"
    );
}

#[test]
fn menu_close_restores_original_bounds() {
    let mut field = make_field();
    let at_rest = field.bounds();
    let open = MenuState {
        is_open: true,
        menu_width: 320.0,
    };
    field.on_menu_state_change(open, T0);
    field.advance(T0 + field.params().transition_ms + 1.0);

    let closed = MenuState {
        is_open: false,
        menu_width: 320.0,
    };
    field.on_menu_state_change(closed, T0 + 1000.0);
    field.advance(T0 + 1000.0 + field.params().transition_ms + 1.0);
    assert!(!field.is_transitioning());
    let bounds = field.bounds();
    assert!((bounds.left - at_rest.left).abs() < 1e-3);
    assert!((bounds.right - at_rest.right).abs() < 1e-3);
}

#[test]
fn transition_runs_while_paused() {
    let mut field = make_field();
    field.on_pause_toggle();
    field.on_menu_state_change(
        MenuState {
            is_open: true,
            menu_width: 320.0,
        },
        T0,
    );
    assert!(field.should_schedule(), "transition alone keeps ticks alive");

    field.advance(T0 + field.params().transition_ms + 1.0);
    assert!(!field.is_transitioning());
    assert!(
        !field.should_schedule(),
        "paused with no transition wants no ticks"
    );
}

#[test]
fn point_opacity_is_binary_when_idle() {
    let field = make_field();
    let bounds = field.bounds();
    for (i, p) in field.points().iter().enumerate() {
        let expected = if bounds.contains(p.base.x) { 0.0 } else { 1.0 };
        assert_eq!(field.point_opacity(i, T0), expected);
    }
}

#[test]
fn resize_rederives_identical_bounds() {
    let mut field = make_field();
    let before = field.bounds();
    let count = field.points().len();
    field.on_resize(1200.0, 800.0);
    assert_eq!(field.bounds(), before);
    assert_eq!(field.points().len(), count);
}

#[test]
fn resize_regenerates_points_and_shortcuts() {
    let mut field = make_field();
    let old_bases: Vec<Vec2> = field.points().iter().map(|p| p.base).collect();
    field.on_resize(1400.0, 900.0);
    assert!(field.points().len() != old_bases.len() || {
        field
            .points()
            .iter()
            .zip(&old_bases)
            .any(|(p, old)| p.base != *old)
    });
    field
        .shortcuts()
        .validate(field.points(), field.params())
        .unwrap();
}

#[test]
fn long_floor_holds_across_many_frames() {
    let mut field = make_field();
    for _ in 0..600 {
        field.advance(T0);
    }
    field
        .shortcuts()
        .validate(field.points(), field.params())
        .unwrap();
    for side in [Side::Left, Side::Right] {
        let long = field.shortcuts().long_count(side);
        assert!(long >= field.params().min_long_per_side);
        assert!(long <= field.params().max_long_per_side);
    }
}

#[test]
fn shortcut_and_point_opacities_stay_clamped_over_time() {
    let mut field = make_field();
    for i in 0..300 {
        field.advance(T0 + i as f64 * 16.0);
        for e in field.shortcuts().iter() {
            assert!((0.0..=1.0).contains(&e.opacity));
        }
    }
}

#[test]
fn draw_clears_then_renders_visible_points() {
    let mut field = make_field();
    field.advance(T0);
    let mut surface = RecordingSurface::default();
    field.draw(&mut surface, T0);
    assert_eq!(surface.clears, 1);

    let visible = (0..field.points().len())
        .filter(|&i| field.point_opacity(i, T0) > POINT_MIN_OPACITY)
        .count();
    assert_eq!(surface.circles.len(), visible);
    assert!(visible > 0, "margins should hold visible points");
    for &(_, radius, alpha) in &surface.circles {
        assert!(radius > 0.0);
        assert!(alpha > 0.0 && alpha <= 1.0);
    }
}

#[test]
fn no_sufficiently_visible_point_is_left_isolated() {
    let mut field = make_field();
    field.advance(T0);
    let mut surface = RecordingSurface::default();
    field.draw(&mut surface, T0);

    for (i, p) in field.points().iter().enumerate() {
        if field.point_opacity(i, T0) <= DEGREE_FLOOR_OPACITY {
            continue;
        }
        let touched = surface
            .lines
            .iter()
            .any(|&(from, to, _)| from == p.pos || to == p.pos);
        assert!(touched, "visible point {i} received no edge");
    }
}

#[test]
fn hidden_endpoints_draw_no_edges() {
    let mut field = make_field();
    field.advance(T0);
    let mut surface = RecordingSurface::default();
    field.draw(&mut surface, T0);

    // Content points are invisible at rest; no line may touch one.
    for (i, p) in field.points().iter().enumerate() {
        if field.point_opacity(i, T0) > 0.0 {
            continue;
        }
        let touched = surface
            .lines
            .iter()
            .any(|&(from, to, _)| from == p.pos || to == p.pos);
        assert!(!touched, "hidden point {i} should receive no edge");
    }
}
