// Host-side tests for boundary transitions and the directional sweep.

use mesh_core::{ease_out_cubic, BoundaryTransition, ContentBounds, MeshParams};

const T0: f64 = 10_000.0; // arbitrary wall-clock origin

fn menu_open_transition() -> (ContentBounds, ContentBounds, BoundaryTransition) {
    // 1200px viewport, 320px menu: content shifts left, so the left margin
    // shrinks and the right margin grows.
    let params = MeshParams::default();
    let from = ContentBounds::derive(1200.0, false, 0.0, &params);
    let to = ContentBounds::derive(1200.0, true, 320.0, &params);
    let tr = BoundaryTransition::new(from, to, T0, params.transition_ms);
    (from, to, tr)
}

#[test]
fn ease_out_cubic_hits_endpoints_and_rises() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    let mut last = 0.0;
    for i in 1..=10 {
        let v = ease_out_cubic(i as f32 / 10.0);
        assert!(v > last, "easing not monotonic at step {i}");
        last = v;
    }
}

#[test]
fn menu_open_scenario_targets_smaller_left_bound() {
    let (from, to, tr) = menu_open_transition();
    assert!(to.left < from.left, "menu open must pull the left bound in");
    assert!(!tr.is_complete(T0));
    assert!(tr.is_complete(T0 + tr.duration_ms));
}

#[test]
fn bounds_interpolate_from_previous_to_target() {
    let (from, to, tr) = menu_open_transition();
    let start = tr.bounds_at(T0);
    assert!((start.left - from.left).abs() < 1e-3);
    assert!((start.right - from.right).abs() < 1e-3);

    let mid = tr.bounds_at(T0 + tr.duration_ms * 0.5);
    assert!(mid.left < from.left && mid.left > to.left);
    assert!(mid.right < from.right && mid.right > to.right);

    let end = tr.bounds_at(T0 + tr.duration_ms);
    assert!((end.left - to.left).abs() < 1e-3);
    assert!((end.right - to.right).abs() < 1e-3);
}

#[test]
fn completed_transition_matches_binary_result() {
    // Property: once elapsed >= duration the sweep equals the plain
    // outside-the-target-bounds test for every x.
    let (_, to, tr) = menu_open_transition();
    let done = T0 + tr.duration_ms + 1.0;
    for x in (0..1200).step_by(7) {
        let x = x as f32;
        let expected = if to.contains(x) { 0.0 } else { 1.0 };
        assert_eq!(tr.node_opacity(x, done), expected, "mismatch at x={x}");
    }
}

#[test]
fn hide_sweep_fades_in_the_trailing_zone() {
    // Left margin shrinking: points past the target bound stay lit, points
    // the animated bound has passed go dark, the zone between fades.
    let (_, to, tr) = menu_open_transition();
    let now = T0 + tr.duration_ms * 0.5;
    let cur = tr.bounds_at(now).left;

    assert_eq!(tr.node_opacity(to.left - 5.0, now), 1.0);
    assert_eq!(tr.node_opacity(cur + 10.0, now), 0.0);
    let fading = tr.node_opacity(cur - 10.0, now);
    assert!(
        (fading - 10.0 / 80.0).abs() < 1e-3,
        "expected linear fade, got {fading}"
    );
}

#[test]
fn reveal_sweep_is_proportional_to_swept_distance() {
    // Right margin growing: the right bound retreats left, revealing points
    // behind it in proportion to how far the sweep has come.
    let (from, _, tr) = menu_open_transition();
    let now = T0 + tr.duration_ms * 0.5;
    let cur = tr.bounds_at(now).right;
    assert!(cur < from.right);

    assert_eq!(tr.node_opacity(from.right + 5.0, now), 1.0);
    assert_eq!(tr.node_opacity(cur - 5.0, now), 0.0);

    let x = (cur + from.right) * 0.5;
    let expected = (x - cur) / (from.right - cur);
    let got = tr.node_opacity(x, now);
    assert!(
        (got - expected).abs() < 1e-3,
        "expected {expected}, got {got}"
    );
}

#[test]
fn mid_sweep_opacity_stays_clamped() {
    let (_, _, tr) = menu_open_transition();
    for step in 0..=20 {
        let now = T0 + tr.duration_ms * (step as f64 / 20.0);
        for x in (0..1200).step_by(13) {
            let v = tr.node_opacity(x as f32, now);
            assert!((0.0..=1.0).contains(&v), "opacity {v} out of range");
        }
    }
}

#[test]
fn zero_duration_transition_is_instantly_binary() {
    let params = MeshParams::default();
    let from = ContentBounds::derive(1200.0, false, 0.0, &params);
    let to = ContentBounds::derive(1200.0, true, 320.0, &params);
    let tr = BoundaryTransition::new(from, to, T0, 0.0);
    assert!(tr.is_complete(T0));
    assert_eq!(tr.node_opacity(to.left - 1.0, T0), 1.0);
    assert_eq!(tr.node_opacity(to.left + 1.0, T0), 0.0);
}
