use glam::{Vec2, Vec3};
use ripple_core::{
    Camera, DispatchOutcome, DispatchState, InputDispatcher, MapError, RippleStore, Viewport,
    MOVEMENT_THRESHOLD,
};

fn setup() -> (InputDispatcher, RippleStore, Camera, Viewport) {
    let viewport = Viewport::new(800.0, 600.0);
    (
        InputDispatcher::new(),
        RippleStore::new(),
        Camera::for_viewport(viewport.width, viewport.height),
        viewport,
    )
}

#[test]
fn normalize_maps_corners_to_unit_square() {
    let vp = Viewport::new(800.0, 600.0);
    assert_eq!(vp.normalize(Vec2::new(0.0, 0.0)), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(vp.normalize(Vec2::new(800.0, 600.0)), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(vp.normalize(Vec2::new(400.0, 300.0)), Some(Vec2::ZERO));
    assert_eq!(Viewport::new(0.0, 600.0).normalize(Vec2::ZERO), None);
}

#[test]
fn first_sample_at_centre_is_debounced_against_origin() {
    let (mut d, mut store, camera, vp) = setup();
    assert_eq!(d.state(), DispatchState::Idle);
    let out = d.pointer_moved(Vec2::new(400.0, 300.0), vp, &camera, &mut store, 0.0);
    assert_eq!(out, DispatchOutcome::Debounced);
    assert_eq!(d.state(), DispatchState::Tracking);
    assert!(store.is_empty());
}

#[test]
fn move_beyond_threshold_inserts_ripple_under_pointer() {
    let (mut d, mut store, camera, vp) = setup();
    let out = d.pointer_moved(Vec2::new(600.0, 150.0), vp, &camera, &mut store, 1.5);
    let DispatchOutcome::Inserted(p) = out else {
        panic!("expected insertion, got {out:?}");
    };
    // right of and above centre on screen => +x, +y on the surface
    assert!(p.x > 0.0);
    assert!(p.y > 0.0);
    assert_eq!(store.len(), 1);
    let r = store.newest().unwrap();
    assert_eq!(r.position, p);
    assert_eq!(r.start_time, 1.5);
}

#[test]
fn insertion_lands_where_the_pointer_is() {
    let (mut d, mut store, camera, vp) = setup();
    // ndc (0.5, 0)
    let out = d.pointer_moved(Vec2::new(600.0, 300.0), vp, &camera, &mut store, 0.0);
    let DispatchOutcome::Inserted(p) = out else {
        panic!("expected insertion, got {out:?}");
    };
    let expected = 5.0 * 22.5f32.to_radians().tan() * camera.aspect * 0.5;
    assert!((p.x - expected).abs() < 1e-3, "got {p:?}");
    assert!(p.y.abs() < 1e-4);
}

#[test]
fn small_moves_never_insert() {
    let (mut d, mut store, camera, vp) = setup();
    d.pointer_moved(Vec2::new(600.0, 300.0), vp, &camera, &mut store, 0.0);
    assert_eq!(store.len(), 1);

    // 1px steps are 0.0025 in ndc; the gate is against the last accepted sample
    for i in 1..=7 {
        let out = d.pointer_moved(Vec2::new(600.0 + i as f32, 300.0), vp, &camera, &mut store, 0.0);
        assert_eq!(out, DispatchOutcome::Debounced);
    }
    assert_eq!(store.len(), 1);

    // 9px from the accepted sample crosses 0.02
    let out = d.pointer_moved(Vec2::new(609.0, 300.0), vp, &camera, &mut store, 0.0);
    assert!(matches!(out, DispatchOutcome::Inserted(_)));
    assert_eq!(store.len(), 2);
}

#[test]
fn distance_equal_to_threshold_is_debounced() {
    let vp = Viewport::new(400.0, 400.0);
    let camera = Camera::for_viewport(400.0, 400.0);
    let mut store = RippleStore::new();
    let mut d = InputDispatcher::with_threshold(0.5);
    // ndc (0.5, 0) is exactly 0.5 away from the initial (0, 0)
    let out = d.pointer_moved(Vec2::new(300.0, 200.0), vp, &camera, &mut store, 0.0);
    assert_eq!(out, DispatchOutcome::Debounced);
    assert_eq!(d.pointer().previous, Vec2::ZERO);
    assert_eq!(d.pointer().current, Vec2::new(0.5, 0.0));
}

#[test]
fn degenerate_viewport_is_ignored() {
    let (mut d, mut store, camera, _) = setup();
    let out = d.pointer_moved(Vec2::new(10.0, 10.0), Viewport::new(0.0, 0.0), &camera, &mut store, 0.0);
    assert_eq!(out, DispatchOutcome::Ignored);
    assert_eq!(d.state(), DispatchState::Idle);
    assert!(store.is_empty());
}

#[test]
fn unmappable_sample_still_moves_the_gate() {
    let vp = Viewport::new(400.0, 400.0);
    let camera = Camera {
        eye: Vec3::ZERO,
        target: Vec3::X,
        ..Camera::default()
    };
    let mut store = RippleStore::new();
    let mut d = InputDispatcher::new();
    let out = d.pointer_moved(Vec2::new(200.0, 100.0), vp, &camera, &mut store, 0.0);
    assert_eq!(out, DispatchOutcome::Unmappable(MapError::ParallelRay));
    assert!(store.is_empty());
    assert_eq!(d.pointer().previous, Vec2::new(0.0, 0.5));
}

#[test]
fn touch_uses_first_point_only() {
    let (mut d, mut store, camera, vp) = setup();
    let touches = [Vec2::new(600.0, 300.0), Vec2::new(100.0, 100.0)];
    let out = d.touch_moved(&touches, vp, &camera, &mut store, 0.0);
    let DispatchOutcome::Inserted(p) = out else {
        panic!("expected insertion, got {out:?}");
    };
    assert!(p.x > 0.0);
    assert!(p.y.abs() < 1e-4);
    assert_eq!(d.pointer().current, Vec2::new(0.5, 0.0));
}

#[test]
fn empty_touch_list_is_ignored() {
    let (mut d, mut store, camera, vp) = setup();
    assert_eq!(d.touch_moved(&[], vp, &camera, &mut store, 0.0), DispatchOutcome::Ignored);
    assert_eq!(d.state(), DispatchState::Idle);
}

#[test]
fn default_threshold() {
    assert_eq!(InputDispatcher::default().threshold(), MOVEMENT_THRESHOLD);
}
