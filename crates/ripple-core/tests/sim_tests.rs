use glam::Vec2;
use ripple_core::{
    Camera, DispatchOutcome, PanelAction, ParamId, SimulationClock, SimulationContext, Viewport,
    WaveParameters, CLOCK_STEP, MAX_RIPPLES,
};

fn context() -> (SimulationContext, Viewport) {
    let vp = Viewport::new(800.0, 600.0);
    (SimulationContext::new(Camera::for_viewport(vp.width, vp.height)), vp)
}

#[test]
fn frame_inputs_carry_clock_ripples_and_params() {
    let (mut sim, _) = context();
    let first = sim.advance_frame();
    assert!((first.time - CLOCK_STEP).abs() < 1e-6);
    assert_eq!(first.snapshot.active_count(), 0);
    assert_eq!(first.params, WaveParameters::default());

    sim.add_ripple(Vec2::new(0.2, -0.1));
    let second = sim.advance_frame();
    assert!(second.time > first.time);
    assert_eq!(second.snapshot.active_count(), 1);
    // stamped with the clock at insertion time
    assert_eq!(second.snapshot.start_time(0), first.time);
}

#[test]
fn pointer_ripples_are_stamped_with_current_time() {
    let (mut sim, vp) = context();
    for _ in 0..5 {
        sim.advance_frame();
    }
    let now = sim.clock().now();
    let out = sim.pointer_moved(Vec2::new(700.0, 100.0), vp);
    assert!(matches!(out, DispatchOutcome::Inserted(_)));
    assert_eq!(sim.ripples().newest().unwrap().start_time, now);
}

#[test]
fn sweeping_pointer_keeps_most_recent_ripples() {
    let (mut sim, vp) = context();
    let mut inserted = Vec::new();
    for i in 0..8 {
        sim.advance_frame();
        let client = Vec2::new(100.0 + i as f32 * 80.0, 300.0);
        if let DispatchOutcome::Inserted(p) = sim.pointer_moved(client, vp) {
            inserted.push(p);
        }
    }
    assert_eq!(inserted.len(), 8);
    let kept: Vec<Vec2> = sim.ripples().iter().map(|r| r.position).collect();
    assert_eq!(kept.len(), MAX_RIPPLES);
    assert_eq!(kept, inserted[3..].to_vec());
}

#[test]
fn evaluate_is_flat_at_fresh_ripple_centre() {
    let (mut sim, _) = context();
    sim.advance_frame();
    sim.add_ripple(Vec2::new(0.4, 0.4));
    let d = sim.evaluate(Vec2::new(0.4, 0.4));
    assert!(d.z_offset.abs() < 1e-6);

    sim.advance_frame();
    let d = sim.evaluate(Vec2::new(0.45, 0.4));
    assert!(d.z_offset.abs() > 0.0);
}

#[test]
fn panel_changes_reach_next_frame() {
    let (mut sim, _) = context();
    assert!(sim.apply_panel(PanelAction::Nudge(ParamId::WaveAmplitude, 10)));
    let inputs = sim.advance_frame();
    assert!((inputs.params.wave_amplitude - 0.5).abs() < 1e-4);

    assert!(sim.apply_panel(PanelAction::Reset));
    assert_eq!(*sim.params(), WaveParameters::default());
}

#[test]
fn params_mut_writes_through() {
    let (mut sim, _) = context();
    sim.params_mut().wave_frequency = 4.0;
    assert_eq!(sim.advance_frame().params.wave_frequency, 4.0);
    assert_eq!(sim.panel().range(ParamId::WaveFrequency).max, 20.0);
}

#[test]
fn resize_updates_camera_aspect() {
    let (mut sim, _) = context();
    sim.resize(1000.0, 500.0);
    assert_eq!(sim.camera.aspect, 2.0);
    sim.resize(0.0, 500.0);
    assert_eq!(sim.camera.aspect, 2.0);
}

#[test]
fn touch_moves_share_the_pointer_gate() {
    let (mut sim, vp) = context();
    let out = sim.touch_moved(&[Vec2::new(600.0, 300.0)], vp);
    assert!(matches!(out, DispatchOutcome::Inserted(_)));
    let out = sim.pointer_moved(Vec2::new(601.0, 300.0), vp);
    assert_eq!(out, DispatchOutcome::Debounced);
    assert_eq!(sim.dispatcher().pointer().previous, Vec2::new(0.5, 0.0));
}

#[test]
fn custom_clock() {
    let mut sim = SimulationContext::default().with_clock(SimulationClock::with_step(1.0));
    sim.advance_frame();
    sim.advance_frame();
    assert_eq!(sim.clock().now(), 2.0);
    assert_eq!(sim.clock().frames(), 2);
}

#[test]
fn ripples_still_move_late_in_a_session() {
    let (mut sim, _) = context();
    for _ in 0..2_000_000 {
        sim.advance_frame();
    }
    sim.add_ripple(Vec2::ZERO);
    let sample = Vec2::new(0.05, 0.0);
    let a = sim.evaluate(sample).z_offset;
    for _ in 0..3 {
        sim.advance_frame();
    }
    let b = sim.evaluate(sample).z_offset;
    assert!((a - b).abs() > 1e-4);
}

#[test]
fn first_touch_as_zero_or_one_element_slice() {
    let (mut sim, vp) = context();
    let none: Option<Vec2> = None;
    assert_eq!(sim.touch_moved(none.as_slice(), vp), DispatchOutcome::Ignored);
    assert!(sim.ripples().is_empty());

    let first = Some(Vec2::new(600.0, 300.0));
    let out = sim.touch_moved(first.as_slice(), vp);
    assert!(matches!(out, DispatchOutcome::Inserted(_)));
    assert_eq!(sim.ripples().len(), 1);
}
