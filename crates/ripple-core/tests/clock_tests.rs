use ripple_core::{SimulationClock, CLOCK_STEP};

#[test]
fn starts_at_zero() {
    let clock = SimulationClock::new();
    assert_eq!(clock.now(), 0.0);
    assert_eq!(clock.frames(), 0);
    assert_eq!(clock.step(), CLOCK_STEP);
}

#[test]
fn advances_one_step_per_tick() {
    let mut clock = SimulationClock::new();
    let mut last = clock.now();
    for i in 1..=100u64 {
        let t = clock.tick();
        assert!(t >= last);
        assert!((t - last - CLOCK_STEP).abs() < 1e-4);
        assert_eq!(clock.frames(), i);
        assert_eq!(clock.now(), t);
        last = t;
    }
    assert!((clock.now() - 10.0).abs() < 1e-3);
}

#[test]
fn invalid_steps_hold_time_still() {
    for step in [-1.0, f32::NAN, f32::INFINITY] {
        let mut clock = SimulationClock::with_step(step);
        clock.tick();
        clock.tick();
        assert_eq!(clock.now(), 0.0);
        assert_eq!(clock.frames(), 2);
    }
}

#[test]
fn custom_step() {
    let mut clock = SimulationClock::with_step(0.25);
    clock.tick();
    clock.tick();
    assert_eq!(clock.now(), 0.5);
}

#[test]
fn step_stays_fixed_over_long_sessions() {
    let mut clock = SimulationClock::new();
    let step = f64::from(clock.step());
    let mut last = clock.now_f64();
    for _ in 0..1_000_000 {
        clock.tick();
        let t = clock.now_f64();
        assert!((t - last - step).abs() < 1e-9);
        last = t;
    }
    assert_eq!(clock.frames(), 1_000_000);
    assert!((clock.now_f64() - 1_000_000.0 * step).abs() < 1e-3);
    assert!((clock.now() - 100_000.0).abs() < 0.05);
}

#[test]
fn narrowed_time_keeps_advancing_past_f32_precision() {
    let mut clock = SimulationClock::new();
    // beyond 2^21 a single 0.1 step is under half an f32 ulp
    while clock.now_f64() < 2_200_000.0 {
        clock.tick();
    }
    let before = clock.now();
    for _ in 0..10 {
        clock.tick();
    }
    assert!(clock.now() > before);
    assert!((f64::from(clock.now()) - clock.now_f64()).abs() < 0.25);
}
