use approx::assert_relative_eq;
use fallsim::shapes::{Shape, PI};
use fallsim::{BodyEvent, FallWorld, FallingBody, Material, MotionPhase, SimulationConfig};

const WINDOW: f32 = 800.0;

fn demo_world() -> FallWorld {
    // Circle of radius 15 cm, 1.7 kg, restitution 0.6 in an 800x800 window
    let shape = Shape::circle(15.0).unwrap();
    let material = Material::new(1.7, 0.6).unwrap();
    FallWorld::new(shape, material, WINDOW, WINDOW).unwrap()
}

#[test]
fn test_terminal_velocity_formula() {
    let config = SimulationConfig::default();
    let shape = Shape::circle(15.0).unwrap();
    let material = Material::new(1.7, 0.6).unwrap();
    let body = FallingBody::new(shape, material, WINDOW, WINDOW, &config).unwrap();

    let area = PI * (15.0f32 / 100.0).powi(2);
    let expected = (2.0 * 1.7 * 0.981 / (1.225 * area * 0.5)).sqrt();

    assert_relative_eq!(body.get_terminal_velocity(), expected, epsilon = 1e-5);
    assert!(body.get_terminal_velocity() > 0.0);
    assert_relative_eq!(body.get_cross_section(), area);
    assert_relative_eq!(body.get_drag_coefficient(), 0.5);
}

#[test]
fn test_initial_position_is_centered() {
    let world = demo_world();
    let (x, y) = world.get_body().get_position();

    assert_relative_eq!(x, 385.0);
    assert_relative_eq!(y, 385.0);
    assert_relative_eq!(world.get_body().get_velocity(), 0.0);
    assert_eq!(world.get_body().phase(), MotionPhase::Descending);
}

#[test]
fn test_descent_velocity_never_exceeds_terminal() {
    // A light, wide body has a tiny terminal velocity that is reached almost
    // immediately, exercising the clamp on every subsequent descent tick
    let shape = Shape::rectangle(50.0, 50.0).unwrap();
    let material = Material::new(0.1, 0.5).unwrap();
    let mut world = FallWorld::new(shape, material, WINDOW, WINDOW).unwrap();
    let terminal = world.get_body().get_terminal_velocity();

    for _ in 0..20_000 {
        world.step();
        if world.get_body().phase() == MotionPhase::Descending {
            assert!(world.get_body().get_velocity() <= terminal);
        }
        if world.get_body().is_stalled() {
            break;
        }
    }
}

#[test]
fn test_bounce_energy_loss() {
    let mut world = demo_world();

    let impact_speed = loop {
        world.step();
        match world.next_event() {
            Some(BodyEvent::Bounced { impact_speed }) => break impact_speed,
            Some(BodyEvent::Stalled) => panic!("stalled before first bounce"),
            _ => {}
        }
        assert!(world.get_ticks() < 100_000, "no bounce within bound");
    };

    // Post-bounce speed is the impact speed scaled by restitution
    let rebound = world.get_body().get_velocity();
    assert_relative_eq!(rebound, impact_speed * 0.6, epsilon = 1e-6);
    assert!(rebound < impact_speed);
    assert_eq!(world.get_body().phase(), MotionPhase::Rising);
}

#[test]
fn test_stall_convergence() {
    let mut world = demo_world();

    for _ in 0..100_000 {
        world.step();
        if world.get_body().is_stalled() {
            break;
        }
    }
    assert!(world.get_body().is_stalled(), "body never stalled");
    assert_relative_eq!(world.get_body().get_velocity(), 0.0);

    // Stalled is terminal: position and velocity stay pinned
    let (_, rest_y) = world.get_body().get_position();
    assert_relative_eq!(rest_y, WINDOW - 30.0);
    for _ in 0..100 {
        world.step();
        let (_, y) = world.get_body().get_position();
        assert_relative_eq!(y, rest_y);
        assert_relative_eq!(world.get_body().get_velocity(), 0.0);
    }
}

#[test]
fn test_floor_clamp_every_tick() {
    let mut world = demo_world();
    let floor = WINDOW - 30.0;

    for _ in 0..50_000 {
        world.step();
        let (_, y) = world.get_body().get_position();
        assert!(y <= floor, "body sank below the floor: y = {}", y);
    }
}

#[test]
fn test_demo_scenario_reaches_floor_before_stall() {
    let mut world = demo_world();
    let floor = WINDOW - 30.0;
    let mut touched_floor = false;

    for _ in 0..100_000 {
        world.step();
        let (_, y) = world.get_body().get_position();
        if y == floor && !world.get_body().is_stalled() {
            touched_floor = true;
        }
        if world.get_body().is_stalled() {
            break;
        }
    }

    assert!(touched_floor, "body never touched the floor while bouncing");
    assert!(world.get_body().is_stalled());
}

#[test]
fn test_phase_transitions() {
    let mut world = demo_world();
    assert_eq!(world.get_body().phase(), MotionPhase::Descending);

    // Descending -> Rising on the first bounce
    loop {
        world.step();
        if let Some(BodyEvent::Bounced { .. }) = world.next_event() {
            break;
        }
        assert!(world.get_ticks() < 100_000);
    }
    assert_eq!(world.get_body().phase(), MotionPhase::Rising);

    // Rising -> Descending once the rebound is exhausted
    while world.get_body().phase() == MotionPhase::Rising {
        world.step();
        assert!(world.get_ticks() < 200_000);
    }
    assert_eq!(world.get_body().phase(), MotionPhase::Descending);
    assert_relative_eq!(world.get_body().get_velocity(), 0.0);

    // Bounce cycles end in the terminal Stalled phase
    while !world.get_body().is_stalled() {
        world.step();
        assert!(world.get_ticks() < 500_000);
    }
    assert_eq!(world.get_body().phase(), MotionPhase::Stalled);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut world = demo_world();

    for _ in 0..12_345 {
        world.step();
    }
    world.reset();

    let (x, y) = world.get_body().get_position();
    assert_relative_eq!(x, 385.0);
    assert_relative_eq!(y, 385.0);
    assert_relative_eq!(world.get_body().get_velocity(), 0.0);
    assert_eq!(world.get_body().phase(), MotionPhase::Descending);
}

#[test]
fn test_reset_leaves_stall() {
    let mut world = demo_world();

    while !world.get_body().is_stalled() {
        world.step();
        assert!(world.get_ticks() < 500_000);
    }

    world.reset();
    assert!(!world.get_body().is_stalled());

    // The body falls again after the reset
    let (_, start_y) = world.get_body().get_position();
    for _ in 0..100 {
        world.step();
    }
    let (_, y) = world.get_body().get_position();
    assert!(y > start_y);
}

#[test]
fn test_reset_does_not_change_terminal_velocity() {
    let mut world = demo_world();
    let terminal = world.get_body().get_terminal_velocity();

    for _ in 0..1_000 {
        world.step();
    }
    world.reset();

    assert_relative_eq!(world.get_body().get_terminal_velocity(), terminal);
}

#[test]
fn test_reset_signal_is_consumed_once() {
    let mut world = demo_world();
    let signal = world.reset_signal();

    signal.raise();
    assert!(signal.is_raised());

    // The raise is applied at the start of the next tick and cleared
    for _ in 0..100 {
        world.step();
    }
    signal.raise();
    world.step();
    assert!(!signal.is_raised());

    let (_, y) = world.get_body().get_position();
    assert_relative_eq!(y, 385.0);
}

#[test]
fn test_reset_signal_from_another_thread() {
    let mut world = demo_world();
    let signal = world.reset_signal();

    for _ in 0..5_000 {
        world.step();
    }

    let handle = std::thread::spawn(move || signal.raise());
    handle.join().unwrap();

    world.step();
    let (_, y) = world.get_body().get_position();
    assert_relative_eq!(y, 385.0);
    assert_relative_eq!(world.get_body().get_velocity(), 0.981 * 0.0083);
}

#[test]
fn test_event_queue_reports_lifecycle() {
    let mut world = demo_world();

    // Run to completion and drain the queue
    while !world.get_body().is_stalled() {
        world.step();
        assert!(world.get_ticks() < 500_000);
    }

    let mut bounces = 0;
    let mut stalls = 0;
    while let Some(event) = world.next_event() {
        match event {
            BodyEvent::Bounced { impact_speed } => {
                assert!(impact_speed > 0.0);
                bounces += 1;
            }
            BodyEvent::Stalled => stalls += 1,
            BodyEvent::Reset => panic!("no reset was requested"),
        }
    }
    assert!(bounces >= 1);
    assert_eq!(stalls, 1);
    assert!(!world.has_events());

    world.reset();
    assert_eq!(world.next_event(), Some(BodyEvent::Reset));
}

#[test]
fn test_invalid_window_dimensions() {
    let shape = Shape::circle(15.0).unwrap();
    let material = Material::default();

    assert!(FallWorld::new(shape, material, 0.0, 800.0).is_err());
    assert!(FallWorld::new(shape, material, 800.0, -1.0).is_err());
    assert!(FallWorld::new(shape, material, f32::NAN, 800.0).is_err());
}
