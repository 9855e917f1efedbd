//! Invariants of the maze simulation checked against arbitrary input

use glam::Vec2;
use proptest::prelude::*;

use tilt_maze::sim::{CollisionMode, circle_intersects_rect, map_sample, step};
use tilt_maze::{Arena, GameSession, InputMapper, InputSample, Rect, Simulator, TickOutcome};

fn velocity() -> impl Strategy<Value = Vec2> {
    (-60.0f32..60.0, -60.0f32..60.0).prop_map(|(x, y)| Vec2::new(x, y))
}

fn any_f32() -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => -5.0f32..5.0,
        1 => Just(f32::NAN),
        1 => Just(f32::INFINITY),
        1 => Just(f32::NEG_INFINITY),
    ]
}

fn goal() -> Rect {
    Rect::new(740.0, 750.0, 780.0, 790.0).unwrap()
}

proptest! {
    #[test]
    fn ball_stays_inside_inset_bounds(velocities in prop::collection::vec(velocity(), 1..200)) {
        let arena = Arena::unframed(800.0, 1200.0, Vec::<Rect>::new(), goal()).unwrap();
        let mut sim = Simulator::new(arena);
        for v in velocities {
            sim.tick(v);
            let pos = sim.ball().pos;
            prop_assert!(pos.x >= 30.0 && pos.x <= 770.0);
            prop_assert!(pos.y >= 30.0 && pos.y <= 1170.0);
        }
    }

    #[test]
    fn ball_never_enters_an_obstacle(velocities in prop::collection::vec(velocity(), 1..200)) {
        let mut sim = Simulator::default();
        // Leave the start pocket, which overlaps the top border
        sim.tick(Vec2::new(0.0, 20.0));
        prop_assume!(sim.ball().pos == Vec2::new(120.0, 60.0));
        for v in velocities {
            sim.tick(v);
            let ball = *sim.ball();
            for obstacle in sim.arena().obstacles() {
                prop_assert!(!circle_intersects_rect(ball.pos, ball.radius, &obstacle.rect));
            }
        }
    }

    #[test]
    fn blocked_tick_leaves_position_unchanged(
        start_x in 50.0f32..190.0,
        start_y in 60.0f32..860.0,
        v in velocity(),
    ) {
        let arena = Arena::default();
        let mut sim = Simulator::new(arena);
        sim.place_ball(Vec2::new(start_x, start_y));
        let before = sim.ball().pos;
        if sim.tick(v) == TickOutcome::Blocked {
            prop_assert_eq!(sim.ball().pos, before);
        }
    }

    #[test]
    fn won_game_ignores_ticks(velocities in prop::collection::vec(velocity(), 1..50)) {
        let mut sim = Simulator::default();
        sim.place_ball(Vec2::new(745.0, 770.0));
        prop_assert_eq!(sim.tick(Vec2::ZERO), TickOutcome::Won);
        for v in velocities {
            prop_assert_eq!(sim.tick(v), TickOutcome::Idle);
            prop_assert!(sim.has_won());
            prop_assert_eq!(sim.ball().pos, Vec2::new(745.0, 770.0));
        }
    }

    #[test]
    fn dead_zone_and_gain(rx in -1.0f32..1.0, ry in -1.0f32..1.0, rz in -1.0f32..1.0) {
        let v = map_sample(InputSample::new(rx, ry, rz), 0.05, 10.0);
        if rx.abs() <= 0.05 {
            prop_assert_eq!(v.y, 0.0);
        } else {
            prop_assert_eq!(v.y, rx * 10.0);
        }
        if ry.abs() <= 0.05 {
            prop_assert_eq!(v.x, 0.0);
        } else {
            prop_assert_eq!(v.x, -ry * 10.0);
        }
    }

    #[test]
    fn malformed_samples_never_corrupt_state(
        samples in prop::collection::vec((any_f32(), any_f32(), any_f32()), 1..100),
    ) {
        let mut session = GameSession::default();
        for (rx, ry, rz) in samples {
            session.on_input_sample(InputSample::new(rx, ry, rz));
            session.tick();
            let snap = session.snapshot();
            prop_assert!(snap.ball_x.is_finite() && snap.ball_y.is_finite());
        }
    }

    #[test]
    fn step_and_simulator_agree(velocities in prop::collection::vec(velocity(), 1..100)) {
        let arena = Arena::default();
        let mut sim = Simulator::new(arena.clone());
        let mut ball = *sim.ball();
        for v in velocities {
            let a = sim.tick(v);
            let b = step(&mut ball, &arena, v, CollisionMode::Freeze);
            prop_assert_eq!(a, b);
            prop_assert_eq!(*sim.ball(), ball);
        }
    }
}

#[test]
fn reset_is_idempotent() {
    let mut session = GameSession::default();
    session.on_input_sample(InputSample::new(1.5, -0.7, 0.0));
    for _ in 0..20 {
        session.tick();
    }

    session.reset();
    let once = (session.snapshot(), *session.simulator().ball(), session.command_velocity());
    session.reset();
    let twice = (session.snapshot(), *session.simulator().ball(), session.command_velocity());

    assert_eq!(once, twice);
    assert_eq!(once.1.pos, Vec2::new(120.0, 40.0));
    assert_eq!(once.1.vel, Vec2::ZERO);
    assert!(!once.0.has_won);
}

#[test]
fn scenario_free_move_right() {
    let wall = Rect::new(220.0, 20.0, 780.0, 700.0).unwrap();
    let arena = Arena::unframed(800.0, 1200.0, [wall], goal()).unwrap();
    let mut sim = Simulator::new(arena);
    assert_eq!(sim.tick(Vec2::new(50.0, 0.0)), TickOutcome::Moved);
    assert_eq!(sim.ball().pos, Vec2::new(170.0, 40.0));
    assert!(!sim.has_won());
}

#[test]
fn scenario_goal_counts_after_rejected_move() {
    let mut session = GameSession::default();
    session.simulator_mut().place_ball(Vec2::new(760.0, 780.0));
    session.on_input_sample(InputSample::new(0.0, -3.0, 0.0));
    session.tick();
    assert!(session.snapshot().has_won);
    assert_eq!(session.snapshot().ball_x, 760.0);
}

#[test]
fn scenario_sample_mapping() {
    let v = InputMapper::default().map(InputSample::new(0.02, 0.2, 0.0));
    assert!((v.x + 2.0).abs() < 1e-6);
    assert_eq!(v.y, 0.0);
}
