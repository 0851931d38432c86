use glam::Vec2;
use proptest::prelude::*;
use trail_pong::consts::FRAME_MS;
use trail_pong::sim::{Bounds, GameEvent, GameState, Side, TickInput, respawn_ball, tick};
use trail_pong::Tuning;

const FIELD: Bounds = Bounds {
    width: 1024.0,
    height: 768.0,
};

fn new_game(seed: u64) -> GameState {
    GameState::new(seed, FIELD, Tuning::default())
}

/// Place the ball so that after this frame's integration it sits at `pos`
fn arrive_at(state: &mut GameState, pos: Vec2, vel: Vec2) {
    state.ball.vel = vel;
    state.ball.pos = pos - vel;
}

#[test]
fn test_ball_past_right_buffer_scores_for_player() {
    let mut state = new_game(11);
    let r = state.ball.radius;
    arrive_at(&mut state, Vec2::new(FIELD.width + r + 151.0, 400.0), Vec2::new(9.0, 4.0));

    tick(&mut state, &TickInput::default(), FIELD, FRAME_MS);

    assert_eq!(state.player.score, 1);
    assert_eq!(state.bot.score, 0);
    assert_eq!(state.ball.pos.x, FIELD.width - 150.0);
    assert!(state.ball.vel.x < 0.0);
}

#[test]
fn test_ball_past_left_buffer_scores_for_bot() {
    let mut state = new_game(11);
    let r = state.ball.radius;
    arrive_at(&mut state, Vec2::new(-r - 151.0, 400.0), Vec2::new(-9.0, 4.0));

    tick(&mut state, &TickInput::default(), FIELD, FRAME_MS);

    assert_eq!(state.bot.score, 1);
    assert_eq!(state.ball.pos.x, 150.0);
    let events = state.drain_events();
    let exits = events
        .iter()
        .filter(|e| **e == GameEvent::BallExited { side: Side::Left })
        .count();
    assert_eq!(exits, 1);
}

#[test]
fn test_player_cannot_leave_top() {
    let mut state = new_game(11);
    state.player.pos.y = 0.0;
    for _ in 0..5 {
        tick(&mut state, &TickInput { up: true, down: false }, FIELD, FRAME_MS);
        assert_eq!(state.player.pos.y, 0.0);
    }
}

#[test]
fn test_ball_tangent_to_bottom_flips() {
    let mut state = new_game(11);
    let r = state.ball.radius;
    arrive_at(&mut state, Vec2::new(500.0, FIELD.height - r), Vec2::new(6.0, 5.0));

    tick(&mut state, &TickInput::default(), FIELD, FRAME_MS);

    assert_eq!(state.ball.vel.y, -5.0);
}

#[test]
fn test_two_respawns_restore_direction() {
    let mut state = new_game(11);
    state.ball.vel = Vec2::new(7.0, -3.0);
    let (buffer, margin) = (state.tuning.respawn_buffer, state.tuning.respawn_y_margin);

    respawn_ball(&mut state.ball, FIELD, buffer, margin, &mut state.rng);
    assert!(state.ball.vel.x < 0.0);
    respawn_ball(&mut state.ball, FIELD, buffer, margin, &mut state.rng);
    assert_eq!(state.ball.vel, Vec2::new(7.0, -3.0));
}

#[test]
fn test_long_match_is_reproducible() {
    let play = |seed| {
        let mut state = new_game(seed);
        for i in 0..5_000u32 {
            let input = TickInput {
                up: i % 90 < 30,
                down: i % 90 >= 60,
            };
            tick(&mut state, &input, FIELD, FRAME_MS);
        }
        (state.player.score, state.bot.score, state.ball.pos)
    };
    assert_eq!(play(2024), play(2024));
}

proptest! {
    #[test]
    fn prop_ball_integrates_velocity(
        x in 200.0f32..800.0,
        y in 100.0f32..600.0,
        vx in -10.0f32..10.0,
        vy in -10.0f32..10.0,
    ) {
        let mut state = new_game(1);
        state.ball.pos = Vec2::new(x, y);
        state.ball.vel = Vec2::new(vx, vy);
        let mut ball = state.ball.clone();

        ball.update();

        prop_assert_eq!(ball.pos.x, x + vx);
        prop_assert_eq!(ball.pos.y, y + vy);
        prop_assert_eq!(ball.vel, Vec2::new(vx, vy));
    }
}
