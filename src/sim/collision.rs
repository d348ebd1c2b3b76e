//! Collision detection and response for the rectangular field
//!
//! Every response is a sign flip on one velocity component; speed is never
//! rescaled. Horizontal rules form a priority cascade (paddle, exit, far wall)
//! and the vertical wall rule is evaluated on its own.

use super::state::{Ball, GameState, Side};
use crate::settings::{CascadeMode, GameConfig};

/// Something the ball touched during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Bounced off the paddle defending this side
    Paddle(Side),
    /// Bounced off the far (right) wall
    FarWall,
    TopWall,
    BottomWall,
    /// Left the field past this side's edge - game over
    Exit(Side),
}

impl Contact {
    pub fn is_exit(&self) -> bool {
        matches!(self, Contact::Exit(_))
    }
}

/// Inputs to one horizontal cascade pass
#[derive(Debug, Clone, Copy)]
pub struct PassContext {
    /// Paddle center y to test against
    pub paddle_y: f32,
    /// Inclusive x range where a paddle hit is possible
    pub band: (f32, f32),
    /// The ball must be moving toward this side for a paddle hit
    pub toward: Side,
    /// Edge whose crossing ends the game
    pub exit: Side,
    /// Whether the far wall bounce is part of this pass
    pub far_wall: bool,
}

/// Paddle hit test: inside the band, within half a paddle vertically, and
/// heading toward the paddle
pub fn paddle_hit(ball: &Ball, ctx: &PassContext, config: &GameConfig) -> bool {
    let y_diff = (ctx.paddle_y - ball.pos.y).abs();
    let (near, far) = ctx.band;
    let approaching = match ctx.toward {
        Side::Left => ball.vel.x < 0.0,
        Side::Right => ball.vel.x > 0.0,
    };
    y_diff <= config.paddle_half_height() && near <= ball.pos.x && ball.pos.x <= far && approaching
}

/// Whether the ball is past the given edge of the field
pub fn exited(ball: &Ball, side: Side, config: &GameConfig) -> bool {
    match side {
        Side::Left => ball.pos.x <= 0.0,
        Side::Right => ball.pos.x >= config.field_width,
    }
}

/// Far wall contact: at or beyond the wall face and moving into it
pub fn far_wall_hit(ball: &Ball, config: &GameConfig) -> bool {
    ball.pos.x >= config.field_width - config.thickness && ball.vel.x > 0.0
}

/// Run the horizontal cascade once. At most one rule fires.
pub fn horizontal_pass(ball: &mut Ball, ctx: &PassContext, config: &GameConfig) -> Option<Contact> {
    if paddle_hit(ball, ctx, config) {
        ball.vel.x = -ball.vel.x;
        Some(Contact::Paddle(ctx.toward))
    } else if exited(ball, ctx.exit, config) {
        Some(Contact::Exit(ctx.exit))
    } else if ctx.far_wall && far_wall_hit(ball, config) {
        ball.vel.x = -ball.vel.x;
        Some(Contact::FarWall)
    } else {
        None
    }
}

/// Top/bottom wall bounce
pub fn vertical_pass(ball: &mut Ball, config: &GameConfig) -> Option<Contact> {
    if ball.pos.y <= config.thickness && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        Some(Contact::TopWall)
    } else if ball.pos.y >= config.field_height - config.thickness && ball.vel.y > 0.0 {
        ball.vel.y = -ball.vel.y;
        Some(Contact::BottomWall)
    } else {
        None
    }
}

/// Resolve all collisions for the current ball position.
///
/// Clears `state.running` on an exit. Returns the contacts in the order they
/// fired.
pub fn resolve(state: &mut GameState, config: &GameConfig) -> Vec<Contact> {
    let mut contacts = Vec::new();
    let left_band = state.left.hit_band(config);

    match config.cascade {
        CascadeMode::Classic => {
            // Second pass reuses the left band; only the tested height changes.
            let second_y = state
                .right
                .as_ref()
                .map_or(state.left.pos.y, |right| right.pos.y);
            for paddle_y in [state.left.pos.y, second_y] {
                let ctx = PassContext {
                    paddle_y,
                    band: left_band,
                    toward: Side::Left,
                    exit: Side::Left,
                    far_wall: true,
                };
                contacts.extend(horizontal_pass(&mut state.ball, &ctx, config));
                contacts.extend(vertical_pass(&mut state.ball, config));
            }
        }
        CascadeMode::PerPaddle => {
            let left = PassContext {
                paddle_y: state.left.pos.y,
                band: left_band,
                toward: Side::Left,
                exit: Side::Left,
                far_wall: state.right.is_none(),
            };
            contacts.extend(horizontal_pass(&mut state.ball, &left, config));

            if let Some(right) = &state.right {
                let ctx = PassContext {
                    paddle_y: right.pos.y,
                    band: right.hit_band(config),
                    toward: Side::Right,
                    exit: Side::Right,
                    far_wall: false,
                };
                contacts.extend(horizontal_pass(&mut state.ball, &ctx, config));
            }

            contacts.extend(vertical_pass(&mut state.ball, config));
        }
    }

    if contacts.iter().any(Contact::is_exit) {
        state.running = false;
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn state_with_ball(config: &GameConfig, pos: Vec2, vel: Vec2) -> GameState {
        let mut state = GameState::new(config);
        state.ball = Ball::new(pos, vel);
        state
    }

    #[test]
    fn test_left_paddle_hit_flips_vx() {
        let config = GameConfig::default();
        let mut state = state_with_ball(&config, Vec2::new(22.0, 384.0), Vec2::new(-50.0, 10.0));
        let contacts = resolve(&mut state, &config);
        assert_eq!(contacts, vec![Contact::Paddle(Side::Left)]);
        assert_eq!(state.ball.vel, Vec2::new(50.0, 10.0));
        assert!(state.running);
    }

    #[test]
    fn test_paddle_band_edges_are_inclusive() {
        let config = GameConfig::default();
        for x in [20.0, 25.0] {
            let mut state = state_with_ball(&config, Vec2::new(x, 384.0), Vec2::new(-1.0, 0.0));
            resolve(&mut state, &config);
            assert_eq!(state.ball.vel.x, 1.0, "x = {x}");
        }
        let mut state = state_with_ball(&config, Vec2::new(25.5, 384.0), Vec2::new(-1.0, 0.0));
        resolve(&mut state, &config);
        assert_eq!(state.ball.vel.x, -1.0);
    }

    #[test]
    fn test_paddle_miss_when_too_far_vertically() {
        let config = GameConfig::default();
        let y = 384.0 + config.paddle_half_height() + 1.0;
        let mut state = state_with_ball(&config, Vec2::new(22.0, y), Vec2::new(-50.0, 0.0));
        assert!(resolve(&mut state, &config).is_empty());
        assert_eq!(state.ball.vel.x, -50.0);
    }

    #[test]
    fn test_ball_moving_away_is_not_hit() {
        let config = GameConfig::default();
        let mut state = state_with_ball(&config, Vec2::new(22.0, 384.0), Vec2::new(50.0, 0.0));
        assert!(resolve(&mut state, &config).is_empty());
        assert_eq!(state.ball.vel.x, 50.0);
    }

    #[test]
    fn test_exit_left_ends_game() {
        let config = GameConfig::default();
        let mut state = state_with_ball(&config, Vec2::new(-1.0, 50.0), Vec2::new(-200.0, 5.0));
        let contacts = resolve(&mut state, &config);
        assert!(contacts.contains(&Contact::Exit(Side::Left)));
        assert!(!state.running);
    }

    #[test]
    fn test_far_wall_bounce() {
        let config = GameConfig::default();
        let mut state = state_with_ball(&config, Vec2::new(1010.0, 300.0), Vec2::new(200.0, 0.0));
        let contacts = resolve(&mut state, &config);
        assert_eq!(contacts, vec![Contact::FarWall]);
        assert_eq!(state.ball.vel.x, -200.0);
    }

    #[test]
    fn test_top_and_bottom_walls() {
        let config = GameConfig::default();
        let mut state = state_with_ball(&config, Vec2::new(500.0, 10.0), Vec2::new(0.0, -20.0));
        assert_eq!(resolve(&mut state, &config), vec![Contact::TopWall]);
        assert_eq!(state.ball.vel.y, 20.0);

        let mut state = state_with_ball(&config, Vec2::new(500.0, 760.0), Vec2::new(0.0, 20.0));
        assert_eq!(resolve(&mut state, &config), vec![Contact::BottomWall]);
        assert_eq!(state.ball.vel.y, -20.0);
    }

    #[test]
    fn test_ball_exactly_on_boundaries_same_in_both_modes() {
        for cascade in [CascadeMode::Classic, CascadeMode::PerPaddle] {
            let config = GameConfig::single_player().with_cascade(cascade);

            let mut state = state_with_ball(&config, Vec2::new(0.0, 300.0), Vec2::new(-1.0, 0.0));
            resolve(&mut state, &config);
            assert!(!state.running, "{cascade:?}: x == 0 is an exit");

            let mut state = state_with_ball(&config, Vec2::new(500.0, 15.0), Vec2::new(0.0, -3.0));
            let contacts = resolve(&mut state, &config);
            assert_eq!(contacts, vec![Contact::TopWall], "{cascade:?}: flips once");
            assert_eq!(state.ball.vel.y, 3.0);

            let mut state =
                state_with_ball(&config, Vec2::new(1009.0, 300.0), Vec2::new(4.0, 0.0));
            assert_eq!(resolve(&mut state, &config), vec![Contact::FarWall]);
            assert_eq!(state.ball.vel.x, -4.0);
        }
    }

    #[test]
    fn test_classic_second_pass_uses_right_paddle_height() {
        // Ball sits in the left band but level with the right paddle only.
        let config = GameConfig::two_player().with_cascade(CascadeMode::Classic);
        let mut state = state_with_ball(&config, Vec2::new(22.0, 650.0), Vec2::new(-50.0, 0.0));
        state.left.pos.y = 100.0;
        state.right.as_mut().unwrap().pos.y = 650.0;

        let contacts = resolve(&mut state, &config);
        assert_eq!(contacts, vec![Contact::Paddle(Side::Left)]);
        assert_eq!(state.ball.vel.x, 50.0);
        assert!(state.running);
    }

    #[test]
    fn test_per_paddle_ignores_right_height_on_left_side() {
        let config = GameConfig::two_player().with_cascade(CascadeMode::PerPaddle);
        let mut state = state_with_ball(&config, Vec2::new(22.0, 650.0), Vec2::new(-50.0, 0.0));
        state.left.pos.y = 100.0;
        state.right.as_mut().unwrap().pos.y = 650.0;

        assert!(resolve(&mut state, &config).is_empty());
        assert_eq!(state.ball.vel.x, -50.0);
    }

    #[test]
    fn test_per_paddle_right_paddle_returns_ball() {
        let config = GameConfig::two_player().with_cascade(CascadeMode::PerPaddle);
        let mut state = state_with_ball(&config, Vec2::new(1002.0, 384.0), Vec2::new(80.0, 0.0));
        let contacts = resolve(&mut state, &config);
        assert_eq!(contacts, vec![Contact::Paddle(Side::Right)]);
        assert_eq!(state.ball.vel.x, -80.0);
    }

    #[test]
    fn test_per_paddle_right_exit_ends_two_player_game() {
        let config = GameConfig::two_player().with_cascade(CascadeMode::PerPaddle);
        let mut state = state_with_ball(&config, Vec2::new(1024.0, 100.0), Vec2::new(80.0, 0.0));
        let contacts = resolve(&mut state, &config);
        assert_eq!(contacts, vec![Contact::Exit(Side::Right)]);
        assert!(!state.running);
    }

    #[test]
    fn test_classic_two_player_still_bounces_off_far_side() {
        let config = GameConfig::two_player().with_cascade(CascadeMode::Classic);
        let mut state = state_with_ball(&config, Vec2::new(1024.0, 100.0), Vec2::new(80.0, 0.0));
        let contacts = resolve(&mut state, &config);
        assert_eq!(contacts, vec![Contact::FarWall]);
        assert!(state.running);
    }

    #[test]
    fn test_bounces_preserve_speed() {
        let config = GameConfig::default();
        let cases = [
            (Vec2::new(22.0, 384.0), Vec2::new(-120.0, 35.0)),
            (Vec2::new(1012.0, 384.0), Vec2::new(120.0, -35.0)),
            (Vec2::new(400.0, 5.0), Vec2::new(-13.0, -90.0)),
            (Vec2::new(400.0, 763.0), Vec2::new(13.0, 90.0)),
        ];
        for (pos, vel) in cases {
            let mut state = state_with_ball(&config, pos, vel);
            assert!(!resolve(&mut state, &config).is_empty());
            assert_eq!(state.ball.vel.length(), vel.length());
            assert_eq!(state.ball.vel.abs(), vel.abs());
        }
    }
}
