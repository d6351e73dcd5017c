//! Frame tick
//!
//! Core game loop step: paddles, ball, collisions, goals. Runs once per
//! displayed frame.

use serde::{Deserialize, Serialize};

use super::collision::resolve_paddle_hit;
use super::physics::PaddleCommand;
use super::state::{GameEvent, GameState, Side};

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: PaddleCommand,
    pub right: PaddleCommand,
    /// Quit requested (escape)
    pub quit: bool,
}

/// Per-frame context threaded through `tick`
///
/// The input snapshot goes in; the frame's events and the close request
/// come out.
#[derive(Debug, Clone, Default)]
pub struct FrameContext {
    pub input: TickInput,
    pub events: Vec<GameEvent>,
    pub should_close: bool,
}

impl FrameContext {
    pub fn new(input: TickInput) -> Self {
        Self {
            input,
            events: Vec::new(),
            should_close: false,
        }
    }

    /// Reuse the context for the next frame
    pub fn begin(&mut self, input: TickInput) {
        self.input = input;
        self.events.clear();
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, ctx: &mut FrameContext) {
    if ctx.input.quit && !ctx.should_close {
        log::info!("Quit requested at frame {}", state.frame);
        ctx.should_close = true;
    }

    state.frame += 1;

    // Paddles
    for (side, command) in [(Side::Left, ctx.input.left), (Side::Right, ctx.input.right)] {
        state.paddle_mut(side).apply(command);
    }

    // Ball
    if let Some(wall) = state.ball.advance(state.config.field_half_height) {
        log::debug!("Frame {}: wall bounce ({:?})", state.frame, wall);
        ctx.events.push(GameEvent::WallBounce);
    }

    // Ball vs paddles
    let GameState {
        ball,
        left,
        right,
        frame,
        ..
    } = &mut *state;
    for (side, paddle) in [(Side::Left, &*left), (Side::Right, &*right)] {
        if let Some(contact) = resolve_paddle_hit(ball, paddle) {
            log::debug!(
                "Frame {}: {} paddle hit on {:?} face, ball snapped to x={:.3}",
                frame,
                side.as_str(),
                contact.face,
                contact.snapped_x
            );
            ctx.events.push(GameEvent::PaddleHit { side });
        }
    }

    // Goals
    if let Some(conceded) = state.ball.crossed_goal(state.config.x_limit) {
        let scorer = state.score.on_goal(conceded);
        state.ball.serve();
        log::info!(
            "Goal for {} at frame {} ({} - {})",
            scorer.as_str(),
            state.frame,
            state.score.left,
            state.score.right
        );
        ctx.events.push(GameEvent::Goal {
            scorer,
            left: state.score.left,
            right: state.score.right,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MatchSettings;
    use glam::DVec2;

    fn state() -> GameState {
        GameState::new(&MatchSettings::default())
    }

    #[test]
    fn test_tick_moves_paddles_and_ball() {
        let mut state = state();
        let mut ctx = FrameContext::new(TickInput {
            left: PaddleCommand::Up,
            right: PaddleCommand::Down,
            quit: false,
        });
        let start = state.ball.position();

        tick(&mut state, &mut ctx);

        assert_eq!(state.frame, 1);
        assert!(state.left.y() > 0.0);
        assert!(state.right.y() < 0.0);
        assert!(state.ball.position() != start);
        assert!(!ctx.should_close);
    }

    #[test]
    fn test_tick_quit_sets_should_close() {
        let mut state = state();
        let mut ctx = FrameContext::new(TickInput {
            quit: true,
            ..Default::default()
        });
        tick(&mut state, &mut ctx);
        assert!(ctx.should_close);

        // Stays set once requested
        ctx.begin(TickInput::default());
        tick(&mut state, &mut ctx);
        assert!(ctx.should_close);
    }

    #[test]
    fn test_tick_reports_paddle_hit() {
        let mut state = state();
        // Ball just left of the right paddle, heading into it
        state.ball.body.set_position(DVec2::new(0.87, 0.0));
        state.ball.direction = DVec2::new(1.0, 0.0);

        let mut ctx = FrameContext::default();
        tick(&mut state, &mut ctx);

        assert_eq!(ctx.events, vec![GameEvent::PaddleHit { side: Side::Right }]);
        assert_eq!(state.ball.direction.x, -1.0);
        let flush = state.right.body.position().x
            - state.right.body.half_extent().x
            - state.ball.body.half_extent().x;
        assert!((state.ball.position().x - flush).abs() < 1e-12);
    }

    #[test]
    fn test_tick_reports_wall_bounce() {
        let mut state = state();
        state.ball.body.set_position(DVec2::new(0.0, 0.89));
        state.ball.direction = DVec2::new(0.0, 1.0);

        let mut ctx = FrameContext::default();
        tick(&mut state, &mut ctx);

        assert_eq!(ctx.events, vec![GameEvent::WallBounce]);
        assert_eq!(state.ball.direction.y, -1.0);
    }

    #[test]
    fn test_tick_goal_for_right_player() {
        let mut state = state();
        // Paddles out of the ball's lane
        state.left.move_by(1.0);
        state.right.move_by(1.0);
        state.ball.body.set_position(DVec2::new(-1.39, 0.0));
        state.ball.direction = DVec2::new(-1.0, 0.0);

        let mut ctx = FrameContext::default();
        tick(&mut state, &mut ctx);

        assert_eq!(
            ctx.events,
            vec![GameEvent::Goal {
                scorer: Side::Right,
                left: 0,
                right: 1
            }]
        );
        assert_eq!(state.ball.position(), DVec2::ZERO);
        assert_eq!(state.ball.direction.x, 1.0);
    }

    #[test]
    fn test_determinism() {
        let mut a = state();
        let mut b = state();
        let inputs = [
            TickInput {
                left: PaddleCommand::Up,
                ..Default::default()
            },
            TickInput {
                right: PaddleCommand::Down,
                ..Default::default()
            },
            TickInput::default(),
        ];

        let mut ctx_a = FrameContext::default();
        let mut ctx_b = FrameContext::default();
        for i in 0..500 {
            let input = inputs[i % inputs.len()];
            ctx_a.begin(input);
            ctx_b.begin(input);
            tick(&mut a, &mut ctx_a);
            tick(&mut b, &mut ctx_b);
            assert_eq!(ctx_a.events, ctx_b.events);
        }

        assert_eq!(a.ball.position(), b.ball.position());
        assert_eq!(a.ball.direction, b.ball.direction);
        assert_eq!(a.score, b.score);
        assert_eq!(a.left.y(), b.left.y());
    }
}
