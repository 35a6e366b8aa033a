use std::time::Instant;

use crate::game::{Game, State};
use crate::input::InputLatch;
use crate::view::Renderer;

/// Paces the loop the way an animation callback would: block until the
/// next frame is due, pump the host's pending key events into the latch,
/// and hand back the frame's timestamp. The simulation core never touches
/// a platform timer itself.
pub trait FrameScheduler {
    /// `None` means the host is shutting down and the loop should stop.
    fn next_frame(&mut self, input: &mut InputLatch) -> Option<Instant>;
}

/// Drive a game to completion: exactly one `frame` and one draw per
/// scheduler callback. The final, dead state is drawn before returning.
pub fn run(game: &mut Game, scheduler: &mut impl FrameScheduler, renderer: &mut impl Renderer) {
    while let Some(now) = scheduler.next_frame(game.input_mut()) {
        if game.state() == State::Idle {
            game.start(now);
        }

        let state = game.frame(now);
        renderer.draw(&game.view());

        if state == State::GameOver {
            break;
        }
    }
}
