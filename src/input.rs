use crate::basic::Turn;

/// Edge-triggered turn flags, set by the host's key events and drained by
/// the simulation exactly once per tick.
#[derive(Default)]
pub struct InputLatch {
    left: bool,
    right: bool,
    /// When set, the next press is swallowed. Armed after a UI action
    /// whose activating event would otherwise leak into the game.
    ignore_one: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_left(&mut self) {
        if !self.swallow() {
            self.left = true;
        }
    }

    pub fn press_right(&mut self) {
        if !self.swallow() {
            self.right = true;
        }
    }

    /// Arm the latch to discard the next press.
    pub fn ignore_next(&mut self) {
        self.ignore_one = true;
    }

    fn swallow(&mut self) -> bool {
        let ignore = self.ignore_one;
        self.ignore_one = false;
        ignore
    }

    /// Drain the pending turns in application order and clear both flags.
    /// With both flags set the right turn comes out last and wins the
    /// snake's one-per-tick buffer.
    pub fn take(&mut self) -> impl Iterator<Item = Turn> {
        let turns = [
            self.left.then_some(Turn::Left),
            self.right.then_some(Turn::Right),
        ];
        self.left = false;
        self.right = false;
        turns.into_iter().flatten()
    }
}
