use std::collections::VecDeque;
use std::time::Duration;

use crate::basic::Vector;
use crate::board::Board;

/// One live food item as the renderer sees it.
#[derive(Copy, Clone, Debug)]
pub struct FoodView {
    pub pos: Vector,
    /// Color hue in degrees, cosmetic only.
    pub hue: u16,
    /// Whether eating this item triggers any power-up effect.
    pub power_up: bool,
}

/// Read-only snapshot of the simulation, handed to the renderer once per
/// animation frame. Nothing in here feeds back into the game.
pub struct FrameView<'a> {
    pub board: &'a Board,
    /// Body cells in order, head first.
    pub segments: &'a VecDeque<Vector>,
    pub alive: bool,
    /// While nonzero the snake is drawn at full visibility instead of
    /// following the hunger pulse.
    pub show: Duration,
    pub foods: Vec<FoodView>,
    /// 0 is sated, 1 is starved.
    pub hunger: f64,
    pub score: f64,
}

/// External drawing collaborator. Called every frame, after at most one
/// simulation step, so it always observes a settled state.
pub trait Renderer {
    fn draw(&mut self, frame: &FrameView<'_>);
}
