//! Simulation core for a hunger-driven snake arcade game.
//!
//! The crate owns the tick loop, the board, the snake, and the food
//! catalog; rendering, key events, and frame scheduling are supplied by
//! the embedding application through the [`view::Renderer`],
//! [`input::InputLatch`], and [`game::FrameScheduler`] seams.

#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;

pub mod basic;
pub mod board;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod score;
pub mod snake;
pub mod view;

pub use crate::basic::{BoardDim, Dir, Turn, Vector};
pub use crate::board::{map, Board, EdgePolicy, Map};
pub use crate::error::{Error, ErrorConversion, Result};
pub use crate::food::{Food, FoodCatalog, FoodType, PowerUp};
pub use crate::game::{run, FrameScheduler, Game, Outcome, Rules, State};
pub use crate::input::InputLatch;
pub use crate::score::{JsonScoreStore, MemoryScoreStore, ScoreStore};
pub use crate::snake::Snake;
pub use crate::view::{FoodView, FrameView, Renderer};
