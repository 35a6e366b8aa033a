use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use static_assertions::assert_impl_all;
use tracing::{info, warn};

use crate::basic::{Dir, Vector};
use crate::board::{Board, Map};
use crate::error::ErrorConversion;
use crate::food::{spawn, Food, FoodCatalog, PowerUp};
use crate::input::InputLatch;
use crate::score::ScoreStore;
use crate::snake::Snake;
use crate::view::{FoodView, FrameView};

pub use rules::Rules;
pub use run::{run, FrameScheduler};

mod rules;
mod run;


#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    /// Constructed but not started.
    Idle,
    Running,
    /// Terminal, no further ticks accepted.
    GameOver,
}

/// Report produced by the death transition.
#[derive(Copy, Clone, Debug)]
pub struct Outcome {
    /// Final score, floored to a whole number.
    pub score: u64,
    /// Best score on record before this session.
    pub previous_best: u64,
    pub beaten: bool,
}

/// Aggregate root of one play session. Owns the board, the snake, the
/// live food collection and the input latch; everything is mutated inside
/// `update` only, so a frame always renders a settled state.
pub struct Game {
    map_name: &'static str,
    board: Board,
    snake: Snake,
    foods: Vec<Food>,

    catalog: FoodCatalog,
    rules: Rules,
    input: InputLatch,

    state: State,
    hunger: f64,
    score: f64,
    /// Wall-clock interval between simulation steps, adapted to snake
    /// length after every step.
    tick_speed: Duration,
    last_tick: Option<Instant>,

    rng: SmallRng,
    store: Box<dyn ScoreStore + Send>,
    outcome: Option<Outcome>,
}

// the host may drive the loop from a worker thread
assert_impl_all!(Game: Send);

impl Game {
    pub fn new(
        map: &Map,
        catalog: FoodCatalog,
        rules: Rules,
        store: Box<dyn ScoreStore + Send>,
    ) -> Self {
        let mut board = Board::new(map);
        let dim = board.dim();
        assert!(
            (rules.initial_len as isize) < dim.x / 2,
            "initial snake does not fit on map {}",
            map.name
        );

        let head = Vector::new(dim.x / 2 - 1, dim.y / 2);
        let snake = Snake::new(head, Dir::R, rules.initial_len);
        for &cell in &snake.segments {
            board.set_occupied(cell, true);
        }

        let tick_speed = Duration::from_secs_f64(rules.base_tick_ms / 1e3);

        Self {
            map_name: map.name,
            board,
            snake,
            foods: vec![],

            catalog,
            rules,
            input: InputLatch::new(),

            state: State::Idle,
            hunger: 0.,
            score: 0.,
            tick_speed,
            last_tick: None,

            rng: SmallRng::from_entropy(),
            store,
            outcome: None,
        }
    }

    /// Begin the session: seed one base food, reset hunger and record the
    /// tick origin. Frames before `start` are ignored.
    pub fn start(&mut self, now: Instant) {
        assert_eq!(self.state, State::Idle, "game already started");

        if let Some(food) = spawn::place_food(&mut self.board, FoodCatalog::BASE, now, &mut self.rng)
        {
            self.foods.push(food);
        }
        self.hunger = 0.;
        self.last_tick = Some(now);
        self.state = State::Running;
        info!(map = self.map_name, "game started");
    }

    /// One animation-frame callback: accrue hunger from the wall clock and
    /// perform at most one simulation step if the tick interval has
    /// elapsed. Rendering happens outside, after this returns.
    pub fn frame(&mut self, now: Instant) -> State {
        if self.state != State::Running {
            return self.state;
        }
        let last_tick = match self.last_tick {
            Some(t) => t,
            None => return self.state,
        };

        // hunger rises continuously, not just on tick boundaries
        let elapsed = now - last_tick;
        let elapsed_ms = elapsed.as_secs_f64() * 1e3;
        self.hunger = (self.hunger + elapsed_ms * self.rules.hunger_per_ms).min(1.);

        if elapsed > self.tick_speed {
            // advance by the full elapsed amount; a long stall yields one
            // step, not a catch-up burst
            self.last_tick = Some(last_tick + elapsed);
            self.update(now);
        }

        self.state
    }

    /// One discrete simulation step.
    fn update(&mut self, now: Instant) {
        // consume input
        let turns = self.input.take();
        for turn in turns {
            self.snake.turn(turn);
        }

        self.snake.tick_show(self.tick_speed);

        // drop expired food, freeing the cells it sat on
        let catalog = &self.catalog;
        let board = &mut self.board;
        self.foods.retain(|food| {
            if food.is_expired(catalog.get(food.kind), now) {
                board.set_occupied(food.pos, false);
                return false;
            }
            true
        });

        // eat whatever sits on the prospective next head
        let next_head = self.snake.next_head(&self.board);
        if let Some(idx) = self.foods.iter().position(|food| food.pos == next_head) {
            let food = self.foods.remove(idx);
            self.eat(food, now);
        }

        spawn::spawn_pass(&mut self.board, &mut self.foods, &self.catalog, now, &mut self.rng);

        let pre_len = self.snake.len();
        let (head, vacated) = self.snake.advance(&self.board);

        if self.starved()
            || self.snake.count(head) > 1
            || !self.board.is_within(head)
            || self.board.is_obstacle(head)
        {
            self.snake.kill();
            self.game_over();
            return;
        }

        // survival bookkeeping
        if let Some(tail) = vacated {
            self.board.set_occupied(tail, false);
        }
        self.board.set_occupied(head, true);

        let len = self.snake.len() as f64;
        let raw_ms = (self.rules.base_tick_ms - self.rules.tick_ms_per_segment * len)
            .max(self.rules.min_tick_ms);
        self.tick_speed = Duration::from_secs_f64(raw_ms * self.snake.speed_modifier / 1e3);

        self.score += (1. - self.hunger) * pre_len as f64;
    }

    /// Consume one food item at the prospective head. The cell stays
    /// occupied, the head moves into it on this very tick.
    fn eat(&mut self, food: Food, now: Instant) {
        let ty = self.catalog.get(food.kind);
        let severed = self.snake.consume(ty, &self.rules);
        for cell in severed {
            self.board.set_occupied(cell, false);
        }

        self.hunger = (self.hunger - ty.hunger_relief).max(0.);

        if ty.has_power_up(PowerUp::FoodFrenzy) {
            self.spawn_frenzy(now);
        }

        // eating the base type respawns one to keep a baseline density
        if food.kind == FoodCatalog::BASE {
            if let Some(new) =
                spawn::place_food(&mut self.board, FoodCatalog::BASE, now, &mut self.rng)
            {
                self.foods.push(new);
            }
        }
    }

    fn spawn_frenzy(&mut self, now: Instant) {
        for _ in 0..self.rules.frenzy_spawns {
            let kind = match spawn::frenzy_kind(&self.catalog, &mut self.rng) {
                Some(kind) => kind,
                None => return,
            };
            match spawn::place_food(&mut self.board, kind, now, &mut self.rng) {
                Some(food) => self.foods.push(food),
                None => return,
            }
        }
    }

    fn starved(&self) -> bool {
        self.hunger > 1. - self.rules.starve_epsilon
    }

    fn game_over(&mut self) {
        let previous_best = match self.store.best().with_trace_step("reading high score") {
            Ok(best) => best,
            Err(err) => {
                warn!(%err, "high score unavailable, assuming 0");
                0
            }
        };

        let score = self.score.floor() as u64;
        let beaten = score > previous_best;
        if beaten {
            if let Err(err) = self.store.record(score).with_trace_step("saving high score") {
                warn!(%err, "failed to save high score");
            }
        }

        info!(map = self.map_name, score, previous_best, beaten, "game over");
        self.outcome = Some(Outcome { score, previous_best, beaten });
        self.state = State::GameOver;
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Set once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn input_mut(&mut self) -> &mut InputLatch {
        &mut self.input
    }

    /// Snapshot for the renderer, immutable for the rest of the frame.
    pub fn view(&self) -> FrameView<'_> {
        let foods = self
            .foods
            .iter()
            .map(|food| {
                let ty = self.catalog.get(food.kind);
                FoodView {
                    pos: food.pos,
                    hue: ty.hue,
                    power_up: !ty.power_ups.is_empty(),
                }
            })
            .collect();

        FrameView {
            board: &self.board,
            segments: &self.snake.segments,
            alive: self.snake.alive,
            show: self.snake.show_timer,
            foods,
            hunger: self.hunger,
            score: self.score,
        }
    }
}
