use std::collections::VecDeque;
use std::time::Duration;

use crate::basic::{Dir, Turn, Vector};
use crate::board::Board;
use crate::food::{FoodType, PowerUp};
use crate::game::Rules;

/// The player's snake: a deque of grid cells, head first.
///
/// INVARIANT: `segments` is never empty and consecutive segments are
/// adjacent on the grid (wrap-around aside). The head may coincide with a
/// body cell only on the tick that kills the snake.
pub struct Snake {
    /// Body cells, head at the front.
    pub segments: VecDeque<Vector>,
    /// Direction the snake is currently going.
    pub dir: Dir,
    /// Direction applied at the start of the next advance. Always derived
    /// from `dir`, so within one tick the last turn request wins and two
    /// quick turns can never compound into a reversal.
    pub new_dir: Dir,
    /// Remaining growth credit: while positive, advancing retains the tail.
    pub stomach: usize,
    pub alive: bool,
    /// While positive, the renderer shows the snake at full visibility.
    pub show_timer: Duration,
    /// Multiplicative factor on the tick interval, adjusted by speed food.
    pub speed_modifier: f64,
}

impl Snake {
    /// A straight body of `len` cells, trailing away from `head` opposite
    /// the facing direction. The caller is responsible for the body
    /// fitting on its board.
    pub fn new(head: Vector, dir: Dir, len: usize) -> Self {
        assert!(len >= 1, "snake needs at least one segment");
        let tail_step = (-dir).unit();
        let segments = (0..len as isize).map(|i| head + tail_step * i).collect();

        Self {
            segments,
            dir,
            new_dir: dir,
            stomach: 0,
            alive: true,
            show_timer: Duration::ZERO,
            speed_modifier: 1.,
        }
    }

    pub fn head(&self) -> Vector {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Buffer a relative turn for the next advance.
    pub fn turn(&mut self, turn: Turn) {
        self.new_dir = self.dir + turn;
    }

    /// Where the head will land on the next advance, honoring the buffered
    /// direction and the board's edge policy.
    pub fn next_head(&self, board: &Board) -> Vector {
        board.step(self.head(), self.new_dir)
    }

    /// One step: commit the buffered direction, push the new head, and
    /// either drop the tail (pure translate) or spend one point of stomach
    /// to keep it. Returns the new head and the vacated tail cell, which
    /// is `None` exactly when the snake grew and the old tail stays covered.
    pub fn advance(&mut self, board: &Board) -> (Vector, Option<Vector>) {
        assert!(self.alive, "called advance() on a dead snake");

        self.dir = self.new_dir;
        let new_head = board.step(self.head(), self.dir);
        self.segments.push_front(new_head);

        let dropped = if self.stomach > 0 {
            self.stomach -= 1;
            None
        } else {
            self.segments.pop_back()
        };

        (new_head, dropped)
    }

    /// Apply a food's snake-level effects: growth credit and every power-up
    /// tag except the frenzy, which the owning game fulfills. Returns the
    /// cells freed by a cut-off so the caller can clear their occupancy.
    pub fn consume(&mut self, ty: &FoodType, rules: &Rules) -> Vec<Vector> {
        self.stomach += ty.energy;
        let mut severed = vec![];

        for &power_up in &ty.power_ups {
            match power_up {
                PowerUp::Show => self.show_timer = rules.show_duration,
                // game-level effect, handled by the owner
                PowerUp::FoodFrenzy => {}
                PowerUp::SpeedUp => self.speed_modifier *= rules.speed_up_factor,
                PowerUp::SpeedDown => self.speed_modifier *= rules.slow_down_factor,
                PowerUp::CutOff => {
                    let keep = self.segments.len() / 2 + 1;
                    severed.extend(self.segments.drain(keep..));
                }
            }
        }

        severed
    }

    /// Occurrences of `pos` among the body cells. A count above 1 for the
    /// head means the last advance ran the snake into itself.
    pub fn count(&self, pos: Vector) -> usize {
        self.segments.iter().filter(|&&segment| segment == pos).count()
    }

    /// Wind the visibility timer down by one tick interval.
    pub fn tick_show(&mut self, tick: Duration) {
        self.show_timer = self.show_timer.saturating_sub(tick);
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::map;
    use crate::food::FoodCatalog;

    fn plain_board() -> Board {
        Board::new(&map::plain())
    }

    fn snake_at(x: isize, y: isize, dir: Dir, len: usize) -> Snake {
        Snake::new(Vector::new(x, y), dir, len)
    }

    #[test]
    fn new_lays_a_straight_body() {
        let snake = snake_at(14, 12, Dir::R, 5);
        let body: Vec<_> = snake.segments.iter().copied().collect();
        assert_eq!(
            body,
            vec![
                Vector::new(14, 12),
                Vector::new(13, 12),
                Vector::new(12, 12),
                Vector::new(11, 12),
                Vector::new(10, 12),
            ]
        );
        assert_eq!(snake.stomach, 0);
        assert!(snake.alive);
    }

    #[test]
    fn advance_translates_when_stomach_is_empty() {
        let board = plain_board();
        let mut snake = snake_at(14, 12, Dir::R, 5);
        let old_tail = *snake.segments.back().unwrap();

        let (head, dropped) = snake.advance(&board);

        assert_eq!(head, Vector::new(15, 12));
        assert_eq!(dropped, Some(old_tail));
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.stomach, 0);
    }

    #[test]
    fn advance_grows_while_stomach_holds() {
        let board = plain_board();
        let mut snake = snake_at(14, 12, Dir::R, 5);
        snake.stomach = 2;

        let (_, dropped) = snake.advance(&board);
        assert_eq!(dropped, None);
        assert_eq!(snake.len(), 6);
        assert_eq!(snake.stomach, 1);

        let (_, dropped) = snake.advance(&board);
        assert_eq!(dropped, None);
        assert_eq!(snake.len(), 7);
        assert_eq!(snake.stomach, 0);

        let (_, dropped) = snake.advance(&board);
        assert!(dropped.is_some());
        assert_eq!(snake.len(), 7);
    }

    #[test]
    fn turn_buffer_last_write_wins() {
        let board = plain_board();
        let mut snake = snake_at(14, 12, Dir::R, 5);

        // repeating a turn is idempotent within one tick
        snake.turn(Turn::Left);
        let once = snake.new_dir;
        snake.turn(Turn::Left);
        assert_eq!(snake.new_dir, once);
        assert_eq!(once, Dir::U);

        // the later request replaces the earlier one
        snake.turn(Turn::Right);
        assert_eq!(snake.new_dir, Dir::D);

        snake.advance(&board);
        assert_eq!(snake.dir, Dir::D);
    }

    #[test]
    fn next_head_accounts_for_buffered_turn() {
        let board = plain_board();
        let mut snake = snake_at(14, 12, Dir::R, 5);

        assert_eq!(snake.next_head(&board), Vector::new(15, 12));
        snake.turn(Turn::Left);
        assert_eq!(snake.next_head(&board), Vector::new(14, 11));

        let (head, _) = snake.advance(&board);
        assert_eq!(head, Vector::new(14, 11));
    }

    #[test]
    fn head_wraps_on_torus_boards() {
        let board = plain_board();
        let mut snake = snake_at(29, 12, Dir::R, 3);

        let (head, _) = snake.advance(&board);
        assert_eq!(head, Vector::new(0, 12));
    }

    #[test]
    fn self_collision_is_counted() {
        let board = plain_board();
        let mut snake = Snake {
            segments: [Vector::new(5, 5), Vector::new(5, 6), Vector::new(5, 7)]
                .into_iter()
                .collect(),
            dir: Dir::D,
            new_dir: Dir::D,
            stomach: 0,
            alive: true,
            show_timer: Duration::ZERO,
            speed_modifier: 1.,
        };

        let (head, _) = snake.advance(&board);
        assert_eq!(head, Vector::new(5, 6));
        assert!(snake.count(head) > 1);
    }

    #[test]
    fn consume_stacks_growth_credit() {
        let catalog = FoodCatalog::standard();
        let rules = Rules::default();
        let mut snake = snake_at(14, 12, Dir::R, 5);

        snake.consume(catalog.get(1), &rules);
        snake.consume(catalog.get(4), &rules);
        assert_eq!(snake.stomach, 8);
    }

    #[test]
    fn show_arms_and_decays() {
        let catalog = FoodCatalog::standard();
        let rules = Rules::default();
        let mut snake = snake_at(14, 12, Dir::R, 5);

        snake.consume(catalog.get(5), &rules);
        assert_eq!(snake.show_timer, rules.show_duration);

        snake.tick_show(Duration::from_millis(300));
        assert_eq!(snake.show_timer, Duration::from_millis(4700));

        snake.tick_show(Duration::from_secs(60));
        assert_eq!(snake.show_timer, Duration::ZERO);
    }

    #[test]
    fn speed_food_scales_the_modifier() {
        let catalog = FoodCatalog::standard();
        let rules = Rules::default();
        let mut snake = snake_at(14, 12, Dir::R, 5);

        snake.consume(catalog.get(7), &rules);
        assert!(snake.speed_modifier < 1.);
        snake.consume(catalog.get(8), &rules);
        assert!((snake.speed_modifier - 1.).abs() < 1e-12);
        snake.consume(catalog.get(8), &rules);
        assert!(snake.speed_modifier > 1.);
    }

    #[test]
    fn cut_off_keeps_the_head_half() {
        let catalog = FoodCatalog::standard();
        let rules = Rules::default();
        let mut snake = snake_at(14, 12, Dir::R, 7);
        let body: Vec<_> = snake.segments.iter().copied().collect();

        let severed = snake.consume(catalog.get(9), &rules);

        assert_eq!(snake.len(), 4);
        assert_eq!(severed, body[4..].to_vec());
        assert_eq!(snake.head(), body[0]);

        // a one-cell snake survives a cut
        let mut stub = snake_at(3, 3, Dir::R, 1);
        let severed = stub.consume(catalog.get(9), &rules);
        assert!(severed.is_empty());
        assert_eq!(stub.len(), 1);
    }
}
