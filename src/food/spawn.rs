use std::time::Instant;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::warn;

use crate::board::Board;
use crate::food::{Food, FoodCatalog};

/// Place one food of catalog kind `kind` on a uniformly random free cell,
/// marking it occupied. `None` (logged) when the board is full: the spawn
/// is skipped for this tick rather than retried.
pub fn place_food(
    board: &mut Board,
    kind: usize,
    now: Instant,
    rng: &mut impl Rng,
) -> Option<Food> {
    let pos = match board.random_free_cell(rng) {
        Some(pos) => pos,
        None => {
            warn!(kind, "no space left for new food");
            return None;
        }
    };
    board.set_occupied(pos, true);
    Some(Food { pos, kind, placed: now })
}

/// One spawn-sampling pass: every catalog type independently rolls its
/// per-tick probability. Runs once per simulation tick.
pub fn spawn_pass(
    board: &mut Board,
    foods: &mut Vec<Food>,
    catalog: &FoodCatalog,
    now: Instant,
    rng: &mut impl Rng,
) {
    for (kind, ty) in catalog.iter() {
        if rng.gen::<f64>() < ty.spawn_prob {
            match place_food(board, kind, now, rng) {
                Some(food) => foods.push(food),
                // full board, no point rolling the remaining types
                None => break,
            }
        }
    }
}

/// Weighted draw of one frenzy kind: weights are the pool types' spawn
/// probabilities, normalized over the pool. `None` if the pool is empty or
/// carries no weight.
pub fn frenzy_kind(catalog: &FoodCatalog, rng: &mut impl Rng) -> Option<usize> {
    let pool = catalog.frenzy_pool.clone();
    let weights = pool.clone().map(|kind| catalog.get(kind).spawn_prob);

    match WeightedIndex::new(weights) {
        Ok(dist) => Some(pool.start + dist.sample(rng)),
        Err(_) => {
            warn!("frenzy pool has no sampleable weights");
            None
        }
    }
}
