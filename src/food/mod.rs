use std::ops::Range;
use std::time::{Duration, Instant};

use crate::basic::Vector;
use crate::error::{Error, Result};

pub mod spawn;

/// A tagged side effect attached to a food type, applied on consumption.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PowerUp {
    /// Render the snake at full visibility for a fixed duration.
    Show,
    /// Spawn a burst of extra food drawn from the catalog's frenzy pool.
    FoodFrenzy,
    /// Shrink the tick-interval modifier (faster play).
    SpeedUp,
    /// Grow the tick-interval modifier (slower play).
    SpeedDown,
    /// Discard the tail half of the snake.
    CutOff,
}

/// One catalog entry. Immutable; live [`Food`] instances refer to their
/// type by catalog index.
#[derive(Clone, Debug)]
pub struct FoodType {
    /// Growth credit granted to the stomach on consumption.
    pub energy: usize,
    /// Applied to the hunger resource on consumption: positive relieves,
    /// negative punishes.
    pub hunger_relief: f64,
    /// Time until despawn, `None` = never expires.
    pub expiry: Option<Duration>,
    /// Cosmetic hue in degrees, interpreted by the renderer.
    pub hue: u16,
    pub power_ups: Vec<PowerUp>,
    /// Per-tick chance of spawning one instance.
    pub spawn_prob: f64,
}

impl FoodType {
    fn plain(
        energy: usize,
        hunger_relief: f64,
        expiry_ms: u64,
        hue: u16,
        spawn_prob: f64,
    ) -> Self {
        Self {
            energy,
            hunger_relief,
            expiry: Some(Duration::from_millis(expiry_ms)),
            hue,
            power_ups: vec![],
            spawn_prob,
        }
    }

    fn power_up(power_up: PowerUp, hunger_relief: f64, hue: u16) -> Self {
        Self {
            energy: 0,
            hunger_relief,
            expiry: Some(Duration::from_millis(15_000)),
            hue,
            power_ups: vec![power_up],
            spawn_prob: 0.002,
        }
    }

    pub fn has_power_up(&self, power_up: PowerUp) -> bool {
        self.power_ups.contains(&power_up)
    }
}

/// Immutable food-type table plus the frenzy-pool bounds, constructed once
/// and handed to the game. Index 0 is the base type: it never spawns by
/// chance and eating it respawns one of itself, so the board always holds
/// at least one.
#[derive(Clone, Debug)]
pub struct FoodCatalog {
    types: Vec<FoodType>,
    /// Catalog indices eligible for the food-frenzy weighted draw.
    pub frenzy_pool: Range<usize>,
}

impl FoodCatalog {
    pub const BASE: usize = 0;

    pub fn new(types: Vec<FoodType>, frenzy_pool: Range<usize>) -> Result<Self> {
        if types.is_empty() {
            return Err(Error::catalog("catalog has no food types"));
        }
        if frenzy_pool.end > types.len() || frenzy_pool.start > frenzy_pool.end {
            return Err(Error::catalog("frenzy pool out of catalog bounds"));
        }
        for ty in &types {
            if !(0. ..=1.).contains(&ty.spawn_prob) {
                return Err(Error::catalog("spawn probability outside 0..=1"));
            }
            if ty.hue >= 360 {
                return Err(Error::catalog("hue outside 0..360"));
            }
        }
        Ok(Self { types, frenzy_pool })
    }

    /// The classic ten-type table. The frenzy pool covers the plain
    /// non-base foods (indices 1..4): the base type and the power-up block
    /// are excluded from frenzy draws.
    pub fn standard() -> Self {
        let types = vec![
            FoodType {
                energy: 1,
                hunger_relief: 0.1,
                expiry: None,
                hue: 100,
                power_ups: vec![],
                spawn_prob: 0.,
            },
            FoodType::plain(3, 1., 20_000, 290, 0.01),
            FoodType::plain(3, -0.4, 20_000, 290, 0.001),
            FoodType::plain(3, 0.3, 10_000, 240, 0.02),
            FoodType::plain(5, -0.2, 30_000, 0, 0.005),
            FoodType::power_up(PowerUp::Show, 0.5, 30),
            FoodType::power_up(PowerUp::FoodFrenzy, 0., 170),
            FoodType::power_up(PowerUp::SpeedUp, 0., 95),
            FoodType::power_up(PowerUp::SpeedDown, 0., 270),
            FoodType::power_up(PowerUp::CutOff, 0., 220),
        ];
        Self::new(types, 1..4).expect("standard catalog is valid")
    }

    pub fn get(&self, kind: usize) -> &FoodType {
        &self.types[kind]
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &FoodType)> {
        self.types.iter().enumerate()
    }
}

/// A food instance placed on the board.
#[derive(Copy, Clone, Debug)]
pub struct Food {
    pub pos: Vector,
    /// Index into the game's catalog.
    pub kind: usize,
    pub placed: Instant,
}

impl Food {
    pub fn is_expired(&self, ty: &FoodType, now: Instant) -> bool {
        match ty.expiry {
            Some(expiry) => now.duration_since(self.placed) > expiry,
            None => false,
        }
    }
}
