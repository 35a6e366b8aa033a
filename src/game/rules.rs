use std::time::Duration;

/// Tunables of one play session. Constructed by the host, never mutated
/// after the game starts.
pub struct Rules {
    /// Tick interval of a fresh snake, in milliseconds.
    pub base_tick_ms: f64,
    /// Hard floor for the tick interval.
    pub min_tick_ms: f64,
    /// How many milliseconds each body segment shaves off the interval.
    pub tick_ms_per_segment: f64,

    /// Hunger gained per millisecond of wall clock.
    pub hunger_per_ms: f64,
    /// Hunger this close to 1.0 already counts as starved.
    pub starve_epsilon: f64,

    pub initial_len: usize,
    pub show_duration: Duration,
    /// Items placed by one food frenzy.
    pub frenzy_spawns: usize,
    /// Tick interval factor applied by speed-up food.
    pub speed_up_factor: f64,
    /// Tick interval factor applied by slow-down food.
    pub slow_down_factor: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            base_tick_ms: 300.,
            min_tick_ms: 30.,
            tick_ms_per_segment: 3.,

            hunger_per_ms: 3.3e-6,
            starve_epsilon: 1e-4,

            initial_len: 5,
            show_duration: Duration::from_secs(5),
            frenzy_spawns: 5,
            speed_up_factor: 1. / 1.2,
            slow_down_factor: 1.2,
        }
    }
}

// builder
impl Rules {
    pub fn initial_len(mut self, len: usize) -> Self {
        self.initial_len = len;
        self
    }

    pub fn base_tick_ms(mut self, ms: f64) -> Self {
        self.base_tick_ms = ms;
        self
    }
}
