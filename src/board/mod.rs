use rand::distributions::uniform::SampleRange;
use rand::Rng;

pub use map::{EdgePolicy, Map};

use crate::basic::{BoardDim, Dir, Vector};

pub mod map;

/// The playing field: a static obstacle mask and a dynamic occupancy grid
/// covering every cell a snake segment or food item sits on.
///
/// INVARIANT: obstacle cells are occupied from construction on, so nothing
/// can ever spawn on them.
pub struct Board {
    dim: BoardDim,
    edge: EdgePolicy,
    occupied: Vec<bool>,
    obstacle: Vec<bool>,
    occupied_count: usize,
}

impl Board {
    pub fn new(map: &Map) -> Self {
        let dim = map.dim;
        let mut board = Self {
            dim,
            edge: map.edge,
            occupied: vec![false; dim.area()],
            obstacle: vec![false; dim.area()],
            occupied_count: 0,
        };

        for &cell in &map.obstacles {
            assert!(
                dim.contains(cell),
                "map {} has an out-of-bounds obstacle at {:?}",
                map.name,
                cell
            );
            let idx = board.idx(cell);
            board.obstacle[idx] = true;
            board.set_occupied(cell, true);
        }

        board
    }

    fn idx(&self, pos: Vector) -> usize {
        assert!(self.is_within(pos), "coordinate out of bounds: {:?}", pos);
        (pos.y * self.dim.x + pos.x) as usize
    }

    pub fn dim(&self) -> BoardDim {
        self.dim
    }

    pub fn edge(&self) -> EdgePolicy {
        self.edge
    }

    pub fn is_within(&self, pos: Vector) -> bool {
        self.dim.contains(pos)
    }

    pub fn is_occupied(&self, pos: Vector) -> bool {
        self.occupied[self.idx(pos)]
    }

    pub fn is_obstacle(&self, pos: Vector) -> bool {
        self.obstacle[self.idx(pos)]
    }

    pub fn set_occupied(&mut self, pos: Vector, status: bool) {
        let idx = self.idx(pos);
        if self.occupied[idx] != status {
            self.occupied[idx] = status;
            if status {
                self.occupied_count += 1;
            } else {
                self.occupied_count -= 1;
            }
        }
    }

    /// One step from `pos` towards `dir` under this board's edge policy:
    /// wrapping boards normalize modulo the dimensions, walled boards return
    /// the raw coordinate and leave the out-of-bounds judgement to the
    /// caller's death check.
    pub fn step(&self, pos: Vector, dir: Dir) -> Vector {
        match self.edge {
            EdgePolicy::Wrap => pos.wrapping_translate(dir, self.dim),
            EdgePolicy::Walled => pos.translate(dir),
        }
    }

    pub fn free_cells(&self) -> usize {
        self.dim.area() - self.occupied_count
    }

    /// Uniformly random unoccupied cell, `None` when the board is full.
    pub fn random_free_cell(&self, rng: &mut impl Rng) -> Option<Vector> {
        let free_cells = self.free_cells();
        if free_cells == 0 {
            return None;
        }

        // draw an index into the free cells only, then walk to it
        let mut nth = (0..free_cells).sample_single(rng);
        for (idx, &occupied) in self.occupied.iter().enumerate() {
            if occupied {
                continue;
            }
            if nth == 0 {
                return Some(Vector::new(
                    idx as isize % self.dim.x,
                    idx as isize / self.dim.x,
                ));
            }
            nth -= 1;
        }

        unreachable!("occupied count out of sync with the grid")
    }
}
