use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};

use super::Dir;

/// A grid coordinate in screen orientation (y grows downward).
#[derive(Eq, PartialEq, Copy, Clone, Hash, Add, Sub, Neg, Mul)]
pub struct Vector {
    pub x: isize,
    pub y: isize,
}

pub type BoardDim = Vector;

impl Vector {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn translate(self, dir: Dir) -> Self {
        self + dir.unit()
    }

    // basically mod width, mod height
    // a point n cells out of bounds ends up n cells from the opposite edge
    #[must_use]
    pub fn wrap(self, dim: BoardDim) -> Self {
        Self {
            x: self.x.rem_euclid(dim.x),
            y: self.y.rem_euclid(dim.y),
        }
    }

    // wraps around board edges
    #[must_use]
    pub fn wrapping_translate(self, dir: Dir, dim: BoardDim) -> Self {
        self.translate(dir).wrap(dim)
    }

    /// Treating `self` as a rectangle dimension, whether `pos` lies inside it.
    pub fn contains(self, pos: Self) -> bool {
        (0..self.x).contains(&pos.x) && (0..self.y).contains(&pos.y)
    }

    /// Treating `self` as a rectangle dimension, the number of cells in it.
    pub fn area(self) -> usize {
        (self.x * self.y) as usize
    }
}

impl Debug for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// row-major so that ordering agrees with grid index order
impl Ord for Vector {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}

#[test]
fn test_wrap() {
    let dim = Vector::new(30, 25);
    [
        ((0, 0), (0, 0)),
        ((29, 24), (29, 24)),
        ((30, 0), (0, 0)),
        ((0, 25), (0, 0)),
        ((-1, 0), (29, 0)),
        ((0, -1), (0, 24)),
        ((-31, -26), (29, 24)),
        ((61, 51), (1, 1)),
    ]
    .iter()
    .for_each(|&((x, y), (ex, ey))| {
        assert_eq!(Vector::new(x, y).wrap(dim), Vector::new(ex, ey));
    });
}

#[test]
fn test_vector_ops() {
    let a = Vector::new(3, -2);
    let b = Vector::new(-1, 4);
    assert_eq!(a + b, Vector::new(2, 2));
    assert_eq!(a - b, Vector::new(4, -6));
    assert_eq!(-a, Vector::new(-3, 2));
    assert_eq!(a * 2, Vector::new(6, -4));
    assert!(Vector::new(30, 25).contains(Vector::new(0, 24)));
    assert!(!Vector::new(30, 25).contains(Vector::new(30, 0)));
    assert!(!Vector::new(30, 25).contains(Vector::new(5, -1)));
}
