use std::ops::{Add, Neg};

use super::{Turn, Vector};
use Dir::*;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        // SAFETY: (num % 4) is between 0 and 3
        unsafe { std::mem::transmute(num % 4) }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self + 2
    }
}

impl Add<u8> for Dir {
    type Output = Self;

    fn add(self, rhs: u8) -> Self::Output {
        Self::from(self as u8 + rhs)
    }
}

impl Add<Turn> for Dir {
    type Output = Self;

    fn add(self, turn: Turn) -> Self::Output {
        self + turn.delta()
    }
}

impl Dir {
    /// Unit vector in screen orientation (y grows downward), so `U` points
    /// at decreasing y.
    pub fn unit(self) -> Vector {
        match self {
            U => Vector::new(0, -1),
            R => Vector::new(1, 0),
            D => Vector::new(0, 1),
            L => Vector::new(-1, 0),
        }
    }

    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }
}

#[test]
fn test_dir_math() {
    let test_plus = [(U, 1, R), (U, 2, D), (L, 1, U), (D, 4, D), (R, 3, U)];

    for &(start, add, expect) in &test_plus {
        assert_eq!(start + add, expect);
    }

    for &(dir, opposite) in &[(U, D), (R, L), (D, U), (L, R)] {
        assert_eq!(-dir, opposite);
    }
}

#[test]
fn test_turns() {
    use crate::basic::Turn::*;

    let cases = [
        (U, Right, R),
        (R, Right, D),
        (D, Right, L),
        (L, Right, U),
        (U, Left, L),
        (L, Left, D),
        (D, Left, R),
        (R, Left, U),
    ];

    for &(start, turn, expect) in &cases {
        assert_eq!(start + turn, expect);
    }

    // a quarter turn never reverses
    for dir in Dir::iter() {
        assert_ne!(dir + Left, -dir);
        assert_ne!(dir + Right, -dir);
    }
}

#[test]
fn test_units_are_adjacent() {
    for dir in Dir::iter() {
        let unit = dir.unit();
        assert_eq!(unit.x.abs() + unit.y.abs(), 1);
        assert_eq!((-dir).unit(), -unit);
    }
}
