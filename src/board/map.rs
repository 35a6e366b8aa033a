use itertools::chain;

use crate::basic::{BoardDim, Vector};

/// Rule for the board rim. Each map commits to exactly one policy; the two
/// are never mixed on a single board.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum EdgePolicy {
    /// Toroidal: stepping off one edge re-enters on the opposite one.
    Wrap,
    /// Bounded: stepping off the edge is fatal.
    Walled,
}

/// A named board template. Read-only after definition; the embedding
/// application picks one from the catalog before constructing a game.
#[derive(Clone, Debug)]
pub struct Map {
    pub name: &'static str,
    pub dim: BoardDim,
    pub obstacles: Vec<Vector>,
    pub edge: EdgePolicy,
}

lazy_static! {
    pub static ref STANDARD_MAPS: Vec<Map> = vec![plain(), borders(), island()];
}

pub fn by_name(name: &str) -> Option<&'static Map> {
    STANDARD_MAPS.iter().find(|map| map.name == name)
}

/// Open 30×25 torus.
pub fn plain() -> Map {
    Map {
        name: "Plain",
        dim: Vector::new(30, 25),
        obstacles: vec![],
        edge: EdgePolicy::Wrap,
    }
}

/// 30×25 torus with a one-cell obstacle ring around the rim.
pub fn borders() -> Map {
    let dim = Vector::new(30, 25);
    Map {
        name: "Borders",
        dim,
        obstacles: border_ring(dim),
        edge: EdgePolicy::Wrap,
    }
}

/// Bounded 30×25 board, no obstacles: running off the edge is fatal.
pub fn island() -> Map {
    Map {
        name: "Island",
        dim: Vector::new(30, 25),
        obstacles: vec![],
        edge: EdgePolicy::Walled,
    }
}

fn border_ring(dim: BoardDim) -> Vec<Vector> {
    chain!(
        (0..dim.x).map(|x| Vector::new(x, 0)),
        (0..dim.x).map(|x| Vector::new(x, dim.y - 1)),
        (1..dim.y - 1).map(|y| Vector::new(0, y)),
        (1..dim.y - 1).map(|y| Vector::new(dim.x - 1, y)),
    )
    .collect()
}

#[test]
fn test_border_ring() {
    let dim = Vector::new(30, 25);
    let mut ring = border_ring(dim);

    assert_eq!(ring.len(), 2 * 30 + 2 * 23);
    ring.sort_unstable();
    ring.dedup();
    assert_eq!(ring.len(), 2 * 30 + 2 * 23);

    for &cell in &ring {
        assert!(dim.contains(cell));
        assert!(
            cell.x == 0 || cell.x == dim.x - 1 || cell.y == 0 || cell.y == dim.y - 1,
            "{:?} is not on the rim",
            cell
        );
    }
}

#[test]
fn test_catalog_lookup() {
    assert_eq!(by_name("Borders").map(|m| m.edge), Some(EdgePolicy::Wrap));
    assert_eq!(by_name("Island").map(|m| m.edge), Some(EdgePolicy::Walled));
    assert!(by_name("Atlantis").is_none());
    assert_eq!(STANDARD_MAPS.len(), 3);
}
