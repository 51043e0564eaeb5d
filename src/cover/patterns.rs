//! Static grouping tables of the three-variable Karnaugh map
//!
//! Quads are the six single-literal groups of four adjacent cells and pairs are
//! the twelve two-literal groups of two; singles are the eight minterms. Table
//! order is the order the simplifier tries them in and is visible in its output.

use super::cubes::Term;

const P: Option<bool> = Some(true);
const N: Option<bool> = Some(false);
const X: Option<bool> = None;

/// A fixed group of map cells together with the product term it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// Cell indices of the group in ascending order
    pub cells: &'static [u8],
    /// The product term covering exactly these cells
    pub term: Term,
}

impl Group {
    const fn new(cells: &'static [u8], term: Term) -> Self {
        Group { cells, term }
    }

    /// The group as mask bits
    pub fn bits(&self) -> u8 {
        self.cells.iter().fold(0, |bits, &cell| bits | (1 << cell))
    }
}

/// Four-cell groups: each variable's complement immediately before the variable
pub const QUADS: [Group; 6] = [
    Group::new(&[0, 1, 2, 3], Term::product(N, X, X)), // A'
    Group::new(&[4, 5, 6, 7], Term::product(P, X, X)), // A
    Group::new(&[0, 1, 4, 5], Term::product(X, N, X)), // B'
    Group::new(&[2, 3, 6, 7], Term::product(X, P, X)), // B
    Group::new(&[0, 2, 4, 6], Term::product(X, X, N)), // C'
    Group::new(&[1, 3, 5, 7], Term::product(X, X, P)), // C
];

/// Two-cell groups: the `AB` products, then `AC`, then `BC`
pub const PAIRS: [Group; 12] = [
    Group::new(&[0, 1], Term::product(N, N, X)), // A'B'
    Group::new(&[2, 3], Term::product(N, P, X)), // A'B
    Group::new(&[4, 5], Term::product(P, N, X)), // AB'
    Group::new(&[6, 7], Term::product(P, P, X)), // AB
    Group::new(&[0, 2], Term::product(N, X, N)), // A'C'
    Group::new(&[1, 3], Term::product(N, X, P)), // A'C
    Group::new(&[4, 6], Term::product(P, X, N)), // AC'
    Group::new(&[5, 7], Term::product(P, X, P)), // AC
    Group::new(&[0, 4], Term::product(X, N, N)), // B'C'
    Group::new(&[1, 5], Term::product(X, N, P)), // B'C
    Group::new(&[2, 6], Term::product(X, P, N)), // BC'
    Group::new(&[3, 7], Term::product(X, P, P)), // BC
];

/// One-cell groups: the full minterm of each cell in index order
pub const SINGLES: [Group; 8] = [
    Group::new(&[0], Term::product(N, N, N)), // A'B'C'
    Group::new(&[1], Term::product(N, N, P)), // A'B'C
    Group::new(&[2], Term::product(N, P, N)), // A'BC'
    Group::new(&[3], Term::product(N, P, P)), // A'BC
    Group::new(&[4], Term::product(P, N, N)), // AB'C'
    Group::new(&[5], Term::product(P, N, P)), // AB'C
    Group::new(&[6], Term::product(P, P, N)), // ABC'
    Group::new(&[7], Term::product(P, P, P)), // ABC
];
