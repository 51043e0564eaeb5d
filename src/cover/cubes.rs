//! Product terms over the variables `A`, `B` and `C`
//!
//! A [`Term`] is either one of the two constants or a product of literals stored as
//! a polarity triple, the same input notation PLA cubes use:
//! - `Some(true)` - the variable appears positively (`A`)
//! - `Some(false)` - the variable appears complemented (`A'`)
//! - `None` - the variable does not appear

use std::fmt;

use crate::mask::{Cell, MintermMask};

/// Variable names in literal order (most significant first)
pub const VARIABLES: [char; 3] = ['A', 'B', 'C'];

/// Polarity triple over `(A, B, C)`
pub type Literals = [Option<bool>; 3];

/// A product term (or constant) of a sum-of-products expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    /// Constant `0` or `1`
    Constant(bool),
    /// Conjunction of the literals that are `Some`
    Product(Literals),
}

impl Term {
    /// The constant-0 term
    pub const ZERO: Term = Term::Constant(false);
    /// The constant-1 term
    pub const ONE: Term = Term::Constant(true);

    /// Build a product term from a polarity triple
    pub const fn product(a: Option<bool>, b: Option<bool>, c: Option<bool>) -> Self {
        Term::Product([a, b, c])
    }

    /// The full three-literal term for a single cell, e.g. cell 5 is `AB'C`
    pub fn minterm(cell: Cell) -> Self {
        let [a, b, c] = cell.values();
        Term::product(Some(a), Some(b), Some(c))
    }

    /// The literal triple, or `None` for constants
    pub fn literals(&self) -> Option<&Literals> {
        match self {
            Term::Constant(_) => None,
            Term::Product(literals) => Some(literals),
        }
    }

    /// Number of literals in the term (zero for constants)
    pub fn width(&self) -> usize {
        self.literals()
            .map_or(0, |literals| literals.iter().flatten().count())
    }

    /// Whether the term is true for the input combination of `cell`
    pub fn covers(&self, cell: Cell) -> bool {
        match self {
            Term::Constant(value) => *value,
            Term::Product(literals) => literals
                .iter()
                .zip(cell.values())
                .all(|(literal, value)| literal.map_or(true, |want| want == value)),
        }
    }

    /// The set of cells this term covers
    pub fn mask(&self) -> MintermMask {
        Cell::ALL
            .into_iter()
            .filter(|&cell| self.covers(cell))
            .collect()
    }
}

/// Formats literals in `A`, `B`, `C` order with a `'` suffix for complements
///
/// Constants render as `0` and `1`. A product without literals is the constant 1
/// and renders as `1`.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Constant(value) => write!(f, "{}", if *value { "1" } else { "0" }),
            Term::Product(literals) => {
                if literals.iter().all(Option::is_none) {
                    return write!(f, "1");
                }
                for (name, literal) in VARIABLES.iter().zip(literals) {
                    match literal {
                        Some(true) => write!(f, "{}", name)?,
                        Some(false) => write!(f, "{}'", name)?,
                        None => {}
                    }
                }
                Ok(())
            }
        }
    }
}
