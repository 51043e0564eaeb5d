//! Term lists for three-variable sum-of-products functions
//!
//! A [`Cover`] is the ordered list of product terms a simplification pass emitted.
//! Emission order is part of the result: rendering, PLA output and comparisons
//! all preserve it.

mod cubes;
pub mod patterns;

pub use cubes::{Literals, Term, VARIABLES};

use std::fmt;

use crate::mask::MintermMask;
use crate::render::Renderer;

/// An ordered sum of product terms
///
/// # Examples
///
/// ```
/// use kmap_logic::{Cover, MintermMask, Simplifier};
///
/// let mask = MintermMask::from_minterms([0, 1, 4, 5]);
/// let cover: Cover = Simplifier::default().simplify(mask);
///
/// assert_eq!(cover.len(), 1);
/// assert_eq!(cover.to_string(), "B'");
/// assert_eq!(cover.mask(), mask);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cover {
    terms: Vec<Term>,
}

impl Cover {
    /// Create an empty cover
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term, keeping emission order
    pub fn push(&mut self, term: Term) {
        self.terms.push(term);
    }

    /// The terms in emission order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the terms in emission order
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// The cells covered by any term (the OR of all term masks)
    pub fn mask(&self) -> MintermMask {
        self.terms
            .iter()
            .fold(MintermMask::EMPTY, |mask, term| mask | term.mask())
    }

    /// Total literal count across all terms
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(Term::width).sum()
    }
}

impl FromIterator<Term> for Cover {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Cover {
            terms: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Cover {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a Cover {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Renders with the default `+` separator
impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Renderer::default().render(&self.terms))
    }
}
