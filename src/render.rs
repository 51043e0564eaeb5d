//! Text rendering of term lists

use crate::cover::Term;
use crate::mask::MintermMask;

/// Joins terms into sum-of-products text
///
/// The separator goes between consecutive terms only. An empty term list is the
/// constant 0 and renders as `0`.
///
/// # Examples
///
/// ```
/// use kmap_logic::{MintermMask, Renderer};
///
/// let mask = MintermMask::from_minterms([1, 3]);
/// assert_eq!(Renderer::default().render_default(mask), "A'B'C+A'BC");
/// assert_eq!(Renderer::spaced().render_default(mask), "A'B'C + A'BC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    separator: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::with_separator("+")
    }
}

impl Renderer {
    /// Renderer using a custom separator
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Renderer {
            separator: separator.into(),
        }
    }

    /// Renderer using ` + `, the serial-monitor layout
    pub fn spaced() -> Self {
        Renderer::with_separator(" + ")
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Render terms in order
    pub fn render(&self, terms: &[Term]) -> String {
        if terms.is_empty() {
            return Term::ZERO.to_string();
        }
        terms
            .iter()
            .map(Term::to_string)
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    /// Render the unsimplified expression: one full minterm per set cell
    pub fn render_default(&self, mask: MintermMask) -> String {
        let terms: Vec<Term> = mask.cells().map(Term::minterm).collect();
        self.render(&terms)
    }
}
