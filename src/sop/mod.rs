//! Parsing of sum-of-products text
//!
//! Accepts the notation the renderer produces, so simplified output can be read
//! back and checked against the mask it came from:
//! - `+` separates products, surrounding whitespace is ignored
//! - literals are `A`, `B`, `C` (lower case accepted), `'` complements
//! - literals may be juxtaposed (`AB'`) or joined with `*` (`A*B'`)
//! - `0` and `1` are the constants
//!
//! A product naming a variable in both polarities (`AA'`) covers nothing.

pub mod error;

use std::fmt;
use std::sync::Arc;

use lalrpop_util::ParseError;
use log::trace;

use crate::cover::{Cover, Term};
use crate::mask::MintermMask;
use crate::render::Renderer;
use error::ParseSopError;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/sop/grammar.rs"));
}

/// A parsed sum-of-products expression
///
/// # Examples
///
/// ```
/// use kmap_logic::{MintermMask, Sop};
///
/// let sop = Sop::parse("A'B' + A'C'").unwrap();
/// assert_eq!(sop.terms().len(), 2);
/// assert_eq!(sop.mask(), MintermMask::from_minterms([0, 1, 2]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sop {
    terms: Vec<Term>,
}

impl Sop {
    /// Parse sum-of-products text
    pub fn parse(input: &str) -> Result<Self, ParseSopError> {
        let terms = parser_impl::SopParser::new().parse(input).map_err(|e| {
            let position = match &e {
                ParseError::InvalidToken { location } => Some(*location),
                ParseError::UnrecognizedEof { location, .. } => Some(*location),
                ParseError::UnrecognizedToken {
                    token: (start, _, _),
                    ..
                } => Some(*start),
                ParseError::ExtraToken {
                    token: (start, _, _),
                } => Some(*start),
                ParseError::User { .. } => None,
            };
            ParseSopError::InvalidSyntax {
                message: Arc::from(e.to_string().as_str()),
                input: Arc::from(input),
                position,
            }
        })?;
        trace!("parsed {:?} into {} products", input, terms.len());
        Ok(Sop { terms })
    }

    /// Products in source order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The cells where the expression is true
    pub fn mask(&self) -> MintermMask {
        self.terms
            .iter()
            .fold(MintermMask::EMPTY, |mask, term| mask | term.mask())
    }
}

impl From<Sop> for Cover {
    fn from(sop: Sop) -> Self {
        sop.terms.into_iter().collect()
    }
}

impl fmt::Display for Sop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Renderer::default().render(&self.terms))
    }
}

/// AND together `(variable, polarity)` literals into one product term
pub(crate) fn conjoin(literals: &[(usize, bool)]) -> Term {
    let mut slots: [Option<bool>; 3] = [None; 3];
    for &(variable, polarity) in literals {
        match slots[variable] {
            None => slots[variable] = Some(polarity),
            Some(existing) if existing == polarity => {}
            Some(_) => return Term::ZERO,
        }
    }
    Term::Product(slots)
}
