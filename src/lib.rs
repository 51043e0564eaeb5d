//! # Karnaugh Map Logic Simplifier
//!
//! This crate reduces a Boolean function of three variables `A`, `B`, `C`, given
//! as a set of minterms `0..=7`, to a sum-of-products expression using the
//! grouping rules of a Karnaugh map.
//!
//! ## Overview
//!
//! Cell `i` of the map is the input combination `A·4 + B·2 + C`. A function is a
//! [`MintermMask`] with one bit per cell. The [`Simplifier`] makes one pass over
//! fixed pattern tables, in priority order:
//!
//! - the constants `0` and `1` for the empty and full masks
//! - quads (single literals such as `B'`)
//! - pairs (two-literal products such as `A'C`)
//! - singles (full minterms such as `AB'C`)
//!
//! and produces an ordered [`Cover`] whose terms, OR-ed together, are exactly the
//! input function. The pass is a heuristic pattern matcher, not a prime-implicant
//! cover solver: results are small but not certified minimal.
//!
//! ## Quick Start
//!
//! ```
//! // Untrusted values: out-of-range entries and duplicates are ignored
//! let report = kmap_logic::simplify([0, 1, 2, 2, 9]);
//!
//! assert_eq!(report.default_sop, "A'B'C'+A'B'C+A'BC'");
//! assert_eq!(report.simplified_sop, "A'B'+A'C'");
//! println!("{}", report.truth_table);
//! ```
//!
//! ## Pair Policy
//!
//! A pair whose two cells are set is emitted under [`PairPolicy::Lenient`] (the
//! default) when at least one of them is still uncovered, and under
//! [`PairPolicy::Strict`] only when both are:
//!
//! ```
//! use kmap_logic::{simplify_with, PairPolicy, SimplifyConfig};
//!
//! let strict = SimplifyConfig::default().with_pair_policy(PairPolicy::Strict);
//! assert_eq!(simplify_with([0, 1, 2], &strict).simplified_sop, "A'B'+A'BC'");
//! ```
//!
//! ## Reading Results Back
//!
//! Rendered text can be parsed with [`Sop`] and covers can be exchanged as PLA:
//!
//! ```
//! use kmap_logic::{MintermMask, PLAReader, PLAWriter, Simplifier, Sop};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mask = MintermMask::from_minterms([1, 3, 6]);
//! let cover = Simplifier::default().simplify(mask);
//!
//! assert_eq!(Sop::parse(&cover.to_string())?.mask(), mask);
//! assert_eq!(MintermMask::from_pla_string(&cover.to_pla_string()?)?, mask);
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod cover;
pub mod error;
pub mod input;
pub mod mask;
pub mod pla;
pub mod render;
pub mod report;
pub mod simplify;
pub mod sop;
pub mod truth_table;

// Re-export high-level public API
pub use cover::{Cover, Term};
pub use error::{InputError, KmapError, PLAError, ParseSopError};
pub use mask::{Cell, Coverage, MintermMask};
pub use pla::{PLAReader, PLAWriter};
pub use render::Renderer;
pub use report::{simplify, simplify_with, Report};
pub use simplify::{PairPolicy, Simplifier, Step, Tier};
pub use sop::Sop;
pub use truth_table::{Row, TruthTable};

/// Configuration for a simplification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifyConfig {
    /// When a pair may be emitted over partially covered cells
    pub pair_policy: PairPolicy,
    /// Text placed between rendered terms
    pub separator: String,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        SimplifyConfig {
            pair_policy: PairPolicy::Lenient,
            separator: "+".to_string(),
        }
    }
}

impl SimplifyConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pair_policy(mut self, pair_policy: PairPolicy) -> Self {
        self.pair_policy = pair_policy;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SimplifyConfig::new();
        assert_eq!(config.pair_policy, PairPolicy::Lenient);
        assert_eq!(config.separator, "+");
    }

    #[test]
    fn test_config_builder() {
        let config = SimplifyConfig::new()
            .with_pair_policy(PairPolicy::Strict)
            .with_separator(" + ");
        assert_eq!(config.pair_policy, PairPolicy::Strict);
        assert_eq!(config.separator, " + ");
    }
}
