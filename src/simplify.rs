//! Karnaugh map grouping over a three-variable minterm mask
//!
//! The simplifier is a single deterministic pass over fixed pattern tables:
//!
//! 1. The all-zero and all-one masks short-circuit to the constants `0` and `1`.
//! 2. Every quad whose four cells are all set is emitted. Coverage is not
//!    consulted at this tier, so overlapping quads may both fire.
//! 3. Pairs whose two cells are set are emitted subject to the [`PairPolicy`].
//! 4. Every set cell still uncovered is emitted as its full minterm.
//!
//! The result always covers exactly the input mask, but it is a heuristic: no
//! prime-implicant selection is performed, so the cover is not guaranteed to be
//! minimal and may contain redundant terms.

use std::fmt;

use log::{debug, trace};

use crate::cover::patterns::{Group, PAIRS, QUADS, SINGLES};
use crate::cover::{Cover, Term};
use crate::mask::{Cell, Coverage, MintermMask};
use crate::SimplifyConfig;

/// When a pair whose cells are both set may be emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PairPolicy {
    /// Both cells must still be uncovered
    Strict,
    /// At least one cell must still be uncovered
    #[default]
    Lenient,
}

impl PairPolicy {
    /// Decide for a pair with mask bits `bits`, of which `uncovered` are not yet covered
    fn admits(self, bits: u8, uncovered: u8) -> bool {
        match self {
            PairPolicy::Strict => uncovered == bits,
            PairPolicy::Lenient => uncovered != 0,
        }
    }
}

impl fmt::Display for PairPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairPolicy::Strict => write!(f, "strict"),
            PairPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

/// The pattern tier a term was emitted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Constant,
    Quad,
    Pair,
    Single,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Constant => write!(f, "constant"),
            Tier::Quad => write!(f, "quad"),
            Tier::Pair => write!(f, "pair"),
            Tier::Single => write!(f, "single"),
        }
    }
}

/// One emission of a simplification pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Tier the term came from
    pub tier: Tier,
    /// The emitted term
    pub term: Term,
    /// Cells this term covered that no earlier term had covered
    pub newly_covered: MintermMask,
}

/// Sum-of-products simplifier for three-variable functions
///
/// # Examples
///
/// ```
/// use kmap_logic::{MintermMask, PairPolicy, SimplifyConfig, Simplifier};
///
/// let mask = MintermMask::from_minterms([0, 1, 2]);
///
/// let lenient = Simplifier::default();
/// assert_eq!(lenient.simplify(mask).to_string(), "A'B'+A'C'");
///
/// let strict = Simplifier::new(SimplifyConfig::default().with_pair_policy(PairPolicy::Strict));
/// assert_eq!(strict.simplify(mask).to_string(), "A'B'+A'BC'");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simplifier {
    config: SimplifyConfig,
}

impl Simplifier {
    pub fn new(config: SimplifyConfig) -> Self {
        Simplifier { config }
    }

    pub fn config(&self) -> &SimplifyConfig {
        &self.config
    }

    /// Simplify `mask` into an ordered cover
    pub fn simplify(&self, mask: MintermMask) -> Cover {
        self.trace(mask).into_iter().map(|step| step.term).collect()
    }

    /// Run the simplification pass and report every emission with its tier
    pub fn trace(&self, mask: MintermMask) -> Vec<Step> {
        if mask.is_empty() {
            debug!("{} is constant 0", mask);
            return vec![Step {
                tier: Tier::Constant,
                term: Term::ZERO,
                newly_covered: MintermMask::EMPTY,
            }];
        }
        if mask.is_full() {
            debug!("{} is constant 1", mask);
            return vec![Step {
                tier: Tier::Constant,
                term: Term::ONE,
                newly_covered: MintermMask::FULL,
            }];
        }

        let mut pass = Pass::new(mask);

        for group in &QUADS {
            if pass.is_set(group) {
                pass.emit(Tier::Quad, group);
            }
        }

        let policy = self.config.pair_policy;
        for group in &PAIRS {
            if pass.is_set(group) && policy.admits(group.bits(), pass.uncovered(group)) {
                pass.emit(Tier::Pair, group);
            }
        }

        for (cell, group) in Cell::ALL.into_iter().zip(&SINGLES) {
            if mask.contains(cell) && !pass.coverage.is_covered(cell) {
                pass.emit(Tier::Single, group);
            }
        }

        debug_assert!(pass.coverage.is_complete());
        debug!(
            "{} simplified to {} terms under {} pair policy",
            mask,
            pass.steps.len(),
            policy
        );
        pass.steps
    }
}

/// State of a single simplification request
struct Pass {
    mask: MintermMask,
    coverage: Coverage,
    steps: Vec<Step>,
}

impl Pass {
    fn new(mask: MintermMask) -> Self {
        Pass {
            mask,
            coverage: Coverage::new(mask),
            steps: Vec::new(),
        }
    }

    fn is_set(&self, group: &Group) -> bool {
        self.mask.contains_all(MintermMask::from_bits(group.bits()))
    }

    fn uncovered(&self, group: &Group) -> u8 {
        self.coverage.uncovered_in(group.bits())
    }

    fn emit(&mut self, tier: Tier, group: &Group) {
        let fresh = self.coverage.cover(group.bits());
        trace!("{} {} covers {:?}", tier, group.term, group.cells);
        self.steps.push(Step {
            tier,
            term: group.term,
            newly_covered: MintermMask::from_bits(fresh),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn lenient(minterms: &[u8]) -> String {
        Simplifier::default()
            .simplify(MintermMask::from_minterms(minterms.iter().copied()))
            .to_string()
    }

    fn strict(minterms: &[u8]) -> String {
        let config = SimplifyConfig::default().with_pair_policy(PairPolicy::Strict);
        Simplifier::new(config)
            .simplify(MintermMask::from_minterms(minterms.iter().copied()))
            .to_string()
    }

    #[test]
    fn test_constants() {
        assert_eq!(lenient(&[]), "0");
        assert_eq!(lenient(&[0, 1, 2, 3, 4, 5, 6, 7]), "1");
        assert_eq!(strict(&[]), "0");
        assert_eq!(strict(&[7, 6, 5, 4, 3, 2, 1, 0]), "1");
    }

    #[test]
    fn test_single_quad() {
        assert_eq!(lenient(&[0, 1, 4, 5]), "B'");
        assert_eq!(lenient(&[5, 4, 1, 0]), "B'");
        assert_eq!(lenient(&[1, 3, 5, 7]), "C");
        assert_eq!(lenient(&[4, 5, 6, 7]), "A");
    }

    #[test]
    fn test_overlapping_quads_both_fire() {
        // A' and B' share cells 0 and 1
        assert_eq!(lenient(&[0, 1, 2, 3, 4, 5]), "A'+B'");
        // Every quad that avoids cell 7
        assert_eq!(lenient(&[0, 1, 2, 3, 4, 5, 6]), "A'+B'+C'");
    }

    #[test]
    fn test_quad_emission_order() {
        // C' is found after A even though it is listed first here
        assert_eq!(lenient(&[0, 2, 4, 6, 5, 7]), "A+C'");
    }

    #[test]
    fn test_pairs_and_singles() {
        assert_eq!(lenient(&[1, 3, 6]), "A'C+ABC'");
        assert_eq!(lenient(&[0, 7]), "A'B'C'+ABC");
        assert_eq!(lenient(&[3]), "A'BC");
    }

    #[test]
    fn test_policy_divergence() {
        assert_eq!(lenient(&[0, 1, 2]), "A'B'+A'C'");
        assert_eq!(strict(&[0, 1, 2]), "A'B'+A'BC'");
    }

    #[test]
    fn test_lenient_rescues_cell_next_to_quad() {
        // Quad A' covers 0..=3, cell 4 pairs with 0 as B'C'
        assert_eq!(lenient(&[0, 1, 2, 3, 4]), "A'+B'C'");
        assert_eq!(strict(&[0, 1, 2, 3, 4]), "A'+AB'C'");
    }

    #[test]
    fn test_trace_tiers() {
        let steps = Simplifier::default().trace(MintermMask::from_minterms([0, 1, 2, 3, 4]));
        let tiers: Vec<Tier> = steps.iter().map(|s| s.tier).collect();
        assert_eq!(tiers, vec![Tier::Quad, Tier::Pair]);
        assert_eq!(steps[0].newly_covered.bits(), 0x0F);
        assert_eq!(steps[1].newly_covered.bits(), 0x10);
    }

    #[test]
    fn test_trace_constant() {
        let steps = Simplifier::default().trace(MintermMask::EMPTY);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].tier, Tier::Constant);
        assert_eq!(steps[0].term, Term::ZERO);
    }

    #[test]
    fn test_every_mask_is_reproduced() {
        for policy in [PairPolicy::Strict, PairPolicy::Lenient] {
            let simplifier = Simplifier::new(SimplifyConfig::default().with_pair_policy(policy));
            for bits in 0..=255u8 {
                let mask = MintermMask::from_bits(bits);
                let cover = simplifier.simplify(mask);
                assert_eq!(cover.mask(), mask, "{} policy, mask {:#010b}", policy, bits);
            }
        }
    }

    #[test]
    fn test_lenient_may_emit_redundant_pair() {
        // A'C' rescues cell 2, which BC' would have covered anyway
        assert_eq!(lenient(&[0, 1, 2, 6]), "A'B'+A'C'+BC'");
        assert_eq!(strict(&[0, 1, 2, 6]), "A'B'+BC'");
    }

    #[test]
    fn test_config_is_kept() {
        let config = SimplifyConfig::default().with_pair_policy(PairPolicy::Strict);
        let simplifier = Simplifier::new(config.clone());
        assert_eq!(simplifier.config(), &config);
        assert_eq!(Simplifier::default().config().pair_policy, PairPolicy::Lenient);
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(PairPolicy::default(), PairPolicy::Lenient);
        assert_eq!(PairPolicy::Strict.to_string(), "strict");
        assert_eq!(Tier::Pair.to_string(), "pair");
    }
}
