//! Integration tests for the simplification pipeline
//!
//! These tests check the externally visible behaviour of `simplify` across the
//! whole mask domain: soundness of the emitted cover, the constant cases, the
//! shape of the default expression and the documented pair policy.

use kmap_logic::*;

fn all_masks() -> impl Iterator<Item = MintermMask> {
    (0..=255u8).map(MintermMask::from_bits)
}

fn minterms_of(mask: MintermMask) -> Vec<u8> {
    mask.cells().map(Cell::index).collect()
}

fn strict_config() -> SimplifyConfig {
    SimplifyConfig::default().with_pair_policy(PairPolicy::Strict)
}

// Soundness

#[test]
fn test_simplified_sop_reproduces_mask() {
    for config in [SimplifyConfig::default(), strict_config()] {
        for mask in all_masks() {
            let report = simplify_with(minterms_of(mask), &config);
            let parsed = Sop::parse(&report.simplified_sop).expect("rendered output should parse");
            assert_eq!(
                parsed.mask(),
                mask,
                "{:?} policy: {} rendered as {}",
                config.pair_policy,
                mask,
                report.simplified_sop
            );
        }
    }
}

#[test]
fn test_default_sop_reproduces_mask() {
    for mask in all_masks() {
        let report = simplify(minterms_of(mask));
        assert_eq!(Sop::parse(&report.default_sop).unwrap().mask(), mask);
    }
}

#[test]
fn test_terms_never_cover_outside_mask() {
    for mask in all_masks() {
        let cover = Simplifier::default().simplify(mask);
        for term in &cover {
            assert!(
                mask.contains_all(term.mask()),
                "term {} of {} covers cells outside the function",
                term,
                mask
            );
        }
    }
}

// Constants

#[test]
fn test_constant_functions() {
    assert_eq!(simplify(Vec::<u8>::new()).simplified_sop, "0");
    assert_eq!(simplify([0, 1, 2, 3, 4, 5, 6, 7]).simplified_sop, "1");
    assert_eq!(simplify_with([0, 1, 2, 3, 4, 5, 6, 7], &strict_config()).simplified_sop, "1");
}

// Default expression

#[test]
fn test_default_sop_has_one_term_per_minterm() {
    for mask in all_masks().filter(|m| !m.is_empty() && !m.is_full()) {
        let report = simplify(minterms_of(mask));
        let terms: Vec<&str> = report.default_sop.split('+').collect();
        assert_eq!(terms.len() as u32, mask.count());
        for term in terms {
            assert_eq!(term.chars().filter(|c| c.is_ascii_uppercase()).count(), 3);
        }
    }
}

// Grouping

#[test]
fn test_quad_detection_is_order_independent() {
    assert_eq!(simplify([0, 1, 4, 5]).simplified_sop, "B'");
    assert_eq!(simplify([5, 1, 4, 0]).simplified_sop, "B'");
    assert_eq!(simplify([4, 4, 0, 5, 1]).simplified_sop, "B'");
}

#[test]
fn test_every_single_literal_function() {
    let cases = [
        ([0, 1, 2, 3], "A'"),
        ([4, 5, 6, 7], "A"),
        ([0, 1, 4, 5], "B'"),
        ([2, 3, 6, 7], "B"),
        ([0, 2, 4, 6], "C'"),
        ([1, 3, 5, 7], "C"),
    ];
    for (minterms, expected) in cases {
        assert_eq!(simplify(minterms).simplified_sop, expected);
    }
}

#[test]
fn test_pair_policy_for_first_three_minterms() {
    // Cells 000, 001, 010: A'B' absorbs 0 and 1, leaving 2
    assert_eq!(simplify([0, 1, 2]).simplified_sop, "A'B'+A'C'");
    assert_eq!(
        simplify_with([0, 1, 2], &strict_config()).simplified_sop,
        "A'B'+A'BC'"
    );
}

#[test]
fn test_strict_pairs_never_share_cells() {
    let simplifier = Simplifier::new(strict_config());
    for mask in all_masks() {
        for step in simplifier.trace(mask) {
            if step.tier == Tier::Pair {
                assert_eq!(step.newly_covered.count(), 2, "{} overlaps in {}", step.term, mask);
            }
        }
    }
}

#[test]
fn test_lenient_pairs_always_add_a_cell() {
    for mask in all_masks() {
        for step in Simplifier::default().trace(mask) {
            if matches!(step.tier, Tier::Pair | Tier::Single) {
                assert!(step.newly_covered.count() >= 1);
            }
        }
    }
}

#[test]
fn test_tiers_are_emitted_in_order() {
    fn rank(tier: Tier) -> u8 {
        match tier {
            Tier::Constant => 0,
            Tier::Quad => 1,
            Tier::Pair => 2,
            Tier::Single => 3,
        }
    }
    for mask in all_masks() {
        let ranks: Vec<u8> = Simplifier::default()
            .trace(mask)
            .iter()
            .map(|s| rank(s.tier))
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{}", mask);
    }
}

// Idempotence and untrusted input

#[test]
fn test_repeat_calls_are_identical() {
    let noisy = [3, 3, 9, -1, 5, 7, 3, 100];
    let first = simplify(noisy);
    let second = simplify(noisy);
    assert_eq!(first, second);
    assert_eq!(first.mask, MintermMask::from_minterms([3, 5, 7]));
    assert_eq!(first.simplified_sop, "AC+BC");
}

#[test]
fn test_line_input_matches_values() {
    let from_line = input::parse_minterms("1 3 4 5 7");
    assert_eq!(
        simplify(minterms_of(from_line)).simplified_sop,
        simplify([1, 3, 4, 5, 7]).simplified_sop
    );
    assert_eq!(simplify([1, 3, 4, 5, 7]).simplified_sop, "C+AB'");
}

// Truth table

#[test]
fn test_truth_table_round_trip() {
    for mask in all_masks() {
        let report = simplify(minterms_of(mask));
        for (i, row) in report.truth_table.rows().iter().enumerate() {
            let i = i as u8;
            assert_eq!(row.a, (i >> 2) & 1 == 1);
            assert_eq!(row.b, (i >> 1) & 1 == 1);
            assert_eq!(row.c, i & 1 == 1);
        }
        assert_eq!(report.truth_table.to_mask(), mask);
    }
}
