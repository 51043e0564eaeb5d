//! The complete result of one simplification request

use std::fmt;

use crate::cover::Cover;
use crate::mask::MintermMask;
use crate::render::Renderer;
use crate::simplify::Simplifier;
use crate::truth_table::TruthTable;
use crate::SimplifyConfig;

/// Truth table, unsimplified and simplified expressions of one function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The function's ON-set
    pub mask: MintermMask,
    /// One row per cell
    pub truth_table: TruthTable,
    /// Every set minterm joined with the separator, or `0`
    pub default_sop: String,
    /// The rendered simplifier output
    pub simplified_sop: String,
    /// The simplifier output as terms
    pub cover: Cover,
}

impl Report {
    /// Build the report for an existing mask
    pub fn from_mask(mask: MintermMask, config: &SimplifyConfig) -> Self {
        let renderer = Renderer::with_separator(config.separator.as_str());
        let cover = Simplifier::new(config.clone()).simplify(mask);
        Report {
            mask,
            truth_table: TruthTable::from_mask(mask),
            default_sop: renderer.render_default(mask),
            simplified_sop: renderer.render(cover.terms()),
            cover,
        }
    }
}

/// Formats the report the way the interactive front end prints it
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.truth_table)?;
        writeln!(f)?;
        writeln!(f, "----------- EXPRESSIONS -----------")?;
        writeln!(f, "Default SOP: F = {}", self.default_sop)?;
        write!(f, "Simplified:  F = {}", self.simplified_sop)
    }
}

/// Simplify untrusted minterm values with the default configuration
///
/// Values outside `0..=7` are ignored and duplicates have no effect.
///
/// # Examples
///
/// ```
/// let report = kmap_logic::simplify([0, 1, 4, 5]);
/// assert_eq!(report.default_sop, "A'B'C'+A'B'C+AB'C'+AB'C");
/// assert_eq!(report.simplified_sop, "B'");
/// ```
pub fn simplify<I, T>(values: I) -> Report
where
    I: IntoIterator<Item = T>,
    T: TryInto<u8>,
{
    simplify_with(values, &SimplifyConfig::default())
}

/// Simplify untrusted minterm values with an explicit configuration
pub fn simplify_with<I, T>(values: I, config: &SimplifyConfig) -> Report
where
    I: IntoIterator<Item = T>,
    T: TryInto<u8>,
{
    Report::from_mask(MintermMask::from_minterms(values), config)
}
