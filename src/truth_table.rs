//! Truth tables of three-variable functions

use std::fmt;

use crate::mask::{Cell, MintermMask};

/// One row of the truth table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub a: bool,
    pub b: bool,
    pub c: bool,
    /// Function value
    pub f: bool,
}

impl Row {
    /// The cell this row describes
    pub fn cell(&self) -> Cell {
        Cell::ALL[(usize::from(self.a) << 2) | (usize::from(self.b) << 1) | usize::from(self.c)]
    }
}

/// All eight rows of a function, row `i` describing cell `i`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthTable {
    rows: [Row; 8],
}

impl TruthTable {
    pub fn from_mask(mask: MintermMask) -> Self {
        let rows = Cell::ALL.map(|cell| Row {
            a: cell.a(),
            b: cell.b(),
            c: cell.c(),
            f: mask.contains(cell),
        });
        TruthTable { rows }
    }

    pub fn rows(&self) -> &[Row; 8] {
        &self.rows
    }

    /// Rebuild the mask from the `F` column
    pub fn to_mask(&self) -> MintermMask {
        self.rows
            .iter()
            .filter(|row| row.f)
            .map(Row::cell)
            .collect()
    }
}

impl From<MintermMask> for TruthTable {
    fn from(mask: MintermMask) -> Self {
        TruthTable::from_mask(mask)
    }
}

const RULE: &str = "---------------------------------";

/// Formats the table as printed by the interactive front end
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------- TRUTH TABLE -----------")?;
        writeln!(f, " A B C | F")?;
        writeln!(f, "{}", RULE)?;
        for row in &self.rows {
            writeln!(
                f,
                " {} {} {} | {}",
                u8::from(row.a),
                u8::from(row.b),
                u8::from(row.c),
                u8::from(row.f)
            )?;
        }
        write!(f, "{}", RULE)
    }
}
