//! Minterm masks over the eight cells of a three-variable Karnaugh map
//!
//! Cell `i` encodes the input combination `A·4 + B·2 + C`, so `A` is the most
//! significant bit. A [`MintermMask`] holds one presence bit per cell and a
//! [`Coverage`] tracks which of those cells an emitted term has absorbed.

use std::fmt;
use std::ops::{BitAnd, BitOr};

/// A single cell of the map, always in `0..=7`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// All eight cells in ascending index order
    pub const ALL: [Cell; 8] = [
        Cell(0),
        Cell(1),
        Cell(2),
        Cell(3),
        Cell(4),
        Cell(5),
        Cell(6),
        Cell(7),
    ];

    /// Create a cell from its index, or `None` if the index is outside `0..=7`
    pub fn new(index: u8) -> Option<Self> {
        (index < 8).then_some(Cell(index))
    }

    /// The cell index in `0..=7`
    pub fn index(self) -> u8 {
        self.0
    }

    /// The mask bit for this cell (`1 << index`)
    pub fn bit(self) -> u8 {
        1 << self.0
    }

    /// Value of variable `A` in this cell
    pub fn a(self) -> bool {
        (self.0 >> 2) & 1 == 1
    }

    /// Value of variable `B` in this cell
    pub fn b(self) -> bool {
        (self.0 >> 1) & 1 == 1
    }

    /// Value of variable `C` in this cell
    pub fn c(self) -> bool {
        self.0 & 1 == 1
    }

    /// Variable values as an `(A, B, C)` triple
    pub fn values(self) -> [bool; 3] {
        [self.a(), self.b(), self.c()]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// The set of cells where the function is `1`
///
/// Every `u8` is a valid mask, so the type is total over `0..=255`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MintermMask(u8);

impl MintermMask {
    /// The constant-0 function
    pub const EMPTY: MintermMask = MintermMask(0x00);
    /// The constant-1 function
    pub const FULL: MintermMask = MintermMask(0xFF);

    /// Wrap raw mask bits
    pub const fn from_bits(bits: u8) -> Self {
        MintermMask(bits)
    }

    /// Raw mask bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build a mask from untrusted minterm values
    ///
    /// Values outside `0..=7` are ignored and duplicates have no effect. An empty
    /// sequence yields [`MintermMask::EMPTY`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::MintermMask;
    ///
    /// let mask = MintermMask::from_minterms([1, 3, 3, 9, -2, 5]);
    /// assert_eq!(mask.bits(), 0b0010_1010);
    /// ```
    pub fn from_minterms<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: TryInto<u8>,
    {
        values
            .into_iter()
            .filter_map(|value| value.try_into().ok())
            .filter_map(Cell::new)
            .collect()
    }

    /// Whether the function is `1` at `cell`
    pub fn contains(self, cell: Cell) -> bool {
        self.0 & cell.bit() != 0
    }

    /// Set the bit for `cell`
    pub fn insert(&mut self, cell: Cell) {
        self.0 |= cell.bit();
    }

    /// Whether every bit of `other` is also set in `self`
    pub fn contains_all(self, other: MintermMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of set cells
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_full(self) -> bool {
        self.0 == 0xFF
    }

    /// Iterate over the set cells in ascending index order
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        Cell::ALL.into_iter().filter(move |&cell| self.contains(cell))
    }
}

impl From<u8> for MintermMask {
    fn from(bits: u8) -> Self {
        MintermMask(bits)
    }
}

impl From<MintermMask> for u8 {
    fn from(mask: MintermMask) -> Self {
        mask.0
    }
}

impl FromIterator<Cell> for MintermMask {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut mask = MintermMask::EMPTY;
        for cell in iter {
            mask.insert(cell);
        }
        mask
    }
}

impl BitOr for MintermMask {
    type Output = MintermMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        MintermMask(self.0 | rhs.0)
    }
}

impl BitAnd for MintermMask {
    type Output = MintermMask;

    fn bitand(self, rhs: Self) -> Self::Output {
        MintermMask(self.0 & rhs.0)
    }
}

/// Formats as the minterm list notation, e.g. `Σm(1,3,5)`
impl fmt::Display for MintermMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Σm(")?;
        for (i, cell) in self.cells().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", cell.index())?;
        }
        write!(f, ")")
    }
}

/// Cells already absorbed into an emitted term during one simplification pass
///
/// Coverage is scoped to a single mask: bits outside it are never recorded, which
/// keeps `coverage ⊆ mask` for the lifetime of the pass. Bits only ever turn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage {
    mask: MintermMask,
    covered: u8,
}

impl Coverage {
    /// Start an empty coverage bitmap for `mask`
    pub fn new(mask: MintermMask) -> Self {
        Coverage { mask, covered: 0 }
    }

    /// Mark the cells in `bits` as covered, returning the bits that were newly covered
    pub fn cover(&mut self, bits: u8) -> u8 {
        debug_assert!(
            self.mask.bits() & bits == bits,
            "covering cells {:#010b} outside mask {:#010b}",
            bits,
            self.mask.bits()
        );
        let fresh = bits & self.mask.bits() & !self.covered;
        self.covered |= fresh;
        fresh
    }

    pub fn is_covered(&self, cell: Cell) -> bool {
        self.covered & cell.bit() != 0
    }

    /// The subset of `bits` not yet covered
    pub fn uncovered_in(&self, bits: u8) -> u8 {
        bits & !self.covered
    }

    /// Covered cells as a mask
    pub fn covered(&self) -> MintermMask {
        MintermMask(self.covered)
    }

    /// Whether every cell of the mask has been covered
    pub fn is_complete(&self) -> bool {
        self.covered == self.mask.bits()
    }
}
