//! Input sources that turn raw user input into minterm masks
//!
//! Two front ends are supported: a line of decimal minterm numbers, as typed into
//! a serial console, and a matrix keypad delivering one key at a time with `#`
//! as the submit key.

use std::sync::Arc;

use log::{debug, trace};

use crate::error::InputError;
use crate::mask::{Cell, MintermMask};

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

/// Read one token as a cell; both line parsers agree on what a minterm is
fn cell_of(token: &str, position: usize) -> Result<Cell, InputError> {
    let value: i64 = token.parse().map_err(|_| InputError::NotANumber {
        token: Arc::from(token),
        position,
    })?;
    u8::try_from(value)
        .ok()
        .and_then(Cell::new)
        .ok_or(InputError::OutOfRange { value, position })
}

/// Parse a line of minterm numbers, dropping anything that is not one
///
/// Non-numeric and out-of-range tokens are ignored and duplicates are harmless,
/// so this never fails.
///
/// # Examples
///
/// ```
/// use kmap_logic::input::parse_minterms;
///
/// let mask = parse_minterms("1 3 x 9 3, 5");
/// assert_eq!(mask.bits(), 0b0010_1010);
/// ```
pub fn parse_minterms(line: &str) -> MintermMask {
    let mut ignored = 0usize;
    let mask: MintermMask = tokens(line)
        .enumerate()
        .filter_map(|(position, token)| {
            let cell = cell_of(token, position).ok();
            if cell.is_none() {
                ignored += 1;
            }
            cell
        })
        .collect();
    if ignored > 0 {
        debug!("ignored {} malformed minterm tokens in {:?}", ignored, line);
    }
    mask
}

/// Parse a line of minterm numbers, rejecting the first malformed token
///
/// Accepts exactly the tokens [`parse_minterms`] keeps. Duplicates are still
/// accepted.
pub fn parse_minterms_strict(line: &str) -> Result<MintermMask, InputError> {
    tokens(line)
        .enumerate()
        .map(|(position, token)| cell_of(token, position))
        .collect()
}

/// Result of a single keypad press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A minterm digit was recorded
    Accepted(Cell),
    /// The key has no effect (digits 8 and 9, `*`, unknown keys, or a full buffer)
    Ignored,
    /// `#` was pressed; the buffer is handed over and cleared
    Submitted(MintermMask),
}

/// Accumulates minterm digits from a 4x3 matrix keypad
///
/// At most [`Keypad::CAPACITY`] digits are held; further digits are ignored until
/// the buffer is submitted or cleared.
///
/// # Examples
///
/// ```
/// use kmap_logic::input::{Keypad, KeyOutcome};
/// use kmap_logic::MintermMask;
///
/// let mut keypad = Keypad::new();
/// for key in "0159".chars() {
///     keypad.press(key);
/// }
/// assert_eq!(
///     keypad.press('#'),
///     KeyOutcome::Submitted(MintermMask::from_minterms([0, 1, 5]))
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Keypad {
    entries: Vec<Cell>,
}

impl Keypad {
    /// Maximum number of digits held before submission
    pub const CAPACITY: usize = 8;
    /// The key that submits the buffer
    pub const SUBMIT: char = '#';

    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one key press
    pub fn press(&mut self, key: char) -> KeyOutcome {
        if key == Self::SUBMIT {
            let mask: MintermMask = self.entries.drain(..).collect();
            debug!("keypad submitted {}", mask);
            return KeyOutcome::Submitted(mask);
        }
        let cell = key
            .to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .and_then(Cell::new);
        match cell {
            Some(cell) if self.entries.len() < Self::CAPACITY => {
                trace!("keypad accepted {}", cell);
                self.entries.push(cell);
                KeyOutcome::Accepted(cell)
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Digits entered so far, in press order
    pub fn entries(&self) -> &[Cell] {
        &self.entries
    }

    /// Discard the buffer without submitting
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
