//! PLA (Programmable Logic Array) format support
//!
//! Covers are written as Berkeley PLA text with three inputs labelled `A B C` and
//! a single output `F`. Reading accepts any three-input, one-output PLA and keeps
//! its ON-set as a [`MintermMask`].

pub mod error;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::cover::{Cover, Term, VARIABLES};
use crate::error::KmapError;
use crate::mask::MintermMask;
use error::PLAError;

const NUM_INPUTS: usize = 3;
const NUM_OUTPUTS: usize = 1;
const OUTPUT_LABEL: &str = "F";

/// Types that can be written as a single-output PLA
pub trait PLAWriter {
    /// Write this value in PLA format to any `Write` implementation
    ///
    /// Both `to_pla_string` and `to_pla_file` delegate to this method.
    fn write_pla<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    fn to_pla_string(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.write_pla(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn to_pla_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_pla(&mut writer)?;
        writer.flush()
    }
}

/// Types that can be recovered from a PLA document
///
/// Format problems surface as [`KmapError::PLA`], failed reads as [`KmapError::Io`].
pub trait PLAReader: Sized {
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, KmapError>;

    /// Parse from a PLA format string
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::{MintermMask, PLAReader};
    ///
    /// let pla = ".i 3\n.o 1\n.p 2\n0-0 1\n111 1\n.e\n";
    /// let mask = MintermMask::from_pla_string(pla).unwrap();
    /// assert_eq!(mask, MintermMask::from_minterms([0, 2, 7]));
    /// ```
    fn from_pla_string(s: &str) -> Result<Self, KmapError> {
        Self::from_pla_reader(io::Cursor::new(s.as_bytes()))
    }

    fn from_pla_file<P: AsRef<Path>>(path: P) -> Result<Self, KmapError> {
        let file = File::open(path)?;
        Self::from_pla_reader(BufReader::new(file))
    }
}

impl PLAWriter for Cover {
    fn write_pla<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, ".i {}", NUM_INPUTS)?;
        write!(writer, ".ilb")?;
        for name in VARIABLES {
            write!(writer, " {}", name)?;
        }
        writeln!(writer)?;
        writeln!(writer, ".o {}", NUM_OUTPUTS)?;
        writeln!(writer, ".ob {}", OUTPUT_LABEL)?;

        // Constant 0 has no cubes; constant 1 is the all don't-care cube
        let cubes: Vec<[Option<bool>; 3]> = self
            .iter()
            .filter_map(|term| match term {
                Term::Constant(false) => None,
                Term::Constant(true) => Some([None; 3]),
                Term::Product(literals) => Some(*literals),
            })
            .collect();

        writeln!(writer, ".p {}", cubes.len())?;
        for cube in cubes {
            for literal in cube {
                write!(
                    writer,
                    "{}",
                    match literal {
                        Some(false) => '0',
                        Some(true) => '1',
                        None => '-',
                    }
                )?;
            }
            writeln!(writer, " 1")?;
        }
        writeln!(writer, ".e")?;
        Ok(())
    }
}

impl PLAReader for MintermMask {
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, KmapError> {
        let mut num_inputs: Option<usize> = None;
        let mut num_outputs: Option<usize> = None;
        let mut mask = MintermMask::EMPTY;
        let mut num_cubes = 0usize;

        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            let line_no = line_idx + 1;

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('.') {
                let mut parts = line.split_whitespace();
                match parts.next() {
                    Some(".i") => num_inputs = Some(parse_count(".i", parts.next())?),
                    Some(".o") => num_outputs = Some(parse_count(".o", parts.next())?),
                    Some(".e") | Some(".end") => break,
                    // .p, .ilb, .ob, .type carry nothing the ON-set needs
                    _ => {}
                }
                continue;
            }

            // Inputs and outputs, optionally separated by whitespace or '|'
            let fields: Vec<&str> = line
                .split(|c: char| c.is_whitespace() || c == '|')
                .filter(|field| !field.is_empty())
                .collect();

            if let [inputs, outputs] = fields.as_slice() {
                num_inputs.get_or_insert(inputs.chars().count());
                num_outputs.get_or_insert(outputs.chars().count());
            }
            check_dimensions(num_inputs, num_outputs)?;

            let cube: Vec<char> = fields.concat().chars().collect();
            if cube.len() != NUM_INPUTS + NUM_OUTPUTS {
                let (inputs, outputs) = match fields.as_slice() {
                    [inputs, outputs] => (inputs.chars().count(), outputs.chars().count()),
                    _ => (cube.len(), 0),
                };
                return Err(PLAError::CubeDimensionMismatch {
                    line: line_no,
                    inputs,
                    outputs,
                }
                .into());
            }

            let invalid = |column: usize| PLAError::InvalidCharacter {
                line: line_no,
                column,
                character: cube[column],
            };

            let mut literals = [None; NUM_INPUTS];
            for (column, literal) in literals.iter_mut().enumerate() {
                *literal = match cube[column] {
                    '0' => Some(false),
                    '1' => Some(true),
                    '-' | '~' | 'x' | 'X' | '2' => None,
                    _ => return Err(invalid(column).into()),
                };
            }

            // Only ON-set rows contribute; OFF and don't-care rows are skipped
            let on = match cube[NUM_INPUTS] {
                '1' | '4' => true,
                '0' | '3' | '-' | '2' | '~' => false,
                _ => return Err(invalid(NUM_INPUTS).into()),
            };

            num_cubes += 1;
            if on {
                mask = mask | Term::Product(literals).mask();
            }
        }

        check_dimensions(num_inputs, num_outputs)?;
        debug!("read {} PLA cubes covering {}", num_cubes, mask);
        Ok(mask)
    }
}

fn parse_count(directive: &'static str, value: Option<&str>) -> Result<usize, PLAError> {
    let value = value.unwrap_or("");
    value.parse().map_err(|_| PLAError::InvalidDirective {
        directive,
        value: Arc::from(value),
    })
}

/// Require known dimensions describing a three-input, single-output function
fn check_dimensions(
    num_inputs: Option<usize>,
    num_outputs: Option<usize>,
) -> Result<(), PLAError> {
    let inputs = num_inputs.ok_or(PLAError::MissingDirective { directive: ".i" })?;
    let outputs = num_outputs.ok_or(PLAError::MissingDirective { directive: ".o" })?;
    if inputs != NUM_INPUTS || outputs != NUM_OUTPUTS {
        return Err(PLAError::UnsupportedDimensions { inputs, outputs });
    }
    Ok(())
}
