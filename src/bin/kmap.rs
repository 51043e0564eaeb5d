//! Karnaugh map simplifier - Command Line Interface
//!
//! Simplifies minterms given on the command line, from an expression, from a PLA
//! file, or interactively one line at a time from standard input.

use clap::{ArgAction, Parser, ValueEnum};
use kmap_logic::input::{parse_minterms, parse_minterms_strict};
use kmap_logic::{
    KmapError, MintermMask, PLAReader, PLAWriter, PairPolicy, Report, Simplifier, SimplifyConfig,
    Sop,
};
use log::{debug, info, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Emit a pair only if both of its cells are uncovered
    Strict,
    /// Emit a pair if at least one of its cells is uncovered (default)
    Lenient,
}

impl From<Policy> for PairPolicy {
    fn from(val: Policy) -> Self {
        match val {
            Policy::Strict => PairPolicy::Strict,
            Policy::Lenient => PairPolicy::Lenient,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Truth table and expressions
    Text,
    /// Simplified cover as a PLA
    Pla,
}

#[derive(Parser, Debug)]
#[command(name = "kmap")]
#[command(about = "Three-variable Karnaugh map simplifier", long_about = None)]
#[command(version)]
struct Args {
    /// Minterms (0-7); lines are read from stdin when no input is given
    #[arg(value_name = "MINTERM", allow_negative_numbers = true)]
    minterms: Vec<String>,

    /// Take the function from a sum-of-products expression
    #[arg(short = 'e', long = "expr", value_name = "SOP", conflicts_with_all = ["minterms", "pla"])]
    expr: Option<String>,

    /// Take the function from the ON-set of a PLA file
    #[arg(short = 'p', long = "pla", value_name = "FILE", conflicts_with = "minterms")]
    pla: Option<PathBuf>,

    /// Pair emission policy
    #[arg(long = "policy", value_enum, default_value = "lenient")]
    policy: Policy,

    /// Separate terms with " + " instead of "+"
    #[arg(long = "spaced")]
    spaced: bool,

    /// Reject malformed minterm tokens instead of ignoring them
    #[arg(long = "strict-input")]
    strict_input: bool,

    /// Print which tier produced each term
    #[arg(short = 'x', long = "explain")]
    explain: bool,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    format: OutputFormat,

    /// Output file (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> SimplifyConfig {
        let config = SimplifyConfig::default().with_pair_policy(self.policy.into());
        if self.spaced {
            config.with_separator(" + ")
        } else {
            config
        }
    }

    fn parse_line(&self, line: &str) -> Result<MintermMask, KmapError> {
        if self.strict_input {
            Ok(parse_minterms_strict(line)?)
        } else {
            Ok(parse_minterms(line))
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // Logs go to stderr so PLA output on stdout stays clean
    if let Err(e) = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Warning: could not initialise logging: {}", e);
    }
}

fn write_result<W: Write>(
    out: &mut W,
    args: &Args,
    simplifier: &Simplifier,
    mask: MintermMask,
) -> Result<(), KmapError> {
    let report = Report::from_mask(mask, simplifier.config());
    info!("{} -> {}", mask, report.simplified_sop);

    match args.format {
        OutputFormat::Text => {
            writeln!(out, "{}", report)?;
            if args.explain {
                writeln!(out)?;
                writeln!(out, "----------- GROUPING -----------")?;
                for step in simplifier.trace(mask) {
                    writeln!(
                        out,
                        "{:<8} {:<7} covers {}",
                        step.tier.to_string(),
                        step.term.to_string(),
                        step.newly_covered
                    )?;
                }
            }
        }
        OutputFormat::Pla => report.cover.write_pla(out)?,
    }
    Ok(())
}

/// Serial-console style loop: one line of minterms in, one report out
fn interactive<W: Write>(
    out: &mut W,
    args: &Args,
    simplifier: &Simplifier,
) -> Result<(), KmapError> {
    writeln!(out, "--- 3-Variable Boolean Simplifier (A,B,C) ---")?;
    writeln!(out, "Enter minterms (0-7) separated by spaces, then press ENTER.")?;
    writeln!(out, "Example: 1 3 4 5 7")?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match args.parse_line(line.trim()) {
            Ok(mask) => {
                writeln!(out)?;
                write_result(out, args, simplifier, mask)?;
                writeln!(out)?;
                writeln!(out, "---------------------------------")?;
            }
            Err(e) => eprintln!("Error: {}", e),
        }
        writeln!(out, "Enter new minterms:")?;
        out.flush()?;
    }
    debug!("input closed");
    Ok(())
}

fn run(args: &Args) -> Result<(), KmapError> {
    let simplifier = Simplifier::new(args.config());

    let mut out: Box<dyn Write> = match &args.output_file {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };

    let mask = if let Some(expr) = &args.expr {
        Some(Sop::parse(expr)?.mask())
    } else if let Some(path) = &args.pla {
        Some(MintermMask::from_pla_file(path)?)
    } else if !args.minterms.is_empty() {
        Some(args.parse_line(&args.minterms.join(" "))?)
    } else {
        None
    };

    match mask {
        Some(mask) => write_result(&mut out, args, &simplifier, mask)?,
        None => interactive(&mut out, args, &simplifier)?,
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
