//! Example: Driving the simplifier from a matrix keypad
//!
//! Simulates key presses on a 4x3 keypad. Digits 0-7 are collected, `#` submits
//! the buffer and the resulting report is printed the way a character display
//! front end would show it.

use kmap_logic::input::{KeyOutcome, Keypad};
use kmap_logic::{Report, SimplifyConfig};

fn main() {
    println!("=== Keypad Entry Example ===\n");

    let config = SimplifyConfig::default();
    let mut keypad = Keypad::new();

    // 8 and 9 are not minterms of a three-variable map and are ignored
    let presses = "0189#134567#2#";

    for key in presses.chars() {
        match keypad.press(key) {
            KeyOutcome::Accepted(cell) => println!("key {:?} -> {}", key, cell),
            KeyOutcome::Ignored => println!("key {:?} ignored", key),
            KeyOutcome::Submitted(mask) => {
                println!("key {:?} submits {}\n", key, mask);
                let report = Report::from_mask(mask, &config);
                println!("{}\n", report);
                println!("F = {}", report.simplified_sop);
                println!("---------------------------------");
            }
        }
    }
}
