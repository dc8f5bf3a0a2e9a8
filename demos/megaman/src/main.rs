//! Blinking Platforms Example
//!
//! Each argument is a level: `x` is a platform, `.` is a gap and the digits
//! `1`-`5` are platforms that vanish for that many steps and come back for
//! one. The actor starts on the first cell, may move at most two cells per
//! step and must reach the last cell.
//!
//! ```text
//! cargo run -p megaman -- x.x xx x1x
//! ```

use blinkpath::prelude::*;

fn print_outcome(raw: &str, outcome: &Outcome) {
    println!("\nLevel {raw:?}");
    match outcome {
        Outcome::Completed(traversal) if traversal.is_empty() => {
            println!("Already complete: nothing to traverse.");
        }
        Outcome::Completed(traversal) => {
            if let Some(step) = traversal.completed_at() {
                println!("Goal reached at step {step}.");
            }
            println!("Trace: {traversal}");
            print!("{}", traversal.render_grid());
        }
        Outcome::Unreachable { horizon } => {
            println!("No traversal within {horizon}.");
        }
    }
}

fn main() {
    println!("Blinking Platforms Example");
    println!("==========================");

    let mut levels: Vec<String> = std::env::args().skip(1).collect();
    if levels.is_empty() {
        levels.push("x.x".to_string());
    }

    for raw in &levels {
        match solve_level(raw) {
            Ok(outcome) => print_outcome(raw, &outcome),
            Err(err) => eprintln!("\nLevel {raw:?}: {err}"),
        }
    }
}
