//! Build a phreatic line and a berm on a random levee and print the results.
//!
//! Usage:
//!   cargo run -p levee --example berm_demo -- [seed]

use levee::prelude::*;
use levee::section::rand::{draw_levee, LeveeCfg};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let cs = match draw_levee(&LeveeCfg::default(), seed) {
        Ok(cs) => cs,
        Err(err) => {
            eprintln!("cannot build levee: {err}");
            return;
        }
    };
    println!("levee {} top = {:.2}", cs.name(), cs.top());
    for p in cs.surface() {
        println!("  surface ({:8.3}, {:7.3})", p.x, p.y);
    }

    let pl = PhreaticLine::new(0.7 * cs.top(), -0.5);
    match pl.execute(&cs) {
        Ok(with_line) => {
            for p in with_line.phreatic_line_points() {
                println!("  phreatic ({:8.3}, {:7.3})", p.x, p.y);
            }
        }
        Err(err) => eprintln!("phreatic line failed: {err}"),
    }

    let berm = Berm::new(
        "clay",
        BermParams {
            width: 8.0,
            height: 0.4 * cs.top(),
            ..BermParams::default()
        },
    );
    match berm.execute(&cs) {
        Ok(out) => {
            for layer in &out.layers()[cs.layers().len()..] {
                println!("  berm layer with {} points", layer.points.len());
            }
        }
        Err(err) => eprintln!("berm failed: {err}"),
    }
}
