//! rShiftPlanner main entrypoint.

use rshiftplanner::run;

fn main() {
    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
