//! rTracker main entrypoint.

use rtracker::run;
use rtracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
