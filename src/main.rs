//! pushlog main entrypoint.

use pushlog::run;
use pushlog::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
