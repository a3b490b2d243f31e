//! rTurnos main entrypoint.

use rturnos::run;
use rturnos::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
