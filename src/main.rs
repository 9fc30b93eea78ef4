//! ojtlogger main entrypoint.

use ojtlogger::run;
use ojtlogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
