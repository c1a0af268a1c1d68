//! rMonitorias main entrypoint.

use rmonitorias::{init_logging, run};

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
