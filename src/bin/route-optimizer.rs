use std::process;

use route_optimizer::runner;

fn main() {
    // `run` has already reported the failure.
    if runner::run().is_err() {
        process::exit(1);
    }
}
