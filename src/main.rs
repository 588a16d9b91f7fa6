//! Reads one hand from stdin and prints its name.

use std::io::{self, BufRead};

use tracing::warn;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_line() -> String {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line);
    if let Err(err) = read {
        warn!(%err, "failed to read input");
        line.clear();
    }
    line.trim_end_matches(['\r', '\n']).to_owned()
}

fn main() {
    init_logging();

    eprintln!("Enter your hand (e.g., AS,3S,5S,9S,KS):");
    let input = read_line();
    println!("{}", handname::get_hand_name(&input));
}
