mod cli;
mod config;
mod controller;
mod logging;
mod model;
mod storage;
mod tui;

use std::process;

fn main() {
    if let Err(e) = cli::run() {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
