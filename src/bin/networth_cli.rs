use std::{env, process};

use networth::{cli, errors::DashboardError};

fn main() {
    networth::init();
    if let Err(err) = cli::run(env::args().skip(1)) {
        eprintln!("Error: {err}");
        if matches!(err, DashboardError::Usage(_)) {
            eprintln!("{}", cli::USAGE);
        }
        process::exit(1);
    }
}
