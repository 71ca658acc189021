//! iconprep CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the job, and print
//! the outcome. Processing failures are reported as text and do not change
//! the exit status. For programmatic use, prefer the library API
//! (`iconprep::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
