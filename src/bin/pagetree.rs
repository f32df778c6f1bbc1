//! PageTree CLI Binary
//!
//! Command-line entry point for page tree generation.

use clap::Parser;
use pagetree::logging;
use pagetree::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let context = CliContext::new(cli.root, cli.output, cli.preview);

    match context.execute() {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
