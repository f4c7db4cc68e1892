// vidlen-cli/src/main.rs
//
// Entry point for the vidlen binary: parse arguments, set up logging, run
// the report and print it. Per-file problems only show up as "???" in the
// report; anything that stops the report from being produced is printed to
// stderr and exits with status 1.

use clap::Parser;
use console::style;
use std::process;
use vidlen_cli::{Cli, logging, run_report};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run_report(&cli) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold().for_stderr(), e);
            process::exit(1);
        }
    }
}
