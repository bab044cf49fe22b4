mod cli;
mod commands;
mod config;
mod element;
mod env;
mod error;
mod filter;
mod host;
mod i18n;
mod logging;
mod output;
mod selection;
mod session;

use clap::Parser;
use error::formatter::ErrorFormatter;

fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose;
    logging::init(verbose);

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{}", ErrorFormatter::new(verbose).format(&err));
        std::process::exit(1);
    }
}
