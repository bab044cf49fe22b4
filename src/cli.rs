use clap::{Parser, Subcommand};

use crate::commands::{filter, list, messages};

#[derive(Debug, Parser)]
#[command(name = "elfilter")]
#[command(about = "Activate model elements whose names match a search text", long_about = None)]
pub struct Cli {
    /// Verbose logging and detailed error output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter elements by name and activate the matches
    Filter(filter::Args),

    /// List the elements of a model snapshot
    List(list::Args),

    /// Show the localized user messages
    Messages(messages::Args),
}
