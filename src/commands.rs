use crate::cli::{Cli, Command};
use crate::error::Result;

pub mod filter;
pub mod list;
pub mod messages;

pub fn dispatch(cli: Cli) -> Result<()> {
    let verbose = cli.verbose;
    match cli.command {
        Command::Filter(args) => filter::run(args, verbose),
        Command::List(args) => list::run(args),
        Command::Messages(args) => messages::run(args),
    }
}
