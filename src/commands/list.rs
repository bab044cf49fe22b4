//! elfilter list コマンド
//!
//! モデルスナップショットの要素を一覧表示する。

use crate::error::Result;
use crate::host::ModelFileHost;
use crate::output::element_table;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Model snapshot (JSON)
    #[arg(long)]
    pub model: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show only active elements
    #[arg(long)]
    pub active: bool,
}

pub fn run(args: Args) -> Result<()> {
    let host = ModelFileHost::load(&args.model)?;
    let elements: Vec<_> = host
        .elements()
        .iter()
        .filter(|e| !args.active || e.active)
        .cloned()
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&elements)?);
        return Ok(());
    }

    if elements.is_empty() {
        println!("No elements");
        return Ok(());
    }

    println!("{}", element_table(&elements));
    println!("Total: {} element(s)", elements.len());
    Ok(())
}
