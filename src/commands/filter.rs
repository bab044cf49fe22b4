//! elfilter filter コマンド
//!
//! モデルスナップショットに対して絞り込みを1回実行し、表示状態を書き戻す。

use crate::config::Config;
use crate::env::EnvVar;
use crate::error::Result;
use crate::filter::EmptyTermPolicy;
use crate::host::{ModelFileHost, TerminalPrompt};
use crate::output::OutcomeSummary;
use crate::session::{FilterSession, Outcome, SessionOptions};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Model snapshot (JSON)
    #[arg(long)]
    pub model: PathBuf,

    /// Search text; prompts on stdin when omitted
    #[arg(long, short)]
    pub query: Option<String>,

    /// Answer "yes" to the active-elements question
    #[arg(long, conflicts_with = "no")]
    pub yes: bool,

    /// Answer "no" to the active-elements question
    #[arg(long)]
    pub no: bool,

    /// Message language (en, de, fr, es)
    #[arg(long)]
    pub lang: Option<String>,

    /// Delimiter pattern (regular expression)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Keep empty search terms produced by adjacent delimiters
    #[arg(long)]
    pub keep_empty_terms: bool,

    /// Leave elements inactive when the search is cancelled
    #[arg(long)]
    pub no_restore: bool,

    /// Do not write the resulting state back to the model file
    #[arg(long)]
    pub dry_run: bool,

    /// Configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// はい/いいえの事前回答
    fn preset_answer(&self) -> Option<bool> {
        match (self.yes, self.no) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

pub fn run(args: Args, verbose: bool) -> Result<()> {
    let config = apply_overrides(Config::load(args.config.as_deref())?, &args);
    let messages = config.messages()?;
    let options = SessionOptions {
        pattern: config.pattern.clone(),
        empty_terms: config.empty_terms,
        restore_on_cancel: config.restore_on_cancel,
    };

    let mut host = ModelFileHost::load(&args.model)?;
    let use_color = io::stdout().is_terminal() && EnvVar::get("NO_COLOR").is_none();
    let mut prompt = TerminalPrompt::new(io::stdin().lock(), io::stdout())
        .with_answer(args.preset_answer())
        .with_query(args.query.clone())
        .with_color(use_color);

    let outcome = FilterSession::new(&mut host, &mut prompt, &messages)
        .with_options(options)
        .run()?;

    // 標準出力はローカライズされた通知だけにする
    if verbose {
        let summary = OutcomeSummary::format(&outcome);
        eprintln!("{} {}", summary.prefix, summary.message);
    }

    if args.dry_run || outcome == Outcome::NoElements {
        return Ok(());
    }
    tracing::debug!(model = %host.path().display(), "writing visualization state");
    host.save()
}

/// CLI 引数で設定を上書きする
fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(lang) = &args.lang {
        config.language = lang.clone();
    }
    if let Some(pattern) = &args.pattern {
        config.pattern = pattern.clone();
    }
    if args.keep_empty_terms {
        config.empty_terms = EmptyTermPolicy::Keep;
    }
    if args.no_restore {
        config.restore_on_cancel = false;
    }
    config
}
