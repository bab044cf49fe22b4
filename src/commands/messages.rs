//! elfilter messages コマンド
//!
//! 設定・環境変数・引数から解決されたメッセージを表示する。

use crate::config::Config;
use crate::error::Result;
use crate::i18n::{Language, Messages};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Message language (en, de, fr, es)
    #[arg(long)]
    pub lang: Option<String>,

    /// Message catalog (JSON keyed by language code)
    #[arg(long)]
    pub messages_file: Option<PathBuf>,

    /// Configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show every supported language
    #[arg(long, conflicts_with = "lang")]
    pub all: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args) -> Result<()> {
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(lang) = args.lang {
        config.language = lang;
    }
    if let Some(path) = args.messages_file {
        config.messages_file = Some(path);
    }

    let languages = if args.all {
        Language::ALL.to_vec()
    } else {
        vec![config.language()]
    };
    let catalog = config.catalog()?;
    let resolved: Vec<(Language, Messages)> = languages
        .into_iter()
        .map(|language| (language, catalog.messages(language)))
        .collect();

    if args.json {
        let by_code: BTreeMap<&str, &Messages> = resolved
            .iter()
            .map(|(language, messages)| (language.code(), messages))
            .collect();
        println!("{}", serde_json::to_string_pretty(&by_code)?);
        return Ok(());
    }

    println!("{}", messages_table(&resolved));
    Ok(())
}

/// メッセージ表（行: キー、列: 言語）
fn messages_table(resolved: &[(Language, Messages)]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec!["Key".to_string()];
    header.extend(resolved.iter().map(|(language, _)| language.code().to_string()));
    table.set_header(header);

    let slots: [(&str, fn(&Messages) -> &str); 5] = [
        ("no_elements_active", |m| m.no_elements_active.as_str()),
        ("consider_active_elements", |m| m.consider_active_elements.as_str()),
        ("enter_search_term", |m| m.enter_search_term.as_str()),
        ("names_not_found", |m| m.names_not_found.as_str()),
        ("elements_found", |m| m.elements_found.as_str()),
    ];
    for (key, slot) in slots {
        let mut row = vec![key.to_string()];
        row.extend(resolved.iter().map(|(_, messages)| slot(messages).to_string()));
        table.add_row(row);
    }
    table
}
