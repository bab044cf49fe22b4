//! 設定ファイル（config.toml）
//!
//! 読み込み順: `--config` > `$ELFILTER_CONFIG` > `$HOME/.elfilter/config.toml`。
//! ファイルがなければ既定値。言語は `$ELFILTER_LANG` がファイルより優先される。

use crate::env::{EnvVar, CONFIG_VAR, LANG_VAR};
use crate::error::{FilterError, Result};
use crate::filter::{EmptyTermPolicy, DEFAULT_PATTERN};
use crate::i18n::{Language, MessageCatalog, Messages};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 実行設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 言語コード（en / de / fr / es）
    pub language: String,
    /// 検索テキストの区切りパターン（正規表現）
    pub pattern: String,
    /// 空語の扱い
    pub empty_terms: EmptyTermPolicy,
    /// キャンセル時に元のアクティブ状態へ戻すか
    pub restore_on_cancel: bool,
    /// メッセージカタログ（JSON）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::English.code().to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
            empty_terms: EmptyTermPolicy::Discard,
            restore_on_cancel: true,
            messages_file: None,
        }
    }
}

impl Config {
    /// 既定の場所から読み込む
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_path(explicit) {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };

        if let Some(language) = EnvVar::get(LANG_VAR) {
            config.language = language;
        }
        Ok(config)
    }

    /// 指定パスから読み込む（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        if config.pattern.is_empty() {
            return Err(FilterError::Config("pattern must not be empty".to_string()));
        }

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = EnvVar::get(CONFIG_VAR) {
            return Some(PathBuf::from(path));
        }
        EnvVar::get("HOME").map(|home| PathBuf::from(home).join(".elfilter").join("config.toml"))
    }

    /// 設定された言語
    pub fn language(&self) -> Language {
        Language::from_code(&self.language)
    }

    /// メッセージカタログ（未設定なら組み込みのみ）
    pub fn catalog(&self) -> Result<MessageCatalog> {
        match &self.messages_file {
            Some(path) => MessageCatalog::load_from(path),
            None => Ok(MessageCatalog::default()),
        }
    }

    /// 設定された言語のメッセージ
    pub fn messages(&self) -> Result<Messages> {
        Ok(self.catalog()?.messages(self.language()))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
