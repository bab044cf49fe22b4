//! 名前フィルタ
//!
//! 検索テキストを区切りパターンで語に分割し、要素名に対して
//! case-insensitive な部分一致で絞り込む。

use crate::element::{ElementId, ElementRecord};
use crate::error::{FilterError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 既定の区切りパターン（", " / ";" / "," / 空白1文字）
pub const DEFAULT_PATTERN: &str = r", |;|,|\s";

/// 分割で生じた空語の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyTermPolicy {
    /// 空語を捨てる
    #[default]
    Discard,
    /// 空語を残す（空文字列は全ての名前に一致する）
    Keep,
}

/// 検索テキストの分割器
///
/// パターンの検証とコンパイルは構築時に済ませる。
#[derive(Debug, Clone)]
pub struct Splitter {
    delimiter: Regex,
    policy: EmptyTermPolicy,
}

impl Splitter {
    /// パターンが空なら `InvalidArgument`、正規表現として不正なら `InvalidPattern`
    pub fn new(pattern: &str, policy: EmptyTermPolicy) -> Result<Self> {
        if pattern.is_empty() {
            return Err(FilterError::InvalidArgument(
                "splitting pattern must not be empty".to_string(),
            ));
        }
        Ok(Self {
            delimiter: Regex::new(pattern)?,
            policy,
        })
    }

    /// 語に分割して小文字化する
    pub fn split(&self, query: &str) -> Vec<String> {
        self.delimiter
            .split(query)
            .filter(|token| self.policy == EmptyTermPolicy::Keep || !token.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

/// 名前フィルタ
#[derive(Debug, Clone)]
pub struct NameFilter {
    terms: Vec<String>,
    records: Vec<ElementRecord>,
}

impl NameFilter {
    /// 検索テキストまたはレコードが空なら `InvalidArgument`
    pub fn new(splitter: &Splitter, query: &str, records: Vec<ElementRecord>) -> Result<Self> {
        if query.is_empty() {
            return Err(FilterError::InvalidArgument(
                "search text must not be empty".to_string(),
            ));
        }
        if records.is_empty() {
            return Err(FilterError::InvalidArgument(
                "element list must not be empty".to_string(),
            ));
        }

        Ok(Self {
            terms: splitter.split(query),
            records,
        })
    }

    /// 検索語（小文字化済み）
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// いずれかの語を名前に含むレコードのIDを入力順で返す
    pub fn matching_results(&self) -> Vec<ElementId> {
        self.records
            .iter()
            .filter(|record| self.matches(record.name()))
            .map(ElementRecord::element_id)
            .collect()
    }

    fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.terms.iter().any(|term| name.contains(term.as_str()))
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

#[cfg(test)]
#[path = "filter_proptests.rs"]
mod proptests;
