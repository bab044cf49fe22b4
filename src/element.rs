//! 要素レコード
//!
//! 要素IDと表示名の組を扱う値オブジェクトと、IDリストからレコード列を構築する処理。

use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 要素ID（ホストが払い出す不透明な整数キー）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ElementId {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 要素IDから表示名を引くサービス
pub trait NameLookup {
    fn name(&self, id: ElementId) -> Result<String>;
}

/// 要素レコード（値オブジェクト）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    element_id: ElementId,
    name: String,
}

impl ElementRecord {
    /// 新規作成
    pub fn new(element_id: ElementId, name: impl Into<String>) -> Self {
        Self {
            element_id,
            name: name.into(),
        }
    }

    /// 要素IDを取得
    pub fn element_id(&self) -> ElementId {
        self.element_id
    }

    /// 表示名を取得
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// IDリストから要素レコード列を構築する
///
/// - `ids` が空なら `InvalidArgument`
/// - 出力順は入力順と同じ（スキップ・重複排除なし）
/// - 名前解決の失敗はそのまま伝播する
pub fn build_records<L>(ids: &[ElementId], lookup: &L) -> Result<Vec<ElementRecord>>
where
    L: NameLookup + ?Sized,
{
    if ids.is_empty() {
        return Err(FilterError::InvalidArgument(
            "element list must not be empty".to_string(),
        ));
    }

    ids.iter()
        .map(|&id| lookup.name(id).map(|name| ElementRecord::new(id, name)))
        .collect()
}

#[cfg(test)]
#[path = "element_test.rs"]
mod tests;

#[cfg(test)]
#[path = "element_proptests.rs"]
mod proptests;
