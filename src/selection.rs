//! 対象要素セットの決定
//!
//! アクティブ要素と可視要素のどちらを絞り込み対象にするかを決める。

use crate::element::ElementId;
use crate::error::Result;

/// 選ばれた要素セットの出どころ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Active,
    Visible,
}

/// 絞り込み対象の要素セット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    source: SelectionSource,
    ids: Vec<ElementId>,
}

impl Selection {
    /// 出どころを取得
    pub fn source(&self) -> SelectionSource {
        self.source
    }

    /// 要素IDを取得
    pub fn ids(&self) -> &[ElementId] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn into_ids(self) -> Vec<ElementId> {
        self.ids
    }
}

/// 対象要素セットを決める
///
/// - アクティブ要素があり、かつ可視要素と件数が異なる場合のみ `ask` で確認する
///   （true ならアクティブ、false なら可視）
/// - それ以外は確認せず可視要素を返す
pub fn resolve_selection<F>(
    active: Vec<ElementId>,
    visible: Vec<ElementId>,
    ask: F,
) -> Result<Selection>
where
    F: FnOnce() -> Result<bool>,
{
    if !active.is_empty() && active.len() != visible.len() {
        let only_active = ask()?;
        tracing::debug!(only_active, "asked whether to restrict to active elements");
        if only_active {
            return Ok(Selection {
                source: SelectionSource::Active,
                ids: active,
            });
        }
    }

    Ok(Selection {
        source: SelectionSource::Visible,
        ids: visible,
    })
}

#[cfg(test)]
#[path = "selection_test.rs"]
mod tests;
