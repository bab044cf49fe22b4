//! 絞り込みセッション（状態マシン）
//!
//! 1回のユーザー操作で行う一連の処理を順に実行する。
//!
//! ## 状態遷移図
//!
//! ```text
//!   ResolvingSelection ──(要素なし)──────────────▶ NoElements
//!          │
//!          ▼
//!     Deactivating
//!          │
//!          ▼
//!    AwaitingQuery ──(空文字列)──────────────────▶ Cancelled
//!          │
//!          ▼
//!      Filtering
//!          │
//!          ▼
//!      Reporting ────────────────────────────────▶ Done
//! ```

use crate::element::{build_records, ElementId};
use crate::error::Result;
use crate::filter::{EmptyTermPolicy, NameFilter, Splitter, DEFAULT_PATTERN};
use crate::host::{ElementHost, UserPrompt};
use crate::i18n::Messages;
use crate::selection::{resolve_selection, SelectionSource};

/// セッション設定
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub pattern: String,
    pub empty_terms: EmptyTermPolicy,
    pub restore_on_cancel: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            empty_terms: EmptyTermPolicy::Discard,
            restore_on_cancel: true,
        }
    }
}

/// セッションの結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// アクティブ/可視の要素がない
    NoElements,
    /// 検索テキストが空だった
    Cancelled { restored: Vec<ElementId> },
    /// 絞り込み完了（0件を含む）
    Done {
        source: SelectionSource,
        candidates: usize,
        matched: Vec<ElementId>,
    },
}

/// 状態マシンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ResolvingSelection,
    Deactivating,
    AwaitingQuery,
    Filtering,
    Reporting,
}

/// 絞り込みセッション
pub struct FilterSession<'a, H: ElementHost + ?Sized, P: UserPrompt + ?Sized> {
    host: &'a mut H,
    prompt: &'a mut P,
    messages: &'a Messages,
    options: SessionOptions,
    refresh_suspended: bool,
}

impl<'a, H: ElementHost + ?Sized, P: UserPrompt + ?Sized> FilterSession<'a, H, P> {
    /// 新規作成
    pub fn new(host: &'a mut H, prompt: &'a mut P, messages: &'a Messages) -> Self {
        Self {
            host,
            prompt,
            messages,
            options: SessionOptions::default(),
            refresh_suspended: false,
        }
    }

    /// 設定を指定
    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// セッションを実行
    pub fn run(mut self) -> Result<Outcome> {
        let outcome = self.run_inner();
        // 一度止めた再描画は途中で失敗しても必ず再開する
        if self.refresh_suspended {
            self.host.resume_refresh();
        }

        if let Ok(outcome) = &outcome {
            tracing::info!(?outcome, "filter session finished");
        }
        outcome
    }

    fn transition(&self, state: State) {
        tracing::debug!(?state, "session state");
    }

    fn run_inner(&mut self) -> Result<Outcome> {
        self.transition(State::ResolvingSelection);
        // 不正なパターンはホストを変更する前に弾く
        let splitter = Splitter::new(&self.options.pattern, self.options.empty_terms)?;
        let active = self.host.active_ids()?;
        let visible = self.host.visible_ids()?;
        let messages = self.messages;
        let prompt = &mut *self.prompt;
        let selection = resolve_selection(active.clone(), visible, || {
            prompt.ask_bool(&messages.consider_active_elements, true)
        })?;

        if selection.is_empty() {
            self.prompt.report_error(&self.messages.no_elements_active)?;
            return Ok(Outcome::NoElements);
        }
        tracing::debug!(source = ?selection.source(), count = selection.ids().len(), "resolved selection");
        let source = selection.source();
        let candidates = selection.into_ids();

        self.transition(State::Deactivating);
        self.host.suspend_refresh();
        self.refresh_suspended = true;
        self.host.set_inactive(&candidates)?;

        self.transition(State::AwaitingQuery);
        let query = self.prompt.ask_string(&self.messages.enter_search_term)?;
        if query.is_empty() {
            let restored = self.restore(&active, &candidates)?;
            return Ok(Outcome::Cancelled { restored });
        }

        self.transition(State::Filtering);
        let records = build_records(&candidates, &*self.host)?;
        let filter = NameFilter::new(&splitter, &query, records)?;
        tracing::debug!(terms = ?filter.terms(), "split search text");
        let matched = filter.matching_results();

        self.transition(State::Reporting);
        self.host.set_active(&matched)?;
        if matched.is_empty() {
            self.prompt.report_info(&self.messages.names_not_found)?;
        } else {
            self.prompt.report_info(&self.messages.found(matched.len()))?;
        }

        Ok(Outcome::Done {
            source,
            candidates: candidates.len(),
            matched,
        })
    }

    /// キャンセル時に、元々アクティブだった候補を戻す
    fn restore(&mut self, active: &[ElementId], candidates: &[ElementId]) -> Result<Vec<ElementId>> {
        if !self.options.restore_on_cancel {
            return Ok(Vec::new());
        }

        let restored: Vec<ElementId> = candidates
            .iter()
            .copied()
            .filter(|id| active.contains(id))
            .collect();
        if !restored.is_empty() {
            self.host.set_active(&restored)?;
        }
        Ok(restored)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
