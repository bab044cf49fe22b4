//! テスト用モックホスト

use super::*;
use crate::error::FilterError;
use std::collections::{HashMap, VecDeque};

/// ホストに対して行われた操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    SetActive(Vec<ElementId>),
    SetInactive(Vec<ElementId>),
    SuspendRefresh,
    ResumeRefresh,
}

/// テスト用モックホスト
#[derive(Debug, Default)]
pub struct MockHost {
    names: HashMap<ElementId, String>,
    order: Vec<ElementId>,
    active: Vec<ElementId>,
    visible: Vec<ElementId>,
    pub calls: Vec<HostCall>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// 要素を追加
    pub fn add_element(mut self, id: u64, name: &str, active: bool, visible: bool) -> Self {
        let id = ElementId::new(id);
        self.names.insert(id, name.to_string());
        self.order.push(id);
        if active {
            self.active.push(id);
        }
        if visible {
            self.visible.push(id);
        }
        self
    }

    /// 現在アクティブなID（追加順）
    pub fn current_active(&self) -> Vec<ElementId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.active.contains(id))
            .collect()
    }
}

impl NameLookup for MockHost {
    fn name(&self, id: ElementId) -> Result<String> {
        self.names
            .get(&id)
            .cloned()
            .ok_or(FilterError::ElementNotFound(id))
    }
}

impl ElementHost for MockHost {
    fn active_ids(&self) -> Result<Vec<ElementId>> {
        Ok(self.current_active())
    }

    fn visible_ids(&self) -> Result<Vec<ElementId>> {
        Ok(self.visible.clone())
    }

    fn set_active(&mut self, ids: &[ElementId]) -> Result<()> {
        self.calls.push(HostCall::SetActive(ids.to_vec()));
        for id in ids {
            if !self.active.contains(id) {
                self.active.push(*id);
            }
        }
        Ok(())
    }

    fn set_inactive(&mut self, ids: &[ElementId]) -> Result<()> {
        self.calls.push(HostCall::SetInactive(ids.to_vec()));
        self.active.retain(|id| !ids.contains(id));
        Ok(())
    }

    fn suspend_refresh(&mut self) {
        self.calls.push(HostCall::SuspendRefresh);
    }

    fn resume_refresh(&mut self) {
        self.calls.push(HostCall::ResumeRefresh);
    }
}

/// ユーザーへの通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Info(String),
    Error(String),
}

/// テスト用モックプロンプト
#[derive(Debug, Default)]
pub struct MockPrompt {
    answers: VecDeque<bool>,
    queries: VecDeque<String>,
    pub questions: Vec<String>,
    pub reports: Vec<Report>,
}

impl MockPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// はい/いいえの回答を積む
    pub fn answer(mut self, answer: bool) -> Self {
        self.answers.push_back(answer);
        self
    }

    /// 文字列の回答を積む
    pub fn query(mut self, query: &str) -> Self {
        self.queries.push_back(query.to_string());
        self
    }
}

impl UserPrompt for MockPrompt {
    fn ask_bool(&mut self, text: &str, default: bool) -> Result<bool> {
        self.questions.push(text.to_string());
        Ok(self.answers.pop_front().unwrap_or(default))
    }

    fn ask_string(&mut self, text: &str) -> Result<String> {
        self.questions.push(text.to_string());
        self.queries
            .pop_front()
            .ok_or_else(|| FilterError::Prompt("no scripted query".to_string()))
    }

    fn report_info(&mut self, text: &str) -> Result<()> {
        self.reports.push(Report::Info(text.to_string()));
        Ok(())
    }

    fn report_error(&mut self, text: &str) -> Result<()> {
        self.reports.push(Report::Error(text.to_string()));
        Ok(())
    }
}
