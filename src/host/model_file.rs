//! JSON モデルスナップショットを使うオフラインホスト
//!
//! ```json
//! { "elements": [ { "id": 1, "name": "BeamA", "active": true, "visible": true } ] }
//! ```

use super::ElementHost;
use crate::element::{ElementId, NameLookup};
use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// スナップショット内の要素
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelElement {
    pub id: ElementId,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// model.json のルート構造
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelFile {
    elements: Vec<ModelElement>,
}

/// JSON スナップショットを使うホスト
#[derive(Debug)]
pub struct ModelFileHost {
    path: PathBuf,
    elements: Vec<ModelElement>,
    refresh_suspended: bool,
}

impl ModelFileHost {
    /// ファイルから読み込む
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;
        let file: ModelFile = serde_json::from_str(&content)?;
        let host = Self::from_elements(path, file.elements)?;
        tracing::debug!(path = %host.path.display(), elements = host.elements.len(), "loaded model");
        Ok(host)
    }

    /// 要素一覧から作成（ID重複は `InvalidModel`）
    pub fn from_elements(path: impl Into<PathBuf>, elements: Vec<ModelElement>) -> Result<Self> {
        let mut seen = HashSet::new();
        if let Some(dup) = elements.iter().find(|e| !seen.insert(e.id)) {
            return Err(FilterError::InvalidModel(format!(
                "duplicate element id {}",
                dup.id.get()
            )));
        }

        Ok(Self {
            path: path.into(),
            elements,
            refresh_suspended: false,
        })
    }

    /// ファイルパスを取得
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 全要素を取得
    pub fn elements(&self) -> &[ModelElement] {
        &self.elements
    }

    /// 自動再描画が止まっているか
    pub fn is_refresh_suspended(&self) -> bool {
        self.refresh_suspended
    }

    /// 現在の状態をアトミックに書き戻す
    pub fn save(&self) -> Result<()> {
        if self.is_refresh_suspended() {
            tracing::warn!("saving model while refresh is suspended");
        }
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let file = ModelFile {
            elements: self.elements.clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(content.as_bytes())?;
        temp.persist(&self.path).map_err(|e| FilterError::Io(e.error))?;

        tracing::debug!(path = %self.path.display(), "saved model");
        Ok(())
    }

    fn ids_where(&self, pred: impl Fn(&ModelElement) -> bool) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|&e| pred(e))
            .map(|e| e.id)
            .collect()
    }

    fn set_state(&mut self, ids: &[ElementId], active: bool) -> Result<()> {
        let wanted: HashSet<ElementId> = ids.iter().copied().collect();
        if let Some(missing) = ids
            .iter()
            .find(|id| !self.elements.iter().any(|e| e.id == **id))
        {
            return Err(FilterError::ElementNotFound(*missing));
        }

        for element in self.elements.iter_mut().filter(|e| wanted.contains(&e.id)) {
            element.active = active;
        }
        Ok(())
    }
}

impl NameLookup for ModelFileHost {
    fn name(&self, id: ElementId) -> Result<String> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.clone())
            .ok_or(FilterError::ElementNotFound(id))
    }
}

impl ElementHost for ModelFileHost {
    fn active_ids(&self) -> Result<Vec<ElementId>> {
        Ok(self.ids_where(|e| e.active))
    }

    fn visible_ids(&self) -> Result<Vec<ElementId>> {
        Ok(self.ids_where(|e| e.visible))
    }

    fn set_active(&mut self, ids: &[ElementId]) -> Result<()> {
        self.set_state(ids, true)
    }

    fn set_inactive(&mut self, ids: &[ElementId]) -> Result<()> {
        self.set_state(ids, false)
    }

    fn suspend_refresh(&mut self) {
        self.refresh_suspended = true;
    }

    fn resume_refresh(&mut self) {
        self.refresh_suspended = false;
    }
}

#[cfg(test)]
#[path = "model_file_test.rs"]
mod tests;
