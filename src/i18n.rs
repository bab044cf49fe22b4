//! 表示メッセージの多言語化
//!
//! 言語コードから5種類の固定メッセージを引く。
//! 組み込みの表に加え、JSON カタログ（言語コード → メッセージ）で上書きできる。

use crate::error::{FilterError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// 対応言語
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    German,
    French,
    Spanish,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::German,
        Language::French,
        Language::Spanish,
    ];

    /// 言語コードから解決（未知のコードは英語）
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "de" => Language::German,
            "fr" => Language::French,
            "es" => Language::Spanish,
            _ => Language::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
        }
    }
}

/// ユーザー向けメッセージ（5種類）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    pub no_elements_active: String,
    pub consider_active_elements: String,
    pub enter_search_term: String,
    pub names_not_found: String,
    pub elements_found: String,
}

impl Messages {
    /// 組み込みのメッセージ
    pub fn builtin(language: Language) -> Self {
        let [no_elements_active, consider_active_elements, enter_search_term, names_not_found, elements_found] =
            match language {
                Language::English => [
                    "No elements are active/visible!",
                    "Should only active elements be considered?",
                    "Enter search term",
                    "Names not found",
                    "Elements found",
                ],
                Language::German => [
                    "Es sind keine Elemente aktiv/sichtbar!",
                    "Sollen nur aktive Elemente berücksichtigt werden?",
                    "Suchbegriff eingeben",
                    "Namen nicht gefunden!",
                    "Elemente gefunden",
                ],
                Language::French => [
                    "Aucun élément n'est actif/visible !",
                    "Seuls les éléments actifs doivent-ils être pris en compte ?",
                    "Saisir un mot-clé",
                    "Noms non trouvés",
                    "Éléments trouvés",
                ],
                Language::Spanish => [
                    "¡No hay elementos activos/visibles!",
                    "¿Se deben considerar solo los elementos activos?",
                    "Introduzca el término de búsqueda",
                    "Nombres no encontrados",
                    "Elementos encontrados",
                ],
            };

        Self {
            no_elements_active: no_elements_active.to_string(),
            consider_active_elements: consider_active_elements.to_string(),
            enter_search_term: enter_search_term.to_string(),
            names_not_found: names_not_found.to_string(),
            elements_found: elements_found.to_string(),
        }
    }

    /// 件数付きの検出メッセージ
    pub fn found(&self, count: usize) -> String {
        format!("{} {}", count, self.elements_found.trim())
    }
}

/// メッセージカタログ（言語コード → メッセージ）
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    entries: HashMap<String, Messages>,
}

impl MessageCatalog {
    /// JSON ファイルから読み込む
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON 文字列から読み込む
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: HashMap<String, Messages> = serde_json::from_str(content)
            .map_err(|e| FilterError::Config(format!("invalid message catalog: {}", e)))?;

        let entries = raw
            .into_iter()
            .map(|(code, messages)| (code.to_ascii_lowercase(), messages))
            .collect();
        Ok(Self { entries })
    }

    /// 言語のメッセージを取得（カタログにない場合は組み込み）
    pub fn messages(&self, language: Language) -> Messages {
        match self.entries.get(language.code()) {
            Some(messages) => messages.clone(),
            None => {
                tracing::debug!(language = language.code(), "using builtin messages");
                Messages::builtin(language)
            }
        }
    }
}

#[cfg(test)]
#[path = "i18n_test.rs"]
mod tests;
