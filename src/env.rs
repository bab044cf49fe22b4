/// 言語コードを上書きする環境変数
pub const LANG_VAR: &str = "ELFILTER_LANG";

/// 設定ファイルのパスを上書きする環境変数
pub const CONFIG_VAR: &str = "ELFILTER_CONFIG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
