//! ホスト抽象化
//!
//! CAD ホストの要素列挙・表示状態操作・ユーザー対話を抽象化するレイヤー。
//! テスト時は MockHost / MockPrompt を注入してホスト呼び出しを記録できる。
//! CLI では ModelFileHost（JSON スナップショット）と TerminalPrompt を使用する。

use crate::element::{ElementId, NameLookup};
use crate::error::Result;

mod model_file;
mod terminal;

#[cfg(test)]
pub mod mock;

pub use model_file::{ModelElement, ModelFileHost};
pub use terminal::TerminalPrompt;

/// 要素の列挙と表示状態を扱うホストサービス
pub trait ElementHost: NameLookup {
    /// アクティブ要素のID
    fn active_ids(&self) -> Result<Vec<ElementId>>;

    /// 可視要素のID
    fn visible_ids(&self) -> Result<Vec<ElementId>>;

    /// 要素をアクティブにする
    fn set_active(&mut self, ids: &[ElementId]) -> Result<()>;

    /// 要素を非アクティブにする
    fn set_inactive(&mut self, ids: &[ElementId]) -> Result<()>;

    /// 自動再描画を止める（2回の状態変更をまとめるためのヒント）
    fn suspend_refresh(&mut self);

    /// 自動再描画を再開する
    fn resume_refresh(&mut self);
}

/// ユーザー対話サービス
pub trait UserPrompt {
    /// はい/いいえを尋ねる
    fn ask_bool(&mut self, text: &str, default: bool) -> Result<bool>;

    /// 文字列を尋ねる（空文字列はキャンセル）
    fn ask_string(&mut self, text: &str) -> Result<String>;

    /// 情報を通知
    fn report_info(&mut self, text: &str) -> Result<()>;

    /// エラーを通知
    fn report_error(&mut self, text: &str) -> Result<()>;
}
