//! 端末での対話
//!
//! 標準入出力（テストでは任意の BufRead / Write）で質問と通知を行う。
//! 事前に回答を与えておくと、その質問では入力を読まない。

use super::UserPrompt;
use crate::error::{FilterError, Result};
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

/// 端末プロンプト
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
    preset_answer: Option<bool>,
    preset_query: Option<String>,
    use_color: bool,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    /// 新規作成
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            preset_answer: None,
            preset_query: None,
            use_color: false,
        }
    }

    /// はい/いいえの回答を事前に設定
    pub fn with_answer(mut self, answer: Option<bool>) -> Self {
        self.preset_answer = answer;
        self
    }

    /// 検索テキストを事前に設定
    pub fn with_query(mut self, query: Option<String>) -> Self {
        self.preset_query = query;
        self
    }

    /// 色付き出力を設定
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(FilterError::Prompt("input closed".to_string()));
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}

impl<R: BufRead, W: Write> UserPrompt for TerminalPrompt<R, W> {
    fn ask_bool(&mut self, text: &str, default: bool) -> Result<bool> {
        if let Some(answer) = self.preset_answer {
            return Ok(answer);
        }

        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.output, "{} {} ", text, hint)?;
            let line = self.read_line()?;
            match line.trim().to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" | "j" | "ja" | "o" | "oui" | "s" | "si" | "sí" => return Ok(true),
                "n" | "no" | "nein" | "non" => return Ok(false),
                _ => continue,
            }
        }
    }

    fn ask_string(&mut self, text: &str) -> Result<String> {
        if let Some(query) = self.preset_query.take() {
            return Ok(query);
        }

        write!(self.output, "{}: ", text)?;
        self.read_line()
    }

    fn report_info(&mut self, text: &str) -> Result<()> {
        if self.use_color {
            writeln!(self.output, "{} {}", "✓".green(), text)?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }

    fn report_error(&mut self, text: &str) -> Result<()> {
        if self.use_color {
            writeln!(self.output, "{} {}", "✗".red(), text.red())?;
        } else {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }
}
