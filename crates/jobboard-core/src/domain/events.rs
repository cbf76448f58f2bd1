//! Events - UI イベント
//!
//! ページ上で発生し、登録済みハンドラに配送されるイベント。
//!
//! # イベント種類
//! - Submit: 投稿フォームの送信
//! - Load: ページ読み込み（保存済み投稿の再描画）

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEvent {
    Submit,
    Load,
}

impl UiEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiEvent::Submit => "submit",
            UiEvent::Load => "load",
        }
    }
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
