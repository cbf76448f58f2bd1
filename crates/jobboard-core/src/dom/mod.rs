//! Dom - 描画面
//!
//! ブラウザの DOM の代わりとなるノードツリーと、標準ページの組み立て。
//!
//! # 含まれるもの
//! - **Document**: arena 形式のノードツリー（query / clone / after / reset）
//! - **Selector**: `#id` / `.class` / タグ名だけの単純セレクタ
//! - **html**: HTML への書き出し
//! - **page**: 標準の求人ボードページ

pub mod document;
pub mod html;
pub mod page;
pub mod selector;

pub use self::document::{Document, DomError, NodeId};
pub use self::page::job_board_page;
pub use self::selector::Selector;
