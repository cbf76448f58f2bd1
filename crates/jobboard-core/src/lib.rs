//! jobboard-core
//!
//! 求人投稿ボードの中核: フォーム入力 → 永続化 → 一覧への描画。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（JobPosting, JobForm, UiEvent, errors）
//! - **ports**: 抽象化レイヤー（Storage）
//! - **impls**: 実装（InMemoryStorage, FileStorage）
//! - **dom**: 描画面（ノードツリー、HTML 出力、標準ページ）
//! - **app**: アプリケーションロジック（FormReader, JobStore, ListRenderer, JobBoard, AppBuilder）
//! - **config**: 設定（保存キー、並び順、検証の有無、セレクタ）

pub mod app;
pub mod config;
pub mod dom;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{App, AppBuilder, JobBoard, JobStore};
pub use config::{BoardConfig, ListOrder};
pub use domain::{JobBoardError, JobForm, JobPosting, UiEvent};
