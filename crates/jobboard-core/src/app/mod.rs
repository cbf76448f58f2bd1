//! App - アプリケーション層
//!
//! このモジュールは、ports と dom を組み合わせて投稿ワークフローを実装します。
//!
//! # 主要コンポーネント
//! - **FormReader**: フォームの入力値を JobForm に読み取る
//! - **JobStore**: 投稿一覧の永続化（Storage port 経由）
//! - **ListRenderer**: テンプレートを複製して一覧に挿入
//! - **JobBoard**: submit / load のワークフロー
//! - **EventRegistry**: UI イベントとハンドラの対応
//! - **AppBuilder**: アプリケーションの構築とワイヤリング

pub mod board;
pub mod builder;
pub mod events;
pub mod form_reader;
pub mod job_store;
pub mod list_renderer;

// 主要な型を再エクスポート
pub use self::board::JobBoard;
pub use self::builder::{App, AppBuilder, BuildError};
pub use self::events::{EventHandler, EventRegistry, LoadHandler, SubmitHandler};
pub use self::form_reader::FormReader;
pub use self::job_store::JobStore;
pub use self::list_renderer::ListRenderer;
