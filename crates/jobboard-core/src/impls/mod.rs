//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryStorage**: テスト用の key-value ストレージ
//! - **FileStorage**: JSON ファイルに保存する key-value ストレージ（CLI 用）

pub mod file_storage;
pub mod memory_storage;

// 主要な型を再エクスポート
pub use self::file_storage::FileStorage;
pub use self::memory_storage::InMemoryStorage;
