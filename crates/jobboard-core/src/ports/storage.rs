//! Storage port - 永続的な key-value ストレージ
//!
//! ブラウザの localStorage と同じく、文字列キーに文字列値をひとつ持つだけの最小インターフェース。
//!
//! # 実装
//! - **InMemoryStorage**: テスト用（impls/memory_storage.rs）
//! - **FileStorage**: JSON ファイルに保存（impls/file_storage.rs）

use crate::domain::errors::JobBoardError;

/// Storage は key-value の get/set を提供
///
/// # 設計原則
/// - 値の解釈（JSON など）は呼び出し側の責務。ここでは生の文字列だけを扱う
/// - キーが無い場合は `Ok(None)`。エラーはバックエンド障害のときだけ
/// - set は値全体の上書き。複数ライター間の排他は提供しない
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, JobBoardError>;

    fn set(&self, key: &str, value: &str) -> Result<(), JobBoardError>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, JobBoardError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), JobBoardError> {
        (**self).set(key, value)
    }
}

impl<S: Storage + ?Sized> Storage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, JobBoardError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), JobBoardError> {
        (**self).set(key, value)
    }
}
