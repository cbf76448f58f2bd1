//! InMemoryStorage - テスト用の key-value ストレージ
//!
//! # 学習ポイント
//! - Mutex による内部可変性（`&self` のまま set できる）
//! - poisoned lock をエラーとして扱う

use crate::domain::errors::JobBoardError;
use crate::ports::Storage;
use std::collections::HashMap;
use std::sync::Mutex;

/// InMemoryStorage はプロセス内だけで値を保持する
///
/// # 使用例
/// ```ignore
/// let storage = InMemoryStorage::new();
/// storage.set("devJobs", "[]")?;
/// assert_eq!(storage.get("devJobs")?, Some("[]".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期値を入れた状態で作成（壊れたデータの再現などに使う）
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut values) = storage.values.lock() {
            values.insert(key.into(), value.into());
        }
        storage
    }
}

fn poisoned() -> JobBoardError {
    JobBoardError::Storage {
        message: "in-memory storage lock poisoned".to_string(),
        source: None,
    }
}

impl Storage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, JobBoardError> {
        let values = self.values.lock().map_err(|_| poisoned())?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), JobBoardError> {
        let mut values = self.values.lock().map_err(|_| poisoned())?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
