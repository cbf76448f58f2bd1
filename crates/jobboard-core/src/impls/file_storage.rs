//! FileStorage - JSON ファイルを使った key-value ストレージ
//!
//! ファイル全体がひとつの JSON オブジェクト（キー → 文字列値）で、localStorage と同じ形をしている。
//!
//! # 学習ポイント
//! - 一時ファイルに書いてから rename することで、書き込み途中のファイルを残さない
//! - ファイルが無いことは「空のストレージ」であってエラーではない

use crate::domain::errors::JobBoardError;
use crate::ports::Storage;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// FileStorage はひとつの JSON ファイルに全キーを保存する
///
/// 同じファイルを複数プロセスから同時に更新すると、後勝ちで書き込みが失われる。
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, JobBoardError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(JobBoardError::storage(
                    format!("read {}", self.path.display()),
                    e,
                ));
            }
        };
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&raw).map_err(|e| JobBoardError::Storage {
            message: format!("{} is not a storage file: {e}", self.path.display()),
            source: None,
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), JobBoardError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                JobBoardError::storage(format!("create {}", parent.display()), e)
            })?;
        }

        let body = serde_json::to_string_pretty(values).map_err(|e| JobBoardError::Storage {
            message: format!("encode {}: {e}", self.path.display()),
            source: None,
        })?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body)
            .map_err(|e| JobBoardError::storage(format!("write {}", tmp.display()), e))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| JobBoardError::storage(format!("replace {}", self.path.display()), e))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, JobBoardError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), JobBoardError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)?;
        tracing::debug!(path = %self.path.display(), key, bytes = value.len(), "storage file updated");
        Ok(())
    }
}
