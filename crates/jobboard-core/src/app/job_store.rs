//! JobStore - 投稿一覧の永続化
//!
//! # 学習ポイント
//! - ジェネリクスによるストレージの注入（`JobStore<S: Storage>`）
//! - 「まだ何も無い」（キー無し → 空）と「壊れている」（ParseError）を区別する
//! - read-modify-write は原子的ではない（後勝ち）

use crate::config::DEFAULT_STORAGE_KEY;
use crate::domain::errors::JobBoardError;
use crate::domain::JobPosting;
use crate::ports::Storage;

/// JobStore はひとつのキーに投稿一覧（JSON 配列）を保存する
///
/// # 使用例
/// ```ignore
/// let store = JobStore::new(InMemoryStorage::new(), "devJobs");
/// store.append(&JobPosting::new("Engineer", "Build things", "a@b.com"))?;
/// assert_eq!(store.load_all()?.len(), 1);
/// ```
///
/// # 並行性
/// - append は load → push → 全体上書き。ロックは取らない
/// - 複数のライターが同時に append すると、片方の書き込みが失われることがある
#[derive(Debug)]
pub struct JobStore<S> {
    storage: S,
    key: String,
}

impl<S: Storage> JobStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// 標準キー（`devJobs`）を使う JobStore を作成
    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// 保存済みの投稿を挿入順で返す
    ///
    /// # エラー
    /// - キーが無い: エラーではなく空の Vec
    /// - 値が JSON の投稿配列として読めない: `JobBoardError::Parse`
    pub fn load_all(&self) -> Result<Vec<JobPosting>, JobBoardError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            tracing::debug!(key = %self.key, "no stored jobs yet");
            return Ok(Vec::new());
        };
        let jobs: Vec<JobPosting> =
            serde_json::from_str(&raw).map_err(|source| JobBoardError::Parse {
                key: self.key.clone(),
                source,
            })?;
        tracing::debug!(key = %self.key, count = jobs.len(), "loaded stored jobs");
        Ok(jobs)
    }

    /// 投稿を末尾に追加して、一覧全体を書き戻す
    pub fn append(&self, job: &JobPosting) -> Result<(), JobBoardError> {
        let mut jobs = self.load_all()?;
        jobs.push(job.clone());

        let raw = serde_json::to_string(&jobs).map_err(|source| JobBoardError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.storage.set(&self.key, &raw)?;

        tracing::info!(key = %self.key, count = jobs.len(), title = %job.title, "job appended");
        Ok(())
    }

    pub fn len(&self) -> Result<usize, JobBoardError> {
        Ok(self.load_all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, JobBoardError> {
        Ok(self.len()? == 0)
    }
}
