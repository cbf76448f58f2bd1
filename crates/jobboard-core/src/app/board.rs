//! JobBoard - 投稿ワークフロー
//!
//! # 送信（submit）
//! 1. フォームを読む（FormReader）
//! 2. 設定に応じて検証（JobForm::validate）
//! 3. 保存（JobStore::append）
//! 4. 描画（ListRenderer::insert）
//! 5. フォームをリセット
//!
//! どこかで失敗した場合はフォームを残したまま、ステータス欄に利用者向けのメッセージを書く。
//!
//! # 読み込み（load）
//! 保存済みの投稿を保存順に描画し直す。

use crate::config::BoardConfig;
use crate::dom::Document;
use crate::domain::errors::JobBoardError;
use crate::domain::JobPosting;
use crate::ports::Storage;

use super::form_reader::FormReader;
use super::job_store::JobStore;
use super::list_renderer::ListRenderer;

pub struct JobBoard<S> {
    store: JobStore<S>,
    config: BoardConfig,
}

impl<S: Storage> JobBoard<S> {
    pub fn new(storage: S, config: BoardConfig) -> Self {
        Self {
            store: JobStore::new(storage, config.storage_key.clone()),
            config,
        }
    }

    pub fn store(&self) -> &JobStore<S> {
        &self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn form_reader(&self) -> FormReader<'_> {
        FormReader::new(&self.config.selectors)
    }

    pub fn renderer(&self) -> ListRenderer<'_> {
        ListRenderer::new(&self.config.selectors, self.config.list_order)
    }

    /// フォームの内容を投稿として保存・描画する
    pub fn submit(&self, doc: &mut Document) -> Result<JobPosting, JobBoardError> {
        match self.try_submit(doc) {
            Ok(job) => {
                self.set_status(doc, "");
                Ok(job)
            }
            Err(err) => {
                tracing::warn!(error = %err, "job submission failed");
                self.set_status(doc, &err.user_message());
                Err(err)
            }
        }
    }

    fn try_submit(&self, doc: &mut Document) -> Result<JobPosting, JobBoardError> {
        let selectors = &self.config.selectors;
        // 保存より前にフォームの存在を確認する（リセットできないまま保存しないため）
        let form_node = doc
            .query(selectors.form.as_str())
            .ok_or_else(|| JobBoardError::lookup(selectors.form.as_str()))?;

        let form = self.form_reader().read(doc)?;
        let job = if self.config.validate_input {
            form.validate()?
        } else {
            form.into_posting()
        };

        // 描画できない投稿は保存しない（再送信で二重に保存されるため）
        let renderer = self.renderer();
        renderer.check(doc)?;

        self.store.append(&job)?;
        renderer.insert(doc, &job)?;
        doc.reset_form(form_node);
        Ok(job)
    }

    /// 保存済みの投稿をすべて描画し、描画した件数を返す
    pub fn load(&self, doc: &mut Document) -> Result<usize, JobBoardError> {
        self.try_load(doc).inspect_err(|err| {
            tracing::warn!(error = %err, "stored jobs could not be rendered");
            self.set_status(doc, &err.user_message());
        })
    }

    fn try_load(&self, doc: &mut Document) -> Result<usize, JobBoardError> {
        let jobs = self.store.load_all()?;
        if jobs.is_empty() {
            return Ok(0);
        }

        // 途中まで描画された一覧を残さない
        let renderer = self.renderer();
        renderer.check(doc)?;
        for job in &jobs {
            renderer.insert(doc, job)?;
        }
        tracing::info!(key = %self.store.storage_key(), count = jobs.len(), "stored jobs rendered");
        Ok(jobs.len())
    }

    fn set_status(&self, doc: &mut Document, message: &str) {
        if let Some(status) = doc.query(self.config.selectors.status.as_str()) {
            doc.set_text(status, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListOrder;
    use crate::dom::job_board_page;
    use crate::domain::{ErrorKind, FormField};
    use crate::impls::InMemoryStorage;

    fn fill(board: &JobBoard<InMemoryStorage>, doc: &mut Document, job: &JobPosting) {
        let reader = board.form_reader();
        reader.fill(doc, FormField::Title, job.title.as_str()).unwrap();
        reader.fill(doc, FormField::Summary, job.summary.as_str()).unwrap();
        reader
            .fill(doc, FormField::ContactEmail, job.contact_email.as_str())
            .unwrap();
    }

    fn status(doc: &Document) -> String {
        doc.text(doc.query(".job-form-status").unwrap())
    }

    #[test]
    fn submit_saves_renders_and_resets() {
        let board = JobBoard::new(InMemoryStorage::new(), BoardConfig::default());
        let mut doc = job_board_page();
        let job = JobPosting::new("Engineer", "Build things", "a@b.com");
        fill(&board, &mut doc, &job);

        assert_eq!(board.submit(&mut doc).unwrap(), job);
        assert_eq!(board.store().load_all().unwrap(), vec![job]);

        let links: Vec<_> = doc
            .query_all(".job-post-contact-email")
            .into_iter()
            .filter_map(|n| doc.attr(n, "href").map(str::to_string))
            .collect();
        assert!(links.contains(&"mailto:a@b.com".to_string()));

        let form = board.form_reader().read(&doc).unwrap();
        assert_eq!(form.title, "");
        assert_eq!(status(&doc), "");
    }

    #[test]
    fn invalid_submission_keeps_form_and_shows_message() {
        let board = JobBoard::new(InMemoryStorage::new(), BoardConfig::default());
        let mut doc = job_board_page();
        fill(&board, &mut doc, &JobPosting::new("Engineer", "", "nope"));

        let err = board.submit(&mut doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(board.store().is_empty().unwrap());
        assert_eq!(board.form_reader().read(&doc).unwrap().title, "Engineer");
        assert!(status(&doc).starts_with("Please fix the form"));
    }

    #[test]
    fn validation_can_be_turned_off() {
        let config = BoardConfig {
            validate_input: false,
            ..BoardConfig::default()
        };
        let board = JobBoard::new(InMemoryStorage::new(), config);
        let mut doc = job_board_page();

        let job = board.submit(&mut doc).unwrap();
        assert_eq!(job, JobPosting::default());
        assert_eq!(board.store().len().unwrap(), 1);
    }

    #[test]
    fn missing_form_fails_before_saving() {
        let mut config = BoardConfig::default();
        config.selectors.form = ".no-form".into();
        let board = JobBoard::new(InMemoryStorage::new(), config);
        let mut doc = job_board_page();
        fill(&board, &mut doc, &JobPosting::new("Engineer", "Build things", "a@b.com"));

        let err = board.submit(&mut doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert!(board.store().is_empty().unwrap());
    }

    #[test]
    fn unrenderable_submission_is_not_saved() {
        let mut config = BoardConfig::default();
        config.selectors.template = ".no-template".into();
        let board = JobBoard::new(InMemoryStorage::new(), config);
        let mut doc = job_board_page();
        fill(&board, &mut doc, &JobPosting::new("Engineer", "Build things", "a@b.com"));

        let err = board.submit(&mut doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert!(board.store().is_empty().unwrap());
        assert!(!status(&doc).is_empty());

        // resubmitting the kept form still saves nothing
        assert!(board.submit(&mut doc).is_err());
        assert!(board.store().is_empty().unwrap());
        assert_eq!(board.form_reader().read(&doc).unwrap().title, "Engineer");
    }

    #[test]
    fn render_failure_during_load_shows_message() {
        let storage = InMemoryStorage::with_value(
            "devJobs",
            r#"[{"title":"A","summary":"a","contactEmail":"a@b.com"}]"#,
        );
        let mut config = BoardConfig::default();
        config.selectors.anchor = ".no-anchor".into();
        let board = JobBoard::new(storage, config);
        let mut doc = job_board_page();
        let list_before = doc.query_all(".job-post").len();

        let err = board.load(&mut doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert_eq!(status(&doc), err.user_message());
        assert_eq!(doc.query_all(".job-post").len(), list_before);
    }

    #[test]
    fn empty_store_loads_without_touching_the_list() {
        let mut config = BoardConfig::default();
        config.selectors.template = ".no-template".into();
        let board = JobBoard::new(InMemoryStorage::new(), config);
        let mut doc = job_board_page();

        assert_eq!(board.load(&mut doc).unwrap(), 0);
        assert_eq!(status(&doc), "");
    }

    #[test]
    fn load_renders_stored_jobs_in_order() {
        let storage = InMemoryStorage::with_value(
            "devJobs",
            r#"[{"title":"A","summary":"a","contactEmail":"a@b.com"},
                {"title":"B","summary":"b","contactEmail":"b@b.com"}]"#,
        );
        let board = JobBoard::new(storage, BoardConfig::default());
        let mut doc = job_board_page();

        assert_eq!(board.load(&mut doc).unwrap(), 2);
        let titles: Vec<_> = doc
            .query_all(".job-post-title")
            .into_iter()
            .map(|n| doc.text(n))
            .collect();
        assert_eq!(titles, vec!["Frontend Developer", "A", "B"]);
    }

    #[test]
    fn load_with_legacy_order_matches_page_script() {
        let storage = InMemoryStorage::with_value(
            "devJobs",
            r#"[{"title":"A","summary":"a","contactEmail":"a@b.com"},
                {"title":"B","summary":"b","contactEmail":"b@b.com"}]"#,
        );
        let config = BoardConfig {
            list_order: ListOrder::Legacy,
            ..BoardConfig::default()
        };
        let board = JobBoard::new(storage, config);
        let mut doc = job_board_page();

        board.load(&mut doc).unwrap();
        let titles: Vec<_> = doc
            .query_all(".job-post-title")
            .into_iter()
            .map(|n| doc.text(n))
            .collect();
        assert_eq!(titles, vec!["B", "A", "Frontend Developer"]);
    }

    #[test]
    fn corrupt_storage_surfaces_parse_error_on_load() {
        let board = JobBoard::new(
            InMemoryStorage::with_value("devJobs", "[{"),
            BoardConfig::default(),
        );
        let mut doc = job_board_page();

        let err = board.load(&mut doc).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(status(&doc).contains("corrupted"));
    }
}
