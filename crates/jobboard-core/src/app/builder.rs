//! AppBuilder - アプリケーションの構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - ストレージの注入（テストでは InMemoryStorage、CLI では FileStorage）

use std::sync::Arc;

use crate::config::BoardConfig;
use crate::dom::{Document, job_board_page};
use crate::domain::errors::JobBoardError;
use crate::domain::{FormField, JobForm, UiEvent};
use crate::ports::Storage;

use super::board::JobBoard;
use super::events::{EventHandler, EventRegistry, LoadHandler, SubmitHandler};

/// AppBuilder はアプリケーションを構築
///
/// # 使用例
/// ```ignore
/// let mut app = AppBuilder::new(InMemoryStorage::new())
///     .with_config(config)
///     .with_default_handlers()
///     .expect_events(&[UiEvent::Submit, UiEvent::Load])
///     .build()?;
/// app.dispatch(UiEvent::Load)?;
/// ```
///
/// # Fail-fast 設計
/// - expect_events() で必要なイベントを宣言
/// - build() 時に「期待集合 ⊆ 登録済み集合」をチェック
/// - 不足があれば BuildError を返す
pub struct AppBuilder<S> {
    storage: S,
    config: BoardConfig,
    page: Option<Document>,
    registry: EventRegistry,
    default_handlers: bool,
    expected_events: Option<Vec<UiEvent>>,
}

/// BuildError はアプリケーション構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing handlers for events: {0:?}. These events were expected but not registered.")]
    MissingHandlers(Vec<UiEvent>),

    #[error(transparent)]
    Registry(#[from] JobBoardError),
}

impl<S: Storage + 'static> AppBuilder<S> {
    /// 新しい AppBuilder を作成
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            config: BoardConfig::default(),
            page: None,
            registry: EventRegistry::new(),
            default_handlers: false,
            expected_events: None,
        }
    }

    pub fn with_config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// 描画面を差し替える（省略時は標準ページ）
    pub fn with_page(mut self, page: Document) -> Self {
        self.page = Some(page);
        self
    }

    /// 独自のハンドラを登録
    ///
    /// 同じイベントに二重登録すると `JobBoardError::DuplicateHandler`。
    pub fn register(
        mut self,
        event: UiEvent,
        handler: Arc<dyn EventHandler>,
    ) -> Result<Self, JobBoardError> {
        self.registry.register(event, handler)?;
        Ok(self)
    }

    /// Submit / Load に標準ハンドラを使う
    ///
    /// register() で独自ハンドラが登録済みのイベントはそちらが優先される。
    pub fn with_default_handlers(mut self) -> Self {
        self.default_handlers = true;
        self
    }

    /// 期待されるイベントのリストを設定
    pub fn expect_events(mut self, events: &[UiEvent]) -> Self {
        self.expected_events = Some(events.to_vec());
        self
    }

    /// AppBuilder を構築して App を生成
    ///
    /// # 検証
    /// - expect_events() で設定されたイベントにハンドラがあるかチェック
    /// - 不足があれば BuildError::MissingHandlers を返す
    pub fn build(self) -> Result<App<S>, BuildError> {
        let board = Arc::new(JobBoard::new(self.storage, self.config));
        let mut registry = self.registry;

        if self.default_handlers {
            if !registry.contains(UiEvent::Submit) {
                registry.register(UiEvent::Submit, Arc::new(SubmitHandler::new(board.clone())))?;
            }
            if !registry.contains(UiEvent::Load) {
                registry.register(UiEvent::Load, Arc::new(LoadHandler::new(board.clone())))?;
            }
        }

        if let Some(expected) = &self.expected_events {
            let missing: Vec<UiEvent> = expected
                .iter()
                .filter(|event| !registry.contains(**event))
                .copied()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingHandlers(missing));
            }
        }

        Ok(App {
            board,
            registry,
            page: self.page.unwrap_or_else(job_board_page),
        })
    }
}

/// App はページ・ハンドラ・投稿ワークフローをまとめたもの
pub struct App<S> {
    board: Arc<JobBoard<S>>,
    registry: EventRegistry,
    page: Document,
}

impl<S: Storage> App<S> {
    pub fn board(&self) -> &JobBoard<S> {
        &self.board
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    pub fn page(&self) -> &Document {
        &self.page
    }

    /// イベントを登録済みハンドラに配送
    pub fn dispatch(&mut self, event: UiEvent) -> Result<(), JobBoardError> {
        self.registry.dispatch(event, &mut self.page)
    }

    /// フォームに値を入力する（利用者の入力の代わり）
    pub fn fill_form(&mut self, form: &JobForm) -> Result<(), JobBoardError> {
        let reader = self.board.form_reader();
        reader.fill(&mut self.page, FormField::Title, form.title.as_str())?;
        reader.fill(&mut self.page, FormField::Summary, form.summary.as_str())?;
        reader.fill(
            &mut self.page,
            FormField::ContactEmail,
            form.contact_email.as_str(),
        )?;
        Ok(())
    }
}
