use std::collections::HashMap;
use std::sync::Arc;

use crate::dom::Document;
use crate::domain::errors::JobBoardError;
use crate::domain::UiEvent;
use crate::ports::Storage;

use super::board::JobBoard;

/// A handler for one UI event.
///
/// Handlers receive the page so they can read the form and update the list.
pub trait EventHandler: Send + Sync {
    fn handle(&self, page: &mut Document) -> Result<(), JobBoardError>;
}

/// Registry of handlers (event -> handler).
///
/// Design:
/// - Built during initialization (mutable).
/// - Used while the page is live (immutable).
#[derive(Default)]
pub struct EventRegistry {
    handlers: HashMap<UiEvent, Arc<dyn EventHandler>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for an event. A second handler for the same event is an error.
    pub fn register(
        &mut self,
        event: UiEvent,
        handler: Arc<dyn EventHandler>,
    ) -> Result<(), JobBoardError> {
        if self.handlers.contains_key(&event) {
            return Err(JobBoardError::DuplicateHandler(event));
        }
        self.handlers.insert(event, handler);
        Ok(())
    }

    pub fn get(&self, event: UiEvent) -> Option<&Arc<dyn EventHandler>> {
        self.handlers.get(&event)
    }

    pub fn contains(&self, event: UiEvent) -> bool {
        self.handlers.contains_key(&event)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the handler registered for `event` against the page.
    pub fn dispatch(&self, event: UiEvent, page: &mut Document) -> Result<(), JobBoardError> {
        let handler = self
            .get(event)
            .ok_or(JobBoardError::HandlerNotFound(event))?;
        tracing::debug!(%event, "dispatching ui event");
        handler.handle(page)
    }
}

/// Submit handler: runs the submission workflow.
pub struct SubmitHandler<S> {
    board: Arc<JobBoard<S>>,
}

impl<S> SubmitHandler<S> {
    pub fn new(board: Arc<JobBoard<S>>) -> Self {
        Self { board }
    }
}

impl<S: Storage> EventHandler for SubmitHandler<S> {
    fn handle(&self, page: &mut Document) -> Result<(), JobBoardError> {
        self.board.submit(page).map(|_| ())
    }
}

/// Load handler: renders every stored posting.
pub struct LoadHandler<S> {
    board: Arc<JobBoard<S>>,
}

impl<S> LoadHandler<S> {
    pub fn new(board: Arc<JobBoard<S>>) -> Self {
        Self { board }
    }
}

impl<S: Storage> EventHandler for LoadHandler<S> {
    fn handle(&self, page: &mut Document) -> Result<(), JobBoardError> {
        self.board.load(page).map(|_| ())
    }
}
