//! Domain model (postings, form requests, UI events, errors).

pub mod errors;
pub mod events;
pub mod form;
pub mod posting;

pub use self::errors::{ErrorKind, FieldError, JobBoardError, ValidationError};
pub use self::events::UiEvent;
pub use self::form::{FormField, JobForm};
pub use self::posting::JobPosting;
