//! Errors - エラー型と分類
//!
//! ワークフロー全体で使う `JobBoardError` と、その運用上の分類 `ErrorKind`。
//!
//! # 分類
//! - Lookup: 描画面に必要なノード（入力欄・テンプレート・アンカー）が無い
//! - Parse: 永続化された値が壊れている（「まだ何も無い」とは区別する）
//! - Validation: 入力値の検証に失敗
//! - Storage: バックエンドの I/O 障害
//! - Wiring: イベントハンドラの登録・解決の失敗

use super::events::UiEvent;
use super::form::FormField;

/// ErrorKind は JobBoardError の運用分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lookup,
    Parse,
    Validation,
    Storage,
    Wiring,
}

/// JobBoardError はドメインエラー
#[derive(Debug, thiserror::Error)]
pub enum JobBoardError {
    #[error("no node matches selector `{selector}`")]
    Lookup { selector: String },

    #[error("stored value under key `{key}` is not a valid job list: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode job list for key `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage backend failed: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("handler not found for event={0}")]
    HandlerNotFound(UiEvent),

    #[error("duplicate handler for event={0}")]
    DuplicateHandler(UiEvent),
}

impl JobBoardError {
    pub fn lookup(selector: impl Into<String>) -> Self {
        Self::Lookup {
            selector: selector.into(),
        }
    }

    pub fn storage(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Storage {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Lookup { .. } => ErrorKind::Lookup,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Encode { .. } | Self::Storage { .. } => ErrorKind::Storage,
            Self::HandlerNotFound(_) | Self::DuplicateHandler(_) => ErrorKind::Wiring,
        }
    }

    /// 画面に表示するためのメッセージ
    ///
    /// 内部の詳細（serde のエラー位置など）は含めず、利用者が次に何をすべきかが分かる文にする。
    pub fn user_message(&self) -> String {
        match self {
            Self::Lookup { .. } => {
                "The page is missing part of the job board, so this could not be completed."
                    .to_string()
            }
            Self::Parse { .. } => {
                "Saved jobs could not be read because the stored data is corrupted.".to_string()
            }
            Self::Validation(err) => format!("Please fix the form: {err}"),
            Self::Encode { .. } | Self::Storage { .. } => {
                "The job could not be saved. Please try again.".to_string()
            }
            Self::HandlerNotFound(_) | Self::DuplicateHandler(_) => {
                "This action is not available on the page.".to_string()
            }
        }
    }
}

/// ひとつの入力欄に対する検証エラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub reason: &'static str,
}

/// ValidationError は検証に失敗した入力欄をすべて保持する
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} {}", e.field.label(), e.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn has(&self, field: FormField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_is_distinct_from_lookup() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = JobBoardError::Parse {
            key: "devJobs".into(),
            source,
        };
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("devJobs"));
        assert_eq!(JobBoardError::lookup(".job-post").kind(), ErrorKind::Lookup);
    }

    #[test]
    fn validation_error_lists_every_field() {
        let err = ValidationError {
            errors: vec![
                FieldError {
                    field: FormField::Title,
                    reason: "must not be blank",
                },
                FieldError {
                    field: FormField::ContactEmail,
                    reason: "must be an email address",
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "title must not be blank; contact email must be an email address"
        );
        assert!(err.has(FormField::Title));
        assert!(!err.has(FormField::Summary));
    }

    #[test]
    fn user_message_hides_internal_details() {
        let err = JobBoardError::lookup("#job-form-title");
        assert!(!err.user_message().contains("#job-form-title"));
    }
}
