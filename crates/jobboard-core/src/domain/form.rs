//! JobForm - フォーム境界の型付きリクエスト
//!
//! フォームから読み取った値はそのまま（trim も変換もせず）`JobForm` に入る。
//! `JobPosting` に変換する前に、必要なら `validate()` で境界チェックを行う。

use std::fmt;

use super::errors::{FieldError, ValidationError};
use super::posting::JobPosting;

/// 投稿フォームの入力欄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Summary,
    ContactEmail,
}

impl FormField {
    /// 標準ページでの入力欄の id
    pub fn default_input_id(self) -> &'static str {
        match self {
            FormField::Title => "job-form-title",
            FormField::Summary => "job-form-summary",
            FormField::ContactEmail => "job-form-contact-email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Summary => "summary",
            FormField::ContactEmail => "contact email",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// JobForm はフォームから読み取った生の値
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    pub title: String,
    pub summary: String,
    pub contact_email: String,
}

impl JobForm {
    /// 検証なしで JobPosting に変換（元のフォーム処理と同じ挙動）
    pub fn into_posting(self) -> JobPosting {
        JobPosting {
            title: self.title,
            summary: self.summary,
            contact_email: self.contact_email,
        }
    }

    /// 入力値を検証して JobPosting に変換
    ///
    /// # 検証内容
    /// - title / summary: 空白のみは不可
    /// - contact_email: `local@domain` の形で、domain に `.` を含む
    ///
    /// 値そのものは書き換えない（trim した結果を保存したりはしない）。
    pub fn validate(self) -> Result<JobPosting, ValidationError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError {
                field: FormField::Title,
                reason: "must not be blank",
            });
        }
        if self.summary.trim().is_empty() {
            errors.push(FieldError {
                field: FormField::Summary,
                reason: "must not be blank",
            });
        }
        if !looks_like_email(&self.contact_email) {
            errors.push(FieldError {
                field: FormField::ContactEmail,
                reason: "must be an email address",
            });
        }

        if errors.is_empty() {
            Ok(self.into_posting())
        } else {
            Err(ValidationError { errors })
        }
    }
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}
