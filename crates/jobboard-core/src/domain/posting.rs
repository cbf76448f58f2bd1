//! Job posting record.

use serde::{Deserialize, Serialize};

/// One job listing.
///
/// Serialized with the field names the page script has always written
/// (`title`, `summary`, `contactEmail`), so existing stored lists stay readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub title: String,
    pub summary: String,
    pub contact_email: String,
}

impl JobPosting {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        contact_email: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            contact_email: contact_email.into(),
        }
    }

    /// Link target for the contact anchor.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}
