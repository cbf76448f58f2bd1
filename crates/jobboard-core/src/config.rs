//! Board configuration.
//!
//! Every field has a default matching the stock page, so an empty TOML
//! document is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::domain::FormField;

/// Storage key the page script has always used.
pub const DEFAULT_STORAGE_KEY: &str = "devJobs";

/// Where a newly rendered posting is placed in the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListOrder {
    /// After the last rendered posting: the list reads in submission order.
    #[default]
    Append,

    /// Immediately after the list header: the newest posting comes first.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Key holding the serialized job list.
    pub storage_key: String,

    pub list_order: ListOrder,

    /// Reject blank fields and malformed contact emails before saving.
    pub validate_input: bool,

    pub selectors: Selectors,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            list_order: ListOrder::default(),
            validate_input: true,
            selectors: Selectors::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

/// Selectors locating the nodes the workflow reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub form: String,
    pub title_input: String,
    pub summary_input: String,
    pub contact_email_input: String,
    pub template: String,
    pub post_title: String,
    pub post_summary: String,
    pub post_contact_email: String,
    pub anchor: String,
    pub status: String,
}

impl Selectors {
    pub fn input(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title_input,
            FormField::Summary => &self.summary_input,
            FormField::ContactEmail => &self.contact_email_input,
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            form: ".job-form".to_string(),
            title_input: format!("#{}", FormField::Title.default_input_id()),
            summary_input: format!("#{}", FormField::Summary.default_input_id()),
            contact_email_input: format!("#{}", FormField::ContactEmail.default_input_id()),
            template: ".job-post".to_string(),
            post_title: ".job-post-title".to_string(),
            post_summary: ".job-post-summary".to_string(),
            post_contact_email: ".job-post-contact-email".to_string(),
            anchor: ".jobs-header".to_string(),
            status: ".job-form-status".to_string(),
        }
    }
}
