//! FormReader - reads the submission form into a typed [`JobForm`].

use crate::config::Selectors;
use crate::dom::Document;
use crate::domain::errors::JobBoardError;
use crate::domain::{FormField, JobForm};

/// Reads the three job inputs verbatim. No trimming, no validation.
pub struct FormReader<'a> {
    selectors: &'a Selectors,
}

impl<'a> FormReader<'a> {
    pub fn new(selectors: &'a Selectors) -> Self {
        Self { selectors }
    }

    pub fn read(&self, doc: &Document) -> Result<JobForm, JobBoardError> {
        Ok(JobForm {
            title: self.field(doc, FormField::Title)?,
            summary: self.field(doc, FormField::Summary)?,
            contact_email: self.field(doc, FormField::ContactEmail)?,
        })
    }

    fn field(&self, doc: &Document, field: FormField) -> Result<String, JobBoardError> {
        let selector = self.selectors.input(field);
        let node = doc
            .query(selector)
            .ok_or_else(|| JobBoardError::lookup(selector))?;
        Ok(doc.value(node).to_string())
    }

    /// Set an input's value, as a user typing into the page would.
    pub fn fill(
        &self,
        doc: &mut Document,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), JobBoardError> {
        let selector = self.selectors.input(field);
        let node = doc
            .query(selector)
            .ok_or_else(|| JobBoardError::lookup(selector))?;
        doc.set_value(node, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::job_board_page;
    use crate::domain::ErrorKind;

    #[test]
    fn reads_values_verbatim() {
        let selectors = Selectors::default();
        let reader = FormReader::new(&selectors);
        let mut doc = job_board_page();
        reader.fill(&mut doc, FormField::Title, " Engineer ").unwrap();
        reader.fill(&mut doc, FormField::Summary, "Build\nthings").unwrap();
        reader.fill(&mut doc, FormField::ContactEmail, "a@b.com").unwrap();

        let form = reader.read(&doc).unwrap();
        assert_eq!(
            form,
            JobForm {
                title: " Engineer ".into(),
                summary: "Build\nthings".into(),
                contact_email: "a@b.com".into(),
            }
        );
    }

    #[test]
    fn untouched_form_reads_empty_strings() {
        let selectors = Selectors::default();
        let form = FormReader::new(&selectors).read(&job_board_page()).unwrap();
        assert_eq!(form, JobForm::default());
    }

    #[test]
    fn missing_input_is_lookup_error_naming_selector() {
        let selectors = Selectors {
            summary_input: "#no-such-input".into(),
            ..Selectors::default()
        };
        let err = FormReader::new(&selectors)
            .read(&job_board_page())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert!(err.to_string().contains("#no-such-input"));
    }
}
