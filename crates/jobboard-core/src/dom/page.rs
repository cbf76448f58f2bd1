//! The stock job board page: a jobs list with one example posting and the
//! submission form.

use super::document::{Document, NodeId};
use crate::domain::FormField;

fn element(doc: &mut Document, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let node = doc.create_element(tag);
    for (name, value) in attrs {
        doc.set_attr(node, name, *value);
    }
    // parent is always attached and never inside `node`
    let _ = doc.append_child(parent, node);
    node
}

fn text_element(
    doc: &mut Document,
    parent: NodeId,
    tag: &str,
    attrs: &[(&str, &str)],
    text: &str,
) -> NodeId {
    let node = element(doc, parent, tag, attrs);
    doc.set_text(node, text);
    node
}

/// Build the page every board starts from.
///
/// The example posting doubles as the template that new postings are
/// cloned from, and the list header is the insertion anchor.
pub fn job_board_page() -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    let main = element(&mut doc, root, "main", &[("class", "job-board")]);

    let jobs = element(&mut doc, main, "section", &[("class", "jobs")]);
    text_element(&mut doc, jobs, "h2", &[("class", "jobs-header")], "Developer Jobs");
    let post = element(&mut doc, jobs, "article", &[("class", "job-post")]);
    text_element(
        &mut doc,
        post,
        "h3",
        &[("class", "job-post-title")],
        "Frontend Developer",
    );
    text_element(
        &mut doc,
        post,
        "p",
        &[("class", "job-post-summary")],
        "Build accessible interfaces for our hiring tools.",
    );
    text_element(
        &mut doc,
        post,
        "a",
        &[
            ("class", "job-post-contact-email"),
            ("href", "mailto:jobs@example.com"),
        ],
        "Contact",
    );

    let form = element(&mut doc, main, "form", &[("class", "job-form")]);
    text_element(&mut doc, form, "h2", &[], "Post a Job");
    element(
        &mut doc,
        form,
        "input",
        &[
            ("id", FormField::Title.default_input_id()),
            ("name", "title"),
            ("type", "text"),
        ],
    );
    element(
        &mut doc,
        form,
        "textarea",
        &[
            ("id", FormField::Summary.default_input_id()),
            ("name", "summary"),
        ],
    );
    element(
        &mut doc,
        form,
        "input",
        &[
            ("id", FormField::ContactEmail.default_input_id()),
            ("name", "contactEmail"),
            ("type", "email"),
        ],
    );
    text_element(&mut doc, form, "button", &[("type", "submit")], "Post");
    element(&mut doc, form, "p", &[("class", "job-form-status")]);

    doc
}
