//! HTML serialization of a [`Document`].

use std::fmt::Write;

use super::document::{Document, NodeId};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

impl Document {
    /// Serialize the whole tree (children of the root) as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for &child in self.children(self.root()) {
            self.write_node(child, 0, &mut out);
        }
        out
    }

    /// Serialize one subtree as HTML.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(node, 0, &mut out);
        out
    }

    fn write_node(&self, node: NodeId, depth: usize, out: &mut String) {
        let tag = self.tag(node);
        let indent = "  ".repeat(depth);
        let textarea = tag == "textarea";

        let _ = write!(out, "{indent}<{tag}");
        for (name, value) in self.attrs(node) {
            if textarea && name == "value" {
                continue;
            }
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&tag) {
            out.push('\n');
            return;
        }

        // textarea keeps its value as content
        let text = if textarea {
            self.value(node)
        } else {
            self.own_text(node)
        };
        let children = self.children(node);
        if children.is_empty() {
            let _ = writeln!(out, "{}</{tag}>", escape(text));
            return;
        }

        out.push('\n');
        if !text.is_empty() {
            let _ = writeln!(out, "{indent}  {}", escape(text));
        }
        for &child in children {
            self.write_node(child, depth + 1, out);
        }
        let _ = writeln!(out, "{indent}</{tag}>");
    }
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_text_and_attributes() {
        let mut doc = Document::new();
        let link = doc.create_element("a");
        doc.set_attr(link, "href", "mailto:\"x\"@b.com");
        doc.set_text(link, "<script>");
        doc.append_child(doc.root(), link).unwrap();

        assert_eq!(
            doc.to_html(),
            "<a href=\"mailto:&quot;x&quot;@b.com\">&lt;script&gt;</a>\n"
        );
    }

    #[test]
    fn nested_elements_are_indented() {
        let mut doc = Document::new();
        let section = doc.create_element("section");
        let h2 = doc.create_element("h2");
        doc.set_text(h2, "Jobs");
        let input = doc.create_element("input");
        doc.set_attr(input, "id", "job-form-title");
        doc.append_child(doc.root(), section).unwrap();
        doc.append_child(section, h2).unwrap();
        doc.append_child(section, input).unwrap();

        assert_eq!(
            doc.to_html(),
            "<section>\n  <h2>Jobs</h2>\n  <input id=\"job-form-title\">\n</section>\n"
        );
    }

    #[test]
    fn textarea_value_is_rendered_as_content() {
        let mut doc = Document::new();
        let area = doc.create_element("textarea");
        doc.set_attr(area, "id", "job-form-summary");
        doc.set_value(area, "a & b");
        doc.append_child(doc.root(), area).unwrap();

        assert_eq!(
            doc.to_html(),
            "<textarea id=\"job-form-summary\">a &amp; b</textarea>\n"
        );
    }
}
