//! Standalone HTML output: one section per derivation-bearing slide, separated by print page
//! breaks.

use super::SlideSink;

#[derive(Debug, Default)]
/// Accumulates an HTML page.
pub struct HtmlSink {
    out: String,
}

impl SlideSink for HtmlSink {
    fn begin(&mut self, title: &str) {
        self.out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        self.out
            .push_str(&format!("<title>{}</title>\n", escape(title)));
        self.out.push_str("</head>\n<body>\n");
    }

    fn page_break(&mut self) {
        self.out
            .push_str("<div style=\"page-break-before: always\"></div>\n");
    }

    fn slide(&mut self, heading: &str, items: &[&str]) {
        self.out.push_str("<section>\n");
        self.out.push_str(&format!("<h1>{}</h1>\n", escape(heading)));
        if !items.is_empty() {
            self.out.push_str("<ul>\n");
            for item in items {
                self.out.push_str(&format!("<li>{}</li>\n", escape(item)));
            }
            self.out.push_str("</ul>\n");
        }
        self.out.push_str("</section>\n");
    }

    fn finish(mut self) -> String {
        self.out.push_str("</body>\n</html>\n");
        self.out
    }
}

#[must_use]
/// Escapes text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
