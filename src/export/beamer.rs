//! LaTeX beamer output: one frame per derivation-bearing slide.

use super::SlideSink;

const PREAMBLE: &str = "\\documentclass{beamer}\n\\usepackage[utf8]{inputenc}\n";

#[derive(Debug, Default)]
/// Accumulates beamer frames.
pub struct BeamerSink {
    out: String,
}

impl SlideSink for BeamerSink {
    fn begin(&mut self, title: &str) {
        self.out.push_str(PREAMBLE);
        self.out.push_str(&format!("\\title{{{}}}\n", escape(title)));
        self.out.push_str("\\begin{document}\n");
    }

    fn page_break(&mut self) {
        // Frames already start on a new page.
        self.out.push('\n');
    }

    fn slide(&mut self, heading: &str, items: &[&str]) {
        self.out
            .push_str(&format!("\\begin{{frame}}{{{}}}\n", escape(heading)));
        if !items.is_empty() {
            self.out.push_str("\\begin{itemize}\n");
            for item in items {
                self.out.push_str(&format!("  \\item {}\n", escape(item)));
            }
            self.out.push_str("\\end{itemize}\n");
        }
        self.out.push_str("\\end{frame}\n");
    }

    fn finish(mut self) -> String {
        self.out.push_str("\\end{document}\n");
        self.out
    }
}

#[must_use]
/// Escapes LaTeX special characters.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\textbackslash{}"),
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
