//! HTML page generation.
//!
//! Drives the hierarchy traversal and emits one nested `<section>` per node
//! in encounter order, plus a nav sidebar mirroring the namespace tree. The
//! page is self-contained: embedded CSS, no external assets.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use itertools::Itertools;

use crate::domain::error::{DocError, DocResult};
use crate::domain::hierarchy::HierarchyNode;
use crate::domain::walk::{WalkEvent, Walker};
use crate::exports::{Export, LabelKind};

const STYLE: &str = "\
body { margin: 0; display: flex; font-family: system-ui, sans-serif; color: #222; }
nav { min-width: 16em; padding: 1em; background: #f4f4f4; border-right: 1px solid #ddd; }
nav h1 { font-size: 1.1em; }
nav ul { list-style: none; padding-left: 1em; }
nav a { text-decoration: none; color: #205080; }
main { padding: 1em 2em; flex: 1; }
section.label { margin: 0.5em 0 0.5em 1em; padding-left: 0.75em; border-left: 2px solid #eee; }
.meta { font-size: 0.85em; color: #666; }
.kind { padding: 0 0.4em; border-radius: 3px; color: #fff; }
.kind-code { background: #2a7; }
.kind-data { background: #26c; }
.kind-constant { background: #b63; }
pre.description { background: #fafafa; border: 1px solid #eee; padding: 0.5em; }
.description.empty { display: none; }
";

/// Visual parameters of the generated page.
#[derive(Debug, Clone)]
pub struct HtmlTheme {
    pub title: String,
}

/// Render the complete documentation page.
///
/// Sections appear in traversal (= export declaration) order. The
/// description honors the three-way distinction: absent nodes get no
/// description element at all, empty ones get an empty placeholder, and
/// found comment blocks are escaped into a `<pre>`.
pub fn render_page(root: &HierarchyNode, exports: &[Export], theme: &HtmlTheme) -> String {
    let kinds: HashMap<&str, LabelKind> = exports
        .iter()
        .map(|e| (e.path.as_str(), e.kind))
        .collect();

    let mut body = String::new();
    for event in Walker::new(root) {
        match event {
            WalkEvent::Enter { label, node } => {
                let depth = label.matches('.').count() + 1;
                let level = (depth + 1).min(6);
                body.push_str(&format!(
                    "<section id=\"{}\" class=\"label\">\n<h{level}>{}</h{level}>\n",
                    escape(&label),
                    escape(&label),
                ));
                if let Some(line) = node.line {
                    let kind = kinds.get(label.as_str()).copied().unwrap_or(LabelKind::Code);
                    body.push_str(&format!(
                        "<p class=\"meta\"><span class=\"kind kind-{kind}\">{kind}</span> \
                         <span class=\"line\">line {}</span></p>\n",
                        line + 1
                    ));
                }
                match &node.description {
                    None => {}
                    Some(text) if text.is_empty() => {
                        body.push_str("<p class=\"description empty\"></p>\n");
                    }
                    Some(text) => {
                        let cleaned = text.lines().map(str::trim).join("\n");
                        body.push_str(&format!(
                            "<pre class=\"description\">{}</pre>\n",
                            escape(&cleaned)
                        ));
                    }
                }
            }
            WalkEvent::Leave { .. } => body.push_str("</section>\n"),
        }
    }

    let mut nav = String::new();
    render_nav(root, "", &mut nav);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n\
         <nav>\n<h1>{title}</h1>\n{nav}</nav>\n<main>\n{body}</main>\n</body>\n</html>\n",
        title = escape(&theme.title),
    )
}

fn render_nav(node: &HierarchyNode, prefix: &str, out: &mut String) {
    if node.is_leaf() {
        return;
    }
    out.push_str("<ul>\n");
    for (segment, child) in node.children() {
        let label = if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{prefix}.{segment}")
        };
        out.push_str(&format!(
            "<li><a href=\"#{}\">{}</a>",
            escape(&label),
            escape(segment)
        ));
        render_nav(child, &label, out);
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
}

pub fn write_page(path: &Path, html: &str) -> DocResult<()> {
    fs::write(path, html).map_err(|e| DocError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
