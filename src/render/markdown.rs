//! Minimal markdown to HTML conversion for article bodies
//!
//! Supports `#`..`###` headings, `**bold**`, `*italic*`, images, links,
//! paragraphs (blank-line separated) and line breaks. Input is escaped before
//! any markup is introduced.

use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,3}) (.*)$").expect("heading pattern is valid"));
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern is valid"));
/// `![alt](src)` or `[label](href)`
static MEDIA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[([^\]]*)\]\(([^)]*)\)").expect("media pattern is valid"));

/// Converts article content to HTML
///
/// # Examples
///
/// ```
/// use portfolio_blog::render::markdown_to_html;
///
/// assert_eq!(markdown_to_html("## Intro"), "<h2>Intro</h2>");
/// assert_eq!(markdown_to_html("Hi **there**"), "<p>Hi <strong>there</strong></p>");
/// ```
pub fn markdown_to_html(content: &str) -> String {
    let content = content.replace("\r\n", "\n");

    content
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(block: &str) -> String {
    if !block.contains('\n') {
        if let Some(caps) = HEADING.captures(block) {
            let level = caps[1].len();
            return format!("<h{0}>{1}</h{0}>", level, render_inline(&caps[2]));
        }
    }

    let lines: Vec<String> = block.lines().map(render_line).collect();
    format!("<p>{}</p>", lines.join("<br>"))
}

fn render_line(line: &str) -> String {
    match HEADING.captures(line) {
        Some(caps) => {
            let level = caps[1].len();
            format!("<h{0}>{1}</h{0}>", level, render_inline(&caps[2]))
        }
        None => render_inline(line),
    }
}

/// Renders one line of inline markup
///
/// Images and links are cut out of the raw text first. Their URLs and alt
/// text become escaped attributes, and emphasis only applies to text
/// outside tags.
fn render_inline(text: &str) -> String {
    let mut html = String::new();
    let mut last = 0;

    for caps in MEDIA.captures_iter(text) {
        let (Some(whole), Some(bang), Some(label), Some(url)) =
            (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };

        html.push_str(&emphasis(&text[last..whole.start()]));
        let url = encode_double_quoted_attribute(url.as_str().trim());
        if bang.as_str().is_empty() {
            html.push_str(&format!(
                r#"<a href="{}">{}</a>"#,
                url,
                emphasis(label.as_str())
            ));
        } else {
            html.push_str(&format!(
                r#"<img alt="{}" src="{}" />"#,
                encode_double_quoted_attribute(label.as_str()),
                url
            ));
        }
        last = whole.end();
    }

    html.push_str(&emphasis(&text[last..]));
    html
}

/// Escapes plain text, then applies bold and italic
fn emphasis(text: &str) -> String {
    let escaped = encode_text(text);
    let html = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    ITALIC.replace_all(&html, "<em>$1</em>").into_owned()
}
