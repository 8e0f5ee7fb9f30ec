//! Markup to HTML conversion.
//!
//! Only the markup the renderer produces is understood: `#`/`##`/`###`
//! headings, `- ` bullets, `[text](url)` links, `*emphasis*` and blank lines.
//! The result is one self-contained document with an embedded stylesheet.

use crate::constants;
use regex::Regex;
use std::sync::OnceLock;

const STYLE: &str = "body{max-width:820px;margin:2rem auto;padding:0 1rem;\
font:16px/1.5 system-ui,Segoe UI,Roboto,Helvetica,Arial,sans-serif}\
code,pre{font:13px ui-monospace,Consolas,Menlo,monospace}\
h1,h2,h3{line-height:1.2}ul{padding-left:1.2rem}";

fn link_pattern() -> &'static Regex {
    static LINK: OnceLock<Regex> = OnceLock::new();
    LINK.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"))
}

fn emphasis_pattern() -> &'static Regex {
    static EMPHASIS: OnceLock<Regex> = OnceLock::new();
    EMPHASIS.get_or_init(|| Regex::new(r"\*([^*]+)\*").expect("valid emphasis regex"))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// Escapes `text`, then converts links and emphasis.
fn inline(text: &str) -> String {
    let escaped = escape(text);
    let linked = link_pattern().replace_all(&escaped, r#"<a href="$2" target="_blank">$1</a>"#);
    emphasis_pattern()
        .replace_all(&linked, "<em>$1</em>")
        .into_owned()
}

/// Converts digest markup to a complete HTML document.
///
/// Consecutive bullets share one `<ul>`; any open list is closed before a
/// heading, paragraph or blank line. Blank lines become empty paragraphs.
///
/// # Examples
///
/// ```
/// use curate::digest::html::to_html;
///
/// let html = to_html("# Title\n- [a.com](https://a.com) — *code*\n");
/// assert!(html.contains("<h1>Title</h1>"));
/// assert!(html.contains(r#"<ul><li><a href="https://a.com" target="_blank">a.com</a> — <em>code</em></li></ul>"#));
/// ```
pub fn to_html(markup: &str) -> String {
    let mut body = String::new();
    let mut in_list = false;

    let close_list = |body: &mut String, in_list: &mut bool| {
        if *in_list {
            body.push_str("</ul>\n");
            *in_list = false;
        }
    };

    for line in markup.lines() {
        let line = line.trim();

        let heading = [("### ", "h3"), ("## ", "h2"), ("# ", "h1")]
            .into_iter()
            .find_map(|(prefix, tag)| line.strip_prefix(prefix).map(|text| (tag, text)));
        if let Some((tag, text)) = heading {
            close_list(&mut body, &mut in_list);
            body.push_str(&format!("<{tag}>{}</{tag}>\n", inline(text)));
            continue;
        }

        if let Some(item) = line.strip_prefix("- ") {
            if !in_list {
                body.push_str("<ul>");
                in_list = true;
            }
            body.push_str(&format!("<li>{}</li>", inline(item)));
            continue;
        }

        close_list(&mut body, &mut in_list);
        if line.is_empty() {
            body.push_str("<p></p>\n");
        } else {
            body.push_str(&format!("<p>{}</p>\n", inline(line)));
        }
    }
    close_list(&mut body, &mut in_list);

    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        constants::HTML_TITLE,
        STYLE,
        body
    )
}
