//! Markdown rendering for assistant chat messages
//!
//! Uses pulldown-cmark. Raw HTML in the source is shown as text and script
//! links are neutralised, because the user's own words end up in the reply.

use leptos::prelude::*;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// Render markdown content as HTML
#[component]
pub fn Markdown(
    /// The markdown content to render
    content: String,
) -> impl IntoView {
    let html = parse_markdown(&content);

    view! { <div class="markdown-content text-sm leading-relaxed" inner_html=html /> }
}

/// Parse markdown string to HTML
pub fn parse_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let events = Parser::new_ext(content, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if is_script_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        other => other,
    });

    let mut html_output = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut html_output, events);
    html_output
}

fn is_script_url(url: &str) -> bool {
    let scheme = url.trim_start().to_ascii_lowercase();
    scheme.starts_with("javascript:") || scheme.starts_with("vbscript:") || scheme.starts_with("data:")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chat::canned_reply;

    #[test]
    fn test_basic_paragraph() {
        let html = parse_markdown("Hello, world!");
        assert_eq!(html.trim(), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_bold_text() {
        let html = parse_markdown("This is **bold** text");
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("<script>alert('xss')</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let inline = parse_markdown("hi <img src=x onerror=alert(1)> there");
        assert!(!inline.contains("<img"));
    }

    #[test]
    fn test_script_links_neutralised() {
        let html = parse_markdown("[click](javascript:alert(1))");
        assert!(html.contains("href=\"#\""));
        assert!(!html.contains("javascript:"));

        let fine = parse_markdown("[Link](https://example.com)");
        assert!(fine.contains("href=\"https://example.com\""));
    }

    #[test]
    fn test_canned_reply_renders_note() {
        let html = parse_markdown(&canned_reply("What is Section 420?"));
        assert!(html.contains("<strong>Note:</strong>"));
        assert!(html.contains("What is Section 420?"));
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn test_query_punctuation_shown_verbatim() {
        for query in [
            "What is *Section* 420?",
            "Is a_b_ valid? **x**",
            "`s. 302` ~~IPC~~ [see](x) #1 a|b",
        ] {
            let html = parse_markdown(&canned_reply(query));
            assert!(html.contains(query), "{query} not verbatim in {html}");
            assert!(!html.contains("<em>") && !html.contains("<code>"));
        }
    }

    #[test]
    fn test_blank_line_in_query_keeps_reply_whole() {
        let html = parse_markdown(&canned_reply("Section 420\n\n# IPC"));
        assert!(!html.contains("<h1>"));
        assert!(html.contains("Section 420  # IPC"));
        assert!(html.contains("This is a demonstration"));
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn test_query_with_markup_stays_text() {
        let html = parse_markdown(&canned_reply("<b>bail</b>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;bail&lt;/b&gt;"));
    }
}
