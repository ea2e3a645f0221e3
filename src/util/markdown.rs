//! Render-only markdown capability for bot responses.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Render a markdown string to an HTML fragment.
///
/// Raw inline/block HTML from the model output is dropped before rendering so
/// the result is safe to inject via `inner_html`.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
