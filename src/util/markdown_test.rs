use super::*;

#[test]
fn renders_basic_paragraph() {
    assert_eq!(render_markdown_html("hello"), "<p>hello</p>\n");
}

#[test]
fn renders_gfm_table() {
    let rendered = render_markdown_html("| a | b |\n| - | - |\n| 1 | 2 |");
    assert!(rendered.contains("<table>"));
    assert!(rendered.contains("<td>1</td>"));
}

#[test]
fn strips_raw_html_blocks() {
    let rendered = render_markdown_html("before\n\n<script>alert(1)</script>\n\nafter");
    assert!(!rendered.contains("<script>"));
    assert!(rendered.contains("before"));
    assert!(rendered.contains("after"));
}

#[test]
fn strips_inline_html() {
    let rendered = render_markdown_html("a <b onclick=\"x()\">bold</b> word");
    assert!(!rendered.contains("onclick"));
    assert!(rendered.contains("bold"));
}

#[test]
fn preserves_markdown_emphasis() {
    let rendered = render_markdown_html("an *emphasized* word");
    assert!(rendered.contains("<em>emphasized</em>"));
}
