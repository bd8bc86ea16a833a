use super::*;

#[test]
fn renders_headings_and_emphasis() {
    let html = render_markdown("# Intro\n\nSome *important* text");
    assert!(html.contains("<h1>Intro</h1>"));
    assert!(html.contains("<em>important</em>"));
}

#[test]
fn drops_inline_and_block_html() {
    let html = render_markdown("<script>alert(1)</script>\n\nhello <b>world</b>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("hello"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown(""), "");
}

#[test]
fn renders_tables() {
    let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(html.contains("<table>"));
}
