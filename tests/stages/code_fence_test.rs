use inkmd_lib::render;
use inkmd_lib::renderer::{RenderOptions, render_with_options};
use inkmd_lib::stages::code_fence;
use inkmd_lib::theme::Theme;

#[test]
fn test_code_content_escaped_exactly_once() {
    let html = render("```html\n<div class=\"x\">&amp;</div>\n```");
    assert!(html.contains("&lt;div class=\"x\"&gt;&amp;amp;&lt;/div&gt;</code></pre>"));
    assert!(!html.contains("&amp;lt;"));
}

#[test]
fn test_markdown_inside_fence_is_not_rendered() {
    let html = render("```\n# not a heading\n- not a list\n**not bold** [no](link) `no`\n> no quote\n```");
    assert!(!html.contains("<h1"));
    assert!(!html.contains("<li"));
    assert!(!html.contains("<strong"));
    assert!(!html.contains("<a "));
    assert!(!html.contains("<blockquote"));
    assert!(html.contains("# not a heading\n- not a list\n**not bold** [no](link) `no`\n&gt; no quote</code>"));
}

#[test]
fn test_fence_keeps_relative_position() {
    let html = render("before\n\n```\nmiddle\n```\n\nafter");
    let before = html.find("before").unwrap();
    let middle = html.find("middle").unwrap();
    let after = html.find("after").unwrap();
    assert!(before < middle && middle < after);
    assert!(!html.contains("%%%CODE_BLOCK_"));
}

#[test]
fn test_fence_interrupts_paragraph_and_list() {
    let mut theme = Theme::default();
    theme.paragraph = "p".to_string();
    theme.code_block = "pre".to_string();
    theme.code_block_code = "code".to_string();
    theme.unordered_list = "ul".to_string();
    theme.list_item = "li".to_string();
    let options = RenderOptions::new().with_theme(theme);

    let html = render_with_options("intro\n```\nx\n```\noutro", &options);
    assert_eq!(
        html,
        "<p class=\"p\">intro</p>\n<pre class=\"pre\"><code class=\"code\">x</code></pre>\n<p class=\"p\">outro</p>"
    );

    let html = render_with_options("- a\n```\nx\n```\n- b", &options);
    assert_eq!(html.matches("<ul").count(), 2);
    assert!(html.find("</ul>").unwrap() < html.find("<pre").unwrap());
}

#[test]
fn test_info_string_extra_words_are_dropped() {
    let html = render("```rust ignore\nfn x() {}\n```");
    assert!(html.contains(r#"data-language="rust""#));
    assert!(html.contains(">fn x() {}</code>"));
    assert!(!html.contains("ignore"));
}

#[test]
fn test_language_attribute() {
    let html = render("```rust\nfn main() {}\n```");
    assert!(html.contains(r#"data-language="rust""#));
    assert!(html.contains(">fn main() {}</code>"));

    let html = render("```\nplain\n```");
    assert!(!html.contains("data-language"));
}

#[test]
fn test_multiple_fences_restored_in_order() {
    let html = render("```\none\n```\ntext\n```\ntwo\n```");
    let one = html.find(">one</code>").unwrap();
    let two = html.find(">two</code>").unwrap();
    assert!(one < two);
}

#[test]
fn test_unterminated_fence_is_paragraph_text() {
    let html = render("```\nlet x = 1;");
    assert!(html.starts_with("<p "));
    assert!(html.contains("``` let x = 1;"));
    assert!(!html.contains("<pre"));
}

#[test]
fn test_tabs_in_code_become_two_spaces() {
    let html = render("```\n\tindented\n```");
    assert!(html.contains(">  indented</code>"));
}

#[test]
fn test_extract_and_restore_round_trip() {
    let theme = Theme::default();
    let (text, table) = code_fence::extract("a\n```\n<b>\n```\nc", &theme);
    assert_eq!(table.len(), 1);
    assert!(text.contains(&code_fence::sentinel(0)));

    let restored = code_fence::restore(&text, &table);
    assert!(restored.contains("&lt;b&gt;"));
    assert!(!restored.contains("%%%"));
}
