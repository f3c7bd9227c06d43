use inkmd_lib::stages::assemble::{LineKind, assemble};
use inkmd_lib::theme::Theme;
use pretty_assertions::assert_eq;

fn theme() -> Theme {
    Theme {
        paragraph: "p".to_string(),
        unordered_list: "ul".to_string(),
        ordered_list: "ol".to_string(),
        list_item: "li".to_string(),
        ..Theme::default()
    }
}

#[test]
fn test_list_never_left_open() {
    for input in ["- a", "1. a", "- a\n1. b", "1. a\n- b", "- a\ntext", "1. a\n\n"] {
        let html = assemble(input, &theme());
        assert_eq!(
            html.matches("<ul").count(),
            html.matches("</ul>").count(),
            "unbalanced <ul> for {input:?}"
        );
        assert_eq!(
            html.matches("<ol").count(),
            html.matches("</ol>").count(),
            "unbalanced <ol> for {input:?}"
        );
    }
}

#[test]
fn test_ordered_to_unordered_transition() {
    let html = assemble("1. a\n2. b\n- c", &theme());
    assert_eq!(
        html,
        [
            r#"<ol class="ol">"#,
            r#"<li class="li">a</li>"#,
            r#"<li class="li">b</li>"#,
            "</ol>",
            r#"<ul class="ul">"#,
            r#"<li class="li">c</li>"#,
            "</ul>",
        ]
        .join("\n")
    );
}

#[test]
fn test_paragraph_flushed_before_list() {
    let html = assemble("Intro line\n- item", &theme());
    assert_eq!(
        html,
        "<p class=\"p\">Intro line</p>\n<ul class=\"ul\">\n<li class=\"li\">item</li>\n</ul>"
    );
}

#[test]
fn test_nested_indentation_is_flattened() {
    let html = assemble("- a\n    - b", &theme());
    assert_eq!(html.matches("<ul").count(), 1);
    assert_eq!(html.matches("<li").count(), 2);
}

#[test]
fn test_number_without_space_is_text() {
    assert_eq!(LineKind::classify("3.14 is pi"), LineKind::Text("3.14 is pi"));
    assert_eq!(LineKind::classify("-5 degrees"), LineKind::Text("-5 degrees"));
}
