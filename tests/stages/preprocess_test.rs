use inkmd_lib::render;
use inkmd_lib::stages::preprocess::normalize;

#[test]
fn test_mixed_line_endings() {
    assert_eq!(normalize("one\r\ntwo\rthree\nfour"), "one\ntwo\nthree\nfour");
}

#[test]
fn test_bom_is_removed_everywhere() {
    assert_eq!(normalize("\u{FEFF}# Title\u{FEFF}"), "# Title");
}

#[test]
fn test_bom_does_not_hide_heading() {
    let html = render("\u{FEFF}# Title");
    assert!(html.starts_with("<h1>"));
}

#[test]
fn test_nbsp_heading_marker() {
    let html = render("#\u{00A0}Title");
    assert!(html.starts_with("<h1>"));
    assert!(html.contains("Title</span></h1>"));
}
