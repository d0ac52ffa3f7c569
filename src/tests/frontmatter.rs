use super::{parse_frontmatter, split_lines, Outline};

#[test]
fn test_parse_frontmatter() {
    let content = "---\ntitle: Test\n---\nContent here";
    let result = parse_frontmatter(content);
    assert_eq!(result.frontmatter, "---\ntitle: Test\n---\n");
    assert_eq!(result.content, "Content here");
    assert_eq!(result.line_count(), 3);
}

#[test]
fn test_content_without_frontmatter() {
    let result = parse_frontmatter("Just content");
    assert_eq!(result.frontmatter, "");
    assert_eq!(result.content, "Just content");
    assert_eq!(result.line_count(), 0);
}

#[test]
fn test_incomplete_frontmatter_is_ignored() {
    let content = "---\ntitle: Test\nNo closing delimiter";
    let result = parse_frontmatter(content);
    assert_eq!(result.frontmatter, "");
    assert_eq!(result.content, content);
}

#[test]
fn test_opening_delimiter_must_be_first_line() {
    let content = "\n---\ntitle: Test\n---\n";
    assert_eq!(parse_frontmatter(content).frontmatter, "");
}

#[test]
fn test_crlf_frontmatter() {
    let content = "---\r\ntitle: Test\r\n---\r\n- Item";
    let result = parse_frontmatter(content);
    assert_eq!(result.frontmatter, "---\r\ntitle: Test\r\n---\r\n");
    assert_eq!(result.content, "- Item");
    assert_eq!(result.line_count(), 3);
}

#[test]
fn test_frontmatter_closed_at_end_of_input() {
    let content = "---\ntitle: Test\n---";
    let result = parse_frontmatter(content);
    assert_eq!(result.frontmatter, content);
    assert_eq!(result.content, "");
    assert_eq!(result.line_count(), 3);
}

#[test]
fn test_closing_delimiter_needs_its_own_line() {
    let content = "---\ntitle: Test\n----\nmore";
    assert_eq!(parse_frontmatter(content).frontmatter, "");
}

#[test]
fn test_split_is_lossless() {
    for content in [
        "---\na: 1\n---\n- x\n\t- y",
        "---\r\nb: 2\r\n---\r\n",
        "no frontmatter\n- item",
    ] {
        let result = parse_frontmatter(content);
        assert_eq!(format!("{}{}", result.frontmatter, result.content), content);
    }
}

#[test]
fn test_split_lines_handles_mixed_endings() {
    assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    assert_eq!(split_lines("a\n"), vec!["a", ""]);
    assert_eq!(split_lines(""), vec![""]);
}

#[test]
fn test_outline_tracks_frontmatter_boundary() {
    let outline = Outline::parse("---\ntags:\n  - tag1\n---\n- Real Item");
    assert_eq!(outline.frontmatter_lines, 4);
    assert_eq!(outline.lines.len(), 5);
    assert_eq!(outline.lines[4], "- Real Item");
}
