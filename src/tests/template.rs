use super::{resolve_placeholders, templated_transform, Template};

#[test]
fn test_each_level_uses_its_template() {
    let lines = ["- Item 1", "\t- Item 2", "\t\t- Item 3"];
    let templates = [
        Template::new("L1: ", ""),
        Template::new("L2: ", ""),
        Template::new("L3: ", ""),
    ];
    let result = templated_transform(&lines, &[1, 2, 3], &templates);
    assert_eq!(result, "L1: Item 1L2: Item 2L3: Item 3");
}

#[test]
fn test_level_zero_lines_are_skipped() {
    let lines = ["Frontmatter", "- Item 1"];
    let result = templated_transform(&lines, &[0, 1], &[Template::new("L1: ", "")]);
    assert_eq!(result, "L1: Item 1");
}

#[test]
fn test_empty_result() {
    assert_eq!(templated_transform(&["Frontmatter"], &[0], &[]), "");
}

#[test]
fn test_levels_beyond_templates_are_dropped() {
    let lines = ["- a", "\t- b", "\t\t- c", "- d"];
    let templates = [Template::new("", " "), Template::new("(", ")")];
    let result = templated_transform(&lines, &[1, 2, 3, 1], &templates);
    assert_eq!(result, "a (b)d ");
}

#[test]
fn test_ignore_flag_drops_item_text() {
    let lines = ["- Keep", "\t- secret", "\t- another secret"];
    let mut hidden = Template::new("[", "]");
    hidden.ignore = true;
    let templates = [Template::new("", ""), hidden];
    let result = templated_transform(&lines, &[1, 2, 2], &templates);
    assert_eq!(result, "Keep[][]");
    assert!(!result.contains("secret"));
}

#[test]
fn test_escaped_newlines_are_expanded() {
    let lines = ["- Section", "\t- Sentence one.", "\t- Sentence two."];
    let templates = [
        Template::new("\\n\\n## ", "\\n\\n"),
        Template::new("", " "),
    ];
    let result = templated_transform(&lines, &[1, 2, 2], &templates);
    assert_eq!(result, "\n\n## Section\n\nSentence one. Sentence two. ");
}

#[test]
fn test_resolve_placeholders() {
    assert_eq!(resolve_placeholders("a\\nb\\n"), "a\nb\n");
    assert_eq!(resolve_placeholders("plain"), "plain");
}
