use super::{Converter, Strategy};
use crate::config::Config;
use crate::edit_plan::{Edit, Position};
use crate::error::{Error, Result};
use crate::export::Export;
use crate::host::{Host, Selection};
use crate::replace::ReplacementRule;
use crate::template::Template;

#[derive(Default)]
struct MemoryHost {
    document: Option<String>,
    selection: Option<Selection>,
    cursor: Position,
    clipboard: Vec<String>,
    writes: usize,
}

impl MemoryHost {
    fn with_document(text: &str) -> Self {
        Self {
            document: Some(text.to_string()),
            ..Self::default()
        }
    }

    fn text(&self) -> &str {
        self.document.as_deref().unwrap_or("")
    }
}

impl Host for MemoryHost {
    fn read_document_text(&mut self) -> Result<Option<String>> {
        Ok(self.document.clone())
    }

    fn selection(&self) -> Option<Selection> {
        self.selection.clone()
    }

    fn cursor(&self) -> Position {
        self.cursor
    }

    fn write_replacement(&mut self, from: Position, to: Position, text: &str) -> Result<()> {
        let edit = Edit::Replace {
            from,
            to,
            text: text.to_string(),
            cursor: None,
        };
        self.document = Some(edit.apply_to(self.text()));
        self.writes += 1;
        Ok(())
    }

    fn append_text(&mut self, text: &str) -> Result<()> {
        self.document.get_or_insert_with(String::new).push_str(text);
        self.writes += 1;
        Ok(())
    }

    fn set_cursor(&mut self, cursor: Position) {
        self.cursor = cursor;
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        self.clipboard.push(text.to_string());
        Ok(())
    }
}

fn config() -> Config {
    Config::from_toml("").unwrap()
}

#[test]
fn test_templated_conversion_with_defaults() {
    let source = "---\ntitle: x\n---\n- Intro\n\t- First sentence.\n\t\t- one\n\t\t- two\n";
    let cfg = config();
    let result = Converter::new(&cfg)
        .convert(source, source, Strategy::Templated, 4)
        .unwrap();
    assert_eq!(result, "\n\n## Intro\n\n### First sentence.\n\none two ");
}

#[test]
fn test_auto_header_conversion() {
    let source = "- A\n\t- a1\n\t- a2";
    let cfg = config();
    let result = Converter::new(&cfg)
        .convert(source, source, Strategy::AutoHeader, 4)
        .unwrap();
    assert_eq!(result, "\n\n## A\n\na1\na2");
}

#[test]
fn test_copy_export_goes_to_clipboard() {
    let mut cfg = config();
    cfg.templates[0] = Template::new("", " ");
    let mut host = MemoryHost::with_document("- foo\n- foo");
    cfg.replacements[0] = ReplacementRule::literal("foo", "bar");

    let export = Converter::new(&cfg).run(&mut host, Strategy::Templated).unwrap();
    assert_eq!(
        export,
        Export::Clipboard {
            text: "bar bar ".to_string()
        }
    );
    assert_eq!(host.clipboard, vec!["bar bar ".to_string()]);
    assert_eq!(host.writes, 0);
}

#[test]
fn test_invalid_pattern_aborts_before_writing() {
    let mut cfg = config();
    cfg.export_mode = "section".to_string();
    cfg.active_replacements = 2;
    cfg.replacements[1] = ReplacementRule::pattern("(", "x");
    let mut host = MemoryHost::with_document("- item\n# Output\nold");

    let err = Converter::new(&cfg)
        .run(&mut host, Strategy::Templated)
        .unwrap_err();
    assert!(matches!(err, Error::Pattern { slot: 2, .. }));
    assert_eq!(host.writes, 0);
    assert_eq!(host.text(), "- item\n# Output\nold");
}

#[test]
fn test_inactive_rules_are_skipped() {
    let mut cfg = config();
    cfg.templates[0] = Template::new("", "");
    cfg.active_replacements = 1;
    cfg.replacements[1] = ReplacementRule::pattern("(", "x");
    let result = Converter::new(&cfg)
        .convert("- fine", "", Strategy::Templated, 4)
        .unwrap();
    assert_eq!(result, "fine");
}

#[test]
fn test_no_active_document() {
    let cfg = config();
    let mut host = MemoryHost::default();
    let err = Converter::new(&cfg)
        .run(&mut host, Strategy::AutoHeader)
        .unwrap_err();
    assert!(matches!(err, Error::NoActiveDocument));
    assert!(host.clipboard.is_empty());
}

#[test]
fn test_section_export_is_idempotent() {
    let mut cfg = config();
    cfg.export_mode = "section".to_string();
    let mut host = MemoryHost::with_document("- A\n\t- a1\n# Output\nold\n");
    let converter = Converter::new(&cfg);

    converter.run(&mut host, Strategy::Templated).unwrap();
    let first = host.text().to_string();
    assert_eq!(first, "- A\n\t- a1\n# Output\n\n\n## A\n\n### a1\n\n");
    assert_eq!(host.cursor, Position::new(3, 0));

    converter.run(&mut host, Strategy::Templated).unwrap();
    assert_eq!(host.text(), first);
}

#[test]
fn test_section_export_creates_missing_section() {
    let mut cfg = config();
    cfg.export_mode = "section".to_string();
    cfg.section_name = "Prose".to_string();
    cfg.templates[0] = Template::new("", "");
    let mut host = MemoryHost::with_document("- Hello");

    converter_run(&cfg, &mut host);
    assert_eq!(host.text(), "- Hello\n# Prose\nHello\n");
    assert_eq!(host.cursor, Position::new(1, 0));
}

fn converter_run(cfg: &Config, host: &mut MemoryHost) {
    Converter::new(cfg).run(host, Strategy::Templated).unwrap();
}

#[test]
fn test_section_links_resolve_against_document() {
    let mut cfg = config();
    cfg.templates[0] = Template::new("", "");
    let document = "# Quote\nHello world\n# Outline\n- See ![[#Quote]]";
    let result = Converter::new(&cfg)
        .convert(document, document, Strategy::Templated, 4)
        .unwrap();
    assert_eq!(result, "See Hello world");
}

#[test]
fn test_selection_is_converted_and_replaced() {
    let mut cfg = config();
    cfg.export_mode = "cursor".to_string();
    cfg.templates[0] = Template::new("", "");
    let mut host = MemoryHost::with_document("intro\n- Picked\n- Other");
    host.selection = Some(Selection {
        from: Position::new(1, 0),
        to: Position::new(1, 8),
        text: "- Picked".to_string(),
    });

    converter_run(&cfg, &mut host);
    assert_eq!(host.text(), "intro\nPicked\n- Other");
}

#[test]
fn test_cursor_insert_without_selection() {
    let mut cfg = config();
    cfg.export_mode = "cursor".to_string();
    cfg.templates[0] = Template::new("", "");
    let mut host = MemoryHost::with_document("- a\n");
    host.cursor = Position::new(1, 0);

    converter_run(&cfg, &mut host);
    assert_eq!(host.text(), "- a\na");
}

#[test]
fn test_bottom_export_appends() {
    let mut cfg = config();
    cfg.export_mode = "bottom".to_string();
    cfg.templates[0] = Template::new("", "");
    let mut host = MemoryHost::with_document("- a");

    converter_run(&cfg, &mut host);
    assert_eq!(host.text(), "- a\na");
}

#[test]
fn test_comment_marker_drops_items() {
    let mut cfg = config();
    cfg.comment_marker = Some("//".to_string());
    cfg.templates[0] = Template::new("", " ");
    let result = Converter::new(&cfg)
        .convert("- keep\n- // drop\n- also", "", Strategy::Templated, 4)
        .unwrap();
    assert_eq!(result, "keep also ");
}

#[test]
fn test_output_is_deterministic() {
    let cfg = config();
    let source = "- A\n\t- b\n\t\t- c\n- D";
    let converter = Converter::new(&cfg);
    let first = converter.convert(source, source, Strategy::AutoHeader, 4).unwrap();
    let second = converter.convert(source, source, Strategy::AutoHeader, 4).unwrap();
    assert_eq!(first, second);
}
