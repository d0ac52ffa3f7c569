//! Indent level classification for outline lines.
//!
//! Every line gets exactly one level: 0 for frontmatter and anything that is not a list item,
//! `n >= 1` for a list item nested `n - 1` deep. [`IGNORED`] is reserved for lines a caller
//! wants dropped before transformation.

/// Level reserved for lines removed by [`filter_ignored_lines`].
pub const IGNORED: usize = usize::MAX;

/// Width of one indent step when an outline is indented with spaces.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Level of a single line, or 0 when it is not a list item.
///
/// A run of tabs before `- ` wins over a run of spaces; mixed indentation is not a list item.
fn list_level(line: &str, tab_size: usize) -> usize {
    let tabs = line.len() - line.trim_start_matches('\t').len();
    if line[tabs..].starts_with("- ") {
        return tabs + 1;
    }

    let spaces = line.len() - line.trim_start_matches(' ').len();
    if line[spaces..].starts_with("- ") {
        return spaces / tab_size.max(1) + 1;
    }

    0
}

#[must_use]
/// Assign a nesting level to every line.
///
/// The first `frontmatter_lines` lines are pinned to 0 whatever they contain, so YAML lists in
/// the metadata block never leak into the outline.
pub fn calculate_indent_levels(
    lines: &[&str],
    frontmatter_lines: usize,
    tab_size: usize,
) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i < frontmatter_lines {
                0
            } else {
                list_level(line, tab_size)
            }
        })
        .collect()
}

/// Mark list items whose text starts with `marker` as [`IGNORED`].
///
/// Without this step comment items keep their structural level and flow through the
/// transforms like any other item.
pub fn mark_comments(lines: &[&str], levels: &mut [usize], marker: &str) {
    if marker.is_empty() {
        return;
    }
    for (line, level) in lines.iter().zip(levels.iter_mut()) {
        if *level != 0 && *level != IGNORED && item_text(line).starts_with(marker) {
            *level = IGNORED;
        }
    }
}

#[must_use]
/// Drop every line whose level is [`IGNORED`], keeping lines and levels in lockstep.
pub fn filter_ignored_lines<'a>(lines: &[&'a str], levels: &[usize]) -> (Vec<&'a str>, Vec<usize>) {
    lines
        .iter()
        .zip(levels)
        .filter(|(_, level)| **level != IGNORED)
        .map(|(line, level)| (*line, *level))
        .unzip()
}

#[must_use]
/// Text of a list item with its indentation and `- ` marker removed.
pub fn item_text(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed)
}

#[cfg(test)]
#[path = "tests/indent.rs"]
mod tests;
