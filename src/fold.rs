//! Fold targets for "fold all items at level N".
//!
//! Folding is done by the host; this module only decides which lines to fold and where the
//! cursor should land so it does not disappear inside a folded block.

use crate::frontmatter::Outline;
use crate::indent::calculate_indent_levels;
use serde::Serialize;

#[must_use]
/// Lines at `level` whose next line is one level deeper, i.e. the foldable parents.
pub fn fold_targets(levels: &[usize], level: usize) -> Vec<usize> {
    levels
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0] == level && level.checked_add(1) == Some(pair[1]))
        .map(|(i, _)| i)
        .collect()
}

#[must_use]
/// Where the cursor on `current_line` should go once `targets` are folded.
///
/// A cursor nested deeper than `level` moves to the nearest target above it; any other cursor
/// stays put.
pub fn fold_return_cursor(
    levels: &[usize],
    targets: &[usize],
    current_line: usize,
    level: usize,
) -> usize {
    let current_level = levels.get(current_line).copied().unwrap_or(0);
    if current_level <= level {
        return current_line;
    }
    targets
        .iter()
        .copied()
        .filter(|&t| t < current_line)
        .max()
        .unwrap_or(current_line)
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// Lines to fold and the cursor to restore afterwards.
pub struct FoldPlan {
    /// Indent level being folded.
    pub level: usize,
    /// Lines to fold, in document order.
    pub targets: Vec<usize>,
    /// Line for the cursor once folding is done.
    pub cursor: usize,
}

#[must_use]
/// Plan folding every item at `level` in `text`, with the cursor currently on `current_line`.
pub fn plan_fold(text: &str, tab_size: usize, level: usize, current_line: usize) -> FoldPlan {
    let outline = Outline::parse(text);
    let levels = calculate_indent_levels(&outline.lines, outline.frontmatter_lines, tab_size);
    let targets = fold_targets(&levels, level);
    let cursor = fold_return_cursor(&levels, &targets, current_line, level);
    FoldPlan {
        level,
        targets,
        cursor,
    }
}

#[cfg(test)]
#[path = "tests/fold.rs"]
mod tests;
