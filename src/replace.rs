//! Post-transform find/replace rules.
//!
//! Rules run in slot order, each on the output of the previous one. Every pattern is compiled
//! before the first rule runs, so a bad pattern aborts the conversion with nothing applied.

use crate::error::{Error, Result};
use facet::Facet;
use regex::{NoExpand, Regex};

#[derive(Facet, Clone, Debug, Default, PartialEq, Eq)]
/// One find/replace pass.
pub struct ReplacementRule {
    #[facet(default)]
    /// Text or pattern to search for.
    pub find: String,
    #[facet(default)]
    /// Replacement text. In regex mode `$1`, `${name}` and `$0` refer to captures.
    pub replace: String,
    #[facet(default)]
    /// Treat `find` as a regular expression instead of literal text.
    pub regex: bool,
}

impl ReplacementRule {
    #[must_use]
    /// Literal rule: every occurrence of `find` becomes `replace`, verbatim.
    pub fn literal(find: &str, replace: &str) -> Self {
        Self {
            find: find.to_string(),
            replace: replace.to_string(),
            regex: false,
        }
    }

    #[must_use]
    /// Regex rule with capture expansion in `replace`.
    pub fn pattern(find: &str, replace: &str) -> Self {
        Self {
            regex: true,
            ..Self::literal(find, replace)
        }
    }
}

/// A rule whose pattern has been validated and compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    regex: Regex,
    replace: String,
    expand: bool,
}

impl CompiledRule {
    fn apply(&self, text: &str) -> String {
        if self.expand {
            self.regex.replace_all(text, self.replace.as_str()).into_owned()
        } else {
            self.regex
                .replace_all(text, NoExpand(&self.replace))
                .into_owned()
        }
    }
}

/// Compile every rule up front.
///
/// Literal rules have their metacharacters escaped so `$`, `.` or `*` match themselves.
///
/// # Errors
///
/// Returns [`Error::Pattern`] naming the first slot whose regex does not compile.
pub fn compile_rules(rules: &[ReplacementRule]) -> Result<Vec<CompiledRule>> {
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            let pattern = if rule.regex {
                rule.find.clone()
            } else {
                regex::escape(&rule.find)
            };
            let regex = Regex::new(&pattern).map_err(|source| {
                log::warn!("replacement {} rejected: {source}", i + 1);
                Error::Pattern { slot: i + 1, source }
            })?;
            Ok(CompiledRule {
                regex,
                replace: rule.replace.clone(),
                expand: rule.regex,
            })
        })
        .collect()
}

/// Run `rules` over `text` in order.
///
/// # Errors
///
/// Returns [`Error::Pattern`] if any regex rule is invalid; no rule is applied in that case.
pub fn apply_replacements(text: &str, rules: &[ReplacementRule]) -> Result<String> {
    let compiled = compile_rules(rules)?;
    log::debug!("applying {} replacement rule(s)", compiled.len());
    Ok(compiled
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc)))
}

#[cfg(test)]
#[path = "tests/replace.rs"]
mod tests;
