//! Inline expansion of `[[#Heading]]` and `![[#Heading]]` section links.

use crate::section::Document;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static SECTION_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!?\[\[#(.+?)\]\]").expect("section link pattern is valid"));

#[must_use]
/// Replace every section link in `text` with the trimmed body of the section it names.
///
/// Links and embeds resolve the same way. A link to a missing section is left as written.
/// Bodies are substituted in a single pass, so links inside a substituted body stay as links.
pub fn resolve_section_links(text: &str, document: &Document<'_>) -> String {
    let mut resolved = 0usize;
    let out = SECTION_LINK.replace_all(text, |caps: &Captures<'_>| {
        match document.extract_section_content(caps[1].trim()) {
            Some(body) => {
                resolved += 1;
                body
            }
            None => caps[0].to_string(),
        }
    });
    log::debug!("resolved {resolved} section link(s)");
    out.into_owned()
}

#[cfg(test)]
#[path = "tests/links.rs"]
mod tests;
