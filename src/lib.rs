//! outline-converter: turn nested Markdown bullet outlines into prose or structured Markdown.
//!
//! The conversion pipeline runs, leaves first:
//!
//! ```text
//! raw text -> frontmatter -> indent levels -> line filter -> transform
//!          -> replacements -> section links -> export (copy / cursor / bottom / section)
//! ```
//!
//! Two transform engines are available: per-level [`template`]s and the [`auto_header`]
//! heuristic. Everything that touches the outside world goes through the [`host::Host`]
//! trait so the core stays pure and deterministic.
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

pub mod auto_header;
pub mod config;
pub mod edit_plan;
pub mod error;
pub mod export;
pub mod fold;
pub mod frontmatter;
pub mod host;
pub mod indent;
pub mod links;
pub mod pipeline;
pub mod replace;
pub mod section;
pub mod template;

pub use error::{Error, Result};
