//! outline-converter: convert Markdown bullet outlines into prose or structured Markdown.
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

use clap::{ArgAction, Args, Parser, Subcommand};
use outline_converter::config::Config;
use outline_converter::edit_plan::{EditPlan, Position};
use outline_converter::export::Export;
use outline_converter::fold::plan_fold;
use outline_converter::frontmatter::split_lines;
use outline_converter::host::{FileHost, Host};
use outline_converter::pipeline::{Converter, Strategy};
use outline_converter::section::extract_section_content;
use outline_converter::{Error, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "outline-converter")]
#[command(about = "Convert bulleted outlines into prose or structured Markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Load settings from this TOML file instead of ./outline-converter.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Convert the outline in a file and export the result
    Convert(ConvertArgs),
    /// Print the body of a section
    Extract {
        /// Markdown file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Heading text of the section
        #[arg(value_name = "SECTION")]
        section: String,
    },
    /// Print the lines to fold for an indent level
    Fold {
        /// Markdown file to read
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Indent level to fold (1 is the top level)
        #[arg(long, short = 'l', default_value_t = 1)]
        level: usize,
        /// Line the cursor is on
        #[arg(long, default_value_t = 0)]
        line: usize,
    },
}

#[derive(Args)]
struct ConvertArgs {
    /// Markdown file holding the outline
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Infer headings from the outline shape instead of using per-level templates
    #[arg(long)]
    auto_header: bool,

    /// Where to send the result: copy, cursor, bottom or section
    #[arg(long, short = 'x', value_name = "MODE")]
    export: Option<String>,

    /// Section replaced in section mode
    #[arg(long, short = 's', value_name = "NAME")]
    section: Option<String>,

    /// Heading depth for top level items in auto-header mode: h1 or h2
    #[arg(long, value_name = "H")]
    start_header: Option<String>,

    /// Spaces per indent level
    #[arg(long)]
    tab_size: Option<usize>,

    /// Cursor used by cursor mode, as LINE or LINE:COL (zero-based)
    #[arg(long, value_parser = parse_position, value_name = "LINE[:COL]")]
    cursor: Option<Position>,

    /// Print the planned export as JSON instead of applying it
    #[arg(long)]
    dry_run: bool,
}

fn parse_position(value: &str) -> std::result::Result<Position, String> {
    let (line, ch) = value.split_once(':').unwrap_or((value, "0"));
    let line = line.trim().parse().map_err(|e| format!("bad line `{line}`: {e}"))?;
    let ch = ch.trim().parse().map_err(|e| format!("bad column `{ch}`: {e}"))?;
    Ok(Position::new(line, ch))
}

/// Position just past the last character, used when no cursor is given.
fn end_of_document(text: &str) -> Position {
    let lines = split_lines(text);
    let last = lines.len() - 1;
    Position::new(last, lines[last].chars().count())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::NoActiveDocument) => {
            eprintln!("{}", Error::NoActiveDocument);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut cfg = Config::load(cli.config.as_deref())?;

    match cli.command {
        Command::Convert(args) => convert(&mut cfg, args),
        Command::Extract { file, section } => {
            let content = fs::read_to_string(&file)?;
            match extract_section_content(&content, &section) {
                Some(body) => println!("{body}"),
                None => eprintln!("No section named `{section}` in {}", file.display()),
            }
            Ok(())
        }
        Command::Fold { file, level, line } => {
            let content = fs::read_to_string(&file)?;
            let plan = plan_fold(&content, cfg.tab_size, level, line);
            println!("{}", serde_json::to_string_pretty(&plan)?);
            Ok(())
        }
    }
}

fn convert(cfg: &mut Config, args: ConvertArgs) -> Result<()> {
    // Override config with command line args
    if let Some(mode) = args.export {
        cfg.export_mode = mode;
    }
    if let Some(section) = args.section {
        cfg.section_name = section;
    }
    if let Some(start) = args.start_header {
        cfg.start_header = start;
    }
    if let Some(tab_size) = args.tab_size {
        cfg.tab_size = tab_size;
    }

    let strategy = if args.auto_header {
        Strategy::AutoHeader
    } else {
        Strategy::Templated
    };

    let mut host = FileHost::new(&args.file, io::stdout()).with_tab_size(cfg.tab_size);
    if let Some(cursor) = args.cursor {
        host = host.with_cursor(cursor);
    } else if let Some(text) = host.read_document_text()? {
        host = host.with_cursor(end_of_document(&text));
    }

    let converter = Converter::new(cfg);
    if args.dry_run {
        let export = converter.plan(&mut host, strategy)?;
        let json = match &export {
            Export::Document { edit } => {
                serde_json::to_string_pretty(&EditPlan::single(host.path(), edit.clone()))?
            }
            Export::Clipboard { .. } => serde_json::to_string_pretty(&export)?,
        };
        println!("{json}");
        return Ok(());
    }

    converter.run(&mut host, strategy)?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/cli.rs"]
mod tests;
