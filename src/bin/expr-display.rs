use std::{
    io::{self, Read as _, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::Parser;
use expr_display::DisplayOpts;

/// Print JSON expression trees as readable math.
#[derive(Parser, Debug)]
#[command(name = "expr-display", version)]
struct Cli {
    /// Input JSON file (reads stdin when omitted).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// JSON pointer to the expression inside each document, e.g. `/expression`.
    #[arg(long)]
    pointer: Option<String>,

    /// Treat the input as newline-delimited JSON, one expression per line.
    #[arg(long, default_value_t = false)]
    lines: bool,

    /// Keep the parentheses around a top-level binary expression.
    #[arg(long, default_value_t = false)]
    raw: bool,

    /// Reject expressions nested deeper than this.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Log more to stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = DisplayOpts {
        strip_outer_parens: !cli.raw,
        max_depth: cli.max_depth,
    };
    let source = cli
        .in_path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_owned());
    let input = read_input(cli.in_path.as_deref())?;
    let pointer = cli.pointer.as_deref();

    let mut out = io::stdout().lock();
    if cli.lines {
        for (i, line) in input.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let text = display_document(line, pointer, &opts)
                .with_context(|| format!("{source}:{}", i + 1))?;
            writeln!(out, "{text}")?;
        }
    } else {
        let text = display_document(&input, pointer, &opts).with_context(|| source.clone())?;
        writeln!(out, "{text}")?;
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("open expression file '{}'", p.display())),
        None => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .context("read expression from stdin")?;
            Ok(s)
        }
    }
}

fn display_document(
    text: &str,
    pointer: Option<&str>,
    opts: &DisplayOpts,
) -> anyhow::Result<String> {
    let doc: serde_json::Value = serde_json::from_str(text).context("parse expression JSON")?;
    let value = match pointer {
        Some(p) => doc
            .pointer(p)
            .with_context(|| format!("pointer '{p}' does not resolve"))?,
        None => &doc,
    };
    Ok(expr_display::display_with(value, opts)?)
}
