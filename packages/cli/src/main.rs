//! `ttlf` — read Turtle-style triples and render them.
//!
//! Provides two subcommands:
//!
//! - **`render`** — print the triples as Graphviz, Prolog facts, or JSON.
//! - **`check`** — parse the input and report what it contains.
//!
//! Both read from a file path or from stdin (`-`). Logs go to stderr and are
//! filtered with `RUST_LOG`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use turtlefacts::{OutputFormat, ReaderConfig, TrailingPolicy, TurtleReader};

/// ttlf — Turtle-style triple reader
///
/// Parse subject/predicate/object statements and render them for other tools.
#[derive(Parser)]
#[command(name = "ttlf", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// What to do with text after the last `.`: discard | reject
    #[arg(long, global = true, env = "TTLF_TRAILING", default_value = "discard")]
    trailing: TrailingPolicy,

    /// Treat `#` as ordinary content instead of starting a line comment.
    #[arg(
        long,
        global = true,
        env = "TTLF_NO_COMMENTS",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_comments: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Render the triples of a document.
    ///
    /// Examples:
    ///   ttlf render data.ttl -f dot --qualified | dot -Tsvg > graph.svg
    ///   ttlf render - -f facts < data.ttl
    Render {
        /// Path to the input document, or `-` for stdin.
        file: PathBuf,

        /// Input syntax.
        #[arg(long, value_enum, default_value_t = InputFormat::Turtle)]
        from: InputFormat,

        /// Output representation: dot | facts | json
        #[arg(short = 'f', long, default_value = "dot")]
        format: OutputFormat,

        /// Expand abbreviated identifiers to absolute URIs.
        #[arg(short = 'q', long)]
        qualified: bool,

        /// Write to this file instead of stdout.
        #[arg(short = 'o', long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Parse a document and print prefix and triple counts.
    ///
    /// Exits 0 if the document parses, 2 otherwise.
    Check {
        /// Path to the input document, or `-` for stdin.
        file: PathBuf,
    },
}

/// Input syntaxes understood by the reader.
#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    Turtle,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "turtlefacts=warn,ttlf=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = ReaderConfig::new()
        .trailing(cli.trailing)
        .comments(!cli.no_comments);

    match cli.command {
        Command::Render {
            file,
            from,
            format,
            qualified,
            output,
        } => {
            let reader = read_document(&file, from, &config);
            let rendered = format
                .render(&reader.triples(qualified))
                .unwrap_or_else(|e| fatal(&format!("failed to render {}: {}", format, e)));
            tracing::info!(%format, triples = reader.len(), qualified, "rendered");
            write_output(output.as_deref(), &rendered);
        }

        Command::Check { file } => {
            let reader = read_document(&file, InputFormat::Turtle, &config);
            println!(
                "{} prefix{}, {} triple{}",
                reader.prefixes().len(),
                if reader.prefixes().len() == 1 { "" } else { "es" },
                reader.len(),
                if reader.len() == 1 { "" } else { "s" }
            );
            for (label, base) in reader.prefixes().iter() {
                println!("  {}: <{}>", label, base);
            }
        }
    }
}

/// Parse the document at `path` (or stdin for `-`) with the chosen reader.
fn read_document(path: &Path, from: InputFormat, config: &ReaderConfig) -> TurtleReader {
    let result = match from {
        InputFormat::Turtle => {
            if path.to_str() == Some("-") {
                TurtleReader::with_config(io::stdin().lock(), config)
            } else {
                let file = fs::File::open(path).unwrap_or_else(|e| {
                    fatal(&format!("failed to open {}: {}", path.display(), e))
                });
                TurtleReader::with_config(file, config)
            }
        }
    };
    result.unwrap_or_else(|e| fatal(&format!("{}: {}", path.display(), e)))
}

/// Write `content` to `path`, or to stdout when no path is given.
fn write_output(path: Option<&Path>, content: &str) {
    let result = match path {
        Some(p) => fs::write(p, content),
        None => io::stdout().lock().write_all(content.as_bytes()),
    };
    if let Err(e) = result {
        let target = path.map_or_else(|| "stdout".to_string(), |p| p.display().to_string());
        fatal(&format!("failed to write {}: {}", target, e));
    }
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("ttlf: {}", msg);
    process::exit(2);
}


// --- tests -------------------------------------------------------------------
