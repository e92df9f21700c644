//! mdpost CLI - converts a markdown file to restricted-platform HTML.
//!
//! Reads one markdown file and writes one HTML fragment, to a file or to
//! stdout. All rendering logic lives in `mdpost-renderer`; this binary is
//! argument parsing and I/O.

mod error;
mod output;

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use mdpost_renderer::{Converter, InlineCodeFormat};
use tracing_subscriber::EnvFilter;

use error::CliError;
use output::Output;

/// Convert a markdown file to restricted-platform HTML.
#[derive(Parser)]
#[command(name = "mdpost", version, about)]
struct Cli {
    /// Markdown file to convert.
    input: PathBuf,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Inline code span format: double-quotes, bold, italic,
    /// bold-and-italic, bold-with-quotes, italic-with-quotes or all.
    #[arg(long, default_value = "double-quotes", value_parser = InlineCodeFormat::from_str)]
    inline_code: InlineCodeFormat,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or stay quiet.
    // Logs go to stderr; stdout carries the converted fragment.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let out = Output::new();
    if let Err(err) = run(&cli, &out) {
        out.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, out: &Output) -> Result<(), CliError> {
    let markdown = std::fs::read_to_string(&cli.input)?;
    let html = Converter::new()
        .inline_code_format(cli.inline_code)
        .convert(&markdown);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &html)?;
            out.success(&format!("Wrote {}", path.display()));
        }
        None => std::io::stdout().lock().write_all(html.as_bytes())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_inline_code_arg_parses() {
        let cli = Cli::try_parse_from(["mdpost", "in.md", "--inline-code", "bold"]).unwrap();
        assert_eq!(cli.inline_code, InlineCodeFormat::Bold);
    }

    #[test]
    fn test_inline_code_arg_defaults_to_double_quotes() {
        let cli = Cli::try_parse_from(["mdpost", "in.md"]).unwrap();
        assert_eq!(cli.inline_code, InlineCodeFormat::DoubleQuotes);
    }

    #[test]
    fn test_unknown_inline_code_rejected() {
        let err = Cli::try_parse_from(["mdpost", "in.md", "--inline-code", "monospace"])
            .unwrap_err();
        assert!(err.to_string().contains("unknown inline code format"));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("page.md");
        let output = dir.path().join("page.html");
        std::fs::write(&input, "# Title\n\nUse `x`.\n").unwrap();

        let cli = Cli {
            input,
            output: Some(output.clone()),
            inline_code: InlineCodeFormat::Italic,
            verbose: false,
        };
        run(&cli, &Output::new()).unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>x</em>"));
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let cli = Cli {
            input: PathBuf::from("does-not-exist.md"),
            output: None,
            inline_code: InlineCodeFormat::default(),
            verbose: false,
        };
        let err = run(&cli, &Output::new()).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
