use anyhow::Result;
use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;

use wc_stream::{FileCounts, Source, result_line};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Print line, word, character, and byte counts for FILE or stdin.",
    long_about = r#"Print line, word, character, and byte counts for FILE, or for standard input when no FILE is given.
A word is a non-zero-length sequence of non-whitespace characters delimited by white space."#,
    group = ArgGroup::new("mode").args(["bytes", "lines", "words", "chars"])
)]
struct WordCountArgs {
    /// Print the byte count
    #[arg(short = 'c', long = "bytes", action = ArgAction::SetTrue)]
    bytes: bool,

    /// Print the newline count
    #[arg(short = 'l', long = "lines", action = ArgAction::SetTrue)]
    lines: bool,

    /// Print the word count
    #[arg(short = 'w', long = "words", action = ArgAction::SetTrue)]
    words: bool,

    /// Print the character count (multi-byte aware)
    #[arg(short = 'm', long = "chars", action = ArgAction::SetTrue)]
    chars: bool,

    /// Input file; read from stdin if absent
    #[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("wc-stream: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = WordCountArgs::parse();

    let source = Source::from_arg(args.file.clone());
    let counts = source.count()?;
    let values = selected_values(&args, &counts, &source)?;

    println!("{}", result_line(&values, source.path()));

    Ok(())
}

/// Picks the counts to report for the selected flag, defaulting to
/// `lines words chars` when no flag is given.
fn selected_values(
    args: &WordCountArgs,
    counts: &FileCounts,
    source: &Source,
) -> Result<Vec<usize>> {
    let values = if args.bytes {
        vec![byte_total(counts, source)?]
    } else if args.lines {
        vec![counts.lines]
    } else if args.words {
        vec![counts.words]
    } else if args.chars {
        vec![counts.chars]
    } else {
        vec![counts.lines, counts.words, counts.chars]
    };

    Ok(values)
}

/// Byte counts for files come from file metadata; stdin has no metadata, so
/// its byte count comes from the stream itself.
fn byte_total(counts: &FileCounts, source: &Source) -> Result<usize> {
    let total = match source.metadata_len()? {
        Some(len) => usize::try_from(len)?,
        None => counts.bytes,
    };

    Ok(total)
}
