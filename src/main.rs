//! chordshift - transpose the chords in a lyric sheet
//!
//! Reads a sheet from a file or stdin and writes it to stdout with every
//! recognized chord moved by the requested number of semitones.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use chordshift::{chords, transpose_chord, transpose_text_with, Markup, Transposition};

#[derive(Parser)]
#[command(name = "chordshift")]
#[command(about = "Transpose the chords in a lyric sheet")]
#[command(version)]
struct Cli {
    /// Lyric sheet to read, or `-` for stdin
    file: Option<PathBuf>,

    /// Semitones to transpose by (may be negative)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true, env = "CHORDSHIFT_SEMITONES")]
    semitones: i32,

    /// Capo fret; lowers the written chords by this many semitones
    #[arg(short, long, allow_negative_numbers = true, env = "CHORDSHIFT_CAPO")]
    capo: Option<i32>,

    /// How chords are marked in the output
    #[arg(short, long, value_enum, default_value_t = Format::Html, env = "CHORDSHIFT_FORMAT")]
    format: Format,

    /// Print the transposed chords one per line instead of the sheet
    #[arg(short, long)]
    list: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Wrap chords in <span class="chord">
    Html,
    /// Leave chords unmarked
    Plain,
}

impl From<Format> for Markup {
    fn from(format: Format) -> Markup {
        match format {
            Format::Html => Markup::Html,
            Format::Plain => Markup::Plain,
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),

        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let transposition = Transposition { semitones: cli.semitones, capo: cli.capo };
    let semitones = transposition.effective();
    info!(requested = cli.semitones, capo = ?cli.capo, semitones, "transposing");

    let text = read_input(cli.file.as_deref())?;

    let mut stdout = io::stdout().lock();
    if cli.list {
        for chord in chords(&text) {
            writeln!(stdout, "{}", transpose_chord(chord, semitones))?;
        }
    } else {
        let out = transpose_text_with(&text, semitones, cli.format.into());
        stdout.write_all(out.as_bytes())?;
    }
    stdout.flush().context("failed to write output")?;

    Ok(())
}
