use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stringsort::Algorithm;
use stringsort::check::verify_sorted;
use stringsort::io::{InputFile, split_lines, write_ascending, write_descending};

#[derive(Parser, Debug)]
#[command(name = "stringsort", about = "Sort the lines of a file by byte value")]
struct Cli {
    /// File to sort
    file: PathBuf,

    /// Write result to FILE instead of standard output
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write lines in descending order
    #[arg(short = 'r', long = "reverse")]
    reverse: bool,

    /// Sorting strategy: mkqs, merge, radix, radix16 or oracle
    #[arg(short = 'a', long = "algorithm", default_value_t = Algorithm::default())]
    algorithm: Algorithm,

    /// Number of leading bytes shared by every line, skipped while sorting
    #[arg(
        long = "start-depth",
        value_name = "N",
        default_value_t = 0,
        conflicts_with = "multi_column"
    )]
    start_depth: usize,

    /// Every line starts with the same one-byte marker; same as --start-depth 1
    #[arg(short = 'm', long = "multi-column")]
    multi_column: bool,

    /// Verify the result is sorted before writing it
    #[arg(short = 'c', long = "check")]
    check: bool,

    /// Log load, sort and write durations
    #[arg(short = 't', long = "time")]
    time: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stringsort=info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("stringsort: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let start_depth = if cli.multi_column { 1 } else { cli.start_depth };

    let started = Instant::now();
    let input = InputFile::open(&cli.file)?;
    let mut lines =
        split_lines(&input).with_context(|| format!("invalid input {}", cli.file.display()))?;
    if cli.time {
        info!(records = lines.len(), bytes = input.len(), elapsed = ?started.elapsed(), "loaded");
    }

    if lines.is_empty() {
        return Ok(());
    }

    let started = Instant::now();
    cli.algorithm.sort(&mut lines, start_depth);
    if cli.time {
        info!(algorithm = %cli.algorithm, elapsed = ?started.elapsed(), "sorted");
    }

    if cli.check {
        verify_sorted(&lines).context("check failed")?;
        info!(records = lines.len(), "output verified");
    }

    let started = Instant::now();
    let written = match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not open {} for writing", path.display()))?;
            write_output(file, &lines, cli.reverse)
        }
        None => write_output(io::stdout().lock(), &lines, cli.reverse),
    };
    written.context("could not write to output stream")?;
    if cli.time {
        info!(elapsed = ?started.elapsed(), "written");
    }

    Ok(())
}

fn write_output<W: io::Write>(out: W, lines: &[&[u8]], reverse: bool) -> io::Result<()> {
    if reverse {
        write_descending(out, lines)
    } else {
        write_ascending(out, lines)
    }
}
