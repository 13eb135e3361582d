use anyhow::{bail, Context, Result};
use clap::Parser;
use core::freq::count_words;
use core::report::write_report;
use core::{ReportStyle, Rgb, StopwordSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "stopfilter")]
#[command(about = "Filter stopwords and count word frequencies into word-cloud CSV", long_about = None)]
struct Cli {
    /// File with the list of stopwords
    stopwords: String,
    /// File to read text from; default: stdin
    #[arg(short, long)]
    infile: Option<String>,
    /// Output file; default: stdout
    #[arg(short, long)]
    outfile: Option<String>,
    /// Keep tokens that start with digits, '.', '+' or '-'
    #[arg(long)]
    keep_numbers: bool,
    /// Emit the plain word,weight schema instead of the tagul.com one
    #[arg(long)]
    plain: bool,
    /// Word color for the tagul schema, as R,G,B channel values
    #[arg(long, value_parser = parse_rgb, default_value = "0,0,1")]
    color: Rgb,
    /// Font name for the tagul schema
    #[arg(long, default_value = "Expressway Regular")]
    font: String,
}

/// Parse an `R,G,B` triple of 8-bit channel values.
fn parse_rgb(s: &str) -> Result<Rgb> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("expected three comma separated channels, got {s:?}");
    }
    let channel = |v: &str| {
        v.parse::<u8>()
            .with_context(|| format!("bad channel value {v:?} in {s:?}"))
    };
    Ok(Rgb {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
    })
}

fn main() -> Result<()> {
    // Log to stderr; stdout is reserved for the report.
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let args = Cli::parse();

    // The stopword source is read fully before any input filtering starts.
    let stop_file = File::open(&args.stopwords)
        .with_context(|| format!("cannot open stopword file {}", args.stopwords))?;
    let stops = StopwordSet::from_reader(BufReader::new(stop_file))?;
    tracing::info!(stopwords = stops.len(), "stopword set loaded");

    let input: Box<dyn BufRead> = match &args.infile {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open input file {path}"))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let counts = count_words(input, &stops, !args.keep_numbers)?;
    tracing::info!(words = counts.len(), "input stream consumed");

    let style = ReportStyle {
        for_tagul: !args.plain,
        color: args.color,
        font: args.font,
    };
    let mut out: Box<dyn Write> = match &args.outfile {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot open output file {path}"))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    write_report(&mut out, &counts, &style)?;
    out.flush().context("cannot flush output")?;
    tracing::info!("report complete");
    Ok(())
}
