//! caption-summarizer CLI
//!
//! Summarizes caption files (`.vtt`), plain text files, or stdin.

use caption_summarizer::{
    Result, SourceDocument, SourceProvider, StopwordFilter, SummarizeError, Summarizer,
    SummarizerConfig, SummaryMode, TextFileSource, TimedSource, VttFileSource,
};
use clap::{Parser, Subcommand};
use log::{error, info};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "caption-summarizer")]
#[command(version)]
#[command(about = "Extractive summaries of captions and transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a caption file, text file, or stdin
    Summarize {
        /// Input file (use "-" for stdin); `.vtt` files are read as WebVTT
        #[arg(short, long)]
        input: String,

        /// Strategy: tfidf or frequency
        #[arg(short, long, default_value = "tfidf")]
        mode: String,

        /// Share of sentences to keep, in (0, 1]
        #[arg(short, long, default_value = "0.3")]
        fraction: f64,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the detailed summary as JSON
        #[arg(long)]
        json: bool,

        /// Give up reading the input after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Drop caption cues that repeat the previous cue
        #[arg(long)]
        dedup: bool,
    },

    /// Print the built-in stopword list
    Stopwords {
        /// Language code
        #[arg(short, long, default_value = "en")]
        language: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = match cli.command {
        Commands::Summarize {
            input,
            mode,
            fraction,
            config,
            json,
            timeout_secs,
            dedup,
        } => summarize_input(&input, &mode, fraction, config, json, timeout_secs, dedup),

        Commands::Stopwords { language } => print_stopwords(&language),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn summarize_input(
    input: &str,
    mode: &str,
    fraction: f64,
    config_path: Option<PathBuf>,
    json: bool,
    timeout_secs: Option<u64>,
    dedup: bool,
) -> Result<()> {
    let start_time = Instant::now();
    let mode: SummaryMode = mode.parse()?;

    let summarizer = match config_path {
        Some(path) => {
            let raw = fs::read_to_string(&path).map_err(|e| {
                SummarizeError::invalid_config(format!("cannot read {}: {}", path.display(), e))
            })?;
            Summarizer::with_config(SummarizerConfig::from_json(&raw)?)?
        }
        None => Summarizer::new(),
    };

    let document = read_document(input, timeout_secs.map(Duration::from_secs), dedup)?;
    info!(
        "Read '{}' ({} bytes) in {:?}",
        document.title,
        document.text.len(),
        start_time.elapsed()
    );

    let summary = summarizer.summarize_detailed(&document.text, mode, fraction)?;
    info!(
        "Selected {} of {} sentences ({} mode) in {:?}",
        summary.sentences.len(),
        summary.sentence_count,
        summary.mode,
        start_time.elapsed()
    );

    if json {
        let output = serde_json::json!({
            "title": document.title,
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", summary.text);
    }

    Ok(())
}

fn read_document(input: &str, timeout: Option<Duration>, dedup: bool) -> Result<SourceDocument> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(SourceDocument::new("stdin", buffer));
    }

    let is_vtt = Path::new(input)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("vtt"));

    match (is_vtt, timeout) {
        (true, Some(t)) => {
            TimedSource::new(VttFileSource::new().with_dedup_repeats(dedup), t)
                .fetch_source_text(input)
        }
        (true, None) => VttFileSource::new()
            .with_dedup_repeats(dedup)
            .fetch_source_text(input),
        (false, Some(t)) => TimedSource::new(TextFileSource, t).fetch_source_text(input),
        (false, None) => TextFileSource.fetch_source_text(input),
    }
}

fn print_stopwords(language: &str) -> Result<()> {
    for word in StopwordFilter::built_in_list(language)? {
        println!("{}", word);
    }
    Ok(())
}
