mod config;
mod error;
mod level;
mod puzzle;
mod rng;
mod text;
mod words;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::Config;
use puzzle::Puzzle;
use words::dictionary::Dictionary;

#[derive(Parser)]
#[command(
    name = "wordveil",
    version,
    about = "Deterministic missing-word pangram puzzles behind substitution tokens"
)]
struct Cli {
    #[arg(short, long, help = "Puzzle seed (0 = non-deterministic)")]
    seed: Option<u32>,

    #[arg(short, long, help = "Feature level bitmask")]
    level: Option<u32>,

    #[arg(short, long, value_delimiter = ',', help = "Extra distractor words")]
    words: Vec<String>,

    #[arg(short, long, help = "Pangram file, one sentence per line")]
    pangrams: Option<PathBuf>,

    #[arg(short, long, help = "Candidate token answer to verify")]
    answer: Option<String>,

    #[arg(long, help = "Print the puzzle as JSON")]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let seed = cli.seed.unwrap_or(config.default_seed);
    let level = cli.level.unwrap_or(config.default_level);

    let mut input_words = cli.words.clone();
    if input_words.is_empty() {
        input_words = Dictionary::load().take(config.distractor_count);
    }

    let mut builder = Puzzle::new(seed, level).input_words(input_words);

    let pangram_path = cli
        .pangrams
        .or_else(|| config.pangram_file.as_ref().map(PathBuf::from));
    if let Some(path) = pangram_path {
        builder = builder.pangrams(load_pangram_file(&path)?);
    }

    let result = builder.build()?;

    if let Some(candidate) = cli.answer {
        let verdict = result.answer(&candidate)?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&verdict)?);
        } else if verdict.exact {
            println!("exact");
        } else if verdict.possible {
            let real = verdict
                .possible_real
                .as_ref()
                .map(|s| s.text())
                .unwrap_or_default();
            println!("possible ({real})");
        } else {
            println!("no");
        }
        return Ok(());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for line in &result.instructions {
        println!("{line}");
    }
    println!();
    println!("mapping:");
    for (token, real) in &result.mapping_pairs {
        println!("  {token}  ->  {real}");
    }
    println!();
    println!("{}", result.partial_tokenized_sentence);
    println!();
    print!("{}", result.sequence_table());

    Ok(())
}

fn load_pangram_file(path: &PathBuf) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading pangram file {}", path.display()))?;
    let sentences: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if sentences.is_empty() {
        bail!("pangram file {} has no sentences", path.display());
    }
    Ok(sentences)
}
