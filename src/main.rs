//! tokfreq CLI - Token Frequency Toolkit
//!
//! Command-line interface for tokenizing text and filtering rare tokens.

use clap::{Parser, Subcommand};
use log::{error, info};
use tokfreq::{
    FilterReport, FrequencyFilter, FrequencyTable, Result, Token, Tokenizer, TokenizerConfig,
};

#[derive(Parser)]
#[command(name = "tokfreq")]
#[command(version)]
#[command(about = "Token frequency filtering and tokenization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split text into tokens
    Tokenize {
        /// Text to tokenize
        text: String,

        /// Lowercase tokens (emoticons and handles keep their case)
        #[arg(short, long)]
        lowercase: bool,

        /// Collapse runs of 3+ repeated characters to 3
        #[arg(short, long)]
        reduce_len: bool,

        /// Drop @handles
        #[arg(short, long)]
        strip_handles: bool,
    },

    /// Drop tokens whose relative frequency is below a threshold
    Filter {
        /// Tokens making up the corpus
        tokens: Vec<String>,

        /// Build the corpus by tokenizing this text instead
        #[arg(long, conflicts_with = "tokens")]
        text: Option<String>,

        /// Relative frequency below which tokens are dropped
        #[arg(short, long, default_value = "0.30")]
        threshold: f64,

        /// Also report the relative frequency of this token
        #[arg(short, long)]
        probe: Option<String>,

        /// Number of rows in the cumulative table (default: all)
        #[arg(short = 'n', long)]
        top: Option<usize>,
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
        Commands::Tokenize {
            text,
            lowercase,
            reduce_len,
            strip_handles,
        } => {
            let config = TokenizerConfig {
                preserve_case: !lowercase,
                reduce_len,
                strip_handles,
            };
            tokenize_text(&text, config, cli.json)
        }

        Commands::Filter {
            tokens,
            text,
            threshold,
            probe,
            top,
        } => filter_tokens(tokens, text, threshold, probe, top, cli.json),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn tokenize_text(text: &str, config: TokenizerConfig, json: bool) -> Result<()> {
    let tokens = Tokenizer::new(config).tokenize(text);
    info!("Tokenized input into {} tokens", tokens.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }

    print_tokens(&tokens);
    Ok(())
}

fn print_tokens(tokens: &[Token]) {
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    println!("{:?}", texts);
    println!("{}", tokens.len());
}

fn filter_tokens(
    tokens: Vec<String>,
    text: Option<String>,
    threshold: f64,
    probe: Option<String>,
    top: Option<usize>,
    json: bool,
) -> Result<()> {
    let corpus = match text {
        Some(text) => Tokenizer::default_config().tokenize_to_strings(&text),
        None => tokens,
    };
    info!("Filtering corpus of {} tokens at threshold {}", corpus.len(), threshold);

    let filter = FrequencyFilter::with_threshold(threshold)?;
    let report = filter.apply(&corpus)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(token) = probe {
        println!("freq({}) = {}", token, report.table.freq(&token));
    }
    print_report(&report, top);
    Ok(())
}

fn print_report(report: &FilterReport, top: Option<usize>) {
    println!("Frequencies ({} tokens, {} distinct):", report.table.total(), report.table.bins());
    print_table(&report.table);
    println!();

    println!("Below {}: {:?}", report.threshold, report.excluded);
    println!("Retained ({}): {:?}", report.retained.len(), report.retained);
    println!();

    println!("Cumulative counts of retained tokens:");
    for row in report.retained_table.cumulative(top) {
        println!(
            "  {:<20} {:>6} {:>8} {:>7.3}",
            row.token, row.count, row.cumulative_count, row.cumulative_frequency
        );
    }
}

fn print_table(table: &FrequencyTable) {
    for entry in table.entries() {
        println!("  {:<20} {:>6} {:>7.3}", entry.token, entry.count, entry.frequency);
    }
}
