use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vocab_table::{
    apply_limits, build_from_path,
    io_utils::{vocab_cli_error, CliError},
    state, AnyVocab, BuildConfig, Vocabulary,
};

/// Build, prune and query word vocabularies stored as JSON.
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a vocabulary from a file of whitespace-separated tokens
    Build {
        /// Token file, one or more tokens per line
        input: PathBuf,
        /// Output vocabulary JSON
        output: PathBuf,
        /// Reserve <unk> at index 0 for unknown words
        #[arg(long)]
        open: bool,
        /// Drop words seen fewer times than this
        #[arg(long, default_value_t = 1)]
        min_count: u64,
        /// Keep at most this many words
        #[arg(long)]
        max_size: Option<usize>,
    },
    /// Write a pruned copy of a vocabulary
    Prune {
        /// Input vocabulary JSON
        input: PathBuf,
        /// Output vocabulary JSON
        output: PathBuf,
        /// Drop words seen fewer times than this
        #[arg(long, default_value_t = 1)]
        min_count: u64,
        /// Keep at most this many words
        #[arg(long)]
        max_size: Option<usize>,
    },
    /// Print the index of each token
    Lookup {
        /// Vocabulary JSON
        vocab: PathBuf,
        #[arg(required = true)]
        tokens: Vec<String>,
    },
    /// Print the word at each index
    Decode {
        /// Vocabulary JSON
        vocab: PathBuf,
        #[arg(required = true)]
        indices: Vec<usize>,
    },
    /// Print size and most frequent words
    Stats {
        /// Vocabulary JSON
        vocab: PathBuf,
        /// Number of frequent words to list
        #[arg(long, default_value_t = 10)]
        top: usize,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Usage errors exit with status 1 like every other failure. Help and
/// version output still exit 0.
fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            e.exit();
        }
        let _ = e.print();
        std::process::exit(1);
    })
}

fn load(path: &Path) -> Result<AnyVocab, CliError> {
    state::load_json(path).map_err(|e| vocab_cli_error("reading vocabulary", path, e))
}

fn store(vocab: &AnyVocab, path: &Path) -> Result<(), CliError> {
    state::save_json(vocab, path).map_err(|e| vocab_cli_error("writing vocabulary", path, e))?;
    println!("{} written to {}", vocab, path.display());
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args();
    match args.command {
        Command::Build {
            input,
            output,
            open,
            min_count,
            max_size,
        } => {
            let config = BuildConfig {
                open_vocab: open,
                min_count,
                max_size,
            };
            let vocab = build_from_path(&input, &config)
                .map_err(|e| vocab_cli_error("reading token file", &input, e))?;
            store(&vocab, &output)?;
        }
        Command::Prune {
            input,
            output,
            min_count,
            max_size,
        } => {
            let config = BuildConfig {
                open_vocab: false,
                min_count,
                max_size,
            };
            config.validate().map_err(CliError::from)?;
            let vocab = load(&input)?;
            store(&apply_limits(&vocab, &config), &output)?;
        }
        Command::Lookup { vocab, tokens } => {
            let table = load(&vocab)?;
            let indices = table
                .lookup_words(&tokens)
                .map_err(CliError::from)?;
            let line: Vec<String> = indices.iter().map(usize::to_string).collect();
            println!("{}", line.join(" "));
        }
        Command::Decode { vocab, indices } => {
            let table = load(&vocab)?;
            let words = table
                .indices_to_words(&indices)
                .map_err(CliError::from)?;
            println!("{}", words.join(" "));
        }
        Command::Stats { vocab, top, json } => {
            let table = load(&vocab)?;
            let total: u64 = table.counted_words().iter().map(|(_, c)| c).sum();
            let frequent = table.most_common(top);
            if json {
                let out_json = serde_json::json!({
                    "size": table.len(),
                    "open": table.is_open(),
                    "total_count": total,
                    "most_common": frequent,
                });
                println!("{}", serde_json::to_string_pretty(&out_json)?);
            } else {
                println!("{} with {} observations", table, total);
                for (word, count) in frequent {
                    println!("  {word}\t{count}");
                }
            }
        }
    }
    Ok(())
}
