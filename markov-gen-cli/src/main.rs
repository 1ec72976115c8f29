use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use markov_gen_core::{GeneratorConfig, LogView, MarkovModel};

/// Generate text resembling a corpus with an order-K Markov process.
///
/// With ORDER, generates once and prints the text. Without it, reads
/// "K N" commands from stdin, one per line, until EOF.
#[derive(Parser, Debug)]
#[command(name = "markov-gen", version)]
struct Cli {
    /// Path to the reference text
    corpus: PathBuf,

    /// Order K (k-gram length)
    order: Option<usize>,

    /// Maximum number of characters to generate
    length: Option<usize>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the random seed from the config
    #[arg(long)]
    seed: Option<u64>,
}

/// Runs one "K N" command and writes the text as a line of `out`.
///
/// Returns `false` if the command failed. The model has already reported
/// the failure to its views.
fn run_command<W: Write>(model: &mut MarkovModel, command: &str, out: &mut W) -> io::Result<bool> {
    match model.process(command) {
        Ok(text) => {
            writeln!(out, "{text}")?;
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr, stdout only carries generated text
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.random_seed = seed;
    }

    let mut model = MarkovModel::new(config);
    model.add_view(Box::new(LogView));

    let file = std::fs::File::open(&cli.corpus)
        .with_context(|| format!("failed to open corpus {}", cli.corpus.display()))?;
    model.initialize(file)?;

    // One-shot mode
    if let Some(order) = cli.order {
        let command = match cli.length {
            Some(length) => format!("{order} {length}"),
            None => order.to_string(),
        };
        let ok = run_command(&mut model, &command, &mut io::stdout().lock())?;
        return Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    // Command loop: errors are already reported to the log, keep reading
    let mut out = io::stdout().lock();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        run_command(&mut model, &line, &mut out)?;
    }

    Ok(ExitCode::SUCCESS)
}
