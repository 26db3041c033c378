// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use interesting_words::utils::logging::{
    format_error, format_info, format_success, format_warning, init_logger,
};
use interesting_words::{Config, Pipeline, PipelineOptions, StopWordFilter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "interesting_words")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(
    about = "Find the most frequent interesting words in a directory of text files",
    long_about = None
)]
struct Cli {
    /// Directory containing the .txt files to analyse
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Base name of the HTML report (".html" is appended)
    #[arg(short, long, value_name = "NAME")]
    output: Option<String>,

    /// Number of words to report
    #[arg(short = 'n', long, value_name = "NUM")]
    results: Option<usize>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "INTERESTING_WORDS_CONFIG",
        default_value = "interesting_words.toml"
    )]
    config: PathBuf,

    /// Write the report without opening it
    #[arg(long, action = ArgAction::SetTrue)]
    no_open: bool,

    /// Leave the run summary out of the report
    #[arg(long, action = ArgAction::SetTrue)]
    no_metadata: bool,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(name) = cli.output {
        config.output.name = name;
    }
    if let Some(results) = cli.results {
        config.analysis.results = results;
    }
    if cli.no_open {
        config.output.open_browser = false;
    }
    if cli.no_metadata {
        config.output.include_metadata = false;
    }
    config.validate().context("Invalid arguments")?;

    let stop_words = StopWordFilter::english_with_extras(&config.analysis.extra_stop_words);

    let mut options = PipelineOptions::from_config(cli.directory, &config);
    options.colored = cli.color;

    println!(
        "{}",
        format_info(&format!(
            "Using '{}' the top {} interesting words can be found in '{}.html'",
            options.input_dir.display(),
            options.results,
            options.output_name
        ))
    );

    let wants_browser = options.open_browser;
    let mut pipeline = Pipeline::new(options, stop_words);
    let outcome = pipeline.run()?;

    println!(
        "{}",
        format_success(&format!(
            "Wrote {} ({})",
            outcome.output_path.display(),
            outcome.stats.summary()
        ))
    );

    if outcome.stats.files_failed > 0 {
        eprintln!(
            "{}",
            format_warning(&format!(
                "{} file(s) could not be read, {:.0}% of the corpus was analysed",
                outcome.stats.files_failed,
                outcome.stats.success_rate()
            ))
        );
    }
    if wants_browser && !outcome.browser_opened {
        eprintln!(
            "{}",
            format_warning(&format!("Open {} manually", outcome.output_path.display()))
        );
    }

    Ok(())
}
