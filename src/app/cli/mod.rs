//! CLI Adapter.

mod attributes;
mod generate;
mod logging;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::IntroOptions;
use crate::domain::AppError;
use attributes::AttributeArgs;
use generate::GenerateArgs;

#[derive(Parser)]
#[command(name = "memforge")]
#[command(version)]
#[command(
    about = "Synthesize World Cup memorabilia prompts and forge them into images",
    long_about = None
)]
struct Cli {
    /// Path to a memforge.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the prompt synthesized from the form attributes
    #[clap(visible_alias = "p")]
    Prompt {
        #[command(flatten)]
        input: AttributeArgs,
    },
    /// Forge a memorabilia image through the image generation API
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        input: AttributeArgs,
        /// File to write the decoded image to
        #[arg(short, long, conflicts_with = "json")]
        output: Option<PathBuf>,
        /// Print the response JSON instead of writing a file
        #[arg(long)]
        json: bool,
        /// Print the prompt that would be sent without calling the API
        #[arg(long)]
        dry_run: bool,
    },
    /// Play the presentation sequence and print `ready` when it completes
    Intro {
        /// Skip the waits and run on virtual time
        #[arg(long)]
        instant: bool,
        /// Show the nations roster as the flag phase
        #[arg(long)]
        nations: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config.as_deref();
    let result: Result<i32, AppError> = match cli.command {
        Commands::Prompt { input } => run_prompt(config, input).map(|_| 0),
        Commands::Generate { input, output, json, dry_run } => {
            generate::run_generate(config, GenerateArgs { input, output, json, dry_run })
        }
        Commands::Intro { instant, nations } => {
            run_intro(config, IntroOptions { instant, nations }).map(|_| 0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_prompt(config: Option<&Path>, input: AttributeArgs) -> Result<(), AppError> {
    let attrs = input.into_attributes()?;
    let prompt = crate::prompt(config, &attrs)?;
    println!("{}", prompt);
    Ok(())
}

fn run_intro(config: Option<&Path>, options: IntroOptions) -> Result<(), AppError> {
    let outcome = crate::intro(config, options)?;
    tracing::debug!(
        vignettes = outcome.vignettes,
        flags = outcome.flags,
        elapsed_ms = u64::try_from(outcome.elapsed.as_millis()).unwrap_or(u64::MAX),
        "intro finished"
    );
    if outcome.completed {
        println!("ready");
    }
    Ok(())
}
