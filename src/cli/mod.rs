//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod check;
pub mod language_list;
pub mod settings;
pub mod theme_list;
pub mod translate;

#[cfg(test)]
mod tests;

use std::error::Error;

use clap::{Parser, Subcommand};

use crate::cli::check::check_backend;
use crate::cli::language_list::list_languages;
use crate::cli::settings::{run_set, run_unset};
use crate::cli::theme_list::list_themes;
use crate::cli::translate::run_translate;
use crate::core::config::Config;
use crate::ui::form_loop::{run_form, FormLaunch};
use crate::utils::diagnostics::{init_tracing, TraceMode};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_DESCRIBE"),
    ", built ",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "translaterm")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "A terminal translation form with pronunciation help")]
#[command(
    long_about = "Translaterm is a full-screen terminal form for a translation backend. \
Type text, pick the source and target languages, and get the translation together \
with a pronunciation in English script.\n\n\
Backend:\n\
  --base-url, then TRANSLATERM_BASE_URL, then `translaterm set base-url`, \
then http://localhost:8000.\n\n\
Controls:\n\
  Enter             Translate the input\n\
  Alt+Enter         Insert a newline\n\
  F2 / F3           Pick the source / target language\n\
  Ctrl+S            Swap source and target\n\
  F5                Reload the language list\n\
  Ctrl+L            Toggle light/dark paper\n\
  Ctrl+N            Clear the input\n\
  Esc               Cancel a running translation\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Translation backend base URL for this session
    #[arg(short = 'b', long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Append every successful translation to this file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<String>,

    /// Write diagnostic traces to this file (filter with RUST_LOG)
    #[arg(long, global = true, value_name = "FILE")]
    pub trace: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the translation form (default)
    Form,
    /// Translate text without opening the form
    Translate {
        /// Source language code
        #[arg(short = 'f', long, value_name = "CODE")]
        from: Option<String>,
        /// Target language code
        #[arg(short = 't', long, value_name = "CODE")]
        to: Option<String>,
        /// Text to translate (multiple words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// List the languages the backend supports
    Languages,
    /// Check that the backend is reachable
    Check,
    /// List the built-in themes
    Themes,
    /// Set configuration values
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Option<Vec<String>>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Form);

    let mode = match command {
        Commands::Form => TraceMode::Interactive,
        _ => TraceMode::OneShot,
    };
    init_tracing(args.trace.as_deref(), mode)?;

    match command {
        Commands::Form => {
            let config = Config::load()?;
            let launch = FormLaunch::from_config(&config, args.base_url.as_deref(), args.log);
            run_form(launch).await
        }
        Commands::Translate { from, to, text } => {
            run_translate(text, from, to, args.base_url, args.log).await
        }
        Commands::Languages => list_languages(args.base_url).await,
        Commands::Check => check_backend(args.base_url).await,
        Commands::Themes => list_themes(),
        Commands::Set { key, value } => run_set(key, value),
        Commands::Unset { key } => run_unset(key),
    }
}
