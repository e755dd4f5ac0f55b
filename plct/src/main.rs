//! plct - Command-line front end for the PLC lexer.
//!
//! This is the main entry point for the plct CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input. Without a subcommand it starts
//! the interactive REPL.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat,
    run_config, run_lex, run_repl, ConfigArgs, LexArgs, ReplArgs,
};
use config::Config;
use error::{PlctError, Result};

/// plct - Lex PLC source text
///
/// plct runs the PLC lexer interactively or over files, printing the
/// resulting tokens as text or JSON.
#[derive(Parser, Debug)]
#[command(name = "plct")]
#[command(author = "PLC Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lex PLC source text", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "PLCT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "PLCT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "PLCT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands for the plct CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the interactive lexer REPL (default)
    ///
    /// Each line is lexed and its tokens printed. Enter an empty line to
    /// start multi-line input, and another empty line to submit it.
    Repl(ReplCommand),

    /// Lex a file and print its tokens
    ///
    /// Reads standard input when FILE is omitted or `-`. Exits with
    /// status 1 on a lexical error.
    Lex(LexCommand),

    /// Show or write the effective configuration
    Config(ConfigCommand),
}

/// Arguments for the repl subcommand.
#[derive(Parser, Debug, Default)]
struct ReplCommand {
    /// Prompt printed before each input (default: from config)
    #[arg(short, long)]
    prompt: Option<String>,

    /// Print each token's span after it
    #[arg(long)]
    show_spans: bool,
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file to lex
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Print each token's span after it (text format)
    #[arg(long)]
    show_spans: bool,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this path instead of printing it
    #[arg(short, long, value_name = "PATH")]
    write: Option<PathBuf>,
}

/// Main entry point for the plct CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging,
/// and dispatches to the appropriate command handler. Errors are reported
/// on stderr and mapped to the process exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PlctError::Logging(e.to_string()))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Option<Commands>, config: Config) -> Result<()> {
    match command.unwrap_or(Commands::Repl(ReplCommand::default())) {
        Commands::Repl(args) => execute_repl(args, config),
        Commands::Lex(args) => execute_lex(args, config),
        Commands::Config(args) => run_config(ConfigArgs { write: args.write }, &config),
    }
}

/// Execute the repl command.
fn execute_repl(args: ReplCommand, config: Config) -> Result<()> {
    let repl_args = ReplArgs {
        prompt: args.prompt.unwrap_or(config.repl.prompt),
        show_spans: args.show_spans || config.repl.show_spans,
    };
    run_repl(repl_args)
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, config: Config) -> Result<()> {
    let format = args.format.unwrap_or(config.output.format);
    debug!(%format, "output format");

    let lex_args = LexArgs {
        input: args.input,
        format,
        show_spans: args.show_spans,
    };
    run_lex(lex_args)
}
