//! Treepick CLI - inspect and drive tri-state folder trees
//!
//! Usage: treepick <COMMAND>
//!
//! Commands:
//!   show     Print the normalized tree of a JSON document
//!   apply    Apply change/unfold/choose operations and print the results
//!   browse   Browse a local directory, loading folders on demand
//!   request  Print the fetch request built for a branch path

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = CommandContext::from_cli(&cli)?;

    match &cli.command {
        Commands::Show {
            input,
            expand_all,
            raw,
        } => commands::cmd_show(&ctx, input, *expand_all, *raw),
        Commands::Apply {
            input,
            ops,
            responses,
            tree,
        } => commands::cmd_apply(&ctx, input, ops, responses.as_deref(), *tree),
        Commands::Browse {
            dir,
            unfold,
            ops,
            hidden,
        } => commands::cmd_browse(&ctx, dir, unfold, ops, *hidden),
        Commands::Request { path } => commands::cmd_request(&ctx, path),
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env("TREEPICK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
