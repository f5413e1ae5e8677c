use std::path::PathBuf;

use clap::{Parser, Subcommand};
use treepick::domain::value_objects::Level;
use treepick::store::Action;

/// Treepick - tri-state folder tree with lazily loaded branches
#[derive(Parser, Debug)]
#[command(name = "treepick")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Operations are written <action>:<kind>:<level>, e.g. change:leaf:0.1.2")]
pub struct Cli {
    /// Emit NDJSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./treepick.toml, then the user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Draw the tree with ascii icons only
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the normalized tree of a JSON document ("-" reads stdin)
    Show {
        input: PathBuf,

        /// Show children of closed branches too
        #[arg(long)]
        expand_all: bool,

        /// Print the tree back in the input shape instead
        #[arg(long)]
        raw: bool,
    },

    /// Apply operations to a JSON tree in order and print each result
    Apply {
        input: PathBuf,

        /// Operation to apply (repeatable)
        #[arg(short, long = "op", required = true)]
        ops: Vec<Action>,

        /// JSON object mapping branch paths to their lazily loaded children
        #[arg(long)]
        responses: Option<PathBuf>,

        /// Print the resulting tree after the operations
        #[arg(long)]
        tree: bool,
    },

    /// Browse a local directory, listing folders as they are unfolded
    Browse {
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Branch level to unfold (repeatable, applied in order)
        #[arg(short, long)]
        unfold: Vec<Level>,

        /// Operation to apply after unfolding (repeatable)
        #[arg(short, long = "op")]
        ops: Vec<Action>,

        /// Include hidden and ignored entries
        #[arg(long)]
        hidden: bool,
    },

    /// Print the fetch request the [fetch] config builds for a branch path
    Request { path: String },
}
