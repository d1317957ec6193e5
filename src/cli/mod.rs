//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod args;
pub mod category;
pub mod context;
pub mod post;
pub mod team;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// esaop - command-line companion for esa.io
///
/// Without a subcommand, prints every category path of the team, one per line.
#[derive(Parser, Debug)]
#[command(name = "esaop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `categories`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "ESAOP_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Access token
    #[arg(long, global = true, env = "ESA_AUTH", hide_env_values = true)]
    pub token: Option<String>,

    /// Team name
    #[arg(long, global = true, env = "ESA_TEAM")]
    pub team: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "ESA_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "ESAOP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ESAOP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every category path of the team
    #[command(visible_alias = "tree")]
    Categories,

    /// Show team details
    Team,

    /// Show team statistics
    Stats,

    /// List team members
    Members {
        /// Page number (starts at 1)
        #[arg(long, short = 'p', default_value_t = 1)]
        page: u32,
    },

    /// Search posts
    #[command(after_help = "EXAMPLES:\n  \
            esaop posts                        # Latest posts\n  \
            esaop posts in:dev wip:false       # Shipped posts under dev/\n  \
            esaop posts --page 2 -- -tag:api   # Exclude a tag")]
    Posts {
        /// Page number (starts at 1)
        #[arg(long, short = 'p', default_value_t = 1)]
        page: u32,

        /// Search query terms, joined with spaces
        query: Vec<String>,
    },

    /// Show a single post
    Post {
        /// Post number
        number: u64,
    },

    /// Create a post
    Create(CreateArgs),
}

/// Arguments for `esaop create`
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Post name (title)
    #[arg(long, short = 'n')]
    pub name: String,

    /// Markdown body
    #[arg(long, conflicts_with = "body_file")]
    pub body_md: Option<String>,

    /// Read the markdown body from a file
    #[arg(long)]
    pub body_file: Option<PathBuf>,

    /// Tag (repeatable)
    #[arg(long = "tag", short = 't')]
    pub tags: Vec<String>,

    /// Category path, e.g. `dev/2015/05`
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Save as work in progress
    #[arg(long)]
    pub wip: bool,

    /// Revision message
    #[arg(long, short = 'm')]
    pub message: Option<String>,
}
