use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Largest page GitHub's search connection will return.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "gh-issues")]
#[command(about = "Search GitHub issues from the terminal", version)]
#[command(after_help = "EXAMPLES:
    gh-issues search repo:rust-lang/rust label:C-bug     Search one repository
    gh-issues search author:@me is:open --limit 10       Your open issues
    gh-issues search is:open --after Y3Vyc29yOjEw        Continue from a cursor
    gh-issues init                                       Write the config file")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress hints and pagination messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search issues (the query is prefixed with `is:issue`)
    #[command(
        alias = "s",
        after_help = "EXAMPLES:
    gh-issues search repo:cli/cli is:open
    gh-issues search \"label:good first issue\" --limit 50
    gh-issues search org:acme --all --max-pages 5"
    )]
    Search(SearchArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    gh-issues completions bash > ~/.bash_completion.d/gh-issues
    gh-issues completions zsh > ~/.zfunc/_gh-issues")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args, Clone, Debug)]
pub struct SearchArgs {
    /// Search terms using GitHub search syntax
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Issues per page (default: config default_limit or 30, max: 100)
    #[arg(long, short, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_SIZE as i64))]
    pub limit: Option<u32>,

    /// Cursor from a previous page to continue from
    #[arg(long, conflicts_with = "all")]
    pub after: Option<String>,

    /// Follow pagination and fetch every page
    #[arg(long)]
    pub all: bool,

    /// Upper bound on pages fetched with --all
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_pages: u64,
}

impl SearchArgs {
    pub fn query_string(&self) -> String {
        self.query.join(" ")
    }
}
