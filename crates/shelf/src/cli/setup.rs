use clap::{Args, Parser, Subcommand, ValueEnum};
use shelfapp::commands::sort::SortOrder;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    #[default]
    Relevance,
    Title,
    Author,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Relevance => SortOrder::Relevance,
            SortArg::Title => SortOrder::Title,
            SortArg::Author => SortOrder::Author,
        }
    }
}

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version = get_version())]
#[command(about = "Search books and keep favorites and a reading list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $SHELF_DATA, then the OS data dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t, help_heading = "Options")]
    pub output: OutputMode,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

/// Search to run before resolving an id.
#[derive(Args, Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Search for this text first, so the id can come from the results
    #[arg(long)]
    pub query: Option<String>,

    /// Category for that search
    #[arg(long)]
    pub category: Option<String>,
}

impl ResolveArgs {
    pub fn wants_search(&self) -> bool {
        self.query.is_some() || self.category.is_some()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog
    #[command(alias = "s", display_order = 1)]
    Search {
        /// Search words (blank uses the configured default query)
        text: Vec<String>,

        /// Restrict to a subject category
        #[arg(short, long)]
        category: Option<String>,

        /// Order of the displayed results
        #[arg(short, long, value_enum, default_value_t)]
        sort: SortArg,
    },

    /// Show a collection
    #[command(alias = "ls", display_order = 2)]
    List { collection: String },

    /// Add a book to a collection, or remove it if already there
    #[command(display_order = 3)]
    Toggle {
        collection: String,
        id: String,

        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Toggle a book in favorites
    #[command(display_order = 4)]
    Fav {
        id: String,

        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Toggle a book in the reading list
    #[command(display_order = 5)]
    Read {
        id: String,

        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Show the theme, or switch it
    #[command(display_order = 10)]
    Theme {
        #[arg(long)]
        toggle: bool,
    },

    /// List configured collections
    #[command(display_order = 11)]
    Collections,

    /// Interactive shell (the default)
    #[command(display_order = 12)]
    Shell,

    /// Generate shell completions
    #[command(hide = true, display_order = 20)]
    Completions {
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}
