use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use huntdesk::model::MediaKind;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-07-06" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("HUNTDESK_GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("HUNTDESK_COMMIT_DATE");
    const IS_RELEASE: &str = env!("HUNTDESK_IS_RELEASE");

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
#[command(name = "huntdesk", bin_name = "huntdesk", version = get_version())]
#[command(about = "Task catalogue desk for puzzle hunts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = "HUNTDESK_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// More diagnostic output on stderr (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a task by its number, typed any way (10102, 1.01.02, 1 01 02)
    #[command(alias = "f", display_order = 1)]
    Find { input: String },

    /// Show how keystrokes are normalized into a task number
    #[command(display_order = 2)]
    Format { input: String },

    /// List tasks in number order
    #[command(alias = "ls", display_order = 3)]
    List {
        /// Only tasks of this chapter
        #[arg(short, long)]
        chapter: Option<u8>,
    },

    /// Show the chapters and where each one starts
    #[command(display_order = 4)]
    Chapters,

    /// Search tasks and search items
    #[command(display_order = 5)]
    Search { query: String },

    /// List search items, optionally filtered
    #[command(display_order = 6)]
    Items { query: Option<String> },

    /// Add a task
    #[command(display_order = 10)]
    Add {
        id: String,
        #[command(flatten)]
        fields: TaskFields,
    },

    /// Edit fields of a task
    #[command(alias = "e", display_order = 11)]
    Edit {
        id: String,
        #[command(flatten)]
        fields: TaskFields,
    },

    /// Remove a task
    #[command(alias = "rm", display_order = 12)]
    Remove { id: String },

    /// Manage search items
    #[command(subcommand)]
    Item(ItemCommands),

    /// Attach or detach task media
    #[command(subcommand)]
    Media(MediaCommands),

    /// Write a dated JSON backup of the catalogue
    #[command(display_order = 20)]
    Export {
        /// Directory to write into
        #[arg(long, short, default_value = ".")]
        out: PathBuf,
    },

    /// Replace the whole catalogue with a JSON backup
    #[command(display_order = 21)]
    Import { file: PathBuf },

    /// Show, set or reset the custom logo
    #[command(subcommand)]
    Logo(LogoCommands),

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (chapters, export-prefix)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and seed the sample catalogue
    #[command(display_order = 31)]
    Init,
}

#[derive(clap::Args, Debug, Default)]
pub struct TaskFields {
    #[arg(long, short)]
    pub question: Option<String>,
    #[arg(long, short)]
    pub solution: Option<String>,
    #[arg(long, short)]
    pub room: Option<String>,
    #[arg(long, short)]
    pub tip: Option<String>,
    #[arg(long, short)]
    pub key: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// Add a search item
    Add { item: String, location: String },
    /// Move a search item to a new location
    Edit { item: String, location: String },
    /// Remove a search item
    #[command(alias = "rm")]
    Remove { item: String },
}

#[derive(Subcommand, Debug)]
pub enum MediaCommands {
    /// Attach a media reference (path, URL or data URL)
    Add {
        id: String,
        reference: String,
        /// Override the kind guessed from the reference
        #[arg(long)]
        kind: Option<MediaKind>,
    },
    /// Detach media by its position in `find` output (1-based)
    #[command(alias = "rm")]
    Remove {
        id: String,
        #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        position: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum LogoCommands {
    /// Print the stored logo reference
    Show,
    /// Store a new logo reference
    Set { reference: String },
    /// Go back to the default logo
    Clear,
}
