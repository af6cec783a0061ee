use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use dayone_core::storage::{DEFAULT_RECENT_LIMIT, DEFAULT_SEARCH_LIMIT, DEFAULT_YEARS_BACK};
use dayone_core::VERSION;

/// Day One - read-only access to your Day One journal database
#[derive(Parser)]
#[command(name = "dayone")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the Day One database file
    #[arg(short, long, global = true, env = "DAYONE_DATABASE")]
    pub database: Option<String>,

    /// Directory holding the DayOnePhotos/DayOneVideos/... folders
    #[arg(long, global = true, env = "DAYONE_MEDIA_DIR")]
    pub media_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Flags shared by commands that print entry lists
#[derive(Args)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `recent` command
#[derive(Args)]
pub struct RecentArgs {
    /// Number of entries (1-50)
    #[arg(short = 'n', long, default_value_t = DEFAULT_RECENT_LIMIT)]
    pub limit: usize,

    /// Only entries from this journal
    #[arg(short, long)]
    pub journal: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in entries
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Require a tag (repeatable; all must match)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Only starred entries
    #[arg(long)]
    pub starred: bool,

    /// Only entries with photos
    #[arg(long)]
    pub photos: bool,

    /// Only entries with videos
    #[arg(long)]
    pub videos: bool,

    /// Only entries with audio recordings
    #[arg(long)]
    pub audio: bool,

    /// Only entries with a location
    #[arg(long)]
    pub location: bool,

    /// Creation device type (e.g. "iPhone")
    #[arg(long, value_name = "DEVICE")]
    pub device: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Only entries from this journal
    #[arg(short, long)]
    pub journal: Option<String>,

    /// Number of results (1-50)
    #[arg(short = 'n', long, default_value_t = DEFAULT_SEARCH_LIMIT)]
    pub limit: usize,

    /// Include tags in the results
    #[arg(long)]
    pub with_tags: bool,

    /// Include attachments in the results
    #[arg(long)]
    pub with_attachments: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry UUID
    #[arg(value_name = "UUID")]
    pub uuid: String,

    /// Skip attachment lookup
    #[arg(long)]
    pub no_attachments: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `count` command
#[derive(Args)]
pub struct CountArgs {
    /// Only count entries in this journal
    #[arg(short, long)]
    pub journal: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `on-this-day` command
#[derive(Args)]
pub struct OnThisDayArgs {
    /// Date as MM-DD or YYYY-MM-DD (defaults to today)
    #[arg(value_name = "DATE")]
    pub date: Option<String>,

    /// Years to look back
    #[arg(short, long, default_value_t = DEFAULT_YEARS_BACK)]
    pub years: u32,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `attachment` command
#[derive(Args)]
pub struct AttachmentArgs {
    /// Entry UUID
    #[arg(value_name = "UUID")]
    pub uuid: String,

    /// Attachment position within the entry
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    /// Output as JSON (base64 data plus MIME type)
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `tool` command
#[derive(Args)]
pub struct ToolArgs {
    /// Tool name (e.g. read_recent_entries)
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Tool arguments as a JSON object
    #[arg(value_name = "ARGS")]
    pub arguments: Option<String>,

    /// List the available tools
    #[arg(long)]
    pub list: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the most recent entries
    Recent(RecentArgs),

    /// Search entries by text, tags, media, date and more
    Search(SearchArgs),

    /// Show a single entry
    Show(ShowArgs),

    /// List journals with entry counts
    Journals {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Count entries
    Count(CountArgs),

    /// Entries written on this day in previous years
    #[command(name = "on-this-day")]
    OnThisDay(OnThisDayArgs),

    /// Print an attachment's bytes as base64
    Attachment(AttachmentArgs),

    /// Call a journal tool by name with JSON arguments
    Tool(ToolArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
