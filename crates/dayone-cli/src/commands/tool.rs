//! Named tool dispatch with JSON arguments.
//!
//! Every tool returns a single block of text. Failures inside a tool are
//! reported in that text as `Error: <message>` rather than as a process
//! error, so callers can always relay the output verbatim.

use serde::Deserialize;
use serde_json::Value;

use dayone_core::storage::{
    JournalStore, SearchFilter, DEFAULT_RECENT_LIMIT, DEFAULT_SEARCH_LIMIT, DEFAULT_YEARS_BACK,
    MAX_LIMIT, MIN_LIMIT,
};

use crate::app::AppContext;
use crate::cli::ToolArgs;
use crate::constants::TOOL_MAX_YEARS_BACK;
use crate::errors::CliError;
use crate::output::{format_entry, format_entry_detail, last_entry_day, on_this_day_text};
use crate::ui::UiContext;

use super::attachment::encode_attachment;

/// A callable tool and what it does.
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
}

pub const TOOLS: &[ToolInfo] = &[
    ToolInfo {
        name: "read_recent_entries",
        description: "Read recent journal entries with full text and metadata",
    },
    ToolInfo {
        name: "search_entries",
        description: "Search journal entries by text, tags, media, dates and more",
    },
    ToolInfo {
        name: "get_entry",
        description: "Get a single entry by UUID, with tags and attachments",
    },
    ToolInfo {
        name: "list_journals",
        description: "List all journals with entry counts and statistics",
    },
    ToolInfo {
        name: "get_entry_count",
        description: "Get total number of entries, optionally filtered by journal",
    },
    ToolInfo {
        name: "get_entries_by_date",
        description: "Get 'On This Day' entries from previous years for a specific date",
    },
    ToolInfo {
        name: "get_attachment",
        description: "Get an entry attachment as base64 with its MIME type",
    },
];

pub fn handle_tool(ctx: &AppContext, args: &ToolArgs) -> anyhow::Result<()> {
    if args.list {
        for tool in TOOLS {
            println!("{}\t{}", tool.name, tool.description);
        }
        return Ok(());
    }

    let name = args
        .name
        .as_deref()
        .ok_or_else(|| CliError::invalid_input("Tool name required (see `dayone tool --list`)"))?;
    let arguments = match args.arguments.as_deref() {
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| CliError::invalid_input(format!("Tool arguments are not JSON: {}", e)))?,
        None => Value::Object(Default::default()),
    };

    let store = ctx.open_store()?;
    let ui = UiContext {
        zone: ctx.display_zone()?,
        ..UiContext::plain()
    };
    println!("{}", call_tool(&store, &ui, name, &arguments));
    Ok(())
}

/// Run a tool and render its result; errors become `Error: <message>` text.
pub fn call_tool(store: &dyn JournalStore, ui: &UiContext, name: &str, arguments: &Value) -> String {
    tracing::debug!(tool = name, "calling tool");
    match dispatch(store, ui, name, arguments) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(tool = name, error = %err, "tool failed");
            format!("Error: {}", err)
        }
    }
}

fn dispatch(
    store: &dyn JournalStore,
    ui: &UiContext,
    name: &str,
    arguments: &Value,
) -> anyhow::Result<String> {
    match name {
        "read_recent_entries" => read_recent_entries(store, ui, parse_args(arguments)?),
        "search_entries" => search_entries(store, ui, parse_args(arguments)?),
        "get_entry" => get_entry(store, ui, parse_args(arguments)?),
        "list_journals" => list_journals(store),
        "get_entry_count" => get_entry_count(store, parse_args(arguments)?),
        "get_entries_by_date" => get_entries_by_date(store, ui, parse_args(arguments)?),
        "get_attachment" => get_attachment(store, parse_args(arguments)?),
        other => Ok(format!("Unknown tool: {}", other)),
    }
}

fn parse_args<T: for<'de> Deserialize<'de>>(arguments: &Value) -> anyhow::Result<T> {
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };
    serde_json::from_value(arguments).map_err(|e| anyhow::anyhow!("Invalid arguments: {}", e))
}

fn check_limit(limit: i64) -> anyhow::Result<usize> {
    usize::try_from(limit)
        .ok()
        .filter(|l| (MIN_LIMIT..=MAX_LIMIT).contains(l))
        .ok_or_else(|| {
            anyhow::anyhow!("limit must be between {} and {}, got {}", MIN_LIMIT, MAX_LIMIT, limit)
        })
}

fn non_empty(value: &str) -> Option<&str> {
    Some(value).filter(|v| !v.is_empty())
}

fn default_recent_limit() -> i64 {
    DEFAULT_RECENT_LIMIT as i64
}

fn default_search_limit() -> i64 {
    DEFAULT_SEARCH_LIMIT as i64
}

fn default_years_back() -> i64 {
    i64::from(DEFAULT_YEARS_BACK)
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
struct RecentEntriesArgs {
    #[serde(default = "default_recent_limit")]
    limit: i64,
    #[serde(default)]
    journal: String,
}

#[derive(Deserialize)]
struct SearchEntriesArgs {
    search_text: String,
    #[serde(default = "default_search_limit")]
    limit: i64,
    #[serde(default)]
    journal: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    starred: Option<bool>,
    #[serde(default)]
    has_photos: Option<bool>,
    #[serde(default)]
    has_videos: Option<bool>,
    #[serde(default)]
    has_audio: Option<bool>,
    #[serde(default)]
    has_location: Option<bool>,
    #[serde(default)]
    creation_device: Option<String>,
    #[serde(default)]
    date_from: Option<String>,
    #[serde(default)]
    date_to: Option<String>,
    #[serde(default)]
    include_tags: bool,
}

#[derive(Deserialize)]
struct GetEntryArgs {
    uuid: String,
    #[serde(default = "default_true")]
    include_attachments: bool,
}

#[derive(Deserialize)]
struct EntryCountArgs {
    #[serde(default)]
    journal: String,
}

#[derive(Deserialize)]
struct EntriesByDateArgs {
    target_date: String,
    #[serde(default = "default_years_back")]
    years_back: i64,
}

#[derive(Deserialize)]
struct AttachmentToolArgs {
    uuid: String,
    #[serde(default)]
    index: usize,
}

fn entry_block(ui: &UiContext, header: String, entries: &[dayone_core::storage::Entry]) -> String {
    let mut parts = vec![format!("{}:\n", header)];
    parts.extend(entries.iter().map(|e| format!("{}\n", format_entry(ui, e, None))));
    parts.join("\n")
}

fn read_recent_entries(
    store: &dyn JournalStore,
    ui: &UiContext,
    args: RecentEntriesArgs,
) -> anyhow::Result<String> {
    let limit = check_limit(args.limit)?;
    let journal = non_empty(&args.journal);
    let entries = store.recent_entries(limit, journal)?;

    if entries.is_empty() {
        return Ok("No entries found.".to_string());
    }
    let mut header = format!("Found {} recent entries", entries.len());
    if let Some(name) = journal {
        header.push_str(&format!(" in journal '{}'", name));
    }
    Ok(entry_block(ui, header, &entries))
}

fn search_entries(
    store: &dyn JournalStore,
    ui: &UiContext,
    args: SearchEntriesArgs,
) -> anyhow::Result<String> {
    let limit = check_limit(args.limit)?;
    let journal = non_empty(&args.journal);

    let filter = SearchFilter {
        text: Some(args.search_text.clone()),
        tags: args.tags,
        starred: args.starred,
        has_photos: args.has_photos,
        has_videos: args.has_videos,
        has_audio: args.has_audio,
        has_location: args.has_location,
        creation_device: args.creation_device,
        date_from: args.date_from,
        date_to: args.date_to,
        journal: journal.map(str::to_string),
        limit,
        include_tags: args.include_tags,
        include_attachments: false,
    };
    let entries = store.search(&filter)?;

    if entries.is_empty() {
        return Ok(format!("No entries found matching '{}'.", args.search_text));
    }
    let mut header = format!("Found {} entries matching '{}'", entries.len(), args.search_text);
    if let Some(name) = journal {
        header.push_str(&format!(" in journal '{}'", name));
    }
    Ok(entry_block(ui, header, &entries))
}

fn get_entry(store: &dyn JournalStore, ui: &UiContext, args: GetEntryArgs) -> anyhow::Result<String> {
    match store.get_entry(&args.uuid, args.include_attachments)? {
        Some(entry) => Ok(format_entry_detail(ui, &entry)),
        None => Ok(format!("No entry found with UUID '{}'.", args.uuid)),
    }
}

fn list_journals(store: &dyn JournalStore) -> anyhow::Result<String> {
    let journals = store.list_journals()?;
    if journals.is_empty() {
        return Ok("No journals found.".to_string());
    }

    let mut parts = vec![format!("Found {} journal(s):\n", journals.len())];
    for journal in &journals {
        parts.push(format!(
            "{}\n   Entries: {}\n   Last entry: {}\n",
            journal.name,
            journal.entry_count,
            last_entry_day(journal)
        ));
    }
    Ok(parts.join("\n"))
}

fn get_entry_count(store: &dyn JournalStore, args: EntryCountArgs) -> anyhow::Result<String> {
    let journal = non_empty(&args.journal);
    let count = store.entry_count(journal)?;
    Ok(match journal {
        Some(name) => format!("Journal '{}' has {} entries.", name, count),
        None => format!("Total entries: {}", count),
    })
}

fn get_entries_by_date(
    store: &dyn JournalStore,
    ui: &UiContext,
    args: EntriesByDateArgs,
) -> anyhow::Result<String> {
    let years_back = u32::try_from(args.years_back)
        .ok()
        .filter(|y| (1..=TOOL_MAX_YEARS_BACK).contains(y))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "years_back must be between 1 and {}, got {}",
                TOOL_MAX_YEARS_BACK,
                args.years_back
            )
        })?;

    let entries = store.on_this_day(&args.target_date, years_back)?;
    if entries.is_empty() {
        return Ok(format!(
            "No entries found for {} in the past {} years.",
            args.target_date, years_back
        ));
    }
    Ok(format!(
        "On This Day ({}) - Found {} entries:\n{}",
        args.target_date,
        entries.len(),
        on_this_day_text(ui, &entries).trim_end()
    ))
}

fn get_attachment(store: &dyn JournalStore, args: AttachmentToolArgs) -> anyhow::Result<String> {
    let encoded = encode_attachment(store, &args.uuid, args.index)?;
    Ok(serde_json::to_string_pretty(&encoded)?)
}
