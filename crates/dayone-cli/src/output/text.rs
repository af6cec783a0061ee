//! Text and table output formatting for entries and journals.

use chrono::{DateTime, Local};
use chrono_tz::Tz;

use dayone_core::storage::{Entry, Journal, OnThisDayEntry};

use crate::constants::{DAY_FORMAT, ENTRY_TIME_FORMAT, PREVIEW_CHARS, TABLE_SUMMARY_MAX};
use crate::ui::render::{simple_table, single_line, truncate};
use crate::ui::theme::{styled, styles};
use crate::ui::UiContext;

const ENTRY_COLUMNS: [&str; 5] = ["CREATED", "JOURNAL", "TAGS", "UUID", "TEXT"];
const JOURNAL_COLUMNS: [&str; 3] = ["NAME", "ENTRIES", "LAST ENTRY"];

/// Creation time as shown to the user.
///
/// An explicit `zone` wins; otherwise the entry's own IANA zone is used when
/// it names one, and local time when it does not.
pub fn entry_time(entry: &Entry, zone: Option<Tz>) -> String {
    format_instant(&entry.creation_date, entry.timezone.as_deref(), zone)
}

fn format_instant(instant: &DateTime<Local>, entry_zone: Option<&str>, zone: Option<Tz>) -> String {
    let own_zone = entry_zone.and_then(|name| name.parse::<Tz>().ok());
    match zone.or(own_zone) {
        Some(tz) => instant.with_timezone(&tz).format(ENTRY_TIME_FORMAT).to_string(),
        None => instant.format(ENTRY_TIME_FORMAT).to_string(),
    }
}

/// "N years ago" label, or `None` for this year.
pub fn years_ago_label(years_ago: i32) -> Option<String> {
    match years_ago {
        i32::MIN..=0 => None,
        1 => Some("1 year ago".to_string()),
        n => Some(format!("{} years ago", n)),
    }
}

/// Multi-line summary of an entry with a text preview.
pub fn format_entry(ui: &UiContext, entry: &Entry, years_ago: Option<i32>) -> String {
    let mut first = styled(&entry_time(entry, ui.zone), styles::bold(), ui.color);
    if entry.starred {
        first.push(' ');
        first.push_str(&styled("*", styles::star(), ui.color));
    }

    let mut lines = vec![first, format!("Journal: {}", entry.journal_name)];

    let tags = entry.tag_names();
    if !tags.is_empty() {
        let tags: Vec<String> = tags
            .iter()
            .map(|t| styled(&format!("#{}", t), styles::tag(), ui.color))
            .collect();
        lines.push(format!("Tags: {}", tags.join(", ")));
    }
    if entry.has_location {
        lines.push("Has location".to_string());
    }
    if let Some(label) = years_ago.and_then(years_ago_label) {
        lines.push(format!("({})", label));
    }
    if !entry.text.is_empty() {
        lines.push(String::new());
        lines.push(truncate(&entry.text, PREVIEW_CHARS));
    }

    lines.join("\n")
}

/// Full rendering of a single entry, including attachments when loaded.
pub fn format_entry_detail(ui: &UiContext, entry: &Entry) -> String {
    let mut lines = vec![
        format!("UUID: {}", entry.uuid),
        format!("Created: {}", entry_time(entry, ui.zone)),
    ];
    if let Some(modified) = entry.modified_date {
        lines.push(format!(
            "Modified: {}",
            format_instant(&modified, entry.timezone.as_deref(), ui.zone)
        ));
    }
    lines.push(format!("Journal: {}", entry.journal_name));
    if entry.starred {
        lines.push("Starred: yes".to_string());
    }
    if let Some(tz) = entry.timezone.as_deref() {
        lines.push(format!("Timezone: {}", tz));
    }
    if !entry.tag_names().is_empty() {
        lines.push(format!("Tags: {}", entry.tag_names().join(", ")));
    }
    if entry.has_location {
        lines.push("Has location".to_string());
    }
    if entry.has_weather {
        lines.push("Has weather".to_string());
    }
    if let Some(attachments) = entry.attachments.as_deref().filter(|a| !a.is_empty()) {
        lines.push("Attachments:".to_string());
        for (index, attachment) in attachments.iter().enumerate() {
            let location = attachment
                .file_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not on disk)".to_string());
            lines.push(format!("  [{}] {} {}", index, attachment.kind, location));
        }
    }
    lines.push(String::new());
    lines.push(entry.text.clone());
    lines.join("\n")
}

/// Print a list of entries as a table (pretty) or tab-separated rows (plain).
pub fn print_entry_list(ui: &UiContext, entries: &[Entry]) {
    if entries.is_empty() {
        if !ui.quiet {
            println!("No entries found.");
        }
        return;
    }
    let rows: Vec<Vec<String>> = entries.iter().map(|e| entry_row(ui, e)).collect();
    println!("{}", simple_table(ui, &ENTRY_COLUMNS, &rows));
}

fn entry_row(ui: &UiContext, entry: &Entry) -> Vec<String> {
    let mut created = entry_time(entry, ui.zone);
    if entry.starred {
        created.push_str(" *");
    }
    vec![
        created,
        entry.journal_name.clone(),
        entry.tag_names().join(","),
        entry.uuid.clone(),
        truncate(&single_line(&entry.text), TABLE_SUMMARY_MAX),
    ]
}

/// Print "on this day" results grouped by year, newest first.
pub fn print_on_this_day(ui: &UiContext, entries: &[OnThisDayEntry]) {
    print!("{}", on_this_day_text(ui, entries));
}

/// Year-grouped rendering of "on this day" results.
pub fn on_this_day_text(ui: &UiContext, entries: &[OnThisDayEntry]) -> String {
    let mut out = String::new();
    let mut current_year = None;
    for item in entries {
        if current_year != Some(item.year) {
            current_year = Some(item.year);
            let label = years_ago_label(item.years_ago).unwrap_or_else(|| "This year".to_string());
            let heading = format!("{} ({})", item.year, label);
            out.push_str(&format!("\n{}:\n", styled(&heading, styles::bold(), ui.color)));
        }
        out.push_str(&format_entry(ui, &item.entry, None));
        out.push_str("\n\n");
    }
    out
}

/// Print journals as a table (pretty) or tab-separated rows (plain).
pub fn print_journals(ui: &UiContext, journals: &[Journal]) {
    if journals.is_empty() {
        if !ui.quiet {
            println!("No journals found.");
        }
        return;
    }
    let rows: Vec<Vec<String>> = journals
        .iter()
        .map(|j| vec![j.name.clone(), j.entry_count.to_string(), last_entry_day(j)])
        .collect();
    println!("{}", simple_table(ui, &JOURNAL_COLUMNS, &rows));
}

/// Day of a journal's newest entry, or "Never".
pub fn last_entry_day(journal: &Journal) -> String {
    journal
        .last_entry_date
        .map(|d| d.format(DAY_FORMAT).to_string())
        .unwrap_or_else(|| "Never".to_string())
}
