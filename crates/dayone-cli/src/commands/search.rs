use dayone_core::storage::{JournalStore, SearchFilter};
use dayone_core::time::parse_filter_date;

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::errors::CliError;
use crate::output::{print_entry_list, print_json};
use crate::ui::render::header;

use super::list_ui;

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let ui = list_ui(ctx, &args.output)?;
    let filter = build_filter(args)?;
    let store = ctx.open_store()?;
    let entries = store.search(&filter)?;

    if ui.mode.is_json() {
        return print_json(&entries);
    }
    if ui.mode.is_pretty() && !ui.quiet {
        println!("{}", header(&ui, "search", args.query.as_deref()));
    }
    print_entry_list(&ui, &entries);
    Ok(())
}

/// Translate command-line flags into a search filter.
///
/// Flags that are not given impose no condition. Dates are checked here so a
/// typo is reported instead of silently widening the search.
fn build_filter(args: &SearchArgs) -> Result<SearchFilter, CliError> {
    let mut filter = SearchFilter::new()
        .tags(args.tag.iter().cloned())
        .limit(args.limit)
        .include_tags(args.with_tags)
        .include_attachments(args.with_attachments);

    if let Some(query) = &args.query {
        filter = filter.text(query.clone());
    }
    if args.starred {
        filter = filter.starred(true);
    }
    if args.photos {
        filter = filter.has_photos(true);
    }
    if args.videos {
        filter = filter.has_videos(true);
    }
    if args.audio {
        filter = filter.has_audio(true);
    }
    if args.location {
        filter = filter.has_location(true);
    }
    if let Some(device) = &args.device {
        filter = filter.creation_device(device.clone());
    }
    for (flag, value) in [("--from", &args.from), ("--to", &args.to)] {
        if let Some(date) = value {
            parse_filter_date(date).map_err(|_| {
                CliError::invalid_input(format!("Invalid {} date: {} (expected YYYY-MM-DD)", flag, date))
            })?;
        }
    }
    if let Some(from) = &args.from {
        filter = filter.date_from(from.clone());
    }
    if let Some(to) = &args.to {
        filter = filter.date_to(to.clone());
    }
    if let Some(journal) = &args.journal {
        filter = filter.journal(journal.clone());
    }
    Ok(filter)
}
