use chrono::Local;

use dayone_core::storage::JournalStore;

use crate::app::AppContext;
use crate::cli::OnThisDayArgs;
use crate::output::{print_json, print_on_this_day};
use crate::ui::render::header;

use super::list_ui;

pub fn handle_on_this_day(ctx: &AppContext, args: &OnThisDayArgs) -> anyhow::Result<()> {
    let ui = list_ui(ctx, &args.output)?;
    let target = args
        .date
        .clone()
        .unwrap_or_else(|| Local::now().format("%m-%d").to_string());

    let store = ctx.open_store()?;
    let entries = store.on_this_day(&target, args.years)?;

    if ui.mode.is_json() {
        return print_json(&entries);
    }
    if entries.is_empty() {
        if !ui.quiet {
            println!(
                "No entries found for {} in the past {} years.",
                target, args.years
            );
        }
        return Ok(());
    }
    if !ui.quiet {
        let context = format!("{}, {} found", target, entries.len());
        println!("{}", header(&ui, "on-this-day", Some(&context)));
    }
    print_on_this_day(&ui, &entries);
    Ok(())
}
