use dayone_core::storage::JournalStore;

use crate::app::AppContext;
use crate::cli::RecentArgs;
use crate::output::{print_entry_list, print_json};
use crate::ui::render::header;

use super::list_ui;

pub fn handle_recent(ctx: &AppContext, args: &RecentArgs) -> anyhow::Result<()> {
    let ui = list_ui(ctx, &args.output)?;
    let store = ctx.open_store()?;
    let entries = store.recent_entries(args.limit, args.journal.as_deref())?;

    if ui.mode.is_json() {
        return print_json(&entries);
    }
    if ui.mode.is_pretty() && !ui.quiet {
        println!("{}", header(&ui, "recent", args.journal.as_deref()));
    }
    print_entry_list(&ui, &entries);
    Ok(())
}
