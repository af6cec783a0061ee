use dayone_core::storage::JournalStore;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::output::{format_entry_detail, print_json};

use super::ui_for;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let ui = ui_for(ctx, args.json, None)?;
    let store = ctx.open_store()?;
    let entry = store
        .get_entry(&args.uuid, !args.no_attachments)?
        .ok_or_else(|| {
            CliError::not_found_with_hint(
                format!("Entry not found: {}", args.uuid),
                "Hint: Run `dayone recent` to find entry UUIDs.",
            )
        })?;

    if ui.mode.is_json() {
        return print_json(&entry);
    }
    println!("{}", format_entry_detail(&ui, &entry));
    Ok(())
}
