use dayone_core::storage::JournalStore;

use crate::app::AppContext;
use crate::cli::OutputArgs;
use crate::output::{print_journals, print_json};
use crate::ui::render::header;

use super::list_ui;

pub fn handle_journals(ctx: &AppContext, output: &OutputArgs) -> anyhow::Result<()> {
    let ui = list_ui(ctx, output)?;
    let store = ctx.open_store()?;
    let journals = store.list_journals()?;

    if ui.mode.is_json() {
        return print_json(&journals);
    }
    if ui.mode.is_pretty() && !ui.quiet {
        println!("{}", header(&ui, "journals", None));
    }
    print_journals(&ui, &journals);
    Ok(())
}
