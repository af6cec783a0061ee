use dayone_core::storage::JournalStore;

use crate::app::AppContext;
use crate::cli::CountArgs;
use crate::output::{count_json, print_json};

pub fn handle_count(ctx: &AppContext, args: &CountArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let journal = args.journal.as_deref().filter(|j| !j.is_empty());
    let count = store.entry_count(journal)?;

    if args.json {
        return print_json(&count_json(journal, count));
    }
    if ctx.quiet() {
        println!("{}", count);
        return Ok(());
    }
    match journal {
        Some(name) => println!("Journal '{}' has {} entries.", name, count),
        None => println!("Total entries: {}", count),
    }
    Ok(())
}
