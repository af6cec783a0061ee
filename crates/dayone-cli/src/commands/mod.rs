//! Command handlers, one per subcommand.

mod attachment;
mod count;
mod journals;
mod misc;
mod on_this_day;
mod recent;
mod search;
mod show;
mod tool;

pub use attachment::handle_attachment;
pub use count::handle_count;
pub use journals::handle_journals;
pub use misc::handle_completions;
pub use on_this_day::handle_on_this_day;
pub use recent::handle_recent;
pub use search::handle_search;
pub use show::handle_show;
pub use tool::handle_tool;

use crate::app::AppContext;
use crate::cli::OutputArgs;
use crate::ui::UiContext;

/// Build the UI context for a command's output flags.
fn ui_for(ctx: &AppContext, json: bool, format: Option<&str>) -> anyhow::Result<UiContext> {
    Ok(UiContext::from_env(json, format, ctx.quiet(), ctx.display_zone()?)?)
}

fn list_ui(ctx: &AppContext, output: &OutputArgs) -> anyhow::Result<UiContext> {
    ui_for(ctx, output.json, output.format.as_deref())
}
