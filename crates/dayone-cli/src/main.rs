//! Day One CLI - read-only access to a local Day One journal database
//!
//! This is the command-line interface for Day One. It exposes the core
//! library's queries as subcommands and as named tools with JSON arguments.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod ui;

use clap::{CommandFactory, Parser};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_attachment, handle_completions, handle_count, handle_journals, handle_on_this_day,
    handle_recent, handle_search, handle_show, handle_tool,
};
use crate::errors::exit_code_for;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code_for(&e));
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Recent(args)) => handle_recent(ctx, args),
        Some(Commands::Search(args)) => handle_search(ctx, args),
        Some(Commands::Show(args)) => handle_show(ctx, args),
        Some(Commands::Journals { output }) => handle_journals(ctx, output),
        Some(Commands::Count(args)) => handle_count(ctx, args),
        Some(Commands::OnThisDay(args)) => handle_on_this_day(ctx, args),
        Some(Commands::Attachment(args)) => handle_attachment(ctx, args),
        Some(Commands::Tool(args)) => handle_tool(ctx, args),
        Some(Commands::Completions { shell }) => handle_completions(*shell),
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
