//! Notes CLI - a personal note store with encrypted titles and bodies
//!
//! Without a command this opens the interactive menu; the subcommands
//! cover the same operations for scripting.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod ui;

use clap::Parser;

use notes_core::NotesError;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::errors::CliError;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        let hint = err
            .downcast_ref::<NotesError>()
            .and_then(errors::hint_for);
        print_error(&UiContext::detect(), &err.to_string(), hint);
        std::process::exit(errors::exit_code(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);
    match &cli.command {
        None => {
            if !ctx.interactive() {
                return Err(CliError::invalid_input(
                    "The interactive menu needs a terminal. Run `notes --help` for commands.",
                )
                .into());
            }
            commands::run_menu(&ctx)
        }
        Some(Commands::List(args)) => commands::handle_list(&ctx, args),
        Some(Commands::Show(args)) => commands::handle_show(&ctx, args),
        Some(Commands::Add(args)) => commands::handle_add(&ctx, args),
        Some(Commands::Edit(args)) => commands::handle_edit(&ctx, args),
        Some(Commands::Remove { number }) => commands::handle_remove(&ctx, *number),
        Some(Commands::Completions { shell }) => commands::handle_completions(*shell),
    }
}
