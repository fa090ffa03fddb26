use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use notes_core::VERSION;

/// Notes - a personal note store with every title and body encrypted at rest
///
/// Run without a command to open the interactive menu.
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Password for the notes file (prompted for when omitted)
    #[arg(short, long, global = true, env = "NOTES_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to the notes file
    #[arg(short, long, global = true, env = "NOTES_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Note number as shown by `list`
    #[arg(value_name = "NUMBER")]
    pub number: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Note date (dd.mm.yyyy)
    #[arg(long)]
    pub date: String,

    /// Note title
    #[arg(long)]
    pub title: String,

    /// Note body
    #[arg(long)]
    pub body: String,
}

/// Arguments for the `edit` command
#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("changes")
        .required(true)
        .multiple(true)
        .args(["date", "title", "body"])
))]
pub struct EditArgs {
    /// Note number as shown by `list`
    #[arg(value_name = "NUMBER")]
    pub number: usize,

    /// New date (dd.mm.yyyy)
    #[arg(long)]
    pub date: Option<String>,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New body
    #[arg(long)]
    pub body: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List notes in date order
    List(ListArgs),

    /// Show a note's date, title and body
    Show(ShowArgs),

    /// Add a new note
    Add(AddArgs),

    /// Change the date, title or body of a note
    Edit(EditArgs),

    /// Delete a note
    #[command(alias = "rm")]
    Remove {
        /// Note number as shown by `list`
        #[arg(value_name = "NUMBER")]
        number: usize,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
