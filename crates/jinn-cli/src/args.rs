use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jinn_core::Language;

/// Goal planning assistant
///
/// Jinn turns a goal into a few candidate strategies, expands the chosen one
/// into an executable plan and tracks the resources the plan needs. Run
/// without a subcommand to start an interactive session; plan text is
/// generated by an external LLM command line tool configured with
/// `--generator`.
#[derive(Parser)]
#[command(version, about, name = "jinn")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/jinn/jinn.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// LLM command line tool invoked as `<generator> <args..> <prompt>`
    #[arg(long, global = true, env = "JINN_GENERATOR")]
    pub generator: Option<PathBuf>,

    /// Extra arguments passed to the generator before the prompt
    #[arg(
        long,
        global = true,
        env = "JINN_GENERATOR_ARGS",
        value_delimiter = ' ',
        allow_hyphen_values = true
    )]
    pub generator_args: Vec<String>,

    /// Seconds to wait for a single generator answer
    #[arg(long, global = true, env = "JINN_TIMEOUT_SECS", default_value_t = 120)]
    pub timeout_secs: u64,

    /// Identity that saved processes belong to
    #[arg(long, global = true, env = "JINN_USER", default_value = "local")]
    pub user: String,

    /// Language for generated content (en, zh)
    #[arg(long, global = true, env = "JINN_LANGUAGE", default_value = "en")]
    pub language: Language,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage saved processes
    #[command(alias = "h")]
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List saved processes, newest first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a saved process and its selected plan
    #[command(alias = "s")]
    Show {
        #[arg(help = "Identifier of the saved process")]
        id: String,
    },
    /// Delete a saved process
    #[command(aliases = ["d", "rm"])]
    Delete {
        #[arg(help = "Identifier of the saved process")]
        id: String,
    },
}
