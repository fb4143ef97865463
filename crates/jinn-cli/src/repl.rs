//! Interactive session: one command per line from standard input.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use jinn_core::models::ProcessId;
use jinn_core::{EditMode, Language};
use log::debug;
use tokio::io::{self, AsyncBufReadExt, BufReader};

use crate::cli::{Cli, Flow};

const PROMPT: &str = "jinn> ";

pub const HELP: &str = "\
# Commands

- `goal <text>` set the goal
- `specifics <text>` set how success is measured (empty to clear)
- `env <text>` describe your environment (empty to clear)
- `generate` propose strategies for the goal
- `strategies` list the proposed strategies
- `select <n>` choose strategy n and show its plan
- `back` return to the strategy list
- `show` show the current screen
- `toggle <path>` mark a step done or not done
- `expand <path>` break a step into sub-steps, or fold them
- `regen <path>` rewrite a step
- `edit <path> <save|substeps|future> <text>` change a step's text
- `resource <name>` open a resource and its acquisition plan
- `resources` list every resource
- `check <resource> <n>` mark acquisition step n done or not done
- `fold <resource>` collapse or expand a resource
- `close` close the open resource
- `lang [en|zh]` switch language
- `export [file|-]` write the plan as text (`-` prints it)
- `save` save this process
- `update <id>` overwrite a saved process
- `history` list saved processes
- `load <id>` restore a saved process
- `delete <id>` delete a saved process
- `reset` start over
- `help` show this help
- `quit` leave

Step paths look like `2`, `2b` for the second member of a parallel group, \
and `2b.1` for its first sub-step.
";

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Goal(String),
    Specifics(Option<String>),
    Environment(Option<String>),
    Generate,
    Strategies,
    Select(usize),
    Back,
    Show,
    Toggle(String),
    Expand(String),
    Regenerate(String),
    Edit {
        path: String,
        mode: EditMode,
        text: String,
    },
    Resource(String),
    Resources,
    Check { resource: String, step: usize },
    Fold(String),
    Close,
    Language(Option<Language>),
    Export(Option<PathBuf>),
    Save,
    Update(ProcessId),
    History,
    Load(ProcessId),
    Delete(ProcessId),
    Reset,
    Help,
    Quit,
}

fn optional(rest: &str) -> Option<String> {
    Some(rest.to_string()).filter(|text| !text.is_empty())
}

fn required<'a>(rest: &'a str, what: &str) -> Result<&'a str> {
    if rest.is_empty() {
        bail!("Missing {what}");
    }
    Ok(rest)
}

fn number(text: &str, what: &str) -> Result<usize> {
    text.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| anyhow!("Invalid {what}: {text}"))
}

/// Parses a line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<ReplCommand>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_lowercase().as_str() {
        "goal" => ReplCommand::Goal(required(rest, "goal text")?.to_string()),
        "specifics" => ReplCommand::Specifics(optional(rest)),
        "env" => ReplCommand::Environment(optional(rest)),
        "generate" | "gen" => ReplCommand::Generate,
        "strategies" => ReplCommand::Strategies,
        "select" => ReplCommand::Select(number(required(rest, "strategy number")?, "strategy number")?),
        "back" => ReplCommand::Back,
        "show" => ReplCommand::Show,
        "toggle" => ReplCommand::Toggle(required(rest, "step path")?.to_string()),
        "expand" => ReplCommand::Expand(required(rest, "step path")?.to_string()),
        "regen" => ReplCommand::Regenerate(required(rest, "step path")?.to_string()),
        "edit" => {
            let mut parts = rest.splitn(3, char::is_whitespace);
            let path = required(parts.next().unwrap_or_default(), "step path")?;
            let mode = required(parts.next().unwrap_or_default(), "edit mode")?
                .parse::<EditMode>()
                .map_err(|e| anyhow!(e))?;
            let text = required(parts.next().unwrap_or_default().trim(), "step text")?;
            ReplCommand::Edit {
                path: path.to_string(),
                mode,
                text: text.to_string(),
            }
        }
        "resource" => ReplCommand::Resource(required(rest, "resource name")?.to_string()),
        "resources" => ReplCommand::Resources,
        "check" => {
            let (resource, step) = required(rest, "resource name")?
                .rsplit_once(char::is_whitespace)
                .ok_or_else(|| anyhow!("Usage: check <resource> <n>"))?;
            ReplCommand::Check {
                resource: resource.trim().to_string(),
                step: number(step, "step number")?,
            }
        }
        "fold" => ReplCommand::Fold(required(rest, "resource name")?.to_string()),
        "close" => ReplCommand::Close,
        "lang" => ReplCommand::Language(match optional(rest) {
            Some(code) => Some(code.parse::<Language>().map_err(|e| anyhow!(e))?),
            None => None,
        }),
        "export" => ReplCommand::Export(optional(rest).map(PathBuf::from)),
        "save" => ReplCommand::Save,
        "update" => ReplCommand::Update(ProcessId::from(required(rest, "process id")?)),
        "history" => ReplCommand::History,
        "load" => ReplCommand::Load(ProcessId::from(required(rest, "process id")?)),
        "delete" => ReplCommand::Delete(ProcessId::from(required(rest, "process id")?)),
        "reset" => ReplCommand::Reset,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => bail!("Unknown command: {other}. Type `help` for the list."),
    };
    Ok(Some(command))
}

/// Reads commands until `quit` or end of input.
pub async fn run(cli: &mut Cli) -> Result<()> {
    let mut lines = BufReader::new(io::stdin()).lines();

    loop {
        cli.prompt(PROMPT)?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                cli.report_failure(&error.to_string())?;
                continue;
            }
        };

        debug!("Running {command:?}");
        if cli.execute(command).await? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
