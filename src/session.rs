//! Interactive terminal session over one list.
//!
//! Reads commands from stdin and interleaves them with background results
//! from the controller, so alerts for failed saves show up as soon as they
//! happen rather than on the next command.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use sl_app::usecases::{AddItemError, UploadError};
use sl_app::ListController;
use sl_core::{ItemId, ListEvent};
use sl_platform::InMemoryItemView;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use crate::bootstrap::wiring::WiredSession;

/// How long `quit` waits for outstanding saves.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

const HELP: &str = "\
commands:
  add <text>       add an item (\\n starts a new line in multiline lists)
  toggle <n|id>    advance item n of the listing, or the item with that id
  upload <path>    upload a file as an item (multiline lists with uploads)
  list             show the list
  help             show this help
  quit             wait for pending saves and exit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(Target),
    Upload(PathBuf),
    List,
    Help,
    Quit,
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// 1-based position in the current listing.
    Position(usize),
    Id(ItemId),
}

/// Parse one input line.
///
/// In single-line lists anything that is not a command is added as an item,
/// like pressing Enter in the input field.
pub fn parse_command(line: &str, multiline: bool) -> anyhow::Result<Command> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(Command::Nothing);
    }

    let trimmed = line.trim_start();
    let (word, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    let command = match word {
        "add" => {
            if rest.trim().is_empty() {
                bail!("`add` needs the item text");
            }
            let text = if multiline {
                rest.replace("\\n", "\n")
            } else {
                rest.to_string()
            };
            Command::Add(text)
        }
        "toggle" => Command::Toggle(parse_target(rest.trim())?),
        "upload" => {
            let path = rest.trim();
            if path.is_empty() {
                bail!("`upload` needs a file path");
            }
            Command::Upload(PathBuf::from(path))
        }
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ if !multiline => Command::Add(line.to_string()),
        other => bail!("unknown command `{other}`, type `help`"),
    };
    Ok(command)
}

fn parse_target(raw: &str) -> anyhow::Result<Target> {
    if raw.is_empty() {
        bail!("`toggle` needs a position or an item id");
    }
    if let Ok(position) = raw.parse::<usize>() {
        return Ok(Target::Position(position));
    }
    if raw.starts_with(sl_core::identity::ID_PREFIX) {
        return Ok(Target::Id(ItemId::from(raw)));
    }
    bail!("`{raw}` is neither a position nor an item id")
}

enum Input {
    Line(Option<String>),
    Event(ListEvent),
}

pub async fn run(session: WiredSession) -> anyhow::Result<()> {
    let WiredSession {
        mut controller,
        view,
    } = session;

    let bound = controller.bootstrap();
    info!(items = bound.len(), "session started");
    let multiline = controller.config().multiline_mode;

    println!("{} ({} items)", controller.config().list_name, bound.len());
    print!("{}", view.render());
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let input = tokio::select! {
            line = lines.next_line() => Input::Line(line.context("Failed to read from stdin")?),
            Some(event) = controller.next_event() => Input::Event(event),
        };

        match input {
            Input::Event(event) => controller.handle_event(event),
            Input::Line(None) => break,
            Input::Line(Some(line)) => {
                match parse_command(&line, multiline) {
                    Ok(Command::Quit) => break,
                    Ok(command) => execute(&mut controller, &view, command).await,
                    Err(err) => eprintln!("{err}"),
                }
                prompt();
            }
        }
    }

    if tokio::time::timeout(SHUTDOWN_GRACE, controller.settle())
        .await
        .is_err()
    {
        warn!(pending = controller.pending(), "exiting with unsaved actions");
    }
    Ok(())
}

async fn execute(controller: &mut ListController, view: &InMemoryItemView, command: Command) {
    match command {
        Command::Add(text) => match controller.add_item(&text) {
            Ok(id) => println!("added {id}"),
            Err(AddItemError::Duplicate(_)) => println!("already on the list"),
            Err(AddItemError::Empty) => {}
            Err(err) => eprintln!("{err}"),
        },
        Command::Toggle(target) => {
            let id = match target {
                Target::Position(position) => view.id_at(position),
                Target::Id(id) => Some(id),
            };
            let Some(id) = id else {
                eprintln!("no item at that position");
                return;
            };
            match controller.toggle(&id) {
                Ok(state) => println!("{id} is now {state}"),
                Err(err) => eprintln!("{err}"),
            }
        }
        Command::Upload(path) => match controller.upload(&path).await {
            Ok(()) => println!("uploading {}", path.display()),
            // Already alerted.
            Err(UploadError::TooLarge { .. } | UploadError::Read { .. }) => {}
            Err(err) => eprintln!("{err}"),
        },
        Command::List => print!("{}", view.render()),
        Command::Help => print!("{HELP}"),
        Command::Quit | Command::Nothing => {}
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
