//! Line command parsing for the terminal session.

/// One user gesture entered as a text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <text>` types and submits in one go, even when `<text>` is blank;
    /// bare `add` submits the draft.
    Add(Option<String>),
    /// `draft <text>` replaces the draft without submitting.
    Draft(String),
    /// 1-based list position as rendered.
    Toggle(usize),
    Delete(usize),
    List,
    Help,
    Quit,
}

/// Parses one input line.
///
/// Returns `None` for blank lines. Unknown verbs and bad positions return a
/// usage message for the caller to print.
pub fn parse_command(line: &str) -> Option<Result<Command, String>> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return None;
    }

    let trimmed = line.trim_start();
    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" | "a" => Ok(Command::Add((!rest.is_empty()).then(|| rest.to_string()))),
        "draft" | "d" => Ok(Command::Draft(rest.to_string())),
        "toggle" | "t" => parse_position(rest).map(Command::Toggle),
        "delete" | "rm" | "x" => parse_position(rest).map(Command::Delete),
        "list" | "ls" => Ok(Command::List),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`; type `help` for usage")),
    };
    Some(command)
}

fn parse_position(raw: &str) -> Result<usize, String> {
    let raw = raw.trim();
    match raw.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(format!("expected a task number (1, 2, ...), got `{raw}`")),
    }
}

pub const USAGE: &str = "\
commands:
  add <text>     type <text> and submit (bare `add` submits the draft)
  draft <text>   set the draft without adding
  toggle <n>     mark task n done / not done
  delete <n>     remove task n
  list           show the list again
  quit           leave";
