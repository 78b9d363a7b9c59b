// SPDX-License-Identifier: GPL-3.0-only

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Reload,
    Add { id: i64, title: String },
    Update { remote_key: String, title: String },
    Delete { remote_key: String },
    Help,
    Quit,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type 'help' for a list)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("ID must be an integer, got '{0}'")]
    InvalidId(String),
}

pub const HELP: &str = "\
Commands:
  list                        show cached posts
  reload                      fetch all posts from the remote store
  add <id> <title>            create a post
  update <key> <title>        change the title of a post
  delete <key>                delete a post (asks for confirmation)
  help                        show this message
  quit                        exit
";

/// Parse one input line; blank lines yield `None`
///
/// Titles are the rest of the line after the leading arguments, trimmed.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = split_word(line);
    let command = match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "reload" => Command::Reload,
        "add" => {
            let (id, title) = split_word(rest);
            if id.is_empty() || title.is_empty() {
                return Err(CommandError::Usage("add <id> <title>"));
            }
            let id = id
                .parse::<i64>()
                .map_err(|_| CommandError::InvalidId(id.to_string()))?;
            Command::Add { id, title: title.to_string() }
        }
        "update" => {
            let (remote_key, title) = split_word(rest);
            if remote_key.is_empty() || title.is_empty() {
                return Err(CommandError::Usage("update <key> <title>"));
            }
            Command::Update {
                remote_key: remote_key.to_string(),
                title: title.to_string(),
            }
        }
        "delete" | "rm" => {
            let (remote_key, extra) = split_word(rest);
            if remote_key.is_empty() || !extra.is_empty() {
                return Err(CommandError::Usage("delete <key>"));
            }
            Command::Delete { remote_key: remote_key.to_string() }
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

/// Whether a confirmation answer means yes
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}
