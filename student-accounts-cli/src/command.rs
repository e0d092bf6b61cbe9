//! Console command parsing

use student_accounts_core::form::FormField;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-fetch and print the table
    List,
    /// Open the add modal and submit the given values
    Add {
        student_id: String,
        password: String,
        name: String,
    },
    /// Open the edit modal for `id`, apply the field overrides and submit
    Edit {
        id: String,
        changes: Vec<(FormField, String)>,
    },
    Delete {
        id: String,
    },
    /// Reveal or hide one password
    Toggle {
        id: String,
    },
    Help,
    Quit,
}

/// Usage text
pub const HELP: &str = "\
Commands:
  list                                     show accounts
  add <student_id> <password> <name...>    create an account
  edit <id> [name=..] [sid=..] [password=..]
                                           edit an account
  delete <id>                              delete an account
  toggle <id>                              show/hide a password
  help                                     this text
  quit                                     exit";

/// Parse a command line. Blank input yields `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };

    let command = match verb {
        "list" | "ls" => Command::List,
        "add" => {
            let student_id = parts.next().ok_or("add: missing student_id")?;
            let password = parts.next().ok_or("add: missing password")?;
            let name = parts.collect::<Vec<_>>().join(" ");
            Command::Add {
                student_id: student_id.to_string(),
                password: password.to_string(),
                name,
            }
        }
        "edit" => {
            let id = parts.next().ok_or("edit: missing id")?.to_string();
            let changes = parts.map(parse_change).collect::<Result<Vec<_>, _>>()?;
            Command::Edit { id, changes }
        }
        "delete" | "rm" => Command::Delete {
            id: parts.next().ok_or("delete: missing id")?.to_string(),
        },
        "toggle" => Command::Toggle {
            id: parts.next().ok_or("toggle: missing id")?.to_string(),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(Some(command))
}

fn parse_change(token: &str) -> Result<(FormField, String), String> {
    let (key, value) = token
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {token}"))?;
    let field = match key {
        "name" => FormField::Name,
        "sid" | "student_id" => FormField::StudentId,
        "password" | "pw" => FormField::Password,
        other => return Err(format!("unknown field: {other}")),
    };
    Ok((field, value.to_string()))
}
