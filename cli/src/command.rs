//! Typed commands read from the prompt.

use animales_core::Field;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Go to the list (or leave the detail screen).
    List,
    New,
    /// `None` means "the record on screen".
    Show(Option<String>),
    Edit(Option<String>),
    Delete(Option<String>),
    Set(Field, String),
    Submit,
    Cancel,
    Go(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("type a command, or 'help'")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown field '{0}' (nombre, especie, habitat, dieta)")]
    UnknownField(String),
}

pub const HELP: &str = "\
commands:
  list | back            go to the animal list
  new                    open the create form
  show [n|id]            open a record (number from the list, or id)
  edit [n|id]            edit a record
  delete [n|id]          delete a record (asks first)
  set <field> <value>    fill a form field: nombre, especie, habitat, dieta
  submit                 save the form
  cancel                 leave the form (asks first)
  go <path>              open a path, e.g. /animales/crear
  help                   this text
  quit                   exit";

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = (!rest.is_empty()).then(|| rest.to_string());

    match word.to_ascii_lowercase().as_str() {
        "" => Err(ParseError::Empty),
        "list" | "ls" | "back" => Ok(Command::List),
        "new" | "create" => Ok(Command::New),
        "show" | "view" => Ok(Command::Show(arg)),
        "edit" => Ok(Command::Edit(arg)),
        "delete" | "rm" => Ok(Command::Delete(arg)),
        "set" => {
            let (name, value) = rest
                .split_once(char::is_whitespace)
                .map(|(n, v)| (n, v.trim()))
                .unwrap_or((rest, ""));
            if name.is_empty() {
                return Err(ParseError::Usage("set <field> <value>"));
            }
            let field = Field::parse(name).ok_or_else(|| ParseError::UnknownField(name.to_string()))?;
            Ok(Command::Set(field, value.to_string()))
        }
        "submit" | "save" => Ok(Command::Submit),
        "cancel" => Ok(Command::Cancel),
        "go" => arg.map(Command::Go).ok_or(ParseError::Usage("go <path>")),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(ParseError::Unknown(word.to_string())),
    }
}

/// Answer to a yes/no prompt. Anything but an explicit yes declines.
pub fn parse_answer(line: &str) -> bool {
    matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}
