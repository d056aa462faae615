//! Terminal command parsing

use thiserror::Error;

/// Help text listing every session command
pub const HELP_TEXT: &str = "\
commands:
  add                    append an empty clause
  column <i> [<id>]      set the column of clause i (no id unsets it)
  op <i> <name>          set the operator of clause i
  value <i> [<text>]     set the value of clause i
  remove <i>             remove clause i
  clear                  remove every clause
  show                   print the current clauses
  columns                list selectable columns
  operators              list operators
  close                  close the filter panel and exit
  help                   show this help
  quit                   exit";

/// One parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Add,
    Column { index: usize, column_id: String },
    Operation { index: usize, name: String },
    Value { index: usize, value: String },
    Remove { index: usize },
    Clear,
    Show,
    Columns,
    Operators,
    Close,
    Help,
    Quit,
}

/// Input that does not form a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("Missing {argument} for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid clause index '{0}'")]
    InvalidIndex(String),
}

impl SessionCommand {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = split_word(line);
        let command = match word {
            "add" => Self::Add,
            "column" => {
                let (index, rest) = parse_index("column", rest)?;
                Self::Column {
                    index,
                    column_id: rest.to_string(),
                }
            }
            "op" => {
                let (index, rest) = parse_index("op", rest)?;
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "op",
                        argument: "operator",
                    });
                }
                Self::Operation {
                    index,
                    name: rest.to_string(),
                }
            }
            "value" => {
                let (index, rest) = parse_index("value", rest)?;
                Self::Value {
                    index,
                    value: rest.to_string(),
                }
            }
            "remove" => {
                let (index, _) = parse_index("remove", rest)?;
                Self::Remove { index }
            }
            "clear" => Self::Clear,
            "show" => Self::Show,
            "columns" => Self::Columns,
            "operators" => Self::Operators,
            "close" => Self::Close,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn parse_index<'a>(command: &'static str, rest: &'a str) -> Result<(usize, &'a str), CommandError> {
    let (index, rest) = split_word(rest);
    if index.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "index",
        });
    }
    let index = index
        .parse::<usize>()
        .map_err(|_| CommandError::InvalidIndex(index.to_string()))?;
    Ok((index, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> SessionCommand {
        SessionCommand::parse(line).unwrap().unwrap()
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(SessionCommand::parse(""), Ok(None));
        assert_eq!(SessionCommand::parse("   \t"), Ok(None));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse("add"), SessionCommand::Add);
        assert_eq!(parse("  clear  "), SessionCommand::Clear);
        assert_eq!(parse("show"), SessionCommand::Show);
        assert_eq!(parse("columns"), SessionCommand::Columns);
        assert_eq!(parse("operators"), SessionCommand::Operators);
        assert_eq!(parse("close"), SessionCommand::Close);
        assert_eq!(parse("?"), SessionCommand::Help);
        assert_eq!(parse("exit"), SessionCommand::Quit);
    }

    #[test]
    fn column_with_and_without_id() {
        assert_eq!(
            parse("column 0 age"),
            SessionCommand::Column {
                index: 0,
                column_id: "age".to_string()
            }
        );
        assert_eq!(
            parse("column 2"),
            SessionCommand::Column {
                index: 2,
                column_id: String::new()
            }
        );
    }

    #[test]
    fn value_keeps_inner_spaces() {
        assert_eq!(
            parse("value 1 new   york"),
            SessionCommand::Value {
                index: 1,
                value: "new   york".to_string()
            }
        );
        assert_eq!(
            parse("value 1"),
            SessionCommand::Value {
                index: 1,
                value: String::new()
            }
        );
    }

    #[test]
    fn op_requires_name() {
        assert_eq!(
            parse("op 0 isEmpty"),
            SessionCommand::Operation {
                index: 0,
                name: "isEmpty".to_string()
            }
        );
        assert_eq!(
            SessionCommand::parse("op 0"),
            Err(CommandError::MissingArgument {
                command: "op",
                argument: "operator"
            })
        );
    }

    #[test]
    fn index_errors() {
        assert_eq!(
            SessionCommand::parse("remove"),
            Err(CommandError::MissingArgument {
                command: "remove",
                argument: "index"
            })
        );
        assert_eq!(
            SessionCommand::parse("remove -1"),
            Err(CommandError::InvalidIndex("-1".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("column x age"),
            Err(CommandError::InvalidIndex("x".to_string()))
        );
    }

    #[test]
    fn unknown_command() {
        let err = SessionCommand::parse("sort age").unwrap_err();
        assert_eq!(err, CommandError::Unknown("sort".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown command 'sort' (type 'help' for a list)"
        );
    }
}
