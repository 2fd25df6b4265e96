use std::str::FromStr;

use thiserror::Error;

use crate::error::ListError;
use crate::linked_list::LinkedList;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown operation `{0}`")]
    UnknownOperation(String),
    #[error("operation `{op}` expects {expected} argument(s), got {found}")]
    WrongArity {
        op: String,
        expected: usize,
        found: usize,
    },
    #[error("`{0}` is not a valid integer")]
    InvalidNumber(String),
}

/// A single list operation, as typed on the command line, e.g. `insert-after=2,3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Append(i64),
    Prepend(i64),
    PopFront,
    Find(i64),
    FindPrev(i64),
    InsertAfter(i64, i64),
    InsertBefore(i64, i64),
    Delete(i64),
    Clear,
}

fn parse_number(text: &str) -> Result<i64, CommandError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidNumber(text.to_string()))
}

/// Parses a comma separated list of integers. An empty (or all-whitespace) string is an empty
/// list.
pub fn parse_values(text: &str) -> Result<Vec<i64>, CommandError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',').map(parse_number).collect()
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(text: &str) -> Result<Command, CommandError> {
        let (op, args) = match text.find('=') {
            Some(idx) => (&text[..idx], parse_values(&text[idx + 1..])?),
            None => (text, Vec::new()),
        };
        let arity = |expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(CommandError::WrongArity {
                    op: op.to_string(),
                    expected,
                    found: args.len(),
                })
            }
        };
        let command = match op {
            "append" => arity(1).map(|_| Command::Append(args[0])),
            "prepend" | "unshift" => arity(1).map(|_| Command::Prepend(args[0])),
            "pop-front" => arity(0).map(|_| Command::PopFront),
            "find" => arity(1).map(|_| Command::Find(args[0])),
            "find-prev" => arity(1).map(|_| Command::FindPrev(args[0])),
            "insert-after" => arity(2).map(|_| Command::InsertAfter(args[0], args[1])),
            "insert-before" => arity(2).map(|_| Command::InsertBefore(args[0], args[1])),
            "delete" => arity(1).map(|_| Command::Delete(args[0])),
            "clear" => arity(0).map(|_| Command::Clear),
            _ => Err(CommandError::UnknownOperation(op.to_string())),
        }?;
        Ok(command)
    }
}

impl Command {
    /// Runs this operation against `list`, returning a short description of what happened.
    pub fn apply(&self, list: &mut LinkedList<i64>) -> Result<String, ListError> {
        match *self {
            Command::Append(value) => {
                list.append(value);
                Ok(format!("appended {}", value))
            }
            Command::Prepend(value) => {
                list.prepend(value);
                Ok(format!("prepended {}", value))
            }
            Command::PopFront => Ok(match list.pop_front() {
                Some(value) => format!("popped {}", value),
                None => "list already empty".to_string(),
            }),
            Command::Find(value) => {
                let node = list.find(&value)?;
                Ok(match node.next() {
                    Some(next) => format!("found {}, followed by {}", value, next.value()),
                    None => format!("found {} at the tail", value),
                })
            }
            Command::FindPrev(value) => Ok(match list.find_prev(&value)? {
                Some(prev) => format!("{} is preceded by {}", value, prev.value()),
                None => format!("{} is the head, no predecessor", value),
            }),
            Command::InsertAfter(anchor, value) => {
                list.insert_after(&anchor, value)?;
                Ok(format!("inserted {} after {}", value, anchor))
            }
            Command::InsertBefore(anchor, value) => {
                list.insert_before(&anchor, value)?;
                Ok(format!("inserted {} before {}", value, anchor))
            }
            Command::Delete(value) => {
                list.delete(&value)?;
                Ok(format!("deleted {}", value))
            }
            Command::Clear => {
                list.clear();
                Ok("cleared".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_operation() {
        assert_eq!("append=1".parse::<Command>(), Ok(Command::Append(1)));
        assert_eq!("unshift=2".parse::<Command>(), Ok(Command::Prepend(2)));
        assert_eq!("prepend=-2".parse::<Command>(), Ok(Command::Prepend(-2)));
        assert_eq!("pop-front".parse::<Command>(), Ok(Command::PopFront));
        assert_eq!("find=7".parse::<Command>(), Ok(Command::Find(7)));
        assert_eq!("find-prev=7".parse::<Command>(), Ok(Command::FindPrev(7)));
        assert_eq!("insert-after=2,3".parse::<Command>(), Ok(Command::InsertAfter(2, 3)));
        assert_eq!("insert-before=1, 4".parse::<Command>(), Ok(Command::InsertBefore(1, 4)));
        assert_eq!("delete=1".parse::<Command>(), Ok(Command::Delete(1)));
        assert_eq!("clear".parse::<Command>(), Ok(Command::Clear));
    }

    #[test]
    fn rejects_malformed_operations() {
        assert_eq!(
            "shuffle".parse::<Command>(),
            Err(CommandError::UnknownOperation("shuffle".to_string()))
        );
        assert_eq!(
            "insert-after=2".parse::<Command>(),
            Err(CommandError::WrongArity {
                op: "insert-after".to_string(),
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            "append=x".parse::<Command>(),
            Err(CommandError::InvalidNumber("x".to_string()))
        );
        assert!("append".parse::<Command>().is_err());
    }

    #[test]
    fn parse_values_handles_empty_input() {
        assert_eq!(parse_values(""), Ok(vec![]));
        assert_eq!(parse_values("1,5,7,3,6"), Ok(vec![1, 5, 7, 3, 6]));
        assert!(parse_values("1,,2").is_err());
    }

    #[test]
    fn apply_reports_list_failures() {
        let mut list: LinkedList<i64> = vec![1, 5].into();
        assert_eq!(Command::Delete(9).apply(&mut list), Err(ListError::ValueAbsent));
        assert_eq!(
            Command::InsertBefore(9, 0).apply(&mut list),
            Err(ListError::OperationFailed)
        );
        assert_eq!(Command::Find(9).apply(&mut list), Err(ListError::NotFound));
        assert_eq!(
            Command::FindPrev(1).apply(&mut list),
            Ok("1 is the head, no predecessor".to_string())
        );
        assert_eq!(list.to_vec(), vec![1, 5]);
    }
}
