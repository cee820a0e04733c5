//! Parsing of REPL input lines into review commands.
//!
//! Photo numbers typed by the reviewer are 1-based; parsed commands carry
//! 0-based indexes. An omitted number means "the current photo".

use curator_core::config::LayoutPreference;
use curator_core::decision::Visibility;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewCommand {
    Approve(Option<usize>),
    Reject(Option<usize>),
    Visibility {
        index: Option<usize>,
        visibility: Visibility,
    },
    /// Empty text clears the context.
    Context {
        index: Option<usize>,
        text: String,
    },
    Next,
    Prev,
    Goto(usize),
    Open(Option<usize>),
    List,
    Layout(LayoutPreference),
    Submit,
    Refresh,
    WhoAmI,
    Logout,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    Unknown(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Photo numbers start at 1")]
    ZeroIndex,
    #[error("Unknown visibility '{0}' (expected public, sanctum or private)")]
    Visibility(String),
    #[error("Unknown layout '{0}' (expected grid, pager or auto)")]
    Layout(String),
}

/// Command names offered by completion.
pub const COMMAND_NAMES: &[&str] = &[
    "approve", "reject", "visibility", "context", "next", "prev", "goto", "open", "list",
    "layout", "submit", "refresh", "whoami", "logout", "help", "quit", "exit",
];

pub const HELP_TEXT: &str = "\
Commands (photo numbers are 1-based; omit them to act on the current photo):
  approve|a [n]                          toggle approve
  reject|r [n]                           toggle reject
  visibility|v [n] <public|sanctum|private>
  context|c [n] <text>                   set context (no text clears it)
  next|n, prev|p, goto|g <n>             move between photos
  open|o [n]                             show the full-size image URL
  list|ls                                show every photo
  layout <grid|pager|auto>               switch presentation
  submit                                 send all decisions as one batch
  refresh                                reload the staging queue
  whoami, logout, help, quit|exit";

/// Parses a 1-based photo number.
fn parse_number(token: &str) -> Option<Result<usize, CommandError>> {
    let n = token.parse::<usize>().ok()?;
    Some(if n == 0 {
        Err(CommandError::ZeroIndex)
    } else {
        Ok(n - 1)
    })
}

fn optional_index(
    args: &[&str],
    usage: &'static str,
) -> Result<Option<usize>, CommandError> {
    match args {
        [] => Ok(None),
        [token] => parse_number(token)
            .ok_or(CommandError::Usage(usage))?
            .map(Some),
        _ => Err(CommandError::Usage(usage)),
    }
}

impl FromStr for ReviewCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        match name.to_ascii_lowercase().as_str() {
            "approve" | "a" => Ok(Self::Approve(optional_index(&args, "approve [n]")?)),
            "reject" | "r" => Ok(Self::Reject(optional_index(&args, "reject [n]")?)),
            "visibility" | "v" => {
                const USAGE: &str = "visibility [n] <public|sanctum|private>";
                let (index, value) = match args.as_slice() {
                    [value] => (None, *value),
                    [number, value] => (
                        Some(parse_number(number).ok_or(CommandError::Usage(USAGE))??),
                        *value,
                    ),
                    _ => return Err(CommandError::Usage(USAGE)),
                };
                let visibility = Visibility::from_str(value)
                    .map_err(|_| CommandError::Visibility(value.to_string()))?;
                Ok(Self::Visibility { index, visibility })
            }
            "context" | "c" => {
                // A leading number selects the photo; the rest is the text.
                let (index, text) = match rest.split_once(char::is_whitespace) {
                    Some((first, tail)) => match parse_number(first) {
                        Some(index) => (Some(index?), tail.trim()),
                        None => (None, rest),
                    },
                    None => match parse_number(rest) {
                        Some(index) => (Some(index?), ""),
                        None => (None, rest),
                    },
                };
                Ok(Self::Context {
                    index,
                    text: text.to_string(),
                })
            }
            "next" | "n" => Ok(Self::Next),
            "prev" | "p" => Ok(Self::Prev),
            "goto" | "g" => match optional_index(&args, "goto <n>")? {
                Some(index) => Ok(Self::Goto(index)),
                None => Err(CommandError::Usage("goto <n>")),
            },
            "open" | "o" => Ok(Self::Open(optional_index(&args, "open [n]")?)),
            "list" | "ls" => Ok(Self::List),
            "layout" => match args.as_slice() {
                [value] => LayoutPreference::from_str(value)
                    .map(Self::Layout)
                    .map_err(|_| CommandError::Layout(value.to_string())),
                _ => Err(CommandError::Usage("layout <grid|pager|auto>")),
            },
            "submit" => Ok(Self::Submit),
            "refresh" => Ok(Self::Refresh),
            "whoami" => Ok(Self::WhoAmI),
            "logout" => Ok(Self::Logout),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<ReviewCommand, CommandError> {
        line.parse()
    }

    #[test]
    fn test_actions_with_and_without_index() {
        assert_eq!(parse("a"), Ok(ReviewCommand::Approve(None)));
        assert_eq!(parse("approve 3"), Ok(ReviewCommand::Approve(Some(2))));
        assert_eq!(parse("R 1"), Ok(ReviewCommand::Reject(Some(0))));
        assert_eq!(parse("approve 0"), Err(CommandError::ZeroIndex));
        assert_eq!(parse("approve x"), Err(CommandError::Usage("approve [n]")));
    }

    #[test]
    fn test_visibility() {
        assert_eq!(
            parse("v sanctum"),
            Ok(ReviewCommand::Visibility {
                index: None,
                visibility: Visibility::Sanctum
            })
        );
        assert_eq!(
            parse("visibility 2 Private"),
            Ok(ReviewCommand::Visibility {
                index: Some(1),
                visibility: Visibility::Private
            })
        );
        assert_eq!(
            parse("v members"),
            Ok(ReviewCommand::Visibility {
                index: None,
                visibility: Visibility::Sanctum
            })
        );
        assert_eq!(parse("v secret"), Err(CommandError::Visibility("secret".into())));
        assert!(matches!(parse("v"), Err(CommandError::Usage(_))));
    }

    #[test]
    fn test_context_text_and_index() {
        assert_eq!(
            parse("c 2 Taken at   dusk"),
            Ok(ReviewCommand::Context {
                index: Some(1),
                text: "Taken at   dusk".into()
            })
        );
        assert_eq!(
            parse("context Cover candidate"),
            Ok(ReviewCommand::Context {
                index: None,
                text: "Cover candidate".into()
            })
        );
        assert_eq!(
            parse("c 4"),
            Ok(ReviewCommand::Context {
                index: Some(3),
                text: String::new()
            })
        );
        assert_eq!(
            parse("c"),
            Ok(ReviewCommand::Context {
                index: None,
                text: String::new()
            })
        );
    }

    #[test]
    fn test_navigation() {
        assert_eq!(parse("n"), Ok(ReviewCommand::Next));
        assert_eq!(parse("prev"), Ok(ReviewCommand::Prev));
        assert_eq!(parse("g 5"), Ok(ReviewCommand::Goto(4)));
        assert_eq!(parse("goto"), Err(CommandError::Usage("goto <n>")));
        assert_eq!(parse("o"), Ok(ReviewCommand::Open(None)));
        assert_eq!(parse("ls"), Ok(ReviewCommand::List));
    }

    #[test]
    fn test_layout_and_misc() {
        assert_eq!(parse("layout pager"), Ok(ReviewCommand::Layout(LayoutPreference::Pager)));
        assert_eq!(parse("layout tiles"), Err(CommandError::Layout("tiles".into())));
        assert_eq!(parse("  submit  "), Ok(ReviewCommand::Submit));
        assert_eq!(parse("exit"), Ok(ReviewCommand::Quit));
        assert_eq!(parse("frobnicate"), Err(CommandError::Unknown("frobnicate".into())));
    }
}
