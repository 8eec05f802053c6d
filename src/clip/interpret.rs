//! # Command Interpreter
//!
//! Turns what the user typed (flags, positionals and possibly piped stdin) into
//! exactly one [`Operation`].
//!
//! Flags are checked in a fixed order and the first one present wins:
//!
//! ```text
//! version > delete-all > delete > list > paste > positional text > piped text > paste newest
//! ```
//!
//! The order lives in [`select`], a plain match over [`Selected`], so it can be
//! read and tested without any argument parser involved.
//!
//! ## Piped input
//!
//! Stdin is only read when the selected branch can use it (paste, or the
//! fallback when there is no flag and no text), through the [`PipeInput`] seam.
//! With `--paste`, piped text is not content to store but a *lookup key*: it
//! makes `clip -l | fzf | clip -p` paste whatever line was picked. A key that
//! matches nothing resolves to [`Operation::Help`] without an error, so a
//! pipeline that found nothing does not fail.

use crate::commands::Operation;
use crate::error::{ClipError, Result};
use crate::history::History;
use crate::index::to_relative;
use crate::model::{is_blank, unescape_newlines};
use std::io::{IsTerminal, Read};
use tracing::debug;

/// Flag-level view of one command line, independent of the argument parser.
///
/// `None` means the flag was absent; an empty `Vec` means it was given without
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub version: bool,
    pub delete_all: bool,
    pub delete: Option<Vec<i64>>,
    pub list: Option<Vec<i64>>,
    pub paste: Option<i64>,
    pub silent: bool,
    pub positionals: Vec<String>,
}

/// Source of piped stdin content.
pub trait PipeInput {
    /// Returns the piped text, or `None` when nothing non-blank was piped in.
    fn read_piped(&mut self) -> Result<Option<String>>;
}

/// Reads the process stdin when it is not attached to a terminal.
#[derive(Debug, Default)]
pub struct StdinPipe;

impl PipeInput for StdinPipe {
    fn read_piped(&mut self) -> Result<Option<String>> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Ok(None);
        }
        let mut bytes = Vec::new();
        stdin.lock().read_to_end(&mut bytes)?;
        Ok(non_blank(decode_lossy(bytes)))
    }
}

/// Fixed content, for tests and for callers that already hold the input.
impl PipeInput for Option<String> {
    fn read_piped(&mut self) -> Result<Option<String>> {
        Ok(self.take().and_then(non_blank))
    }
}

/// Invalid UTF-8 sequences become U+FFFD instead of failing the read.
fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

fn non_blank(text: String) -> Option<String> {
    if is_blank(&text) {
        None
    } else {
        Some(text)
    }
}

/// Which branch of the decision table an invocation falls into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selected {
    Version,
    DeleteAll,
    Delete(Vec<i64>),
    List(Vec<i64>),
    Paste(i64),
    Text(String),
    TooManyPositionals(usize),
    Fallback,
}

/// Picks the winning branch. First match wins.
pub fn select(invocation: &Invocation) -> Selected {
    let single_text = match invocation.positionals.as_slice() {
        [text] if !is_blank(text) => Some(text.clone()),
        _ => None,
    };

    match invocation {
        Invocation { version: true, .. } => Selected::Version,
        Invocation {
            delete_all: true, ..
        } => Selected::DeleteAll,
        Invocation {
            delete: Some(indices),
            ..
        } => Selected::Delete(indices.clone()),
        Invocation {
            list: Some(args), ..
        } => Selected::List(args.clone()),
        Invocation {
            paste: Some(index), ..
        } => Selected::Paste(*index),
        _ => match (single_text, invocation.positionals.len()) {
            (Some(text), _) => Selected::Text(text),
            (None, count) if count > 1 => Selected::TooManyPositionals(count),
            _ => Selected::Fallback,
        },
    }
}

/// Resolves an invocation into the operation to run.
pub fn interpret(
    invocation: &Invocation,
    history: &History,
    pipe: &mut dyn PipeInput,
) -> Result<Operation> {
    let selected = select(invocation);
    debug!(?selected, "selected command");

    match selected {
        Selected::Version => Ok(Operation::Version),
        Selected::DeleteAll => Ok(Operation::DeleteAll),
        Selected::Delete(indices) => Ok(Operation::Delete {
            indices: if indices.is_empty() { vec![0] } else { indices },
        }),
        Selected::List(args) => {
            list_bounds(&args).map(|(start, end)| Operation::List { start, end })
        }
        Selected::Paste(index) => paste_with_lookup(index, history, pipe),
        Selected::Text(text) => Ok(Operation::Add {
            text,
            silent: invocation.silent,
        }),
        Selected::TooManyPositionals(count) => {
            let message = format!("expected at most one text argument, got {count}");
            Err(ClipError::MalformedArguments(message))
        }
        Selected::Fallback => match pipe.read_piped()? {
            Some(text) => Ok(Operation::Add {
                text,
                silent: invocation.silent,
            }),
            None => Ok(Operation::Paste { index: 0 }),
        },
    }
}

fn list_bounds(args: &[i64]) -> Result<(i64, i64)> {
    match *args {
        [] => Ok((0, 0)),
        [limit] => Ok((limit, 0)),
        [start, end] => Ok((start, end)),
        _ => Err(ClipError::MalformedArguments(format!(
            "list takes a limit or a start,end pair, got {} values",
            args.len()
        ))),
    }
}

fn paste_with_lookup(index: i64, history: &History, pipe: &mut dyn PipeInput) -> Result<Operation> {
    let Some(piped) = pipe.read_piped()? else {
        return Ok(Operation::Paste { index });
    };

    let unescaped = unescape_newlines(&piped);
    let found = history.find(&unescaped).or_else(|| {
        if unescaped != piped {
            history.find(&piped)
        } else {
            None
        }
    });

    let Some(position) = found else {
        debug!("piped text matches no entry, nothing to paste");
        return Ok(Operation::Help);
    };

    if index != 0 {
        return Err(ClipError::ConflictingArguments(
            "piped input cannot be used when pasting an item by index".into(),
        ));
    }

    Ok(Operation::Paste {
        index: to_relative(position, history.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(items: &[&str]) -> History {
        let mut history = History::new();
        for item in items {
            history.add(item);
        }
        history
    }

    fn run(invocation: Invocation, history: &History, piped: Option<&str>) -> Result<Operation> {
        let mut pipe = piped.map(str::to_string);
        interpret(&invocation, history, &mut pipe)
    }

    fn text(args: &[&str]) -> Invocation {
        Invocation {
            positionals: args.iter().map(|s| s.to_string()).collect(),
            ..Invocation::default()
        }
    }

    /// A pipe that must not be read.
    struct Untouched;

    impl PipeInput for Untouched {
        fn read_piped(&mut self) -> Result<Option<String>> {
            panic!("stdin read when the operation did not need it");
        }
    }

    #[test]
    fn precedence_follows_the_decision_table() {
        let everything = Invocation {
            version: true,
            delete_all: true,
            delete: Some(vec![1]),
            list: Some(vec![]),
            paste: Some(2),
            silent: false,
            positionals: vec!["text".into()],
        };
        assert_eq!(select(&everything), Selected::Version);

        let no_version = Invocation {
            version: false,
            ..everything.clone()
        };
        assert_eq!(select(&no_version), Selected::DeleteAll);

        let no_delete_all = Invocation {
            delete_all: false,
            ..no_version
        };
        assert_eq!(select(&no_delete_all), Selected::Delete(vec![1]));

        let no_delete = Invocation {
            delete: None,
            ..no_delete_all
        };
        assert_eq!(select(&no_delete), Selected::List(vec![]));

        let no_list = Invocation {
            list: None,
            ..no_delete
        };
        assert_eq!(select(&no_list), Selected::Paste(2));

        let no_paste = Invocation {
            paste: None,
            ..no_list
        };
        assert_eq!(select(&no_paste), Selected::Text("text".into()));
    }

    #[test]
    fn flags_do_not_read_stdin() {
        let history = history_of(&["a"]);
        let cases = [
            (
                Invocation {
                    version: true,
                    ..Invocation::default()
                },
                Operation::Version,
            ),
            (
                Invocation {
                    delete_all: true,
                    ..Invocation::default()
                },
                Operation::DeleteAll,
            ),
            (
                Invocation {
                    delete: Some(vec![]),
                    ..Invocation::default()
                },
                Operation::Delete { indices: vec![0] },
            ),
            (
                Invocation {
                    list: Some(vec![]),
                    ..Invocation::default()
                },
                Operation::List { start: 0, end: 0 },
            ),
            (
                text(&["hi"]),
                Operation::Add {
                    text: "hi".into(),
                    silent: false,
                },
            ),
        ];
        for (invocation, expected) in cases {
            assert_eq!(
                interpret(&invocation, &history, &mut Untouched).unwrap(),
                expected
            );
        }
    }

    #[test]
    fn delete_keeps_explicit_indices() {
        let invocation = Invocation {
            delete: Some(vec![2, 0, -1]),
            ..Invocation::default()
        };
        assert_eq!(
            run(invocation, &History::new(), None).unwrap(),
            Operation::Delete {
                indices: vec![2, 0, -1],
            }
        );
    }

    #[test]
    fn list_arity() {
        let list = |args: Vec<i64>| Invocation {
            list: Some(args),
            ..Invocation::default()
        };
        let history = History::new();
        assert_eq!(
            run(list(vec![5]), &history, None).unwrap(),
            Operation::List { start: 5, end: 0 }
        );
        assert_eq!(
            run(list(vec![5, 10]), &history, None).unwrap(),
            Operation::List { start: 5, end: 10 }
        );
        assert!(matches!(
            run(list(vec![1, 2, 3]), &history, None),
            Err(ClipError::MalformedArguments(_))
        ));
    }

    #[test]
    fn single_positional_adds_with_silence() {
        let invocation = Invocation {
            silent: true,
            ..text(&["copy me"])
        };
        assert_eq!(
            run(invocation, &History::new(), None).unwrap(),
            Operation::Add {
                text: "copy me".into(),
                silent: true,
            }
        );
    }

    #[test]
    fn too_many_positionals_is_malformed() {
        assert!(matches!(
            run(text(&["a", "b"]), &History::new(), None),
            Err(ClipError::MalformedArguments(_))
        ));
    }

    #[test]
    fn blank_positional_falls_through() {
        let history = history_of(&["a"]);
        assert_eq!(
            run(text(&["   "]), &history, None).unwrap(),
            Operation::Paste { index: 0 }
        );
        assert_eq!(
            run(text(&["\\n"]), &history, Some("piped")).unwrap(),
            Operation::Add {
                text: "piped".into(),
                silent: false,
            }
        );
    }

    #[test]
    fn no_input_pastes_newest() {
        assert_eq!(
            run(Invocation::default(), &History::new(), None).unwrap(),
            Operation::Paste { index: 0 }
        );
    }

    #[test]
    fn piped_text_is_added() {
        assert_eq!(
            run(Invocation::default(), &History::new(), Some("from pipe\n")).unwrap(),
            Operation::Add {
                text: "from pipe\n".into(),
                silent: false,
            }
        );
    }

    #[test]
    fn blank_pipe_counts_as_no_pipe() {
        assert_eq!(
            run(Invocation::default(), &History::new(), Some(" \\n \n")).unwrap(),
            Operation::Paste { index: 0 }
        );
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        assert_eq!(decode_lossy(b"caf\xe9".to_vec()), "caf\u{fffd}");
        assert_eq!(decode_lossy("café".as_bytes().to_vec()), "café");
    }

    #[test]
    fn paste_defaults_without_pipe() {
        let invocation = Invocation {
            paste: Some(-1),
            ..Invocation::default()
        };
        assert_eq!(
            run(invocation, &History::new(), None).unwrap(),
            Operation::Paste { index: -1 }
        );
    }

    #[test]
    fn piped_paste_looks_up_content() {
        let history = history_of(&["a", "b", "c"]);
        let invocation = Invocation {
            paste: Some(0),
            ..Invocation::default()
        };
        assert_eq!(
            run(invocation, &history, Some("a\n")).unwrap(),
            Operation::Paste { index: 2 }
        );
    }

    #[test]
    fn piped_paste_unescapes_list_output() {
        let history = history_of(&["two\nlines", "other"]);
        let invocation = Invocation {
            paste: Some(0),
            ..Invocation::default()
        };
        assert_eq!(
            run(invocation, &history, Some("two\\nlines\n")).unwrap(),
            Operation::Paste { index: 1 }
        );
    }

    #[test]
    fn piped_paste_falls_back_to_raw_text() {
        let history = history_of(&["literal \\n kept", "other"]);
        let invocation = Invocation {
            paste: Some(0),
            ..Invocation::default()
        };
        assert_eq!(
            run(invocation, &history, Some("literal \\n kept")).unwrap(),
            Operation::Paste { index: 1 }
        );
    }

    #[test]
    fn unmatched_piped_paste_is_a_silent_noop() {
        let history = history_of(&["a"]);
        let invocation = Invocation {
            paste: Some(3),
            ..Invocation::default()
        };
        assert_eq!(
            run(invocation, &history, Some("zzz")).unwrap(),
            Operation::Help
        );
    }

    #[test]
    fn piped_paste_with_explicit_index_conflicts() {
        let history = history_of(&["a", "b"]);
        let invocation = Invocation {
            paste: Some(1),
            ..Invocation::default()
        };
        assert!(matches!(
            run(invocation, &history, Some("a")),
            Err(ClipError::ConflictingArguments(_))
        ));
    }
}
