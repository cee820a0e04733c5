//! rustyline helper: command completion, hints and highlighting.
//!
//! With masking on, the typed line is drawn as asterisks (password prompt).

use crate::command::COMMAND_NAMES;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use std::borrow::Cow::{self, Borrowed, Owned};

#[derive(Clone, Default)]
pub struct ReviewHelper {
    masking: bool,
}

impl ReviewHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_masking(&mut self, masking: bool) {
        self.masking = masking;
    }

    /// Command names starting with `prefix`; empty while masking.
    fn matches<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        COMMAND_NAMES
            .iter()
            .copied()
            .filter(move |cmd| !self.masking && !prefix.is_empty() && cmd.starts_with(prefix))
    }
}

impl Helper for ReviewHelper {}

impl Completer for ReviewHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        // Only the command word completes.
        if line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .matches(line)
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ReviewHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.masking {
            return Owned("*".repeat(line.chars().count()));
        }

        match line.split_whitespace().next() {
            Some(word)
                if line.starts_with(word)
                    && COMMAND_NAMES.contains(&word.to_ascii_lowercase().as_str()) =>
            {
                let rest = &line[word.len()..];
                Owned(format!("{}{}", word.bright_cyan(), rest))
            }
            _ => Borrowed(line),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReviewHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.contains(' ') {
            return None;
        }

        self.matches(line)
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ReviewHelper {}
