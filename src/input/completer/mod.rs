mod command;
mod path;

use std::borrow::Cow;

use command::CommandCompleter;
use path::PathCompleter;
use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

use crate::core::commands::Registry;
use crate::highlight::SyntaxHighlighter;
use crate::path::PathExpander;

#[derive(Clone)]
pub struct ShellHelper {
    registry: &'static Registry,
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellHelper {
    pub fn new(registry: &'static Registry, highlighter: SyntaxHighlighter, paths: PathExpander) -> Self {
        ShellHelper {
            registry,
            command_completer: CommandCompleter::new(registry),
            path_completer: PathCompleter::new(paths),
            highlighter,
        }
    }
}

fn word_start(before_cursor: &str) -> usize {
    before_cursor
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

impl Helper for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let known = line
            .split_whitespace()
            .next()
            .is_some_and(|name| self.registry.contains(name));
        Cow::Owned(self.highlighter.highlight_command(line, known))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        let spec = self.registry.lookup(line.trim_start())?;
        let operands = &spec.usage[spec.name.len()..];
        (!operands.is_empty()).then(|| operands.to_string())
    }
}

impl Validator for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before_cursor = &line[..pos];
        let start = word_start(before_cursor);
        let word = &before_cursor[start..];

        let matches = if before_cursor[..start].trim().is_empty() {
            self.command_completer.complete_command(word)
        } else {
            self.path_completer.complete_path(word)
        };

        Ok((start, matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_start() {
        assert_eq!(word_start(""), 0);
        assert_eq!(word_start("ls"), 0);
        assert_eq!(word_start("ls "), 3);
        assert_eq!(word_start("mv a.txt sub/b"), 9);
    }
}
