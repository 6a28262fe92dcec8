use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod cat;
mod cd;
mod console;
mod create;
mod dispatcher;
mod env;
mod exit;
mod export;
mod help;
mod ls;
pub mod registry;
mod rm;
mod transfer;

pub use dispatcher::Dispatcher;
pub use registry::{CommandSpec, Handler, Registry};

use super::env::{EnvError, EnvStore};
use super::fs::FileSystem;
use crate::highlight::SyntaxHighlighter;
use crate::input::Prompter;
use crate::path::PathExpander;

#[derive(Debug)]
pub enum CommandError {
    UnknownCommand(String),
    UnknownVariable(String),
    MissingArgument(&'static str),
    NotADirectory(PathBuf),
    NotAFile(PathBuf),
    SameFile(PathBuf, PathBuf),
    Filesystem {
        context: Option<String>,
        source: io::Error,
    },
    MalformedArgument(String),
}

impl CommandError {
    pub fn at(path: &Path) -> impl FnOnce(io::Error) -> CommandError + '_ {
        move |source| CommandError::Filesystem {
            context: Some(path.display().to_string()),
            source,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand(cmd) => write!(
                f,
                "unknown command: {} (type 'help' for a list of commands)",
                cmd
            ),
            CommandError::UnknownVariable(var) => write!(f, "unknown variable: {}", var),
            CommandError::MissingArgument(what) => write!(f, "missing argument <{}>", what),
            CommandError::NotADirectory(path) => write!(f, "{}: not a directory", path.display()),
            CommandError::NotAFile(path) => write!(f, "{}: not a file", path.display()),
            CommandError::SameFile(a, b) => write!(
                f,
                "'{}' and '{}' are the same file",
                a.display(),
                b.display()
            ),
            CommandError::Filesystem {
                context: Some(context),
                source,
            } => write!(f, "{}: {}", context, source),
            CommandError::Filesystem {
                context: None,
                source,
            } => write!(f, "{}", source),
            CommandError::MalformedArgument(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Filesystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for CommandError {
    fn from(source: io::Error) -> Self {
        CommandError::Filesystem {
            context: None,
            source,
        }
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        match err {
            EnvError::UnknownVariable(var) | EnvError::VarNotFound(var) => {
                CommandError::UnknownVariable(var)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Context<'a> {
    pub env: &'a mut EnvStore,
    pub fs: &'a dyn FileSystem,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    pub prompter: &'a mut dyn Prompter,
    pub highlighter: &'a SyntaxHighlighter,
    pub paths: &'a PathExpander,
}

impl Context<'_> {
    pub fn resolve(&self, raw: &str) -> Result<PathBuf, CommandError> {
        Ok(self.paths.expand(raw)?)
    }
}

pub trait NullaryCommand: Sync {
    fn execute(&self, ctx: &mut Context<'_>) -> Result<Flow, CommandError>;
}

pub trait UnaryCommand: Sync {
    fn execute(&self, ctx: &mut Context<'_>, arg: Option<&str>) -> Result<Flow, CommandError>;
}

// blank counts as missing
fn operand<'a>(arg: Option<&'a str>, what: &'static str) -> Result<&'a str, CommandError> {
    arg.map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(CommandError::MissingArgument(what))
}
