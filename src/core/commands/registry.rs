use super::cat::CatCommand;
use super::cd::CdCommand;
use super::console::{ClearCommand, EchoCommand, PwdCommand};
use super::create::{MkdirCommand, TouchCommand};
use super::env::EnvCommand;
use super::exit::ExitCommand;
use super::export::ExportCommand;
use super::help::HelpCommand;
use super::ls::LsCommand;
use super::rm::RmCommand;
use super::transfer::{CpCommand, MvCommand};
use super::{NullaryCommand, UnaryCommand};

#[derive(Clone, Copy)]
pub enum Handler {
    Nullary(&'static dyn NullaryCommand),
    Unary(&'static dyn UnaryCommand),
}

pub struct CommandSpec {
    pub name: &'static str,
    pub summary: &'static str,
    pub usage: &'static str,
    pub handler: Handler,
}

// sorted by name for binary search
pub struct Registry {
    entries: &'static [CommandSpec],
}

impl Registry {
    pub fn builtin() -> &'static Registry {
        &BUILTINS
    }

    pub fn lookup(&self, name: &str) -> Option<&'static CommandSpec> {
        self.entries
            .binary_search_by(|spec| spec.name.cmp(name))
            .ok()
            .map(|index| &self.entries[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn entries(&self) -> &'static [CommandSpec] {
        self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|spec| spec.name)
    }
}

static BUILTINS: Registry = Registry {
    entries: &[
        CommandSpec {
            name: "cat",
            summary: "Print the contents of a file",
            usage: "cat <path>",
            handler: Handler::Unary(&CatCommand),
        },
        CommandSpec {
            name: "cd",
            summary: "Change the working directory",
            usage: "cd <path>",
            handler: Handler::Unary(&CdCommand),
        },
        CommandSpec {
            name: "clear",
            summary: "Clear the terminal",
            usage: "clear",
            handler: Handler::Nullary(&ClearCommand),
        },
        CommandSpec {
            name: "cp",
            summary: "Copy a file, keeping permissions and timestamps",
            usage: "cp <source> <destination>",
            handler: Handler::Unary(&CpCommand),
        },
        CommandSpec {
            name: "echo",
            summary: "Print the argument as typed",
            usage: "echo [text]",
            handler: Handler::Unary(&EchoCommand),
        },
        CommandSpec {
            name: "env",
            summary: "List shell variables",
            usage: "env",
            handler: Handler::Nullary(&EnvCommand),
        },
        CommandSpec {
            name: "exit",
            summary: "Leave the shell",
            usage: "exit",
            handler: Handler::Nullary(&ExitCommand),
        },
        CommandSpec {
            name: "export",
            summary: "Update an existing shell variable",
            usage: "export <NAME>=<value>",
            handler: Handler::Unary(&ExportCommand),
        },
        CommandSpec {
            name: "help",
            summary: "Show usage for one command or list all commands",
            usage: "help [command]",
            handler: Handler::Unary(&HelpCommand),
        },
        CommandSpec {
            name: "ls",
            summary: "List directory entries, sorted by name",
            usage: "ls [path]",
            handler: Handler::Unary(&LsCommand),
        },
        CommandSpec {
            name: "mkdir",
            summary: "Create a directory",
            usage: "mkdir <path>",
            handler: Handler::Unary(&MkdirCommand),
        },
        CommandSpec {
            name: "mv",
            summary: "Move or rename a file or directory",
            usage: "mv <source> <destination>",
            handler: Handler::Unary(&MvCommand),
        },
        CommandSpec {
            name: "pwd",
            summary: "Print the working directory",
            usage: "pwd",
            handler: Handler::Nullary(&PwdCommand),
        },
        CommandSpec {
            name: "quit",
            summary: "Leave the shell",
            usage: "quit",
            handler: Handler::Nullary(&ExitCommand),
        },
        CommandSpec {
            name: "rm",
            summary: "Remove a file or directory (asks before removing a non-empty directory)",
            usage: "rm <path>",
            handler: Handler::Unary(&RmCommand),
        },
        CommandSpec {
            name: "touch",
            summary: "Create an empty file, leaving existing files untouched",
            usage: "touch <path>",
            handler: Handler::Unary(&TouchCommand),
        },
    ],
};
