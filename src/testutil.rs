use std::io::Cursor;
use std::sync::{Mutex, MutexGuard};

use crate::core::commands::{CommandError, Context, Dispatcher, Flow};
use crate::core::env::EnvStore;
use crate::core::fs::OsFileSystem;
use crate::core::parser::{parse_line, ParsedCommand};
use crate::highlight::SyntaxHighlighter;
use crate::input::LinePrompter;
use crate::path::PathExpander;

static CWD_LOCK: Mutex<()> = Mutex::new(());

pub fn cwd_lock() -> MutexGuard<'static, ()> {
    CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct Harness {
    pub env: EnvStore,
    out: Vec<u8>,
    err: Vec<u8>,
    prompter: LinePrompter<Cursor<Vec<u8>>, Vec<u8>>,
    highlighter: SyntaxHighlighter,
    paths: PathExpander,
    dispatcher: Dispatcher,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_answers("")
    }

    pub fn with_answers(answers: &str) -> Self {
        Self {
            env: EnvStore::new("tester", "~$/ >>>>> "),
            out: Vec::new(),
            err: Vec::new(),
            prompter: LinePrompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new()),
            highlighter: SyntaxHighlighter::plain(),
            paths: PathExpander::with_home("/home/tester"),
            dispatcher: Dispatcher::default(),
        }
    }

    fn context(&mut self) -> Context<'_> {
        Context {
            env: &mut self.env,
            fs: &OsFileSystem,
            out: &mut self.out,
            err: &mut self.err,
            prompter: &mut self.prompter,
            highlighter: &self.highlighter,
            paths: &self.paths,
        }
    }

    pub fn run(&mut self, line: &str) -> Flow {
        let Some(command) = parse_line(line) else {
            return Flow::Continue;
        };
        let dispatcher = self.dispatcher;
        dispatcher.dispatch(&mut self.context(), &command)
    }

    pub fn execute(&mut self, command: &ParsedCommand) -> Result<Flow, CommandError> {
        let dispatcher = self.dispatcher;
        dispatcher.execute(&mut self.context(), command)
    }

    pub fn out(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    pub fn err(&self) -> String {
        String::from_utf8_lossy(&self.err).into_owned()
    }

    pub fn questions(&self) -> String {
        String::from_utf8_lossy(self.prompter.writer()).into_owned()
    }

    pub fn clear_output(&mut self) {
        self.out.clear();
        self.err.clear();
    }
}
