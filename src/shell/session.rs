use std::io::{self, Write};

use tracing::debug;

use crate::core::commands::{Context, Dispatcher, Flow};
use crate::core::env::EnvStore;
use crate::core::fs::{FileSystem, OsFileSystem};
use crate::core::parser::parse_line;
use crate::core::prompt::{format_prompt, PromptRenderer};
use crate::highlight::SyntaxHighlighter;
use crate::input::Prompter;
use crate::path::PathExpander;

// Streams and the prompter are passed per call so the same session runs
// under the line editor or plain pipes.
pub struct Session {
    env: EnvStore,
    fs: Box<dyn FileSystem>,
    prompt: PromptRenderer,
    dispatcher: Dispatcher,
    highlighter: SyntaxHighlighter,
    paths: PathExpander,
}

impl Session {
    pub fn new(env: EnvStore, highlighter: SyntaxHighlighter, paths: PathExpander) -> Self {
        Self {
            env,
            fs: Box::new(OsFileSystem::new()),
            prompt: PromptRenderer::new(),
            dispatcher: Dispatcher::default(),
            highlighter,
            paths,
        }
    }

    pub fn from_process(highlighter: SyntaxHighlighter, paths: PathExpander) -> io::Result<Self> {
        let cwd = std::env::current_dir()?;
        let env = EnvStore::from_process(&format_prompt(&cwd));
        Ok(Self::new(env, highlighter, paths))
    }

    pub fn with_filesystem(mut self, fs: Box<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn env(&self) -> &EnvStore {
        &self.env
    }

    pub fn refresh_prompt(&mut self) -> String {
        self.prompt.refresh(&mut self.env, self.fs.as_ref())
    }

    pub fn run_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
        prompter: &mut dyn Prompter,
    ) -> Flow {
        let Some(command) = parse_line(line) else {
            return Flow::Continue;
        };
        debug!("dispatching {:?}", command);

        let mut ctx = Context {
            env: &mut self.env,
            fs: self.fs.as_ref(),
            out,
            err,
            prompter,
            highlighter: &self.highlighter,
            paths: &self.paths,
        };
        self.dispatcher.dispatch(&mut ctx, &command)
    }

    // the same prompter answers rm confirmations
    pub fn run(
        &mut self,
        prompter: &mut dyn Prompter,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<()> {
        loop {
            let prompt = self.refresh_prompt();
            let Some(line) = prompter.ask(&prompt)? else {
                return Ok(());
            };
            if self.run_line(&line, out, err, prompter) == Flow::Exit {
                return Ok(());
            }
        }
    }
}
