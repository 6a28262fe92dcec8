use std::io;

use rustyline::{config::Configurer, error::ReadlineError, history::DefaultHistory, Editor};
use tracing::warn;

mod session;

pub use session::Session;

use crate::{
    core::commands::{Flow, Registry},
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::ShellHelper,
    path::PathExpander,
};

pub struct Shell {
    pub(crate) editor: Editor<ShellHelper, DefaultHistory>,
    pub(crate) session: Session,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let highlighter = if flags.is_set("no-color") {
            SyntaxHighlighter::plain()
        } else {
            SyntaxHighlighter::new()
        };
        let paths = PathExpander::new();

        let mut editor = Editor::<ShellHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellHelper::new(
            Registry::builtin(),
            highlighter,
            paths.clone(),
        )));
        editor.set_auto_add_history(true);

        let session = Session::from_process(highlighter, paths)?;

        // A SIGINT while a built-in runs must not take the interpreter down.
        let quiet = flags.is_set("quiet");
        ctrlc::set_handler(move || {
            if !quiet {
                eprintln!("\nUse 'exit' to leave the shell");
            }
        })?;

        Ok(Shell {
            editor,
            session,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.session.refresh_prompt();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let flow = self.session.run_line(
                        &line,
                        &mut io::stdout(),
                        &mut io::stderr(),
                        &mut self.editor,
                    );
                    if flow == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("^C");
                    }
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    if !self.flags.is_set("quiet") {
                        println!("exit");
                    }
                    break;
                }
                Err(ReadlineError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                    warn!("discarding undecodable line: {}", e);
                    eprintln!("minsh: input is not valid UTF-8, line discarded");
                    continue;
                }
                Err(e) => {
                    warn!("line editor failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        Ok(())
    }
}
