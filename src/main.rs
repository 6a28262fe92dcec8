use minsh::error::ShellError;
use minsh::flags::Flags;
use minsh::highlight::SyntaxHighlighter;
use minsh::input::LinePrompter;
use minsh::path::PathExpander;
use minsh::shell::{Session, Shell};
use std::env;
use std::io::{self, IsTerminal};

fn main() -> Result<(), ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("minsh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    minsh::logging::init(&flags)?;

    if io::stdin().is_terminal() {
        let mut shell = Shell::new(flags)?;
        return shell.run();
    }

    // Piped input: no line editing, prompts go to stderr.
    let mut session = Session::from_process(SyntaxHighlighter::plain(), PathExpander::new())?;
    let mut prompter = LinePrompter::new(io::stdin().lock(), io::stderr());
    session.run(&mut prompter, &mut io::stdout(), &mut io::stderr())?;
    Ok(())
}
