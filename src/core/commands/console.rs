use std::io::Write;

use super::{CommandError, Context, Flow, NullaryCommand, UnaryCommand};

pub struct ClearCommand;
pub struct PwdCommand;
pub struct EchoCommand;

impl NullaryCommand for ClearCommand {
    fn execute(&self, ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        ctx.fs.clear_screen(ctx.out)?;
        Ok(Flow::Continue)
    }
}

impl NullaryCommand for PwdCommand {
    fn execute(&self, ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let cwd = ctx.fs.current_dir()?;
        writeln!(ctx.out, "{}", cwd.display())?;
        Ok(Flow::Continue)
    }
}

impl UnaryCommand for EchoCommand {
    fn execute(&self, ctx: &mut Context<'_>, arg: Option<&str>) -> Result<Flow, CommandError> {
        if let Some(text) = arg {
            writeln!(ctx.out, "{}", text)?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::testutil::{cwd_lock, Harness};

    #[test]
    fn test_echo_verbatim() {
        let mut harness = Harness::new();
        harness.run("echo hello   world ");
        assert_eq!(harness.out(), "hello   world \n");
    }

    #[test]
    fn test_echo_without_argument_prints_nothing() {
        let mut harness = Harness::new();
        harness.run("echo");
        assert_eq!(harness.out(), "");

        harness.run("echo ");
        assert_eq!(harness.out(), "\n");
    }

    #[test]
    fn test_pwd() {
        let _guard = cwd_lock();
        let mut harness = Harness::new();
        harness.run("pwd");
        let expected = format!("{}\n", std::env::current_dir().unwrap().display());
        assert_eq!(harness.out(), expected);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_clear_emits_escape_sequence() {
        let mut harness = Harness::new();
        harness.run("clear");
        assert!(harness.out().starts_with("\x1B[2J"));
    }
}
