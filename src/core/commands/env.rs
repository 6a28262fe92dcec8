use std::io::Write;

use super::{CommandError, Context, Flow, NullaryCommand};

pub struct EnvCommand;

impl NullaryCommand for EnvCommand {
    fn execute(&self, ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        for (name, value) in ctx.env.iter() {
            writeln!(ctx.out, "{}={}", name, value)?;
        }
        Ok(Flow::Continue)
    }
}
