use std::io::Write;

use super::{operand, CommandError, Context, Flow, UnaryCommand};

pub struct MkdirCommand;
pub struct TouchCommand;

impl UnaryCommand for MkdirCommand {
    fn execute(&self, ctx: &mut Context<'_>, arg: Option<&str>) -> Result<Flow, CommandError> {
        let path = ctx.resolve(operand(arg, "path")?)?;
        ctx.fs.create_dir(&path).map_err(CommandError::at(&path))?;
        Ok(Flow::Continue)
    }
}

impl UnaryCommand for TouchCommand {
    fn execute(&self, ctx: &mut Context<'_>, arg: Option<&str>) -> Result<Flow, CommandError> {
        let path = ctx.resolve(operand(arg, "path")?)?;
        ctx.fs.touch(&path).map_err(CommandError::at(&path))?;
        Ok(Flow::Continue)
    }
}
