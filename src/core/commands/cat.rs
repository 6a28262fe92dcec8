use std::io::Write;

use super::{operand, CommandError, Context, Flow, UnaryCommand};

pub struct CatCommand;

impl UnaryCommand for CatCommand {
    fn execute(&self, ctx: &mut Context<'_>, arg: Option<&str>) -> Result<Flow, CommandError> {
        let path = ctx.resolve(operand(arg, "path")?)?;
        if ctx.fs.is_dir(&path) {
            return Err(CommandError::NotAFile(path));
        }

        let content = ctx.fs.read_to_string(&path).map_err(CommandError::at(&path))?;
        ctx.out.write_all(content.as_bytes())?;
        if !content.is_empty() && !content.ends_with('\n') {
            writeln!(ctx.out)?;
        }
        Ok(Flow::Continue)
    }
}
