use tracing::debug;

use super::{operand, CommandError, Context, Flow, UnaryCommand};

pub struct CdCommand;

impl UnaryCommand for CdCommand {
    fn execute(&self, ctx: &mut Context<'_>, arg: Option<&str>) -> Result<Flow, CommandError> {
        let path = ctx.resolve(operand(arg, "path")?)?;

        if ctx.fs.exists(&path) && !ctx.fs.is_dir(&path) {
            return Err(CommandError::NotADirectory(path));
        }

        ctx.fs
            .set_current_dir(&path)
            .map_err(CommandError::at(&path))?;
        debug!("working directory is now {}", path.display());
        Ok(Flow::Continue)
    }
}
