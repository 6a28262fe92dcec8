use std::io::Write;

use tracing::debug;

use super::{operand, CommandError, Context, Flow, UnaryCommand};

pub struct RmCommand;

fn confirmed(answer: Option<&str>) -> bool {
    matches!(answer.map(str::trim), Some("y") | Some("Y"))
}

impl UnaryCommand for RmCommand {
    fn execute(&self, ctx: &mut Context<'_>, arg: Option<&str>) -> Result<Flow, CommandError> {
        let path = ctx.resolve(operand(arg, "path")?)?;

        // symlinks are removed as links, never followed
        if !ctx.fs.is_dir(&path) || ctx.fs.is_symlink(&path) {
            ctx.fs.remove_file(&path).map_err(CommandError::at(&path))?;
            return Ok(Flow::Continue);
        }

        if ctx.fs.is_empty_dir(&path).map_err(CommandError::at(&path))? {
            ctx.fs.remove_dir(&path).map_err(CommandError::at(&path))?;
            return Ok(Flow::Continue);
        }

        let question = format!(
            "rm: '{}' is not empty. Remove it and everything in it? [y/N] ",
            path.display()
        );
        let answer = ctx.prompter.ask(&question)?;

        if confirmed(answer.as_deref()) {
            ctx.fs
                .remove_dir_all(&path)
                .map_err(CommandError::at(&path))?;
        } else {
            debug!("rm: declined for {}", path.display());
            writeln!(ctx.out, "rm: {}: not removed", path.display())?;
        }
        Ok(Flow::Continue)
    }
}
