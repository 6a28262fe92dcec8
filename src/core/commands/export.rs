use tracing::debug;

use super::{CommandError, Context, Flow, UnaryCommand};

pub struct ExportCommand;

impl ExportCommand {
    // first `=` only; values may contain more
    fn parse_export(arg: Option<&str>) -> Result<(&str, &str), CommandError> {
        let arg = arg.ok_or(CommandError::MissingArgument("NAME=value"))?;
        let (name, value) = arg.split_once('=').ok_or_else(|| {
            CommandError::MalformedArgument("export syntax: export NAME=value".to_string())
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(CommandError::MalformedArgument(
                "variable name cannot be empty".to_string(),
            ));
        }
        Ok((name, value))
    }
}

impl UnaryCommand for ExportCommand {
    fn execute(&self, ctx: &mut Context<'_>, arg: Option<&str>) -> Result<Flow, CommandError> {
        let (name, value) = Self::parse_export(arg)?;
        ctx.env.set_if_exists(name, value)?;
        debug!("export {}={:?}", name, value);
        Ok(Flow::Continue)
    }
}
