use super::{CommandError, Context, Flow, NullaryCommand};

pub struct ExitCommand;

impl NullaryCommand for ExitCommand {
    fn execute(&self, _ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        Ok(Flow::Exit)
    }
}
