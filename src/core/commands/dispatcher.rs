use std::io::Write;

use tracing::{debug, warn};

use super::{CommandError, Context, Flow, Handler, Registry};
use crate::core::parser::ParsedCommand;

#[derive(Clone, Copy)]
pub struct Dispatcher {
    registry: &'static Registry,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Registry::builtin())
    }
}

impl Dispatcher {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }

    // failures are printed on ctx.err, never returned
    pub fn dispatch(&self, ctx: &mut Context<'_>, command: &ParsedCommand) -> Flow {
        let flow = match self.execute(ctx, command) {
            Ok(flow) => flow,
            Err(err) => {
                self.report(ctx, &command.name, &err);
                Flow::Continue
            }
        };

        if let Err(e) = ctx.out.flush() {
            warn!("failed to flush output: {}", e);
        }
        flow
    }

    pub fn execute(
        &self,
        ctx: &mut Context<'_>,
        command: &ParsedCommand,
    ) -> Result<Flow, CommandError> {
        let spec = self
            .registry
            .lookup(&command.name)
            .ok_or_else(|| CommandError::UnknownCommand(command.name.clone()))?;

        match spec.handler {
            Handler::Nullary(cmd) => {
                if let Some(arg) = command.argument() {
                    debug!("{}: ignoring argument {:?}", spec.name, arg);
                }
                cmd.execute(ctx)
            }
            Handler::Unary(cmd) => cmd.execute(ctx, command.argument()),
        }
    }

    fn report(&self, ctx: &mut Context<'_>, name: &str, err: &CommandError) {
        debug!("{} failed: {:?}", name, err);

        let message = match err {
            CommandError::UnknownCommand(_) => err.to_string(),
            _ => format!("{}: {}", name, err),
        };

        if let Err(e) = writeln!(ctx.err, "{}", ctx.highlighter.highlight_error(&message)) {
            warn!("failed to report error: {}", e);
        }
    }
}
