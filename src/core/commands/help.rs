use std::io::Write;

use super::{CommandError, Context, Flow, Registry, UnaryCommand};

pub struct HelpCommand;

impl HelpCommand {
    fn print_all(ctx: &mut Context<'_>, registry: &Registry) -> Result<(), CommandError> {
        writeln!(ctx.out, "Built-in commands:")?;
        for spec in registry.entries() {
            writeln!(ctx.out, "  {:<8} {}", spec.name, spec.summary)?;
        }
        writeln!(ctx.out, "Type 'help <command>' for usage.")?;
        Ok(())
    }
}

impl UnaryCommand for HelpCommand {
    fn execute(&self, ctx: &mut Context<'_>, arg: Option<&str>) -> Result<Flow, CommandError> {
        let registry = Registry::builtin();

        match arg.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self::print_all(ctx, registry)?,
            Some(name) => {
                let spec = registry
                    .lookup(name)
                    .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
                writeln!(ctx.out, "usage: {}", spec.usage)?;
                writeln!(ctx.out, "    {}", spec.summary)?;
            }
        }
        Ok(Flow::Continue)
    }
}
