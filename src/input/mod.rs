mod completer;
mod prompter;

pub use completer::ShellHelper;
pub use prompter::{LinePrompter, Prompter};
