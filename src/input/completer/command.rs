use rustyline::completion::Pair;

use crate::core::commands::Registry;

#[derive(Clone)]
pub struct CommandCompleter {
    registry: &'static Registry,
}

impl CommandCompleter {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.registry
            .names()
            .filter(|name| name.starts_with(prefix))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: format!("{} ", name),
            })
            .collect()
    }
}
