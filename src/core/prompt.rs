use std::path::Path;

use tracing::warn;

use super::env::{EnvStore, PROMPT};
use super::fs::FileSystem;

const PROMPT_PREFIX: &str = "~$";
const PROMPT_SUFFIX: &str = " >>>>> ";

pub fn format_prompt(cwd: &Path) -> String {
    format!("{}{}{}", PROMPT_PREFIX, cwd.display(), PROMPT_SUFFIX)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PromptRenderer;

impl PromptRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn refresh(&self, env: &mut EnvStore, fs: &dyn FileSystem) -> String {
        match fs.current_dir() {
            Ok(cwd) => {
                let prompt = format_prompt(&cwd);
                if let Err(e) = env.set_if_exists(PROMPT, &prompt) {
                    warn!("failed to update prompt: {}", e);
                }
                prompt
            }
            Err(e) => {
                warn!("cannot read working directory: {}", e);
                env.get(PROMPT)
                    .map(str::to_string)
                    .unwrap_or_else(|_| format!("{}?{}", PROMPT_PREFIX, PROMPT_SUFFIX))
            }
        }
    }
}
