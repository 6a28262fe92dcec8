pub mod identity;
mod vars;

pub use vars::{EnvStore, HOME, PROMPT, USER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    VarNotFound(String),
    UnknownVariable(String),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::VarNotFound(var) => write!(f, "variable not found: {}", var),
            EnvError::UnknownVariable(var) => {
                write!(f, "unknown variable '{}': only existing variables can be exported", var)
            }
        }
    }
}

impl std::error::Error for EnvError {}
