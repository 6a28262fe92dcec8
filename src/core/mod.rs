pub mod commands;
pub mod env;
pub mod fs;
pub mod parser;
pub mod prompt;
