use tracing_subscriber::EnvFilter;

use crate::error::ShellError;
use crate::flags::Flags;

pub const LOG_ENV_VAR: &str = "MINSH_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

pub fn filter_directive(flags: &Flags) -> String {
    if flags.is_set("debug") {
        "debug".to_string()
    } else if flags.is_set("quiet") {
        "error".to_string()
    } else {
        std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| DEFAULT_DIRECTIVE.to_string())
    }
}

pub fn init(flags: &Flags) -> Result<(), ShellError> {
    let filter = EnvFilter::try_new(filter_directive(flags))
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))
        .map_err(|e| ShellError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!flags.is_set("no-color"))
        .try_init()
        .map_err(|e| ShellError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flag_wins() {
        let mut flags = Flags::new();
        flags
            .parse(&["--debug".to_string(), "--quiet".to_string()])
            .unwrap();
        assert_eq!(filter_directive(&flags), "debug");
    }

    #[test]
    fn test_quiet_flag() {
        let mut flags = Flags::new();
        flags.parse(&["-q".to_string()]).unwrap();
        assert_eq!(filter_directive(&flags), "error");
    }
}
