use rustyline::error::ReadlineError;

#[derive(Debug)]
pub enum ShellError {
    Readline(ReadlineError),
    Io(std::io::Error),
    FlagError(String),
    CtrlC(String),
    Logging(String),
}

impl From<ReadlineError> for ShellError {
    fn from(err: ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "line editor: {}", e),
            ShellError::Io(e) => write!(f, "io: {}", e),
            ShellError::FlagError(msg) => write!(f, "{}", msg),
            ShellError::CtrlC(msg) => write!(f, "cannot install interrupt handler: {}", msg),
            ShellError::Logging(msg) => write!(f, "cannot set up logging: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Readline(e) => Some(e),
            ShellError::Io(e) => Some(e),
            _ => None,
        }
    }
}
