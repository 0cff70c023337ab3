#[derive(Debug)]
pub enum TerminalError {
    Io(std::io::Error),
    HomeDirNotFound,
    StartDirNotFound(String),
    FlagError(String),
    CtrlC(String),
}

impl From<std::io::Error> for TerminalError {
    fn from(err: std::io::Error) -> Self {
        TerminalError::Io(err)
    }
}

impl From<ctrlc::Error> for TerminalError {
    fn from(err: ctrlc::Error) -> Self {
        TerminalError::CtrlC(err.to_string())
    }
}

impl std::fmt::Display for TerminalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalError::Io(e) => write!(f, "IO error: {}", e),
            TerminalError::HomeDirNotFound => write!(f, "Home directory not found"),
            TerminalError::StartDirNotFound(dir) => {
                write!(f, "Start directory not found: {}", dir)
            }
            TerminalError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            TerminalError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for TerminalError {}
