use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single log line was rejected. Never fatal: the line is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedLineError {
    #[error("line has {found} fields, field {index} ({name}) is missing")]
    MissingField {
        name: &'static str,
        index: usize,
        found: usize,
    },

    #[error("invalid size field '{value}'")]
    InvalidSize { value: String },

    #[error("invalid timestamp '{value}'")]
    InvalidTimestamp { value: String },
}

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("draw at row {row}, col {col} is outside the {cols}x{rows} screen")]
    OutOfBounds {
        row: u16,
        col: u16,
        rows: u16,
        cols: u16,
    },

    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open input {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("window size must be at least one second")]
    ZeroWindow,

    #[error("{name} field index {index} is used twice")]
    DuplicateField { name: &'static str, index: usize },
}

/// Errors that end a monitoring session.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("no input: pass an access log path or pipe one into standard input")]
    NoInput,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Terminal(#[from] TerminalError),
}

impl From<io::Error> for MonitorError {
    fn from(e: io::Error) -> Self {
        MonitorError::Terminal(TerminalError::Io(e))
    }
}
