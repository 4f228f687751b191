use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Snapshot settings that would make the marker wait meaningless
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{0}` must be greater than zero")]
    NotPositive(&'static str),
}

/// Failures reported by a browser session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to start browser session: {0}")]
    Launch(String),

    #[error("`{selector}` did not appear within {waited:?}")]
    WaitTimeout { selector: String, waited: Duration },

    #[error("browser command failed: {0}")]
    Command(String),
}

/// Failures of a single page capture
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("invalid snapshot configuration")]
    InvalidConfig(#[from] ConfigError),

    #[error("browser session unavailable")]
    SessionUnavailable(#[source] SessionError),

    #[error("failed to navigate to {url}")]
    NavigationFailed {
        url: String,
        #[source]
        source: SessionError,
    },

    #[error("marker `{selector}` not found within {waited:?}")]
    ElementNotFound { selector: String, waited: Duration },

    #[error("browser session failed after navigation")]
    Session(#[source] SessionError),

    #[error("failed to write {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failures of a single link extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid base origin `{origin}`")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to read {}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
