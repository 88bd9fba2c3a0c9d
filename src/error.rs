use thiserror::Error;

pub type Result<T> = std::result::Result<T, DocsError>;

/// Coarse classification used by the dispatch layers to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Validation,
    ParseFailure,
}

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("Failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Could not parse natural language query: {0}")]
    UnrecognizedCommand(String),
}

impl DocsError {
    pub fn validation(message: impl Into<String>) -> Self {
        DocsError::Validation(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DocsError::Status { .. } | DocsError::Transport { .. } | DocsError::Client(_) => {
                ErrorKind::Network
            }
            DocsError::Validation(_) => ErrorKind::Validation,
            DocsError::UnrecognizedCommand(_) => ErrorKind::ParseFailure,
        }
    }
}
