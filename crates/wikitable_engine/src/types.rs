use std::fmt;
use std::path::PathBuf;

/// A page rendered by the MediaWiki parse API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiPage {
    pub page_id: u64,
    pub title: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub metadata: FetchMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchMetadata {
    pub final_url: String,
    pub redirect_count: usize,
    pub content_type: Option<String>,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    /// The body is not a parse-API JSON envelope.
    Decode,
    /// The API answered with an error envelope, e.g. `missingtitle`.
    Api { code: String },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "undecodable response"),
            FailureKind::Api { code } => write!(f, "api error {code}"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// A table written to disk during an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    pub ordinal: usize,
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotIncluded,
    Excluded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTable {
    pub ordinal: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Decoded page title taken from the page URL.
    pub title: String,
    pub tables_found: usize,
    pub written: Vec<WrittenTable>,
    pub skipped: Vec<SkippedTable>,
}
