//! Unified error types and result handling.
//!
//! Validation failures (bad input from the caller) and infrastructure failures
//! (store, upstream model, configuration) share one enum so every layer can use `?`.
//! The HTTP layer decides what is shown to the caller through [`Error::is_client_error`].

use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (config file, database directory)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Translation was requested for empty or whitespace-only text
    #[error("한국어 텍스트를 입력해주세요.")]
    EmptyInput,

    /// A required request parameter was absent
    #[error("{name}가 필요합니다.")]
    MissingParameter {
        /// Parameter name as seen by the caller
        name: String,
    },

    /// A request parameter could not be interpreted
    #[error("잘못된 {name} 값입니다: {value}")]
    InvalidParameter {
        /// Parameter name as seen by the caller
        name: String,
        /// The rejected raw value
        value: String,
    },

    /// The request body was not the expected JSON document
    #[error("요청 본문이 올바르지 않습니다: {message}")]
    InvalidBody {
        /// Parser diagnostic
        message: String,
    },

    /// No database handle has been bound to the application
    #[error("데이터베이스가 연결되지 않았습니다.")]
    StoreUnavailable,

    /// No API key is configured for the generative text service
    #[error("API 키가 설정되지 않았습니다. GEMINI_API_KEY를 설정하세요.")]
    MissingApiKey,

    /// The generative text service answered with a non-success status
    #[error("Upstream API returned {status}: {body}")]
    Upstream {
        /// HTTP status code
        status: u16,
        /// Raw response body for diagnostics
        body: String,
    },

    /// The generative text service answered without any usable candidate text
    #[error("Upstream API returned no candidate text")]
    EmptyCandidate,

    /// Transport or decoding failure while talking to a remote HTTP service
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The translator API answered a client request with an error document
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The `error` field of the response
        message: String,
    },

    /// CSV export failed
    #[error("CSV export error: {message}")]
    Export {
        /// Writer diagnostic
        message: String,
    },
}

impl Error {
    /// Whether this error was caused by the caller's input rather than by the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::MissingParameter { .. }
                | Self::InvalidParameter { .. }
                | Self::InvalidBody { .. }
        )
    }

    /// Whether the message of this error is safe to show to the caller verbatim.
    ///
    /// Misconfiguration is reported as-is; upstream and database diagnostics are not.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        self.is_client_error() || matches!(self, Self::StoreUnavailable | Self::MissingApiKey)
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Self::Export {
            message: value.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
