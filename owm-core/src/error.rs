use thiserror::Error;

/// Everything that can go wrong while talking to the API.
///
/// The set is closed on purpose: callers branch on the kind to decide
/// remediation (retry on `RateLimit`, fix credentials on `Authentication`,
/// and so on). Every variant that originates from an HTTP response keeps
/// the raw status and the API-provided message.
#[derive(Debug, Error)]
pub enum Error {
    /// No usable API key at construction time.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A caller-supplied argument failed local validation. Raised before
    /// any network call is made.
    #[error("invalid value for `{field}`: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// HTTP 404: the API does not know the requested location.
    #[error("location not found (HTTP {status}): {message}")]
    NotFound { status: u16, message: String },

    /// HTTP 401/403: the API rejected the key.
    #[error("authentication failed (HTTP {status}): {message}")]
    Authentication { status: u16, message: String },

    /// HTTP 429: too many requests for the current plan.
    #[error("rate limit exceeded (HTTP {status}): {message}")]
    RateLimit { status: u16, message: String },

    /// HTTP 5xx.
    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// Any other non-2xx status the taxonomy does not name (e.g. 400).
    #[error("unexpected API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape. `field` is the
    /// dotted path of the offending key, e.g. `main.temp`.
    #[error("failed to parse response field `{field}`: {message}")]
    Parsing { field: String, message: String },

    /// The HTTP collaborator itself failed (DNS, connection refused,
    /// timeout). Wrapped, not swallowed.
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// HTTP status for the API-mapped kinds, `None` for local failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound { status, .. }
            | Error::Authentication { status, .. }
            | Error::RateLimit { status, .. }
            | Error::Server { status, .. }
            | Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn parsing(field: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Parsing {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(Box::new(err))
    }
}
