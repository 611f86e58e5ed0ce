use serde::{Deserialize, Serialize};

/// Unified error type for all translation backend operations.
///
/// Every variant describes a way the backend could not be *reached* or *understood*.
/// A backend that answers with well-formed JSON but without a usable translation
/// is not an error at this layer; see
/// [`TranslationReply`](crate::TranslationReply).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum BackendError {
    /// A network-level error occurred (DNS resolution failure, connection refused, reset, etc.).
    NetworkError {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Backend that produced the error.
        backend: String,
        /// Error details.
        detail: String,
    },

    /// The configured base URL and endpoint do not form a usable http(s) URL.
    InvalidUrl {
        /// The URL as it was assembled.
        url: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The response body is not a JSON document the client can read.
    ParseError {
        /// Backend that produced the error.
        backend: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize the request body.
    SerializationError {
        /// Backend that produced the error.
        backend: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl BackendError {
    /// 是否为预期内的故障（后端离线、超时），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }

    /// Whether the failure happened on the wire rather than while preparing the request.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::ParseError { .. }
        )
    }

    /// Backend identifier attached to the error, if any.
    pub fn backend(&self) -> Option<&str> {
        match self {
            Self::NetworkError { backend, .. }
            | Self::Timeout { backend, .. }
            | Self::ParseError { backend, .. }
            | Self::SerializationError { backend, .. } => Some(backend),
            Self::InvalidUrl { .. } => None,
        }
    }
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { backend, detail } => {
                write!(f, "[{backend}] Network error: {detail}")
            }
            Self::Timeout { backend, detail } => {
                write!(f, "[{backend}] Request timeout: {detail}")
            }
            Self::InvalidUrl { url, detail } => {
                write!(f, "Invalid URL '{url}': {detail}")
            }
            Self::ParseError { backend, detail } => {
                write!(f, "[{backend}] Parse error: {detail}")
            }
            Self::SerializationError { backend, detail } => {
                write!(f, "[{backend}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for BackendError {}

/// Convenience type alias for `Result<T, BackendError>`.
pub type Result<T> = std::result::Result<T, BackendError>;
