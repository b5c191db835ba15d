use std::fmt;

/// Failures of the comparison flow.
#[derive(Debug)]
pub enum CompareError {
    /// Invalid input rejected before any network call (e.g. empty username).
    InvalidInput(String),
    /// Transport-level failure reaching the comparison endpoint.
    Network(String),
    /// The server explicitly rejected the request. `message` is the body's
    /// `detail` field, or the generic fallback when the body is unparseable.
    Api { status: u16, message: String },
    /// A 2xx response whose body does not conform to the report contract.
    Schema(String),
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::InvalidInput(msg) => write!(f, "{}", msg),
            CompareError::Network(msg) => write!(f, "Network error: {}", msg),
            // Shown to the user as-is, so a backend `{"detail":"rate limited"}`
            // surfaces exactly "rate limited".
            CompareError::Api { message, .. } => write!(f, "{}", message),
            CompareError::Schema(msg) => write!(f, "Invalid response from server: {}", msg),
        }
    }
}

impl std::error::Error for CompareError {}

impl From<reqwest::Error> for CompareError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CompareError::Schema(e.to_string())
        } else {
            CompareError::Network(e.to_string())
        }
    }
}
