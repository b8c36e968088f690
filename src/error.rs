/// All errors that can occur while looking up a LeetCode profile.
#[derive(thiserror::Error, Debug)]
pub enum LeetCodeError {
    /// The username was empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// The endpoint answered with a GraphQL `errors` array.
    #[error("graphql error: {}", .messages.join("; "))]
    GraphQl { messages: Vec<String> },

    /// The profile query returned no matched user.
    #[error("user '{username}' not found")]
    UserNotFound { username: String },

    /// Writing the CSV export failed.
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Coarse classification of a failed lookup.
///
/// Every kind means "no record was produced"; they only differ in the
/// diagnostic shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    Transport,
    MalformedResponse,
    UserNotFound,
    Unexpected,
}

impl LeetCodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LeetCodeError::Http { .. } | LeetCodeError::UnexpectedStatus { .. } => {
                ErrorKind::Transport
            }
            LeetCodeError::ResponseBody { .. } | LeetCodeError::Decode { .. } => {
                ErrorKind::MalformedResponse
            }
            LeetCodeError::UserNotFound { .. } => ErrorKind::UserNotFound,
            LeetCodeError::EmptyUsername
            | LeetCodeError::GraphQl { .. }
            | LeetCodeError::Csv(_) => ErrorKind::Unexpected,
        }
    }

    /// One-line message suitable for printing to the user.
    pub fn diagnostic(&self) -> String {
        match self {
            LeetCodeError::EmptyUsername => "Please provide a valid username!".to_string(),
            LeetCodeError::UnexpectedStatus { status, .. } => {
                format!("Error fetching profile: {}", status.as_u16())
            }
            LeetCodeError::UserNotFound { username } => format!("User '{username}' not found!"),
            other => match other.kind() {
                ErrorKind::Transport => format!("Network error: {other}"),
                ErrorKind::MalformedResponse => format!("JSON decode error: {other}"),
                _ => format!("Unexpected error: {other}"),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, LeetCodeError>;
