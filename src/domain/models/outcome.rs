#[cfg(test)]
#[path = "outcome_test.rs"]
mod tests;

pub const TRANSPORT_ERROR_MESSAGE: &str = "Something went wrong. Try again later.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str =
    "Received an unexpected response from the server. Try again later.";

/// Result of a single backend call. Every asynchronous operation resolves to
/// exactly one of these, so screens only ever deal with one error shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestOutcome<T> {
    Success(T),
    Error {
        message: String,
        is_server_error: bool,
    },
}

impl<T> RequestOutcome<T> {
    /// No response was reachable. The underlying cause is never shown.
    pub fn transport_error() -> RequestOutcome<T> {
        return RequestOutcome::Error {
            message: TRANSPORT_ERROR_MESSAGE.to_string(),
            is_server_error: false,
        };
    }

    /// The backend answered with a `detail` payload.
    pub fn server_error(message: &str) -> RequestOutcome<T> {
        return RequestOutcome::Error {
            message: message.to_string(),
            is_server_error: true,
        };
    }

    /// A response arrived but could not be read into the expected shape.
    pub fn unexpected_response() -> RequestOutcome<T> {
        return RequestOutcome::Error {
            message: UNEXPECTED_RESPONSE_MESSAGE.to_string(),
            is_server_error: false,
        };
    }

    pub fn is_success(&self) -> bool {
        return matches!(self, RequestOutcome::Success(_));
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestOutcome::Success(_) => return None,
            RequestOutcome::Error { message, .. } => return Some(message),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> RequestOutcome<U> {
        match self {
            RequestOutcome::Success(data) => return RequestOutcome::Success(f(data)),
            RequestOutcome::Error {
                message,
                is_server_error,
            } => {
                return RequestOutcome::Error {
                    message,
                    is_server_error,
                }
            }
        }
    }

    /// Chains a fallible conversion of the success payload.
    pub fn and_then<U, F: FnOnce(T) -> RequestOutcome<U>>(self, f: F) -> RequestOutcome<U> {
        match self {
            RequestOutcome::Success(data) => return f(data),
            RequestOutcome::Error {
                message,
                is_server_error,
            } => {
                return RequestOutcome::Error {
                    message,
                    is_server_error,
                }
            }
        }
    }
}
