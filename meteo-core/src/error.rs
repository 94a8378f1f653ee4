use reqwest::StatusCode;
use thiserror::Error;

/// Classified failure of a current-weather fetch.
///
/// Every failure path inside the fetch operation collapses into one of these
/// four categories; callers never see a raw transport or parse error. The
/// rendered message is fixed per category and never carries provider text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The remote answered with a status in `[400, 500)`.
    #[error("Invalid coordinates or request.")]
    BadRequest { status: u16 },

    /// The remote answered with any other non-success status.
    #[error("Server error. Please try again later.")]
    ServerError { status: u16 },

    /// The request went out but no response ever came back
    /// (connection refused, timeout).
    #[error("Unable to connect to the server.")]
    NoResponse,

    /// The request could not be built or sent, the body could not be
    /// decoded, or the payload was missing the current-weather block.
    #[error("An unexpected error occurred.")]
    Unexpected,
}

impl FetchError {
    /// Classify a non-success HTTP status from the remote.
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_client_error() {
            Self::BadRequest { status: status.as_u16() }
        } else {
            Self::ServerError { status: status.as_u16() }
        }
    }

    /// Numeric code for this failure: the real HTTP status when one was
    /// received, `0` for no-response, `-1` for everything else.
    pub fn status(&self) -> i32 {
        match self {
            Self::BadRequest { status } | Self::ServerError { status } => i32::from(*status),
            Self::NoResponse => 0,
            Self::Unexpected => -1,
        }
    }

    /// The fixed user-facing message for this category.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Invalid coordinates or request.",
            Self::ServerError { .. } => "Server error. Please try again later.",
            Self::NoResponse => "Unable to connect to the server.",
            Self::Unexpected => "An unexpected error occurred.",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::from_status(status)
        } else if err.is_connect() || err.is_timeout() {
            Self::NoResponse
        } else {
            Self::Unexpected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        let err = FetchError::from_status(StatusCode::NOT_FOUND);
        assert_eq!(err, FetchError::BadRequest { status: 404 });
        assert_eq!(err.status(), 404);
        assert_eq!(err.message(), "Invalid coordinates or request.");

        let err = FetchError::from_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.status(), 422);
        assert_eq!(err.message(), "Invalid coordinates or request.");
    }

    #[test]
    fn server_errors_map_to_server_message() {
        let err = FetchError::from_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err, FetchError::ServerError { status: 500 });
        assert_eq!(err.status(), 500);
        assert_eq!(err.message(), "Server error. Please try again later.");
    }

    #[test]
    fn non_4xx_non_success_uses_server_message() {
        // Redirects the client refuses to follow land here too.
        let err = FetchError::from_status(StatusCode::FOUND);
        assert_eq!(err, FetchError::ServerError { status: 302 });
        assert_eq!(err.message(), "Server error. Please try again later.");
    }

    #[test]
    fn sentinel_codes() {
        assert_eq!(FetchError::NoResponse.status(), 0);
        assert_eq!(FetchError::Unexpected.status(), -1);
    }

    #[test]
    fn display_matches_message() {
        for err in [
            FetchError::BadRequest { status: 400 },
            FetchError::ServerError { status: 502 },
            FetchError::NoResponse,
            FetchError::Unexpected,
        ] {
            assert_eq!(err.to_string(), err.message());
        }
    }
}
