//! Error types for the Sorenson client.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by preset resolution and encoding operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested aspect ratio is not present in the preset catalog.
    #[error("invalid aspect ratio: {aspect_ratio}")]
    InvalidAspectRatio { aspect_ratio: String },

    /// The aspect ratio is known but carries no preset for the requested
    /// quality.
    #[error("invalid resolution: no {quality} preset for aspect ratio {aspect_ratio}")]
    InvalidResolution {
        aspect_ratio: String,
        quality: String,
    },

    /// Communication with the Sorenson server failed.
    #[error(transparent)]
    Sorenson(#[from] SorensonError),
}

impl Error {
    /// Create an invalid aspect ratio error.
    pub fn invalid_aspect_ratio(aspect_ratio: impl Into<String>) -> Self {
        Self::InvalidAspectRatio {
            aspect_ratio: aspect_ratio.into(),
        }
    }

    /// Create an invalid resolution error.
    pub fn invalid_resolution(
        aspect_ratio: impl Into<String>,
        quality: impl Into<String>,
    ) -> Self {
        Self::InvalidResolution {
            aspect_ratio: aspect_ratio.into(),
            quality: quality.into(),
        }
    }
}

/// Errors raised while talking to the Sorenson server.
///
/// Every remote failure lands here: connection problems, non-2xx responses,
/// and response bodies the client cannot make sense of. The client performs
/// no retries; callers see the first failure.
#[derive(Debug, thiserror::Error)]
pub enum SorensonError {
    /// The request never completed (connection, timeout, protocol error).
    #[error("request to sorenson server failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("sorenson server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The server answered 2xx but the body did not match the expected shape.
    #[error("failed to parse sorenson response: {message}")]
    MalformedResponse { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_aspect_ratio_mentions_value() {
        let err = Error::invalid_aspect_ratio("15:3");
        assert!(err.to_string().contains("15:3"));
    }

    #[test]
    fn invalid_resolution_mentions_both_values() {
        let err = Error::invalid_resolution("16:9", "522p");
        let msg = err.to_string();
        assert!(msg.contains("16:9"));
        assert!(msg.contains("522p"));
    }

    #[test]
    fn sorenson_status_display() {
        let err = SorensonError::Status {
            status: reqwest::StatusCode::GONE,
            body: "no such job".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("410"));
        assert!(msg.contains("no such job"));
    }

    #[test]
    fn sorenson_error_converts_to_error() {
        let err: Error = SorensonError::MalformedResponse {
            message: "missing JobId".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Sorenson(_)));
    }
}
