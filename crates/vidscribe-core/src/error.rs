use reqwest::StatusCode;
use thiserror::Error;

/// Fallback shown when neither the API nor the transport produced a
/// usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing the video";

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("no video URL provided")]
    EmptyUrl,

    #[error("processing API rejected the request with status {status}")]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProcessError>;

impl ProcessError {
    /// Single user-visible message for any failure, resolved in priority
    /// order: the API's structured `detail`, then the transport error text,
    /// then [`GENERIC_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            ProcessError::EmptyUrl => "Please enter a video URL".to_string(),
            ProcessError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ProcessError::Rejected {
                status,
                detail: None,
            } => format!("request failed with status code {}", status.as_u16()),
            ProcessError::Transport(source) => {
                let text = source.to_string();
                if text.is_empty() {
                    GENERIC_ERROR_MESSAGE.to_string()
                } else {
                    text
                }
            }
            ProcessError::MalformedResponse(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_detail_wins_over_everything() {
        let err = ProcessError::Rejected {
            status: StatusCode::TOO_MANY_REQUESTS,
            detail: Some("rate limited".to_string()),
        };
        assert_eq!(err.user_message(), "rate limited");
    }

    #[test]
    fn rejection_without_detail_reports_the_status() {
        let err = ProcessError::Rejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: None,
        };
        assert_eq!(err.user_message(), "request failed with status code 500");
    }

    #[test]
    fn malformed_response_falls_back_to_generic_message() {
        let parse_err = serde_json::from_str::<crate::ProcessedVideo>("{}").unwrap_err();
        let err = ProcessError::MalformedResponse(parse_err);
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn empty_url_has_its_own_prompt() {
        assert_eq!(
            ProcessError::EmptyUrl.user_message(),
            "Please enter a video URL"
        );
    }
}
