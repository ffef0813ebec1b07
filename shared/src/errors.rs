use thiserror::Error;

#[derive(Debug, Error)]
pub enum CocApiError {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("HTTP status error: {status} {reason}: {message}")]
    Status {
        status: u16,
        reason: String,
        message: String,
    },

    #[error("Decoding raw response error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl CocApiError {
    /// HTTP status of the failed request, if the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
            Self::Serde(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// A call to the Clash of Clans API can either result in a success with the success type or fail with a [`CocApiError`].
pub type CocApiResponse<T> = Result<T, CocApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_code_and_formats_reason() {
        let err = CocApiError::Status {
            status: 404,
            reason: "notFound".to_string(),
            message: "Resource was not found.".to_string(),
        };

        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "HTTP status error: 404 notFound: Resource was not found."
        );
    }

    #[test]
    fn serde_error_has_no_status() {
        let raw = serde_json::from_str::<u8>("\"nope\"").unwrap_err();
        let err = CocApiError::from(raw);

        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
