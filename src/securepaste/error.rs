use thiserror::Error;

/// Coarse classification of a [`PasteError`], for callers that branch on the
/// failure type rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Http,
    Decode,
    Validation,
    Config,
    Unavailable,
}

#[derive(Error, Debug)]
pub enum PasteError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}")]
    Http { status: u16, body: String },

    #[error("Could not decode response: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Service is not available at {0}")]
    Unavailable(String),
}

impl PasteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PasteError::Transport(_) => ErrorKind::Transport,
            PasteError::Http { .. } => ErrorKind::Http,
            PasteError::Decode { .. } => ErrorKind::Decode,
            PasteError::Validation(_) => ErrorKind::Validation,
            PasteError::Config(_) | PasteError::Io(_) | PasteError::Serialization(_) => {
                ErrorKind::Config
            }
            PasteError::Unavailable(_) => ErrorKind::Unavailable,
        }
    }

    /// Raw response body, when the server sent one.
    pub fn body(&self) -> Option<&str> {
        match self {
            PasteError::Http { body, .. } if !body.is_empty() => Some(body),
            PasteError::Decode {
                body: Some(body), ..
            } if !body.is_empty() => Some(body),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            PasteError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_access_denied(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

impl From<reqwest::Error> for PasteError {
    fn from(err: reqwest::Error) -> Self {
        // The URL can carry a password query value.
        let err = err.without_url();
        if err.is_decode() {
            PasteError::Decode {
                message: err.to_string(),
                body: None,
            }
        } else {
            PasteError::Transport(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, PasteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_expose_status_and_body() {
        let err = PasteError::Http {
            status: 403,
            body: r#"{"error":"Invalid password"}"#.into(),
        };
        assert_eq!(err.kind(), ErrorKind::Http);
        assert_eq!(err.status(), Some(403));
        assert!(err.is_access_denied());
        assert!(!err.is_not_found());
        assert_eq!(err.body(), Some(r#"{"error":"Invalid password"}"#));
    }

    #[test]
    fn empty_bodies_are_hidden() {
        let err = PasteError::Http {
            status: 404,
            body: String::new(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.body(), None);
    }

    #[test]
    fn transport_errors_have_no_status() {
        let err = PasteError::Transport("connection refused".into());
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }
}
