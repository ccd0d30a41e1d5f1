use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotionError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// Notion answered with a structured error body.
    #[error("{message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Notion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid Notion URL: {0}")]
    Url(#[from] url::ParseError),
}

impl NotionError {
    /// Machine-readable code, passed through to clients.
    pub fn code(&self) -> &str {
        match self {
            NotionError::NotConfigured(_) => "not_configured",
            NotionError::Api { code, .. } => code,
            NotionError::Http(e) if e.is_timeout() => "request_timeout",
            NotionError::Http(_) => "request_failed",
            NotionError::Url(_) => "invalid_url",
        }
    }

    /// HTTP status reported by Notion, when the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            NotionError::Api { status, .. } => Some(*status),
            NotionError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
