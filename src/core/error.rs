//! Error types shared by the page controllers

/// Errors raised while binding or running a page feature.
///
/// None of these are fatal to the page: callers log them and carry on with
/// the remaining features.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("Transport failed: {0}")]
    Transport(String),

    #[error("Failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SiteError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }

    /// Wrap anything debuggable coming back from the browser bindings
    pub fn dom(err: impl std::fmt::Debug) -> Self {
        Self::Dom(format!("{:?}", err))
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }
}
