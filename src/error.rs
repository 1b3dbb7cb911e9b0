//! Error type shared by configuration loading and the browser shell.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure to mount one of the page controllers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// No global `window` object (not running in a browser main thread).
    #[error("no global window available")]
    NoWindow,
    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,
    /// `localStorage` is disabled or inaccessible.
    #[error("local storage is unavailable")]
    StorageUnavailable,
    /// A required element is absent from the page markup.
    #[error("required element #{id} not found")]
    MissingElement { id: String },
    /// The configuration block is malformed or inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Js(String),
}

impl PageError {
    /// Shorthand for [`PageError::MissingElement`].
    #[must_use]
    pub fn missing(id: &str) -> Self {
        Self::MissingElement { id: id.to_owned() }
    }
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
