use thiserror::Error;

/// Errors produced by the list widget and its configuration layer.
#[derive(Error, Debug)]
pub enum ListError {
    /// Line lookup outside `[0, len)`.
    #[error("index {index} out of range for list of {len} lines")]
    IndexOutOfRange { index: usize, len: usize },

    /// Wrapper for underlying IO errors (settings, theme files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings, theme or key binding text that could not be understood.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ListError {
    fn from(e: toml::de::Error) -> Self {
        ListError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for ListError {
    fn from(e: toml::ser::Error) -> Self {
        ListError::Config(e.to_string())
    }
}
