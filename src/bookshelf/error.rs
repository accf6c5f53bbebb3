use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Store columns do not match the expected layout (found: {found})")]
    SchemaMismatch { found: String },

    #[error("Book with ID {0} not found")]
    BookNotFound(i64),

    #[error("Encoding error: {0}")]
    Encoding(#[source] csv::Error),

    #[error("Encoding error: input is not valid UTF-8 ({0})")]
    InputEncoding(#[from] std::string::FromUtf8Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Input closed")]
    InputClosed,
}

impl LibraryError {
    /// Errors the navigation loop reports and recovers from instead of aborting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LibraryError::BookNotFound(_)) || self.is_encoding()
    }

    /// Undecodable input or an unwritable record; the screen is retried.
    pub fn is_encoding(&self) -> bool {
        matches!(
            self,
            LibraryError::Encoding(_) | LibraryError::InputEncoding(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
