use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("failed to load {path}: {message}")]
    Load { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("fetch failed: {message}")]
    Fetch { message: String },
}

pub type Result<T> = std::result::Result<T, BuildError>;
