use markup::MarkupError;
use printer::PrintError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    #[error("Print error: {0}")]
    Print(#[from] PrintError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Print(PrintError::Io(err))
    }
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;
