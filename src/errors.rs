use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, PartialEq, ThisError)]
pub enum Error {
    #[error("division by zero is not allowed")]
    DivisionByZero,
    #[error("calculation type '{0}' is already registered")]
    DuplicateRegistration(String),
    #[error("invalid input format, expected <operation> <num1> <num2>")]
    InvalidFormat,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("i/o error: {0}")]
    Io(String),
    #[error("{0}")]
    Unexpected(String),
    #[error(
        "Unsupported calculation type: '{name}'. Available types: {}",
        .available.join(", ")
    )]
    UnsupportedOperation {
        name: String,
        available: Vec<String>,
    },
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for Error {
    fn from(e: rustyline::error::ReadlineError) -> Self {
        Error::Io(e.to_string())
    }
}
