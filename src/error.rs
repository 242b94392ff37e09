pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Generic(String),
    InvalidPattern(String),
}

impl Error {
    /// Returns `true` if a key pattern failed to compile
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, Self::InvalidPattern(_))
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Generic(msg) => write!(f, "{}", msg),
            Self::InvalidPattern(msg) => write!(f, "InvalidPattern: {}", msg),
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::InvalidPattern(err.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Generic(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Generic(s.to_owned())
    }
}
