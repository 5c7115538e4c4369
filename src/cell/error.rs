use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum CellError {
    /// Text that the cell's kind could not parse. String describes the error.
    BadText(String),
    /// A value with a different shape than the one asked for
    WrongType(String),
    /// A key that is already taken in the set the cell was added to
    DuplicateKey(String),
    /// The listener is already registered
    AlreadySubscribed,
    /// The listener is not registered
    NotSubscribed,
}

pub type CellResult<T> = Result<T, CellError>;

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BadText(msg) => write!(f, "bad text: {}", msg),
            Self::WrongType(msg) => write!(f, "{}", msg),
            Self::DuplicateKey(key) => write!(f, "key {:?} is already taken", key),
            Self::AlreadySubscribed => write!(f, "listener subscribed multiple times"),
            Self::NotSubscribed => write!(f, "listener not subscribed"),
        }
    }
}

impl Error for CellError {}
