use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AssetError {
    /// No built-in or override template under this name.
    NotFound(String),
    /// Output directory does not exist; the writer never creates it.
    MissingDirectory(PathBuf),
    Io(std::io::Error),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::NotFound(name) => write!(f, "template not found: {name}"),
            AssetError::MissingDirectory(dir) => {
                write!(f, "output directory does not exist: {}", dir.display())
            }
            AssetError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<std::io::Error> for AssetError {
    fn from(e: std::io::Error) -> Self {
        AssetError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
