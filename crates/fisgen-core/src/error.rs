use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    /// A render was requested before its init call ran.
    Uninitialized(&'static str),
    /// Number of supplied positional values does not match the template.
    PositionalCount { expected: usize, got: usize },
    /// A named slot in the template has no supplied value.
    UnknownSlot(String),
    /// Caller-supplied argument rejected before it could poison the output.
    InvalidInput(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Uninitialized(what) => {
                write!(f, "{what} template was never initialized")
            }
            RenderError::PositionalCount { expected, got } => {
                write!(f, "template expects {expected} positional values, got {got}")
            }
            RenderError::UnknownSlot(name) => write!(f, "no value for template slot '{name}'"),
            RenderError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

pub type Result<T> = std::result::Result<T, RenderError>;
