use std::error;
use std::fmt;

/// Error type for model generation operations.
#[derive(Debug)]
pub enum JsonModelGenError {
    /// Generic error with a message.
    GenericError(String),

    /// I/O error (e.g., reading the sample file, writing the output file).
    IoError(std::io::Error),

    /// JSON parsing error.
    JsonError(serde_json::Error),

    /// An object key cannot be turned into a nested type name.
    InvalidFieldKey {
        /// JSON Pointer of the offending key.
        path: String,
        key: String,
        reason: &'static str,
    },

    /// The root type name is empty or not an identifier.
    InvalidTypeName { name: String },

    /// Two nested shapes derived the same type name during one run.
    TypeNameCollision {
        type_name: String,
        /// JSON Pointer of the shape that claimed the name first.
        first: String,
        /// JSON Pointer of the shape that tried to claim it again.
        second: String,
    },
}

impl error::Error for JsonModelGenError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::IoError(io_error) => Some(io_error),
            Self::JsonError(json_error) => Some(json_error),
            _ => None,
        }
    }
}

impl fmt::Display for JsonModelGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenericError(message) => write!(f, "{message}"),
            Self::IoError(io_error) => fmt::Display::fmt(io_error, f),
            Self::JsonError(json_error) => fmt::Display::fmt(json_error, f),
            Self::InvalidFieldKey { path, key, reason } => {
                write!(f, "invalid field key {key:?} at \"{path}\": {reason}")
            }
            Self::InvalidTypeName { name } => {
                write!(f, "invalid type name {name:?}: expected a non-empty identifier")
            }
            Self::TypeNameCollision {
                type_name,
                first,
                second,
            } => write!(
                f,
                "type name {type_name} derived twice: at \"{first}\" and at \"{second}\""
            ),
        }
    }
}

impl From<std::io::Error> for JsonModelGenError {
    fn from(io_error: std::io::Error) -> Self {
        Self::IoError(io_error)
    }
}

impl From<serde_json::Error> for JsonModelGenError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::JsonError(json_error)
    }
}
