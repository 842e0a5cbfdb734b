use std::fmt;

/// Result type for fieldlens-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the value layer
#[derive(Debug)]
pub enum Error {
    /// A named field was not present on the accessed struct
    MissingField { type_name: String, field: String },

    /// Field access was attempted on a value without fields
    NotAStruct { field: String },

    /// A pointer without a captured pointee was dereferenced
    NullDeref { address: u64 },

    /// Integer extraction from a non-integer value
    NotAnInt,

    /// Text conversion from a value with no text representation
    NotText,

    /// Character data could not be decoded as text
    BadEncoding(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingField { type_name, field } => {
                write!(f, "no field `{}` on `struct {}`", field, type_name)
            }
            Error::NotAStruct { field } => {
                write!(f, "cannot read field `{}` from a non-struct value", field)
            }
            Error::NullDeref { address } => {
                write!(f, "pointer {:#x} has no captured pointee", address)
            }
            Error::NotAnInt => write!(f, "value is not an integer"),
            Error::NotText => write!(f, "value has no text representation"),
            Error::BadEncoding(detail) => write!(f, "text decoding failed: {}", detail),
        }
    }
}

impl std::error::Error for Error {}
