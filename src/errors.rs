use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    MalformedMessage { details: String },
    LengthMismatch { ids: usize, coefficients: usize },
    InexactElementWidth { bytes: usize, count: usize },
    NonCanonicalElement { position: usize },
    VariableOutOfRange { index: u64, table_size: usize },
    LocalCountUnderflow { total: usize, shared: usize },
    SerializationError { details: String },
}

impl BridgeError {
    pub fn malformed_message(details: &str) -> Self {
        BridgeError::MalformedMessage {
            details: details.to_string(),
        }
    }

    pub fn length_mismatch(ids: usize, coefficients: usize) -> Self {
        BridgeError::LengthMismatch { ids, coefficients }
    }

    pub fn inexact_element_width(bytes: usize, count: usize) -> Self {
        BridgeError::InexactElementWidth { bytes, count }
    }

    pub fn non_canonical_element(position: usize) -> Self {
        BridgeError::NonCanonicalElement { position }
    }

    pub fn variable_out_of_range(index: u64, table_size: usize) -> Self {
        BridgeError::VariableOutOfRange { index, table_size }
    }

    pub fn local_count_underflow(total: usize, shared: usize) -> Self {
        BridgeError::LocalCountUnderflow { total, shared }
    }

    pub fn serialization_error(details: &str) -> Self {
        BridgeError::SerializationError {
            details: details.to_string(),
        }
    }
}

/// Result type alias for convenience
pub type BridgeResult<T> = Result<T, BridgeError>;

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::MalformedMessage { details } => {
                write!(f, "Malformed wire message: {details}")
            }
            BridgeError::LengthMismatch { ids, coefficients } => {
                write!(
                    f,
                    "Term list carries {ids} variable ids but {coefficients} coefficients"
                )
            }
            BridgeError::InexactElementWidth { bytes, count } => {
                write!(
                    f,
                    "Byte blob of {bytes} bytes does not split into {count} equal elements"
                )
            }
            BridgeError::NonCanonicalElement { position } => {
                write!(
                    f,
                    "Element at position {position} is not below the field modulus"
                )
            }
            BridgeError::VariableOutOfRange { index, table_size } => {
                write!(
                    f,
                    "Variable index {index} is outside the assignment table of size {table_size}"
                )
            }
            BridgeError::LocalCountUnderflow { total, shared } => {
                write!(
                    f,
                    "Protoboard holds {total} variables but the circuit declares {shared} shared ones"
                )
            }
            BridgeError::SerializationError { details } => {
                write!(f, "Serialization error: {details}")
            }
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<bincode::Error> for BridgeError {
    fn from(err: bincode::Error) -> Self {
        BridgeError::serialization_error(&err.to_string())
    }
}

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        BridgeError::serialization_error(&err.to_string())
    }
}
