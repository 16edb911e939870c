pub mod arithmetic;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod engine;
pub mod registry;
pub mod text;
pub mod utils;
pub mod vector;

use thiserror::Error;

/// Tag used for diagnostics that are not tied to a single operation.
pub const GENERIC_DIAGNOSTIC_TAG: &str = "vector operation";

pub const SIZE_MISMATCH_MESSAGE: &str = "both vectors must have the same size";
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Division by zero is undefined";
pub const OUT_OF_RANGE_MESSAGE: &str = "Data out of range";
pub const INVALID_CONVERSION_MESSAGE: &str = "Invalid vector conversion";
pub const ARITY_MESSAGE: &str = "this function requires 2 parameters";
/// Reported for failures outside the call path (registration, config).
pub const INTERNAL_ERROR_MESSAGE: &str = "vector operation failed";

#[derive(Error, Debug)]
pub enum VectorOpsError {
    /// Operand dimensions differ or one of them is not a valid vector length.
    /// Invalid lengths are carried as [`decoder::INVALID_DIMENSION`].
    #[error("both vectors must have the same size")]
    DimensionMismatch { lhs: u32, rhs: u32 },
    #[error(transparent)]
    Arithmetic(#[from] arithmetic::ArithmeticError),
    #[error(transparent)]
    Encode(#[from] encoder::EncodeError),
    #[error("this function requires 2 parameters")]
    ArityMismatch { function: &'static str, given: usize },
    #[error("Registration Error: {0}")]
    RegistrationError(String),
    #[error("Config Error: {0}")]
    ConfigError(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VectorOpsError {
    /// Fixed message the host shows for this error.
    pub fn diagnostic(&self) -> &'static str {
        use arithmetic::ArithmeticError;
        use encoder::EncodeError;

        match self {
            VectorOpsError::DimensionMismatch { .. }
            | VectorOpsError::Arithmetic(ArithmeticError::DimensionMismatch { .. }) => {
                SIZE_MISMATCH_MESSAGE
            }
            VectorOpsError::Arithmetic(ArithmeticError::DivisionByZero { .. }) => {
                DIVISION_BY_ZERO_MESSAGE
            }
            VectorOpsError::Encode(EncodeError::OutOfRange { .. }) => OUT_OF_RANGE_MESSAGE,
            VectorOpsError::Encode(EncodeError::InvalidConversion(_)) => INVALID_CONVERSION_MESSAGE,
            VectorOpsError::ArityMismatch { .. } => ARITY_MESSAGE,
            VectorOpsError::RegistrationError(_)
            | VectorOpsError::ConfigError(_)
            | VectorOpsError::Other(_) => INTERNAL_ERROR_MESSAGE,
        }
    }

    /// Tag the host attaches to the diagnostic for this error.
    pub fn diagnostic_tag(&self, op: arithmetic::Operation) -> &'static str {
        match self {
            VectorOpsError::DimensionMismatch { .. }
            | VectorOpsError::Arithmetic(arithmetic::ArithmeticError::DimensionMismatch { .. }) => {
                GENERIC_DIAGNOSTIC_TAG
            }
            _ => op.diagnostic_tag(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VectorOpsError>;

// Re-export main types for convenience
pub use arithmetic::{apply, ArithmeticError, Operation};
pub use config::{EncodingStrategy, VectorOpsConfig};
pub use decoder::{decode, get_dimensions, DecodeError, INVALID_DIMENSION};
pub use encoder::{EncodeError, EncodedVector, VectorEncoder};
pub use engine::{check_arity, ErrorReporter, FunctionOutput, TracingReporter, VectorOperations};
pub use registry::{
    FunctionCatalog, FunctionRegistry, InMemoryCatalog, ScalarFunction, VectorOperationsComponent,
};
pub use utils::{encode_values, generate_random_vectors};
pub use vector::{DecodedVector, OperationResult, ELEMENT_WIDTH, MAX_DIMENSIONS};
