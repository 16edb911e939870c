use crate::arithmetic::{self, Operation};
use crate::config::VectorOpsConfig;
use crate::decoder::{self, get_dimensions, INVALID_DIMENSION};
use crate::encoder::{EncodedVector, VectorEncoder};
use crate::vector::ELEMENT_WIDTH;
use crate::{Result, VectorOpsError};

/// Number of vector arguments every operation takes.
pub const REQUIRED_ARGS: usize = 2;

/// Channel the host exposes for user-facing error messages.
pub trait ErrorReporter {
    fn report(&self, tag: &str, message: &str);
}

/// Sends diagnostics to the `tracing` error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, tag: &str, message: &str) {
        tracing::error!(tag, "{}", message);
    }
}

/// What the host receives back from one call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionOutput {
    pub value: Option<Vec<u8>>,
    pub length: usize,
    pub is_null: bool,
    pub error: bool,
}

impl FunctionOutput {
    fn success(encoded: EncodedVector) -> Self {
        let length = encoded.byte_length();
        Self {
            value: Some(encoded.into_bytes()),
            length,
            is_null: false,
            error: false,
        }
    }

    fn failure() -> Self {
        Self {
            value: None,
            length: 0,
            is_null: true,
            error: true,
        }
    }
}

/// Rejects calls with fewer than two arguments.
pub fn check_arity(op: Operation, arg_count: usize) -> Result<()> {
    if arg_count < REQUIRED_ARGS {
        return Err(VectorOpsError::ArityMismatch {
            function: op.diagnostic_tag(),
            given: arg_count,
        });
    }
    Ok(())
}

/// Entry point for the four elementwise vector functions.
///
/// Holds no per-call state; one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct VectorOperations {
    config: VectorOpsConfig,
    encoder: VectorEncoder,
}

impl VectorOperations {
    pub fn new(config: VectorOpsConfig) -> Result<Self> {
        config.validate()?;
        let encoder = VectorEncoder::new(&config);
        Ok(Self { config, encoder })
    }

    pub fn config(&self) -> &VectorOpsConfig {
        &self.config
    }

    pub fn encoder(&self) -> &VectorEncoder {
        &self.encoder
    }

    /// Decode both operands, apply `op` and encode the result.
    pub fn execute(&self, op: Operation, lhs: &[u8], rhs: &[u8]) -> Result<EncodedVector> {
        let lhs_dim = get_dimensions(lhs.len(), ELEMENT_WIDTH);
        let rhs_dim = get_dimensions(rhs.len(), ELEMENT_WIDTH);
        if lhs_dim != rhs_dim || lhs_dim == INVALID_DIMENSION || rhs_dim == INVALID_DIMENSION {
            return Err(VectorOpsError::DimensionMismatch {
                lhs: lhs_dim,
                rhs: rhs_dim,
            });
        }

        let mismatch = |_: decoder::DecodeError| VectorOpsError::DimensionMismatch {
            lhs: lhs_dim,
            rhs: rhs_dim,
        };
        let a = decoder::decode_slice(lhs).map_err(mismatch)?;
        let b = decoder::decode_slice(rhs).map_err(mismatch)?;

        tracing::debug!(op = %op, dimensions = lhs_dim, "Executing vector operation");

        let result = arithmetic::apply(op, &a, &b)?;
        let encoded = self.encoder.encode(&result)?;
        Ok(encoded)
    }

    /// Host-facing call: never fails, reports problems through `reporter`
    /// and the null/error flags.
    pub fn invoke(
        &self,
        op: Operation,
        args: &[&[u8]],
        reporter: &dyn ErrorReporter,
    ) -> FunctionOutput {
        let outcome = check_arity(op, args.len()).and_then(|_| self.execute(op, args[0], args[1]));

        match outcome {
            Ok(encoded) => FunctionOutput::success(encoded),
            Err(err) => {
                tracing::warn!(op = %op, error = %err, "vector operation failed");
                reporter.report(err.diagnostic_tag(op), err.diagnostic());
                FunctionOutput::failure()
            }
        }
    }
}

impl Default for VectorOperations {
    fn default() -> Self {
        let config = VectorOpsConfig::default();
        let encoder = VectorEncoder::new(&config);
        Self { config, encoder }
    }
}
