use crate::vector::{DecodedVector, OperationResult};
use ndarray::{Array1, Zip};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
    ];

    /// Name under which the operation is registered with the host catalog.
    pub fn function_name(&self) -> &'static str {
        match self {
            Operation::Addition => "VECTOR_ADDITION",
            Operation::Subtraction => "VECTOR_SUBTRACTION",
            Operation::Multiplication => "VECTOR_MULTIPLICATION",
            Operation::Division => "VECTOR_DIVISION",
        }
    }

    /// Tag attached to diagnostics raised by this operation.
    pub fn diagnostic_tag(&self) -> &'static str {
        match self {
            Operation::Addition => "vector_addition",
            Operation::Subtraction => "vector_subtraction",
            Operation::Multiplication => "vector_multiplication",
            Operation::Division => "vector_division",
        }
    }

    pub fn from_function_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.function_name().eq_ignore_ascii_case(name))
    }

    fn combine(&self, lhs: f32, rhs: f32) -> f32 {
        match self {
            Operation::Addition => lhs + rhs,
            Operation::Subtraction => lhs - rhs,
            Operation::Multiplication => lhs * rhs,
            Operation::Division => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diagnostic_tag())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero is undefined")]
    DivisionByZero { index: usize },
    #[error("both vectors must have the same size")]
    DimensionMismatch { lhs: usize, rhs: usize },
}

/// Apply `op` elementwise to two vectors of equal dimension.
///
/// Addition, subtraction and multiplication never fail. Division stops at the
/// first zero divisor and returns no partial result.
pub fn apply(
    op: Operation,
    lhs: &DecodedVector,
    rhs: &DecodedVector,
) -> Result<OperationResult, ArithmeticError> {
    if lhs.dimension() != rhs.dimension() {
        return Err(ArithmeticError::DimensionMismatch {
            lhs: lhs.dimension(),
            rhs: rhs.dimension(),
        });
    }

    match op {
        Operation::Division => divide(&lhs.data, &rhs.data),
        _ => {
            let data = Zip::from(&lhs.data)
                .and(&rhs.data)
                .map_collect(|&a, &b| op.combine(a, b));
            Ok(DecodedVector::new(data))
        }
    }
}

fn divide(lhs: &Array1<f32>, rhs: &Array1<f32>) -> Result<OperationResult, ArithmeticError> {
    let quotients = lhs.iter().zip(rhs.iter()).enumerate().try_fold(
        Vec::with_capacity(lhs.len()),
        |mut acc, (index, (&a, &b))| {
            // -0.0 == 0.0, so both signed zeros are rejected
            if b == 0.0 {
                return Err(ArithmeticError::DivisionByZero { index });
            }
            acc.push(a / b);
            Ok(acc)
        },
    )?;
    Ok(DecodedVector::from_vec(quotients))
}
