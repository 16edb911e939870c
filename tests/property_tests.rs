//! Property tests for the elementwise laws and the encoder.

use proptest::prelude::*;
use vector_operations::{
    arithmetic::{apply, ArithmeticError, Operation},
    config::{EncodingStrategy, VectorOpsConfig},
    encoder::VectorEncoder,
    engine::VectorOperations,
    utils::encode_values,
    vector::DecodedVector,
    VectorOpsError,
};

fn finite() -> impl Strategy<Value = f32> {
    -1.0e6f32..1.0e6f32
}

fn vector_pair() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (1usize..64).prop_flat_map(|dim| {
        (
            prop::collection::vec(finite(), dim),
            prop::collection::vec(finite(), dim),
        )
    })
}

fn execute(op: Operation, a: &[f32], b: &[f32]) -> Result<Vec<f32>, VectorOpsError> {
    let ops = VectorOperations::default();
    let encoded = ops.execute(op, &encode_values(a), &encode_values(b))?;
    Ok(encoded.decode().unwrap().to_vec())
}

proptest! {
    #[test]
    fn addition_is_elementwise((a, b) in vector_pair()) {
        let result = execute(Operation::Addition, &a, &b).unwrap();
        for i in 0..a.len() {
            prop_assert_eq!(result[i].to_bits(), (a[i] + b[i]).to_bits());
        }
    }

    #[test]
    fn subtraction_is_elementwise((a, b) in vector_pair()) {
        let result = execute(Operation::Subtraction, &a, &b).unwrap();
        for i in 0..a.len() {
            prop_assert_eq!(result[i].to_bits(), (a[i] - b[i]).to_bits());
        }
    }

    #[test]
    fn multiplication_is_elementwise((a, b) in vector_pair()) {
        let result = execute(Operation::Multiplication, &a, &b).unwrap();
        for i in 0..a.len() {
            prop_assert_eq!(result[i].to_bits(), (a[i] * b[i]).to_bits());
        }
    }

    #[test]
    fn division_without_zeros_is_elementwise((a, b) in vector_pair()) {
        prop_assume!(b.iter().all(|v| *v != 0.0));
        let result = execute(Operation::Division, &a, &b).unwrap();
        for i in 0..a.len() {
            prop_assert_eq!(result[i].to_bits(), (a[i] / b[i]).to_bits());
        }
    }

    #[test]
    fn any_zero_divisor_fails_division((a, mut b) in vector_pair(), pick in any::<prop::sample::Index>()) {
        let zero_at = pick.index(b.len());
        b[zero_at] = 0.0;
        let first_zero = b.iter().position(|v| *v == 0.0).unwrap();

        let lhs = DecodedVector::from_vec(a.clone());
        let rhs = DecodedVector::from_vec(b.clone());
        prop_assert_eq!(
            apply(Operation::Division, &lhs, &rhs).unwrap_err(),
            ArithmeticError::DivisionByZero { index: first_zero }
        );

        let err = execute(Operation::Division, &a, &b).unwrap_err();
        let is_division_by_zero = matches!(
            err,
            VectorOpsError::Arithmetic(ArithmeticError::DivisionByZero { .. })
        );
        prop_assert!(is_division_by_zero);
    }

    #[test]
    fn differing_dimensions_always_fail(
        a in prop::collection::vec(finite(), 0..32),
        b in prop::collection::vec(finite(), 0..32),
    ) {
        prop_assume!(a.len() != b.len());
        for op in Operation::ALL {
            let err = execute(op, &a, &b).unwrap_err();
            let is_mismatch = matches!(err, VectorOpsError::DimensionMismatch { .. });
            prop_assert!(is_mismatch);
        }
    }

    #[test]
    fn text_round_trip_is_bit_exact(
        values in prop::collection::vec(any::<f32>().prop_filter("finite", |v| v.is_finite()), 1..128)
    ) {
        let encoder = VectorEncoder::default();
        let vector = DecodedVector::from_vec(values.clone());

        let encoded = encoder.encode(&vector).unwrap();
        let expected = encode_values(&values);
        prop_assert_eq!(encoded.bytes(), expected.as_slice());
    }

    #[test]
    fn text_and_direct_encoding_agree(values in prop::collection::vec(any::<f32>(), 0..24)) {
        let config = VectorOpsConfig {
            max_dimensions: 8,
            ..VectorOpsConfig::default()
        };
        let text = VectorEncoder::new(&config);
        let direct = VectorEncoder::new(&VectorOpsConfig {
            encoding: EncodingStrategy::Direct,
            ..config
        });

        let vector = DecodedVector::from_vec(values);
        prop_assert_eq!(text.encode(&vector), direct.encode(&vector));
    }
}
