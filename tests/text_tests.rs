use vector_operations::{
    text::{format_vector, from_string_to_vector, truncate_preview, ConversionError},
    utils::encode_values,
};

#[test]
fn test_format_vector() {
    assert_eq!(format_vector(&[1.0, 2.5, -0.125], None), "[1e0,2.5e0,-1.25e-1]");
    assert_eq!(format_vector(&[1.0, 2.5], Some(2)), "[1.00e0,2.50e0]");
    assert_eq!(format_vector(&[], None), "[]");
}

#[test]
fn test_format_vector_parses_back() {
    let values = [0.0, -0.0, 1.0e-45, f32::MAX, -3.25e7, 0.1];
    let text = format_vector(&values, None);
    assert_eq!(text, "[0e0,-0e0,1e-45,3.4028235e38,-3.25e7,1e-1]");

    let parsed = from_string_to_vector(&text, 16).unwrap();
    assert_eq!(parsed.dimensions, 6);
    assert_eq!(parsed.bytes, encode_values(&values));
}

#[test]
fn test_parse_vector() {
    let parsed = from_string_to_vector("[1.0,2e0, -3.5]", 16).unwrap();
    assert_eq!(parsed.dimensions, 3);
    assert_eq!(parsed.bytes, encode_values(&[1.0, 2.0, -3.5]));
}

#[test]
fn test_parse_requires_brackets() {
    assert_eq!(
        from_string_to_vector("1.0,2.0", 16).unwrap_err(),
        ConversionError::Unbracketed
    );
    assert_eq!(
        from_string_to_vector("[1.0,2.0", 16).unwrap_err(),
        ConversionError::Unbracketed
    );
}

#[test]
fn test_parse_reports_consumed_dimensions() {
    // trailing comma leaves an empty element after two good ones
    let err = from_string_to_vector("[1,2,]", 16).unwrap_err();
    assert_eq!(err.dimensions(), 2);
    assert!(matches!(err, ConversionError::InvalidElement { .. }));

    // whitespace is only skipped before a value
    let err = from_string_to_vector("[1 ,2]", 16).unwrap_err();
    assert_eq!(err.dimensions(), 0);

    let err = from_string_to_vector("[]", 16).unwrap_err();
    assert_eq!(err.dimensions(), 0);
}

#[test]
fn test_parse_rejects_non_finite_and_out_of_range() {
    for text in ["[nan]", "[inf]", "[-inf]", "[1e39]", "[1e-50]", "[abc]"] {
        let err = from_string_to_vector(text, 16).unwrap_err();
        assert!(
            matches!(err, ConversionError::InvalidElement { dimensions: 0, .. }),
            "{} should not convert",
            text
        );
    }

    // zero itself is fine
    let parsed = from_string_to_vector("[0e0,-0.0]", 16).unwrap();
    assert_eq!(parsed.dimensions, 2);
}

#[test]
fn test_parse_dimension_limit() {
    let parsed = from_string_to_vector("[1,2,3]", 3).unwrap();
    assert_eq!(parsed.dimensions, 3);

    let err = from_string_to_vector("[1,2,3,4]", 3).unwrap_err();
    assert_eq!(err, ConversionError::TooManyDimensions { dimensions: 3 });
}

#[test]
fn test_truncate_preview() {
    assert_eq!(truncate_preview("[1e0,2e0]", 32), "[1e0,2e0]");
    assert_eq!(truncate_preview("[1e0,2e0,3e0]", 4), "[1e0...");
}
