//! Textual vector form: `[v0,v1,...]` with every value in scientific notation.
//!
//! [`from_string_to_vector`] is the general text to storage format converter.
//! It is what the encoder runs the rendered result through, so its failure
//! reporting (how many dimensions were consumed before it stopped) drives the
//! overflow classification.

use crate::vector::ELEMENT_WIDTH;
use byteorder::{ByteOrder, LittleEndian};
use thiserror::Error;

/// Marker appended to a truncated diagnostic preview.
pub const ELLIPSIS: &str = "...";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("vector text must start with '[' and end with ']'")]
    Unbracketed,
    #[error("invalid element after {dimensions} dimensions: {reason}")]
    InvalidElement { dimensions: u32, reason: String },
    #[error("vector exceeds {dimensions} dimensions")]
    TooManyDimensions { dimensions: u32 },
}

impl ConversionError {
    /// Dimensions successfully consumed before the converter stopped.
    pub fn dimensions(&self) -> u32 {
        match self {
            ConversionError::Unbracketed => 0,
            ConversionError::InvalidElement { dimensions, .. } => *dimensions,
            ConversionError::TooManyDimensions { dimensions } => *dimensions,
        }
    }
}

/// Binary storage form produced by the converter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedVector {
    pub bytes: Vec<u8>,
    pub dimensions: u32,
}

/// Render `values` as bracketed, comma separated scientific notation.
///
/// With `precision` unset each value is written with the fewest digits that
/// parse back to the same binary32; `Some(p)` fixes the mantissa to `p`
/// fractional digits.
pub fn format_vector<'a, I>(values: I, precision: Option<usize>) -> String
where
    I: IntoIterator<Item = &'a f32>,
{
    let mut out = String::from("[");
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let rendered = match precision {
            Some(p) => format!("{:.*e}", p, value),
            None => format!("{:e}", value),
        };
        out.push_str(&rendered);
    }
    out.push(']');
    out
}

/// Parse the textual form into the binary storage format, accepting at most
/// `max_dims` elements.
pub fn from_string_to_vector(text: &str, max_dims: u32) -> Result<ParsedVector, ConversionError> {
    let inner = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ConversionError::Unbracketed)?;

    let mut values: Vec<f32> = Vec::new();
    for token in inner.split(',') {
        let dimensions = values.len() as u32;
        if dimensions >= max_dims {
            return Err(ConversionError::TooManyDimensions { dimensions });
        }
        let value = parse_element(token)
            .map_err(|reason| ConversionError::InvalidElement { dimensions, reason })?;
        values.push(value);
    }

    let mut bytes = vec![0u8; values.len() * ELEMENT_WIDTH];
    LittleEndian::write_f32_into(&values, &mut bytes);

    Ok(ParsedVector {
        bytes,
        dimensions: values.len() as u32,
    })
}

fn parse_element(token: &str) -> Result<f32, String> {
    let token = token.trim_start();
    if token.is_empty() {
        return Err("missing value".to_string());
    }

    let value: f32 = token
        .parse()
        .map_err(|_| format!("'{}' is not a number", token))?;

    if !value.is_finite() {
        return Err(format!("'{}' is not a finite binary32 value", token));
    }
    if value == 0.0 && has_nonzero_mantissa(token) {
        return Err(format!("'{}' underflows binary32", token));
    }

    Ok(value)
}

fn has_nonzero_mantissa(token: &str) -> bool {
    token
        .bytes()
        .take_while(|b| !matches!(b, b'e' | b'E'))
        .any(|b| matches!(b, b'1'..=b'9'))
}

/// Cut `text` down to `max_len` characters followed by [`ELLIPSIS`].
pub fn truncate_preview(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}
