use crate::vector::{DecodedVector, ELEMENT_WIDTH};
use byteorder::{ByteOrder, LittleEndian};
use thiserror::Error;

/// Dimension value reserved to mean "not a valid vector length".
pub const INVALID_DIMENSION: u32 = u32::MAX;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Malformed vector: {0}")]
    Malformed(String),
}

/// Dimension count for a buffer of `byte_length` bytes, or
/// [`INVALID_DIMENSION`] when the length is not a whole number of elements.
pub fn get_dimensions(byte_length: usize, element_width: usize) -> u32 {
    if element_width == 0 || byte_length % element_width != 0 {
        return INVALID_DIMENSION;
    }
    match u32::try_from(byte_length / element_width) {
        Ok(dim) => dim,
        Err(_) => INVALID_DIMENSION,
    }
}

/// Decode `byte_length` bytes of `buffer` into a float vector.
///
/// Values are taken as-is; NaN and infinities are not rejected here.
pub fn decode(buffer: &[u8], byte_length: usize) -> Result<DecodedVector, DecodeError> {
    if byte_length > buffer.len() {
        return Err(DecodeError::Malformed(format!(
            "declared length {} exceeds buffer of {} bytes",
            byte_length,
            buffer.len()
        )));
    }

    let dim = get_dimensions(byte_length, ELEMENT_WIDTH);
    if dim == INVALID_DIMENSION {
        return Err(DecodeError::Malformed(format!(
            "byte length {} is not a multiple of {}",
            byte_length, ELEMENT_WIDTH
        )));
    }

    let mut values = vec![0.0f32; dim as usize];
    LittleEndian::read_f32_into(&buffer[..byte_length], &mut values);

    Ok(DecodedVector::from_vec(values))
}

/// Decode a whole buffer.
pub fn decode_slice(buffer: &[u8]) -> Result<DecodedVector, DecodeError> {
    decode(buffer, buffer.len())
}
