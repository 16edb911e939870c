use crate::config::{EncodingStrategy, VectorOpsConfig};
use crate::decoder::{self, DecodeError};
use crate::text::{self, ConversionError};
use crate::vector::{dimension_bytes, DecodedVector, OperationResult, ELEMENT_WIDTH};
use byteorder::{ByteOrder, LittleEndian};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The result needs at least the maximum number of dimensions.
    #[error("Data out of range")]
    OutOfRange { dimensions: u32, preview: String },
    #[error("Invalid vector conversion")]
    InvalidConversion(#[source] ConversionError),
}

/// A vector in the binary storage format.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedVector {
    bytes: Vec<u8>,
    dimensions: u32,
}

impl EncodedVector {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn dimensions(&self) -> u32 {
        self.dimensions
    }

    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    pub fn decode(&self) -> Result<DecodedVector, DecodeError> {
        decoder::decode_slice(&self.bytes)
    }
}

/// Turns operation results into the binary storage format.
#[derive(Debug, Clone)]
pub struct VectorEncoder {
    max_dimensions: u32,
    text_precision: Option<usize>,
    preview_len: usize,
    strategy: EncodingStrategy,
}

impl VectorEncoder {
    pub fn new(config: &VectorOpsConfig) -> Self {
        Self {
            max_dimensions: config.max_dimensions,
            text_precision: config.text_precision,
            preview_len: config.preview_len,
            strategy: config.encoding,
        }
    }

    pub fn max_dimensions(&self) -> u32 {
        self.max_dimensions
    }

    pub fn encode(&self, result: &OperationResult) -> Result<EncodedVector, EncodeError> {
        match self.strategy {
            EncodingStrategy::TextRoundTrip => self.encode_text(result),
            EncodingStrategy::Direct => self.encode_direct(result),
        }
    }

    /// Render `result` to its textual form and run it back through the
    /// text converter.
    pub fn encode_text(&self, result: &OperationResult) -> Result<EncodedVector, EncodeError> {
        let rendered = text::format_vector(result.iter(), self.text_precision);

        match text::from_string_to_vector(&rendered, self.max_dimensions) {
            Ok(parsed) if parsed.dimensions >= self.max_dimensions => {
                Err(self.out_of_range(&rendered, parsed.dimensions))
            }
            Ok(parsed) => {
                debug_assert_eq!(parsed.bytes.len(), dimension_bytes(parsed.dimensions));
                tracing::trace!(dimensions = parsed.dimensions, "encoded via text form");
                Ok(EncodedVector {
                    bytes: parsed.bytes,
                    dimensions: parsed.dimensions,
                })
            }
            Err(err) if err.dimensions() >= self.max_dimensions => {
                Err(self.out_of_range(&rendered, err.dimensions()))
            }
            Err(err) => Err(EncodeError::InvalidConversion(err)),
        }
    }

    /// Write the binary form directly, classifying failures the same way the
    /// text path does.
    pub fn encode_direct(&self, result: &OperationResult) -> Result<EncodedVector, EncodeError> {
        let dimension = result.dimension();
        let limit = self.max_dimensions as usize;

        // the converter rejects a bad value before it notices the overflow
        if let Some((index, value)) = result
            .iter()
            .take(limit)
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(EncodeError::InvalidConversion(ConversionError::InvalidElement {
                dimensions: index as u32,
                reason: format!("'{:e}' is not a finite binary32 value", value),
            }));
        }

        if dimension >= limit {
            // only the leading values can survive truncation
            let head = text::format_vector(result.iter().take(self.preview_len), self.text_precision);
            return Err(self.out_of_range(&head, self.max_dimensions));
        }

        if result.is_empty() {
            return Err(EncodeError::InvalidConversion(ConversionError::InvalidElement {
                dimensions: 0,
                reason: "missing value".to_string(),
            }));
        }

        let values = result.to_vec();
        let mut bytes = vec![0u8; values.len() * ELEMENT_WIDTH];
        LittleEndian::write_f32_into(&values, &mut bytes);

        Ok(EncodedVector {
            bytes,
            dimensions: dimension as u32,
        })
    }

    fn out_of_range(&self, rendered: &str, dimensions: u32) -> EncodeError {
        EncodeError::OutOfRange {
            dimensions,
            preview: text::truncate_preview(rendered, self.preview_len),
        }
    }
}

impl Default for VectorEncoder {
    fn default() -> Self {
        Self::new(&VectorOpsConfig::default())
    }
}
