use ndarray::Array1;

/// Byte width of one vector component (binary32).
pub const ELEMENT_WIDTH: usize = std::mem::size_of::<f32>();

/// Largest dimension count the binary storage format can carry.
pub const MAX_DIMENSIONS: u32 = 16383;

/// Number of bytes needed to store `dimensions` components.
pub fn dimension_bytes(dimensions: u32) -> usize {
    dimensions as usize * ELEMENT_WIDTH
}

/// A float vector decoded from the binary storage format.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedVector {
    pub data: Array1<f32>,
}

/// The output of an elementwise operation. Same shape as its operands.
pub type OperationResult = DecodedVector;

impl DecodedVector {
    pub fn new(data: Array1<f32>) -> Self {
        Self { data }
    }

    pub fn from_vec(values: Vec<f32>) -> Self {
        Self {
            data: Array1::from_vec(values),
        }
    }

    pub fn dimension(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.data.to_vec()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.data.iter()
    }
}

impl From<Vec<f32>> for DecodedVector {
    fn from(values: Vec<f32>) -> Self {
        Self::from_vec(values)
    }
}
