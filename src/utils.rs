use crate::vector::ELEMENT_WIDTH;
use byteorder::{ByteOrder, LittleEndian};
use rand::Rng;

/// Lay out `values` in the binary storage format.
pub fn encode_values(values: &[f32]) -> Vec<u8> {
    let mut bytes = vec![0u8; values.len() * ELEMENT_WIDTH];
    LittleEndian::write_f32_into(values, &mut bytes);
    bytes
}

pub fn generate_random_vector(dim: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

pub fn generate_random_vectors(dim: usize, num: usize) -> Vec<Vec<f32>> {
    (0..num).map(|_| generate_random_vector(dim)).collect()
}

/// Random values that are never zero, usable as divisors.
pub fn generate_nonzero_vector(dim: usize) -> Vec<f32> {
    let mut rng = rand::thread_rng();
    (0..dim)
        .map(|_| {
            let magnitude: f32 = rng.gen_range(0.5..2.0);
            if rng.gen::<bool>() {
                magnitude
            } else {
                -magnitude
            }
        })
        .collect()
}
