use crate::chunk::chunk_of;
use crate::constants::{SLIME_CHUNK_ODDS, SLIME_SEED_MULTIPLIER};
use crate::rng::Mt19937;

/// Low 32 bits of `a * b`, built from 16-bit partial products.
///
/// The high-half product `a16 * b16` only affects bits 32 and up, so it is
/// never computed.
pub fn mul32_lo(a: u32, b: u32) -> u32 {
    let a00 = a & 0xffff;
    let a16 = a >> 16;
    let b00 = b & 0xffff;
    let b16 = b >> 16;

    let c00 = a00.wrapping_mul(b00);
    let mut c16 = c00 >> 16;
    c16 = c16.wrapping_add(a16.wrapping_mul(b00));
    c16 &= 0xffff;
    c16 = c16.wrapping_add(a00.wrapping_mul(b16));

    let lo = c00 & 0xffff;
    let hi = c16 & 0xffff;
    (hi << 16) | lo
}

/// Seed fed to the generator for chunk `(chunk_x, chunk_z)`. Negative
/// coordinates contribute their two's-complement bit pattern.
pub fn slime_seed(chunk_x: i32, chunk_z: i32) -> u32 {
    mul32_lo(chunk_x as u32, SLIME_SEED_MULTIPLIER) ^ chunk_z as u32
}

pub fn is_slime_chunk(chunk_x: i32, chunk_z: i32) -> bool {
    let mut rng = Mt19937::new(slime_seed(chunk_x, chunk_z));
    rng.next_u32() % SLIME_CHUNK_ODDS == 0
}

pub fn is_slime_chunk_at_block(x: i32, z: i32) -> bool {
    let (chunk_x, chunk_z) = chunk_of(x, z);
    is_slime_chunk(chunk_x, chunk_z)
}
