use crate::constants::NETHER_SCALE;

/// Overworld block to Nether block. Floors, so this is lossy for
/// coordinates that are not multiples of the scale.
pub fn overworld_to_nether(x: i32, z: i32) -> (i32, i32) {
    (x.div_euclid(NETHER_SCALE), z.div_euclid(NETHER_SCALE))
}

/// Nether block to Overworld block. Saturates at the `i32` bounds.
pub fn nether_to_overworld(x: i32, z: i32) -> (i32, i32) {
    (x.saturating_mul(NETHER_SCALE), z.saturating_mul(NETHER_SCALE))
}
