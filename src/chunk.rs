use crate::constants::{get_chunk_span, CHUNK_CENTER_OFFSET, CHUNK_SIZE};

/// Chunk containing block `(x, z)`. Rounds toward negative infinity, so
/// block -1 lives in chunk -1.
pub fn chunk_of(x: i32, z: i32) -> (i32, i32) {
    (x.div_euclid(CHUNK_SIZE), z.div_euclid(CHUNK_SIZE))
}

/// North-west block of a chunk. Chunks beyond the block range saturate.
pub fn chunk_origin(chunk_x: i32, chunk_z: i32) -> (i32, i32) {
    (
        chunk_x.saturating_mul(CHUNK_SIZE),
        chunk_z.saturating_mul(CHUNK_SIZE),
    )
}

pub fn chunk_center(x: i32, z: i32) -> (i32, i32) {
    let (chunk_x, chunk_z) = chunk_of(x, z);
    let (x0, z0) = chunk_origin(chunk_x, chunk_z);
    (x0 + CHUNK_CENTER_OFFSET, z0 + CHUNK_CENTER_OFFSET)
}

/// Corners of the chunk containing `(x, z)` in NW, NE, SW, SE order.
pub fn chunk_corners(x: i32, z: i32) -> [(i32, i32); 4] {
    let (chunk_x, chunk_z) = chunk_of(x, z);
    let ((x0, z0), (x1, z1)) = chunk_block_bounds(chunk_x, chunk_z);
    [(x0, z0), (x1, z0), (x0, z1), (x1, z1)]
}

/// Inclusive `(min, max)` block corners of a chunk.
pub fn chunk_block_bounds(chunk_x: i32, chunk_z: i32) -> ((i32, i32), (i32, i32)) {
    let (x0, z0) = chunk_origin(chunk_x, chunk_z);
    let span = get_chunk_span();
    ((x0, z0), (x0.saturating_add(span), z0.saturating_add(span)))
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn chunk_of_divides_by_sixteen() {
        assert_eq!(chunk_of(123, 456), (7, 28));
        assert_eq!(chunk_of(0, 15), (0, 0));
        assert_eq!(chunk_of(16, 31), (1, 1));
    }

    #[test]
    fn chunk_of_floors_negative_blocks() {
        assert_eq!(chunk_of(-1, -1), (-1, -1));
        assert_eq!(chunk_of(-16, -17), (-1, -2));
        assert_eq!(chunk_of(i32::MIN, i32::MAX), (-134_217_728, 134_217_727));
    }

    #[test]
    fn chunk_center_offsets_by_seven() {
        assert_eq!(chunk_center(123, 456), (119, 455));
        assert_eq!(chunk_center(-1, -1), (-9, -9));
        assert_eq!(chunk_center(0, 0), (7, 7));
    }

    #[test]
    fn chunk_corners_are_ordered_nw_ne_sw_se() {
        assert_eq!(
            chunk_corners(123, 456),
            [(112, 448), (127, 448), (112, 463), (127, 463)]
        );
        assert_eq!(
            chunk_corners(-5, 3),
            [(-16, 0), (-1, 0), (-16, 15), (-1, 15)]
        );
    }

    #[test]
    fn extreme_blocks_stay_in_range() {
        assert_eq!(chunk_corners(i32::MAX, i32::MIN)[1], (i32::MAX, i32::MIN));
        assert_eq!(chunk_corners(i32::MIN, i32::MAX)[2], (i32::MIN, i32::MAX));
        assert_eq!(chunk_center(i32::MAX, i32::MIN), (i32::MAX - 8, i32::MIN + 7));
    }

    #[test]
    fn out_of_range_chunks_saturate() {
        assert_eq!(chunk_origin(i32::MAX, i32::MIN), (i32::MAX, i32::MIN));
        assert_eq!(chunk_block_bounds(i32::MAX, 0).1, (i32::MAX, 15));
    }

    #[test]
    fn every_block_lies_inside_its_chunk_bounds() {
        let mut rng = rand::rng();
        for _ in 0..5_000 {
            let x = rng.random_range(-30_000_000..30_000_000);
            let z = rng.random_range(-30_000_000..30_000_000);
            let (chunk_x, chunk_z) = chunk_of(x, z);
            let ((x0, z0), (x1, z1)) = chunk_block_bounds(chunk_x, chunk_z);
            assert!(x0 <= x && x <= x1);
            assert!(z0 <= z && z <= z1);
            assert_eq!(chunk_of(x0, z1), (chunk_x, chunk_z));
        }
    }
}
