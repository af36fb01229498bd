use crate::chunk::{chunk_of, chunk_origin};
use crate::constants::{CHUNK_CENTER_OFFSET, MAX_SCAN_RADIUS};
use crate::navigation::taxicab_distance;
use crate::slime::is_slime_chunk;
use crate::types::{BlockPos, ChunkPos, SlimeChunk};

fn describe(chunk: ChunkPos, from: (i32, i32)) -> SlimeChunk {
    let (x0, z0) = chunk_origin(chunk.x, chunk.z);
    let center = (
        x0.saturating_add(CHUNK_CENTER_OFFSET),
        z0.saturating_add(CHUNK_CENTER_OFFSET),
    );
    SlimeChunk {
        chunk,
        center: BlockPos {
            x: center.0,
            z: center.1,
        },
        taxicab_distance: taxicab_distance(from, center),
    }
}

/// Slime chunks inside the inclusive chunk rectangle `min..=max`, ordered by
/// z and then x. An inverted rectangle yields nothing.
pub fn slime_chunks_in_area(min: (i32, i32), max: (i32, i32)) -> Vec<ChunkPos> {
    let mut out = Vec::new();
    for z in min.1..=max.1 {
        for x in min.0..=max.0 {
            if is_slime_chunk(x, z) {
                out.push(ChunkPos { x, z });
            }
        }
    }
    out
}

/// Slime chunks within `radius` chunks (square) of the chunk holding block
/// `(x, z)`. The radius is clamped to `0..=MAX_SCAN_RADIUS`.
pub fn slime_chunks_around(x: i32, z: i32, radius: i32) -> Vec<SlimeChunk> {
    let radius = radius.clamp(0, MAX_SCAN_RADIUS);
    let (chunk_x, chunk_z) = chunk_of(x, z);
    let min = (chunk_x.saturating_sub(radius), chunk_z.saturating_sub(radius));
    let max = (chunk_x.saturating_add(radius), chunk_z.saturating_add(radius));
    slime_chunks_in_area(min, max)
        .into_iter()
        .map(|chunk| describe(chunk, (x, z)))
        .collect()
}

/// Closest slime chunk to block `(x, z)`, searching outward one square ring
/// of chunks at a time. Within a ring the chunk whose center has the
/// smallest taxicab distance wins, ties going to the lower chunk position.
pub fn nearest_slime_chunk(x: i32, z: i32, max_radius: i32) -> Option<SlimeChunk> {
    let max_radius = max_radius.clamp(0, MAX_SCAN_RADIUS);
    let (chunk_x, chunk_z) = chunk_of(x, z);
    for ring in 0..=max_radius {
        let mut best: Option<SlimeChunk> = None;
        for chunk in ring_chunks(chunk_x, chunk_z, ring) {
            if !is_slime_chunk(chunk.x, chunk.z) {
                continue;
            }
            let candidate = describe(chunk, (x, z));
            let better = match &best {
                None => true,
                Some(current) => {
                    (candidate.taxicab_distance, candidate.chunk)
                        < (current.taxicab_distance, current.chunk)
                }
            };
            if better {
                best = Some(candidate);
            }
        }
        if best.is_some() {
            return best;
        }
    }
    None
}

fn ring_chunks(chunk_x: i32, chunk_z: i32, ring: i32) -> Vec<ChunkPos> {
    if ring == 0 {
        return vec![ChunkPos {
            x: chunk_x,
            z: chunk_z,
        }];
    }
    let x_min = chunk_x.saturating_sub(ring);
    let x_max = chunk_x.saturating_add(ring);
    let z_min = chunk_z.saturating_sub(ring);
    let z_max = chunk_z.saturating_add(ring);
    let mut out = Vec::new();
    for z in z_min..=z_max {
        for x in x_min..=x_max {
            let on_edge = z == z_min || z == z_max || x == x_min || x == x_max;
            if on_edge {
                out.push(ChunkPos { x, z });
            }
        }
    }
    out
}
