use crate::types::Heading;

fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

pub fn heading_between(x1: i32, z1: i32, x2: i32, z2: i32) -> Heading {
    let dx = x2 as i64 - x1 as i64;
    let dz = z2 as i64 - z1 as i64;
    if dx == 0 && dz == 0 {
        return Heading::SameLocation;
    }
    if dx == 0 {
        return if dz < 0 { Heading::North } else { Heading::South };
    }
    if dz == 0 {
        return if dx < 0 { Heading::West } else { Heading::East };
    }
    match (dz < 0, dx > 0) {
        (true, true) => Heading::Northeast,
        (true, false) => Heading::Northwest,
        (false, true) => Heading::Southeast,
        (false, false) => Heading::Southwest,
    }
}

/// Straight-line distance rounded to the nearest block.
pub fn euclidean_distance(x1: i32, z1: i32, x2: i32, z2: i32) -> i32 {
    let dx = (x2 as i64 - x1 as i64) as f64;
    let dz = (z2 as i64 - z1 as i64) as f64;
    let distance = (dx * dx + dz * dz).sqrt().round();
    // Float-to-int casts saturate.
    distance as i32
}

pub fn direction_and_distance(x1: i32, z1: i32, x2: i32, z2: i32) -> (Heading, i32) {
    (
        heading_between(x1, z1, x2, z2),
        euclidean_distance(x1, z1, x2, z2),
    )
}

pub fn taxicab_distance(a: (i32, i32), b: (i32, i32)) -> i32 {
    let dx = (b.0 as i64 - a.0 as i64).abs();
    let dz = (b.1 as i64 - a.1 as i64).abs();
    saturate(dx + dz)
}
