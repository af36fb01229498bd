pub const CHUNK_SIZE: i32 = 16;
pub const CHUNK_CENTER_OFFSET: i32 = 7;
pub const NETHER_SCALE: i32 = 8;

pub const SLIME_SEED_MULTIPLIER: u32 = 0x1f1f_1f1f;
pub const SLIME_CHUNK_ODDS: u32 = 10;

pub const MAX_SCAN_RADIUS: i32 = 256;
pub const MAX_DUMP_COUNT: usize = 100_000;

pub fn get_chunk_span() -> i32 {
    CHUNK_SIZE - 1
}
