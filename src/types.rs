use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Heading {
    SameLocation,
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Heading {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "same_location" => Some(Self::SameLocation),
            "north" => Some(Self::North),
            "south" => Some(Self::South),
            "east" => Some(Self::East),
            "west" => Some(Self::West),
            "northeast" => Some(Self::Northeast),
            "northwest" => Some(Self::Northwest),
            "southeast" => Some(Self::Southeast),
            "southwest" => Some(Self::Southwest),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SameLocation => "Same location",
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Northeast => "Northeast",
            Self::Northwest => "Northwest",
            Self::Southeast => "Southeast",
            Self::Southwest => "Southwest",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Block (fine) coordinates on the horizontal plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BlockPos {
    pub x: i32,
    pub z: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SlimeChunk {
    pub chunk: ChunkPos,
    pub center: BlockPos,
    #[serde(rename = "taxicabDistance")]
    pub taxicab_distance: i32,
}
