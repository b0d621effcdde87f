use crate::core::road_class::RoadClass;

/// Number of regular hierarchy levels (the transit level is counted separately)
pub const NUM_REGULAR_LEVELS: usize = 3;

/// World extents [min_lon, min_lat, max_lon, max_lat]
pub const WORLD_EXTENTS: [f64; 4] = [-180.0, -90.0, 180.0, 90.0];

/// Tile edge length in degrees for each regular level
pub const LEVEL_TILE_SIZES: [f64; NUM_REGULAR_LEVELS] = [2.8125, 0.703125, 0.17578125];

/// Column count for each regular level
pub const LEVEL_COLUMNS: [i32; NUM_REGULAR_LEVELS] = [128, 512, 2048];

/// Row count for each regular level
pub const LEVEL_ROWS: [i32; NUM_REGULAR_LEVELS] = [64, 256, 1024];

/// Label for each regular level
pub const LEVEL_NAMES: [&str; NUM_REGULAR_LEVELS] = ["highway", "arterial", "local"];

/// Least important road class stored at each regular level; everything less
/// important than the last cutoff still lands on the last level
pub const LEVEL_IMPORTANCE: [RoadClass; NUM_REGULAR_LEVELS] =
    [RoadClass::Primary, RoadClass::Tertiary, RoadClass::ServiceOther];

/// Level number of the transit level, one above the last regular level
pub const TRANSIT_LEVEL_NUMBER: u8 = NUM_REGULAR_LEVELS as u8;

/// Tile edge length in degrees of the full-globe transit tiling
pub const TRANSIT_TILE_SIZE: f64 = 0.25;

/// Spatial bins per axis inside a tile, used for sub-tile indexing
pub const BINS_DIM: u16 = 5;

/// Bits of a graph identifier holding the level number
pub(crate) const LEVEL_BITS: u32 = 3;

/// Bits of a graph identifier holding the tile index
pub(crate) const TILE_INDEX_BITS: u32 = 22;

/// Bits of a graph identifier holding the intra-tile object index
pub(crate) const OBJECT_INDEX_BITS: u32 = 21;

/// The invalid graph identifier: all identifier bits set
pub const INVALID_GRAPH_ID: u64 = (1 << (LEVEL_BITS + TILE_INDEX_BITS + OBJECT_INDEX_BITS)) - 1;
