pub mod constants;
pub mod road_class;
pub mod tiling;

pub use constants::{
    BINS_DIM, INVALID_GRAPH_ID, LEVEL_COLUMNS, LEVEL_IMPORTANCE, LEVEL_NAMES, LEVEL_ROWS,
    LEVEL_TILE_SIZES, NUM_REGULAR_LEVELS, TRANSIT_LEVEL_NUMBER, TRANSIT_TILE_SIZE, WORLD_EXTENTS,
};
pub use road_class::RoadClass;
pub use tiling::Tiling;
