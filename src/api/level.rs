use crate::core::road_class::RoadClass;
use crate::core::tiling::Tiling;

/// One layer of the tile hierarchy, pairing a uniform tiling with the road
/// importance cutoff for what is stored there.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLevel {
    /// Level number; regular levels count up contiguously from 0
    pub level: u8,
    /// Least important road class stored at this level
    pub importance: RoadClass,
    /// Human-readable label ("highway", "arterial", ...)
    pub name: &'static str,
    /// The uniform grid partitioning this level
    pub tiling: Tiling,
}
