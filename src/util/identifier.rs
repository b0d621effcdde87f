use crate::core::constants::{INVALID_GRAPH_ID, LEVEL_BITS, OBJECT_INDEX_BITS, TILE_INDEX_BITS};
use serde::{Deserialize, Serialize};
use std::fmt;

const LEVEL_MASK: u64 = (1 << LEVEL_BITS) - 1;
const TILE_INDEX_MASK: u64 = (1 << TILE_INDEX_BITS) - 1;
const OBJECT_INDEX_MASK: u64 = (1 << OBJECT_INDEX_BITS) - 1;

/// Compact identifier for a tile, or for an object inside a tile.
///
/// The identifier packs a `(tile_index, level, object_index)` triple into a
/// single `u64`:
///
/// | Bits   | Width | Field        | Description                             |
/// |--------|-------|--------------|-----------------------------------------|
/// | 0-2    | 3     | Level        | Hierarchy level number                  |
/// | 3-24   | 22    | Tile index   | Row-major tile index within the level   |
/// | 25-45  | 21    | Object index | Index of an object inside the tile      |
/// | 46-63  | 18    | (unused)     | Zero for every valid identifier         |
///
/// The value with all 46 identifier bits set is the invalid sentinel. An
/// identifier that names a tile rather than an object carries object index 0.
///
/// # Example
/// ```
/// use graphtiles_rs::GraphId;
///
/// let id = GraphId::new(4160, 0, 0);
/// assert!(id.is_valid());
/// assert_eq!(id.tile_index(), 4160);
/// assert_eq!(id.to_string(), "0/4160/0");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GraphId {
    value: u64,
}

impl GraphId {
    /// The distinguished invalid identifier.
    pub const INVALID: GraphId = GraphId {
        value: INVALID_GRAPH_ID,
    };

    /// Packs the triple into an identifier. Returns [`GraphId::INVALID`] when
    /// any field exceeds its bit width; the all-bits-set triple is reserved
    /// for the sentinel itself.
    pub fn new(tile_index: u32, level: u8, object_index: u32) -> Self {
        if u64::from(level) > LEVEL_MASK
            || u64::from(tile_index) > TILE_INDEX_MASK
            || u64::from(object_index) > OBJECT_INDEX_MASK
        {
            return Self::INVALID;
        }
        Self {
            value: u64::from(level)
                | u64::from(tile_index) << LEVEL_BITS
                | u64::from(object_index) << (LEVEL_BITS + TILE_INDEX_BITS),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.value != INVALID_GRAPH_ID
    }

    /// Hierarchy level number.
    pub fn level(&self) -> u8 {
        (self.value & LEVEL_MASK) as u8
    }

    /// Row-major tile index within the level's tiling.
    pub fn tile_index(&self) -> u32 {
        (self.value >> LEVEL_BITS & TILE_INDEX_MASK) as u32
    }

    /// Index of the object inside the tile; 0 when the identifier names the
    /// tile itself.
    pub fn object_index(&self) -> u32 {
        (self.value >> (LEVEL_BITS + TILE_INDEX_BITS) & OBJECT_INDEX_MASK) as u32
    }

    /// The identifier of the tile this identifier belongs to.
    pub fn tile_base(&self) -> GraphId {
        GraphId::new(self.tile_index(), self.level(), 0)
    }

    /// The packed representation.
    pub fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.level(),
            self.tile_index(),
            self.object_index()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_roundtrip() {
        let id = GraphId::new(756_425, 2, 9_000);

        assert!(id.is_valid());
        assert_eq!(id.tile_index(), 756_425);
        assert_eq!(id.level(), 2);
        assert_eq!(id.object_index(), 9_000);
    }

    #[test]
    fn test_invalid_sentinel() {
        assert!(!GraphId::INVALID.is_valid());
        assert_ne!(GraphId::INVALID, GraphId::new(0, 0, 0));

        // the all-bits-set triple is the sentinel, not a valid id
        let all_set = GraphId::new(0x3f_ffff, 7, 0x1f_ffff);
        assert!(!all_set.is_valid());
    }

    #[test]
    fn test_field_overflow_is_invalid() {
        assert!(!GraphId::new(1 << 22, 0, 0).is_valid());
        assert!(!GraphId::new(0, 8, 0).is_valid());
        assert!(!GraphId::new(0, 0, 1 << 21).is_valid());
    }

    #[test]
    fn test_equality_is_field_equality() {
        assert_eq!(GraphId::new(10, 1, 5), GraphId::new(10, 1, 5));
        assert_ne!(GraphId::new(10, 1, 5), GraphId::new(10, 1, 6));
        assert_ne!(GraphId::new(10, 1, 5), GraphId::new(10, 2, 5));
        assert_ne!(GraphId::new(10, 1, 5), GraphId::new(11, 1, 5));
    }

    #[test]
    fn test_tile_base_clears_object_index() {
        let id = GraphId::new(4160, 1, 77);
        let base = id.tile_base();

        assert_eq!(base.tile_index(), 4160);
        assert_eq!(base.level(), 1);
        assert_eq!(base.object_index(), 0);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(GraphId::new(4160, 0, 12).to_string(), "0/4160/12");
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = GraphId::new(2048, 2, 123);
        let json = serde_json::to_string(&id).unwrap();
        let back: GraphId = serde_json::from_str(&json).unwrap();

        assert_eq!(back, id);
    }
}
