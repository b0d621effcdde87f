//! # graphtiles-rs
//!
//! A multi-resolution tiling and identifier scheme for hierarchical road and
//! transit networks. Geographic space is partitioned into uniform square
//! tiles at three regular levels (highway, arterial, local) plus a coarse
//! full-globe transit level; tiles and the objects inside them are addressed
//! by compact [`GraphId`] values.
//!
//! ### 1. Classifying a road and locating its tile
//!
//! ```
//! use graphtiles_rs::{RoadClass, hierarchy};
//!
//! let level = hierarchy::level_for_road_class(RoadClass::Secondary);
//! assert_eq!(level, 1);
//!
//! let id = hierarchy::id_for_point(&(-73.9857, 40.7484), level);
//! assert!(id.is_valid());
//! println!("{}", id);
//! ```
//!
//! ### 2. Finding the tiles under a bounding box
//!
//! ```
//! use graphtiles_rs::geo_types::{Rect, coord};
//! use graphtiles_rs::hierarchy;
//!
//! let bbox = Rect::new(
//!     coord! { x: -74.25, y: 40.5 },
//!     coord! { x: -73.7, y: 40.9 },
//! );
//!
//! let local = hierarchy::ids_in_bbox(&bbox, 2);
//! let every_level = hierarchy::ids_in_bbox_all_levels(&bbox);
//! assert!(every_level.len() > local.len());
//! ```
//!
//! ### 3. Walking up the hierarchy
//!
//! ```
//! use graphtiles_rs::hierarchy;
//!
//! # fn main() -> Result<(), graphtiles_rs::HierarchyError> {
//! let id = hierarchy::id_for_point(&(13.405, 52.52), 2);
//! let bounds = hierarchy::bounds_of(id)?;
//! println!("tile spans ({}, {}) -> ({}, {})",
//!     bounds.min().x, bounds.min().y, bounds.max().x, bounds.max().y);
//!
//! let parent = hierarchy::parent_of(id);
//! assert_eq!(parent.level(), 1);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::hierarchy;
pub use crate::api::level::TileLevel;
pub use crate::core::constants::{
    BINS_DIM, INVALID_GRAPH_ID, NUM_REGULAR_LEVELS, TRANSIT_LEVEL_NUMBER, TRANSIT_TILE_SIZE,
    WORLD_EXTENTS,
};
pub use crate::core::road_class::RoadClass;
pub use crate::core::tiling::Tiling;
pub use crate::util::{Coordinate, GraphId, HierarchyError};

pub use geo_types;
