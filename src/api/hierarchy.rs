//! Queries over the tile hierarchy: the level table, spatial lookup of
//! identifiers, identifier bounds, and parent navigation.
//!
//! The level table and the transit level are materialized once, on first
//! use, and shared read-only for the rest of the process. Expected absences
//! (no coverage, no tiles at a level, no parent above level 0) come back as
//! [`GraphId::INVALID`] or an empty list; out-of-range arguments to the
//! lookup operations come back as [`HierarchyError`].

use crate::api::level::TileLevel;
use crate::core::constants::{
    BINS_DIM, LEVEL_COLUMNS, LEVEL_IMPORTANCE, LEVEL_NAMES, LEVEL_ROWS, LEVEL_TILE_SIZES,
    NUM_REGULAR_LEVELS, TRANSIT_LEVEL_NUMBER, TRANSIT_TILE_SIZE, WORLD_EXTENTS,
};
use crate::core::road_class::RoadClass;
use crate::core::tiling::Tiling;
use crate::util::coord::Coordinate;
use crate::util::error::HierarchyError;
use crate::util::identifier::GraphId;
use geo_types::{Rect, coord};
use once_cell::sync::Lazy;

static LEVELS: Lazy<Vec<TileLevel>> = Lazy::new(|| {
    let levels: Vec<TileLevel> = (0..NUM_REGULAR_LEVELS)
        .map(|n| TileLevel {
            level: n as u8,
            importance: LEVEL_IMPORTANCE[n],
            name: LEVEL_NAMES[n],
            tiling: Tiling::new(
                &(WORLD_EXTENTS[0], WORLD_EXTENTS[1]),
                LEVEL_TILE_SIZES[n],
                LEVEL_COLUMNS[n],
                LEVEL_ROWS[n],
                BINS_DIM,
            ),
        })
        .collect();
    log::debug!("materialized {} regular tile levels", levels.len());
    levels
});

static TRANSIT_LEVEL: Lazy<TileLevel> = Lazy::new(|| TileLevel {
    level: TRANSIT_LEVEL_NUMBER,
    importance: RoadClass::ServiceOther,
    name: "transit",
    tiling: Tiling::from_bounds(
        Rect::new(
            coord! { x: WORLD_EXTENTS[0], y: WORLD_EXTENTS[1] },
            coord! { x: WORLD_EXTENTS[2], y: WORLD_EXTENTS[3] },
        ),
        TRANSIT_TILE_SIZE,
        BINS_DIM,
    ),
});

/// The regular hierarchy levels, indexable by level number.
pub fn levels() -> &'static [TileLevel] {
    &LEVELS
}

/// The separately numbered transit level; not part of the regular table.
pub fn transit_level() -> &'static TileLevel {
    &TRANSIT_LEVEL
}

/// The highest level number in use anywhere in the hierarchy, which is the
/// transit level's number.
pub fn max_level() -> u8 {
    transit_level().level
}

/// Returns the tiling for a regular or transit level.
///
/// # Errors
///
/// [`HierarchyError::InvalidLevel`] when the level number names neither.
pub fn tiling_for(level: u8) -> Result<&'static Tiling, HierarchyError> {
    if let Some(tile_level) = levels().get(level as usize) {
        Ok(&tile_level.tiling)
    } else if level == transit_level().level {
        Ok(&transit_level().tiling)
    } else {
        Err(HierarchyError::InvalidLevel(level))
    }
}

/// Returns the regular level a road of the given class is stored at.
///
/// Total over every [`RoadClass`]: classes less important than the last
/// cutoff land on the last regular level.
pub fn level_for_road_class(road_class: RoadClass) -> u8 {
    let levels = levels();
    if road_class <= levels[0].importance {
        0
    } else if road_class <= levels[1].importance {
        1
    } else {
        levels[levels.len() - 1].level
    }
}

/// Returns the identifier of the tile containing the point at the given
/// regular level.
///
/// Returns [`GraphId::INVALID`] when the level does not index the regular
/// table or the point lies outside the level's coverage; absence of coverage
/// is a normal outcome, not an error.
///
/// # Example
/// ```
/// use graphtiles_rs::hierarchy;
///
/// let id = hierarchy::id_for_point(&(0.25, 0.25), 0);
/// assert!(id.is_valid());
/// assert_eq!(id.tile_index(), 4160);
/// ```
pub fn id_for_point<C: Coordinate>(point: &C, level: u8) -> GraphId {
    let Some(tile_level) = levels().get(level as usize) else {
        return GraphId::INVALID;
    };
    match tile_level.tiling.tile_index_of(point) {
        Some(tile_index) => GraphId::new(tile_index as u32, level, 0),
        None => GraphId::INVALID,
    }
}

/// Returns the identifiers of every tile at the given regular level whose
/// rectangle intersects the bounding box, in the tiling's enumeration order.
///
/// An out-of-range level yields an empty list.
pub fn ids_in_bbox(bbox: &Rect<f64>, level: u8) -> Vec<GraphId> {
    if ![bbox.min().x, bbox.min().y, bbox.max().x, bbox.max().y]
        .iter()
        .all(|v| v.is_finite())
    {
        log::warn!("rejecting bounding box query with non-finite coordinates");
        return Vec::new();
    }
    let Some(tile_level) = levels().get(level as usize) else {
        return Vec::new();
    };
    tile_level
        .tiling
        .tile_list(bbox)
        .into_iter()
        .map(|tile_index| GraphId::new(tile_index as u32, level, 0))
        .collect()
}

/// Returns the identifiers of every tile intersecting the bounding box at
/// every regular level, in increasing level order. The transit level is
/// excluded, and nothing is de-duplicated: each level has its own tiling.
pub fn ids_in_bbox_all_levels(bbox: &Rect<f64>) -> Vec<GraphId> {
    levels()
        .iter()
        .flat_map(|tile_level| ids_in_bbox(bbox, tile_level.level))
        .collect()
}

/// Returns the geographic rectangle of the tile an identifier names.
///
/// Transit-level identifiers are supported alongside regular ones.
///
/// # Errors
///
/// [`HierarchyError::InvalidGraphId`] for the invalid sentinel or a tile
/// index outside the level's tiling; [`HierarchyError::InvalidLevel`] for an
/// unknown level number.
pub fn bounds_of(id: GraphId) -> Result<Rect<f64>, HierarchyError> {
    if !id.is_valid() {
        return Err(HierarchyError::InvalidGraphId(id));
    }
    let tiling = tiling_for(id.level())?;
    tiling
        .bounds_of(id.tile_index() as i32)
        .ok_or(HierarchyError::InvalidGraphId(id))
}

/// Returns the identifier of the coarser-level tile containing the child
/// tile, or [`GraphId::INVALID`] for a level 0 child (the hierarchy root)
/// or an invalid identifier.
pub fn parent_of(child: GraphId) -> GraphId {
    if !child.is_valid() || child.level() == 0 {
        return GraphId::INVALID;
    }
    let parent_level = child.level() - 1;
    let Ok(child_tiling) = tiling_for(child.level()) else {
        return GraphId::INVALID;
    };
    let Ok(parent_tiling) = tiling_for(parent_level) else {
        return GraphId::INVALID;
    };
    let Some(origin) = child_tiling.origin_of(child.tile_index() as i32) else {
        return GraphId::INVALID;
    };

    // probe at the child tile's center: for the nested regular tilings this
    // is interior to the one parent tile that contains the child, clear of
    // any shared grid line
    let half = child_tiling.tile_size() / 2.0;
    let probe = (origin.x() + half, origin.y() + half);
    match parent_tiling.tile_index_of(&probe) {
        Some(parent_index) => GraphId::new(parent_index as u32, parent_level, 0),
        None => GraphId::INVALID,
    }
}
