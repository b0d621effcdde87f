use graphtiles_rs::{RoadClass, hierarchy};

fn main() -> Result<(), graphtiles_rs::HierarchyError> {
    let lon = -73.9857;
    let lat = 40.7484;

    let level = hierarchy::level_for_road_class(RoadClass::Secondary);
    let mut id = hierarchy::id_for_point(&(lon, lat), level);
    println!("Graph ID: {}", id);

    while id.is_valid() {
        let bounds = hierarchy::bounds_of(id)?;
        println!(
            "level {} tile {}: ({}, {}) -> ({}, {})",
            id.level(),
            id.tile_index(),
            bounds.min().x,
            bounds.min().y,
            bounds.max().x,
            bounds.max().y
        );
        id = hierarchy::parent_of(id);
    }

    Ok(())
}
