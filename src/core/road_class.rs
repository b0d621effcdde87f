use serde::{Deserialize, Serialize};

/// Road classification, ordered from most to least important.
///
/// The derived ordering follows declaration order, so comparisons read
/// "at least as important as": `RoadClass::Motorway <= RoadClass::Primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RoadClass {
    Motorway,
    Trunk,
    Primary,
    Secondary,
    Tertiary,
    Unclassified,
    Residential,
    ServiceOther,
}

impl RoadClass {
    /// Every road class in importance order.
    pub const ALL: [RoadClass; 8] = [
        RoadClass::Motorway,
        RoadClass::Trunk,
        RoadClass::Primary,
        RoadClass::Secondary,
        RoadClass::Tertiary,
        RoadClass::Unclassified,
        RoadClass::Residential,
        RoadClass::ServiceOther,
    ];
}
