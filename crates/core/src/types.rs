use serde::{Deserialize, Serialize};

/// A restaurant record as published by the catalog.
///
/// The catalog is owned outside this service; we only ever read these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
}

/// A single entry in a user's starred-restaurants list.
///
/// `restaurant_id` must point at a catalog restaurant when the entry is
/// created, but the catalog may drop the restaurant later; readers handle
/// that by falling back to [`UNKNOWN_RESTAURANT_NAME`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarredEntry {
    pub id: String,
    pub restaurant_id: String,
    pub comment: Option<String>,
}

/// Display-ready projection of a starred entry joined with its restaurant.
///
/// `comment` always serializes, as JSON `null` when no comment is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarredRestaurantView {
    pub id: String,
    pub comment: Option<String>,
    pub name: String,
}

/// Name substituted when a starred entry's restaurant is missing from the
/// catalog.
pub const UNKNOWN_RESTAURANT_NAME: &str = "Unknown";
