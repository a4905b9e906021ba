use crate::types::{Restaurant, StarredEntry, StarredRestaurantView, UNKNOWN_RESTAURANT_NAME};

/// Pure projection helpers that join starred entries with catalog records.
pub struct Projector;

impl Projector {
    /// Builds the `{id, comment, name}` view for a starred entry.
    ///
    /// A missing catalog match never faults; the name falls back to
    /// [`UNKNOWN_RESTAURANT_NAME`].
    pub fn starred_view(entry: &StarredEntry, restaurant: Option<&Restaurant>) -> StarredRestaurantView {
        StarredRestaurantView {
            id: entry.id.clone(),
            comment: entry.comment.clone(),
            name: restaurant
                .map(|restaurant| restaurant.name.clone())
                .unwrap_or_else(|| UNKNOWN_RESTAURANT_NAME.to_string()),
        }
    }
}
