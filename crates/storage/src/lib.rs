use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use uuid::Uuid;

use starlist_core::types::{Restaurant, StarredEntry};

/// Errors raised by starred-list store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StarredStoreError {
    #[error("no starred entry with id {0}")]
    NotFound(String),
}

/// Owned handle to the mutable starred-entry collection.
///
/// State lives in process memory and resets on restart. The collection is
/// guarded by a mutex so that each read-modify-write sequence is atomic on a
/// multi-threaded runtime; every operation completes without blocking on
/// anything but the lock itself. Clones share the same underlying state, so
/// the handle can be stored in the router state and cloned per request.
#[derive(Clone, Default)]
pub struct StarredStore {
    entries: Arc<Mutex<Vec<StarredEntry>>>,
}

impl StarredStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the provided entries.
    pub fn with_entries(entries: Vec<StarredEntry>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    /// Creates a store seeded with the two example entries the service
    /// starts with.
    pub fn seeded() -> Self {
        Self::with_entries(vec![
            StarredEntry {
                id: "a7272cd9-26fb-44b5-8d53-9781f55175a1".to_string(),
                restaurant_id: "869c848c-7a58-4ed6-ab88-72ee2e8e677c".to_string(),
                comment: Some("Best pho in NYC".to_string()),
            },
            StarredEntry {
                id: "8df59b21-2152-4f9b-9200-95c19aa88226".to_string(),
                restaurant_id: "e8036613-4b72-46f6-ab5e-edd2fc7c4fe4".to_string(),
                comment: Some("Their lunch special is the best!".to_string()),
            },
        ])
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<StarredEntry>> {
        // A poisoned lock only means another request panicked mid-write;
        // the collection itself is still usable.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns every entry in insertion order.
    pub fn list(&self) -> Vec<StarredEntry> {
        self.lock().clone()
    }

    /// Looks up a single entry by its id.
    pub fn get(&self, id: &str) -> Result<StarredEntry, StarredStoreError> {
        self.lock()
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or_else(|| StarredStoreError::NotFound(id.to_string()))
    }

    /// Appends a new entry referencing `restaurant_id` and returns it.
    ///
    /// The entry id is a freshly generated UUID, so it is distinct from
    /// every existing entry's id. The comment starts out unset. The caller
    /// is responsible for checking that the restaurant exists in the
    /// catalog first.
    pub fn insert(&self, restaurant_id: &str) -> StarredEntry {
        let entry = StarredEntry {
            id: Uuid::new_v4().to_string(),
            restaurant_id: restaurant_id.to_string(),
            comment: None,
        };
        self.lock().push(entry.clone());
        entry
    }

    /// Removes the entry with the provided id.
    ///
    /// Fails with [`StarredStoreError::NotFound`] when the collection size
    /// did not change, meaning no entry carried that id.
    pub fn remove(&self, id: &str) -> Result<(), StarredStoreError> {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Err(StarredStoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Overwrites the comment of the entry with the provided id in place.
    ///
    /// Only the comment field changes; the entry keeps its id, its
    /// restaurant reference, and its position in the collection.
    pub fn set_comment(
        &self,
        id: &str,
        comment: Option<String>,
    ) -> Result<(), StarredStoreError> {
        let mut entries = self.lock();
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| StarredStoreError::NotFound(id.to_string()))?;
        entry.comment = comment;
        Ok(())
    }

    /// Returns the number of entries currently stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` when the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// Read-only view over the restaurant catalog.
///
/// The catalog is owned and populated outside this service; this handle
/// only supports exact-id lookup and is never mutated here.
#[derive(Clone)]
pub struct RestaurantCatalog {
    restaurants: Arc<Vec<Restaurant>>,
}

impl RestaurantCatalog {
    /// Wraps the provided catalog records.
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants: Arc::new(restaurants),
        }
    }

    /// Creates the catalog the service boots with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Restaurant {
                id: "869c848c-7a58-4ed6-ab88-72ee2e8e677c".to_string(),
                name: "Phở Bắc".to_string(),
            },
            Restaurant {
                id: "e8036613-4b72-46f6-ab5e-edd2fc7c4fe4".to_string(),
                name: "Brooklyn Heights Deli".to_string(),
            },
            Restaurant {
                id: "f08cbff7-418a-4c7c-b8ba-6e784f0b4b67".to_string(),
                name: "Taqueria Los Hermanos".to_string(),
            },
            Restaurant {
                id: "c36ef3b2-8a83-4d42-9a43-3b10f0b33d4a".to_string(),
                name: "Sushi Yasuda".to_string(),
            },
        ])
    }

    /// Finds a restaurant by exact id match.
    pub fn find(&self, id: &str) -> Option<Restaurant> {
        self.restaurants
            .iter()
            .find(|restaurant| restaurant.id == id)
            .cloned()
    }
}
