use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::PointFileError;
use crate::math::Point2;

type Key = (String, String);

/// Shared cache of loaded point files, keyed by path and unit.
///
/// Repeated requests for the same key return the same allocation without
/// re-reading the file. The same path in a different unit is a separate
/// entry.
#[derive(Debug, Default)]
pub struct PointFileCache {
    entries: Mutex<HashMap<Key, Arc<[Point2]>>>,
}

impl PointFileCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached points for `(path, unit)`, loading the file on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the file has to be loaded and loading fails.
    pub fn load(&self, path: &str, unit: &str) -> Result<Arc<[Point2]>, PointFileError> {
        let key = (path.to_owned(), unit.to_owned());
        if let Some(points) = self.lock().get(&key) {
            tracing::trace!(path, unit, "point file cache hit");
            return Ok(Arc::clone(points));
        }
        // Loaded outside the lock; a concurrent load of the same key keeps
        // whichever entry landed first.
        let loaded: Arc<[Point2]> = super::load(path, unit)?.into();
        let mut entries = self.lock();
        Ok(Arc::clone(entries.entry(key).or_insert(loaded)))
    }

    /// Inserts already-parsed points under `(path, unit)`.
    ///
    /// Inserting identical content again returns the existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`PointFileError::CacheConflict`] if the key already holds
    /// different content.
    pub fn insert(
        &self,
        path: &str,
        unit: &str,
        points: Vec<Point2>,
    ) -> Result<Arc<[Point2]>, PointFileError> {
        let key = (path.to_owned(), unit.to_owned());
        let mut entries = self.lock();
        if let Some(existing) = entries.get(&key) {
            if existing.as_ref() != points.as_slice() {
                return Err(PointFileError::CacheConflict {
                    path: path.to_owned(),
                    unit: unit.to_owned(),
                });
            }
            return Ok(Arc::clone(existing));
        }
        let points: Arc<[Point2]> = points.into();
        entries.insert(key, Arc::clone(&points));
        Ok(points)
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Key, Arc<[Point2]>>> {
        // The map is never left half-updated, so a poisoned lock is still usable.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Point2> {
        vec![Point2::new(0.0, 1.0), Point2::new(1.0, -1.0), Point2::new(-1.0, -1.0)]
    }

    #[test]
    fn insert_then_reinsert_same_content() {
        let cache = PointFileCache::new();
        let a = cache.insert("tri.dat", "mm", triangle()).unwrap();
        let b = cache.insert("tri.dat", "mm", triangle()).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn conflicting_content_is_rejected() {
        let cache = PointFileCache::new();
        cache.insert("tri.dat", "mm", triangle()).unwrap();
        let mut other = triangle();
        other[0].y = 2.0;
        assert!(matches!(
            cache.insert("tri.dat", "mm", other),
            Err(PointFileError::CacheConflict { .. })
        ));
    }

    #[test]
    fn unit_is_part_of_the_key() {
        let cache = PointFileCache::new();
        cache.insert("tri.dat", "mm", triangle()).unwrap();
        cache.insert("tri.dat", "cm", triangle()).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn load_hits_inserted_entry_without_reading() {
        let cache = PointFileCache::new();
        let a = cache.insert("/nonexistent/tri.dat", "mm", triangle()).unwrap();
        let b = cache.load("/nonexistent/tri.dat", "mm").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
