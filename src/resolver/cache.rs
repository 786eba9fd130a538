//! Generic resolution cache
//!
//! Stores fully-fetched resource objects keyed by canonical id, so commands
//! can render details after resolving without a second listing call.

use super::ResolveError;
use std::collections::HashMap;

/// Lazily-initialized map from canonical id to a fetched resource object.
///
/// The map stays unallocated until the first write, which lets
/// [`Cache::get_cached`] distinguish "provider never fetched" from "id not
/// in the listing".
#[derive(Debug, Clone)]
pub struct Cache<T> {
    cache: Option<HashMap<String, T>>,
}

impl<T: Clone> Cache<T> {
    pub fn new() -> Self {
        Self { cache: None }
    }

    /// Store a fetched object, allocating the map on first use.
    pub fn add_cached(&mut self, id: String, value: T) {
        self.cache.get_or_insert_with(HashMap::new).insert(id, value);
    }

    /// Look up a previously fetched object by canonical id.
    ///
    /// Fails with [`ResolveError::CacheUninitialized`] when no fetch has
    /// happened yet (a defect in the calling command) and with
    /// [`ResolveError::NotFound`] when the id was not in the listing.
    pub fn get_cached(&self, id: &str) -> Result<T, ResolveError> {
        match &self.cache {
            None => Err(ResolveError::CacheUninitialized(short_type_name::<T>())),
            Some(map) => map
                .get(id)
                .cloned()
                .ok_or_else(|| ResolveError::NotFound(id.to_owned())),
        }
    }
}

impl<T: Clone> Default for Cache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Last path segment of a type name, for error messages.
fn short_type_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cached_before_any_write_is_uninitialized() {
        let cache: Cache<String> = Cache::new();
        assert_eq!(
            cache.get_cached("some-id"),
            Err(ResolveError::CacheUninitialized("String"))
        );
    }

    #[test]
    fn test_get_cached_after_write() {
        let mut cache = Cache::new();
        cache.add_cached("id-1".to_owned(), 42);
        assert_eq!(cache.get_cached("id-1"), Ok(42));
        assert_eq!(
            cache.get_cached("id-2"),
            Err(ResolveError::NotFound("id-2".to_owned()))
        );
    }
}
