use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Concurrent key-value store backing one entity type.
///
/// Thin wrapper over a sharded concurrent map exposing exactly the atomic
/// operations the engine relies on: insert-if-absent, snapshot reads,
/// unconditional replace, and compare-and-replace keyed on the previously
/// read value. Values are stored as whole immutable records; readers always
/// receive clones, never references into the map.
#[derive(Debug)]
pub struct InMemoryStore<V> {
    entries: DashMap<String, V>,
}

impl<V> Default for InMemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> InMemoryStore<V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Atomically insert `value` under `key` if the key is absent.
    ///
    /// Returns `false` (leaving the existing record untouched) when the key
    /// is already present. This is the source of truth for id uniqueness.
    pub fn insert_if_absent(&self, key: impl Into<String>, value: V) -> bool {
        match self.entries.entry(key.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(value);
                true
            }
        }
    }

    /// Atomic snapshot read.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Atomic unconditional overwrite.
    pub fn replace(&self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), value);
    }

    /// Atomically replace the record under `key` only if it still equals
    /// `expected`.
    ///
    /// Returns `false` when the key is absent or another writer committed in
    /// between; callers are expected to re-read and retry.
    pub fn compare_and_replace(&self, key: &str, expected: &V, value: V) -> bool
    where
        V: PartialEq,
    {
        if let Some(mut entry) = self.entries.get_mut(key) {
            if *entry.value() == *expected {
                *entry.value_mut() = value;
                return true;
            }
        }
        false
    }

    /// Snapshot of all stored records, in the store's iteration order.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.entries
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_if_absent_rejects_existing_key() {
        let store = InMemoryStore::new();

        assert!(store.insert_if_absent("a", 1));
        assert!(!store.insert_if_absent("a", 2));
        // the original record is unmodified
        assert_eq!(store.get("a"), Some(1));
    }

    #[test]
    fn get_returns_none_for_missing_key() {
        let store: InMemoryStore<i32> = InMemoryStore::new();
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn replace_overwrites_unconditionally() {
        let store = InMemoryStore::new();
        store.insert_if_absent("a", 1);

        store.replace("a", 2);
        assert_eq!(store.get("a"), Some(2));
    }

    #[test]
    fn compare_and_replace_fails_on_stale_expectation() {
        let store = InMemoryStore::new();
        store.insert_if_absent("a", 1);

        assert!(store.compare_and_replace("a", &1, 2));
        // a writer that read the old value loses
        assert!(!store.compare_and_replace("a", &1, 3));
        assert_eq!(store.get("a"), Some(2));
    }

    #[test]
    fn compare_and_replace_fails_on_missing_key() {
        let store = InMemoryStore::new();
        assert!(!store.compare_and_replace("a", &1, 2));
    }

    #[test]
    fn values_returns_a_snapshot() {
        let store = InMemoryStore::new();
        store.insert_if_absent("a", 1);
        store.insert_if_absent("b", 2);

        let mut values = store.values();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }
}
