//! Fixed-bucket memo cache with separate chaining.

use std::fmt::{Display, Formatter, Result};

/// Hash used to place a key in a bucket.
///
/// The value only has to be stable under `Eq`: two equal keys must return
/// the same hash. It is not meant to resist collisions chosen by an
/// adversary.
pub trait BucketHash {
    fn bucket_hash(&self) -> u32;
}

/// Fixed-size hash table with separate chaining.
///
/// The bucket count is chosen once at construction and never changes, so
/// long chains are the caller's signal to size the cache better.
#[derive(Clone, Debug)]
pub struct MemoCache<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K: Eq + BucketHash, V> MemoCache<K, V> {
    /// Creates an empty cache with `buckets` chains (at least one).
    pub fn with_buckets(buckets: usize) -> Self {
        let count = buckets.max(1);
        let mut chains = Vec::with_capacity(count);
        chains.resize_with(count, Vec::new);

        Self {
            buckets: chains,
            len: 0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn index_of(&self, key: &K) -> usize {
        key.bucket_hash() as usize % self.buckets.len()
    }

    /// Inserts `value` under `key`, taking ownership of both.
    ///
    /// An existing entry for an equal key is overwritten and its previous
    /// value returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.index_of(&key);
        let chain = &mut self.buckets[idx];

        if let Some((_, slot)) = chain.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }

        chain.push((key, value));
        self.len += 1;

        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets[self.index_of(key)]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// Removing a key that is not present is a no-op returning `None`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.index_of(key);
        let chain = &mut self.buckets[idx];
        let pos = chain.iter().position(|(k, _)| k == key)?;
        self.len -= 1;

        Some(chain.swap_remove(pos).1)
    }

    /// Drops every entry. The bucket layout is kept, so the cache can be
    /// reused for another computation of similar size.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Vec::clear);
        self.len = 0;
    }

    /// Iterates over all entries in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|(k, v)| (k, v)))
    }
}

impl<K, V> Display for MemoCache<K, V>
where
    K: Eq + BucketHash + Display,
    V: Display,
{
    /// Prints one `(key : value)` line per entry.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (key, value) in self.iter() {
            writeln!(f, "({} : {})", key, value)?;
        }

        Ok(())
    }
}
