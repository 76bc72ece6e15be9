// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{
    borrow::Borrow,
    collections::HashMap,
    fmt,
    hash::Hash,
    sync::RwLock,
};

/// Insert-if-absent memo table.
///
/// Values are computed outside the lock. When two threads race on the same
/// key the first insert wins and both observe that value. A poisoned lock is
/// recovered since entries are only ever inserted whole.
pub struct Cache<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> Default for Cache<K, V> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> fmt::Debug for Cache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache").field("len", &self.len()).finish()
    }
}

impl<K, V> Cache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl<K: Eq + Hash, V: Clone> Cache<K, V> {
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    /// Returns the cached value for `key`, computing and storing it first
    /// when absent. Errors are returned without caching anything.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: K,
        init: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }
        let value = init()?;
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        Ok(entries.entry(key).or_insert(value).clone())
    }

    /// Like [`Cache::get_or_try_insert_with`] for lookups that may miss.
    /// Only `Some` results are stored, so misses never grow the table.
    pub fn get_or_try_insert_hit<E>(
        &self,
        key: K,
        init: impl FnOnce() -> Result<Option<V>, E>,
    ) -> Result<Option<V>, E> {
        if let Some(value) = self.get(&key) {
            return Ok(Some(value));
        }
        let Some(value) = init()? else {
            return Ok(None);
        };
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        Ok(Some(entries.entry(key).or_insert(value).clone()))
    }
}
