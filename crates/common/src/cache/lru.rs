// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! A bounded key-value collection with least-recently-used eviction and O(1) operations.
//!
//! Entries live in an arena of slots doubly linked by index in recency order, with an
//! `AHashMap` from key to slot index for lookups. The front of the list is the most recently
//! used entry and the back is the next to be evicted. There is no removal, so the arena
//! never has holes: once full, an eviction recycles the back slot in place.

use std::{borrow::Borrow, hash::Hash, iter::FusedIterator, mem};

use ahash::AHashMap;
use limited_memory_core::formatting::Separable;

use super::{BoundedCache, config::LruConfig, error::LruError};

#[derive(Debug, Clone)]
struct Slot<K, V> {
    key: K,
    value: V,
    /// Towards the front (more recently used).
    prev: Option<usize>,
    /// Towards the back (less recently used).
    next: Option<usize>,
}

impl<K, V> Slot<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }
}

/// A fixed-capacity key-value collection which evicts the least-recently-used entry.
///
/// Both [`get`](Self::get) and [`set`](Self::set) on an existing key move that entry to the
/// front of the recency order. Inserting a new key while at capacity first evicts the entry
/// at the back.
///
/// # Examples
///
/// ```
/// use limited_memory_common::cache::{LruCollection, LruError};
///
/// let mut cache = LruCollection::new(4).unwrap();
/// cache.set('A', 1);
/// cache.set('B', 2);
/// cache.set('C', 3);
/// cache.set('D', 4);
///
/// // Reading 'A' makes it the most recently used entry
/// assert_eq!(cache.get(&'A'), Ok(&1));
///
/// // Adding beyond capacity evicts the least recently used ('B')
/// cache.set('E', 5);
/// assert_eq!(cache.get(&'B'), Err(LruError::KeyNotFound));
///
/// let keys: Vec<char> = cache.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, vec!['E', 'A', 'D', 'C']);
/// ```
///
/// Capacities outside [4, 200000] are rejected:
///
/// ```
/// use limited_memory_common::cache::LruCollection;
///
/// assert!(LruCollection::<u32, u32>::new(3).is_err());
/// assert!(LruCollection::<u32, u32>::new(200_001).is_err());
/// ```
///
/// # Thread Safety
///
/// This collection is not thread-safe, and `get` takes `&mut self` because it reorders
/// entries. If shared across threads, wrap it in a `Mutex`.
#[derive(Debug, Clone)]
pub struct LruCollection<K, V>
where
    K: Clone + Eq + Hash,
{
    slots: Vec<Slot<K, V>>,
    index: AHashMap<K, usize>,
    head: Option<usize>,
    tail: Option<usize>,
    capacity: usize,
    log_evictions: bool,
}

impl<K, V> LruCollection<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a new empty [`LruCollection`] with the given `capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`LruError::InvalidConfiguration`] if `capacity` is not in [4, 200000].
    pub fn new(capacity: usize) -> Result<Self, LruError> {
        Self::from_config(&LruConfig {
            capacity,
            ..LruConfig::default()
        })
    }

    /// Creates a new empty [`LruCollection`] from the given `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LruError::InvalidConfiguration`] if the configured capacity is not in
    /// [4, 200000].
    pub fn from_config(config: &LruConfig) -> Result<Self, LruError> {
        config.validate()?;

        log::debug!(
            "Creating LruCollection with capacity={}",
            config.capacity.separate_with_commas()
        );

        Ok(Self {
            slots: Vec::with_capacity(config.capacity),
            index: AHashMap::with_capacity(config.capacity),
            head: None,
            tail: None,
            capacity: config.capacity,
            log_evictions: config.log_evictions,
        })
    }

    /// Returns the fixed capacity of the collection.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of entries in the collection.
    #[must_use]
    pub fn count(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of entries in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns whether the collection contains the given key.
    ///
    /// Does not affect the recency order.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Returns a reference to the value for the given key without affecting the recency order.
    #[must_use]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&idx| &self.slots[idx].value)
    }

    /// Returns a reference to the value for the given key and marks it most recently used.
    ///
    /// # Errors
    ///
    /// Returns [`LruError::KeyNotFound`] if the key has no entry.
    pub fn get<Q>(&mut self, key: &Q) -> Result<&V, LruError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.index.get(key).ok_or(LruError::KeyNotFound)?;
        self.move_to_front(idx);
        Ok(&self.slots[idx].value)
    }

    /// Inserts or updates the value for `key` and marks it most recently used.
    ///
    /// If the key already exists its value is replaced (no eviction occurs).
    /// If the collection is at capacity and the key is new, the least recently used entry is
    /// evicted first.
    pub fn set(&mut self, key: K, value: V) {
        if let Some(&idx) = self.index.get(&key) {
            self.slots[idx].value = value;
            self.move_to_front(idx);
        } else {
            self.insert_new(key, value);
        }
    }

    /// Returns the value for `key`, first storing the result of `f` if the key is absent.
    ///
    /// A hit behaves like [`get`](Self::get); a miss behaves like [`set`](Self::set) and may
    /// evict the least recently used entry.
    pub fn get_or_set_with<F>(&mut self, key: K, f: F) -> &V
    where
        F: FnOnce() -> V,
    {
        let existing = self.index.get(&key).copied();
        let idx = match existing {
            Some(idx) => {
                self.move_to_front(idx);
                idx
            }
            None => self.insert_new(key, f()),
        };
        &self.slots[idx].value
    }

    /// Returns an iterator over the entries from most to least recently used.
    ///
    /// Iterating does not affect the recency order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: &self.slots,
            front: self.head,
            back: self.tail,
            remaining: self.slots.len(),
        }
    }

    fn insert_new(&mut self, key: K, value: V) -> usize {
        let slot = Slot::new(key.clone(), value);

        let idx = match self.tail {
            Some(idx) if self.slots.len() >= self.capacity => {
                self.unlink(idx);
                let evicted = mem::replace(&mut self.slots[idx], slot);
                self.index.remove(&evicted.key);
                self.log_eviction(idx);
                idx
            }
            _ => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        };

        self.index.insert(key, idx);
        self.push_front(idx);

        debug_assert_eq!(self.index.len(), self.slots.len());
        idx
    }

    fn log_eviction(&self, slot: usize) {
        if self.log_evictions {
            log::debug!(
                "Evicted least recently used entry: slot={slot}, capacity={}",
                self.capacity
            );
        } else {
            log::trace!(
                "Evicted least recently used entry: slot={slot}, capacity={}",
                self.capacity
            );
        }
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.unlink(idx);
        self.push_front(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let slot = &mut self.slots[idx];
            (slot.prev.take(), slot.next.take())
        };

        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }

        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
    }

    fn push_front(&mut self, idx: usize) {
        self.slots[idx].prev = None;
        self.slots[idx].next = self.head;

        match self.head {
            Some(h) => self.slots[h].prev = Some(idx),
            None => self.tail = Some(idx),
        }

        self.head = Some(idx);
    }
}

impl<K, V> BoundedCache<K, V> for LruCollection<K, V>
where
    K: Clone + Eq + Hash,
{
    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    fn count(&self) -> usize {
        Self::count(self)
    }

    fn set(&mut self, key: K, value: V) {
        Self::set(self, key, value);
    }

    fn get(&mut self, key: &K) -> Result<&V, LruError> {
        Self::get(self, key)
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>
    where
        K: 'a,
        V: 'a,
    {
        Box::new(Self::iter(self))
    }
}

impl<K, V> Extend<(K, V)> for LruCollection<K, V>
where
    K: Clone + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a LruCollection<K, V>
where
    K: Clone + Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of an [`LruCollection`] from most to least recently used.
///
/// Created by [`LruCollection::iter`]. Iterating from the back yields the least recently used
/// entry first, which is the next eviction candidate.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    slots: &'a [Slot<K, V>],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slots = self.slots;
        let slot = &slots[self.front?];
        self.front = slot.next;
        self.remaining -= 1;
        Some((&slot.key, &slot.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let slots = self.slots;
        let slot = &slots[self.back?];
        self.back = slot.prev;
        self.remaining -= 1;
        Some((&slot.key, &slot.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
