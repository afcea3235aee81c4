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

//! Bounded in-memory collections.
//!
//! [`LruCollection`] holds up to a fixed number of entries and evicts the least recently used
//! one when a new key is inserted at capacity.

pub mod config;
pub mod error;
pub mod lru;

#[cfg(any(test, feature = "stubs"))]
pub mod stubs;

pub use config::LruConfig;
pub use error::LruError;
pub use lru::{Iter, LruCollection};

/// A key-value collection holding at most [`capacity`](Self::capacity) entries.
///
/// Implementations decide which entry to evict when a new key is set at capacity.
pub trait BoundedCache<K, V> {
    /// Returns the fixed maximum number of entries.
    fn capacity(&self) -> usize;

    /// Returns the current number of entries.
    fn count(&self) -> usize;

    /// Inserts or updates the value for `key`, evicting an entry if needed.
    fn set(&mut self, key: K, value: V);

    /// Returns the value for `key`.
    ///
    /// Takes `&mut self` as lookups may update the eviction order.
    ///
    /// # Errors
    ///
    /// Returns [`LruError::KeyNotFound`] if the key has no entry.
    fn get(&mut self, key: &K) -> Result<&V, LruError>;

    /// Returns an iterator over the entries from most to least recently used.
    ///
    /// Iterating does not affect the eviction order.
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>
    where
        K: 'a,
        V: 'a;
}
