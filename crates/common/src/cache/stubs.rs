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

//! Fixtures for testing the bounded cache collections.

use rstest::fixture;

use super::lru::LruCollection;

/// Returns an empty collection with the minimum capacity of 4.
#[fixture]
pub fn lru_empty() -> LruCollection<char, i32> {
    LruCollection::new(4).expect("capacity 4 is valid")
}

/// Returns a full collection of capacity 4 with order `[D, C, B, A]` (front to back).
#[fixture]
pub fn lru_abcd(mut lru_empty: LruCollection<char, i32>) -> LruCollection<char, i32> {
    lru_empty.extend([('A', 1), ('B', 2), ('C', 3), ('D', 4)]);
    lru_empty
}

/// Returns the keys of `cache` from most to least recently used.
#[must_use]
pub fn keys_in_order<K, V>(cache: &LruCollection<K, V>) -> Vec<K>
where
    K: Clone + Eq + std::hash::Hash,
{
    cache.iter().map(|(k, _)| k.clone()).collect()
}
