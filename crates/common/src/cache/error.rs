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

//! Error types for the bounded cache collections.

use thiserror::Error;

/// Errors raised by [`LruCollection`](super::lru::LruCollection) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LruError {
    /// The collection could not be constructed from the given configuration.
    ///
    /// No partially-constructed collection exists after this error.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// The requested key has no entry in the collection.
    #[error("key not found")]
    KeyNotFound,
}
