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

//! Configuration for [`LruCollection`](super::lru::LruCollection).
//!
//! # Spec String Format
//!
//! The `LIMITED_MEMORY_LRU` environment variable uses a semicolon-separated format:
//!
//! ```text
//! capacity=4096;log_evictions
//! ```
//!
//! | Key             | Type    | Description                                      |
//! |-----------------|---------|--------------------------------------------------|
//! | `capacity`      | Integer | Maximum number of entries, in [4, 200000].       |
//! | `log_evictions` | Boolean | Log each eviction at `Debug` rather than `Trace`. |
//!
//! Keys are case-insensitive. A bare flag (`log_evictions`) means true; explicit values are
//! true unless `false`, `0` or `no`.

use std::env;

use limited_memory_core::correctness::check_in_range_inclusive_usize;
use serde::{Deserialize, Serialize};

use super::error::LruError;

/// The smallest capacity a collection can be constructed with.
pub const MIN_CAPACITY: usize = 4;

/// The largest capacity a collection can be constructed with.
pub const MAX_CAPACITY: usize = 200_000;

/// The capacity used by [`LruConfig::default`].
pub const DEFAULT_CAPACITY: usize = 1_024;

/// The environment variable read by [`LruConfig::from_env`].
pub const LRU_CONFIG_ENV_VAR: &str = "LIMITED_MEMORY_LRU";

/// Configuration for a least-recently-used collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LruConfig {
    /// Maximum number of entries held before the least-recently-used one is evicted.
    pub capacity: usize,
    /// Log evictions at `Debug` level (otherwise `Trace`).
    pub log_evictions: bool,
}

impl Default for LruConfig {
    /// Creates a new default [`LruConfig`] instance.
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            log_evictions: false,
        }
    }
}

impl LruConfig {
    /// Creates a new [`LruConfig`] instance.
    ///
    /// The capacity is not validated until a collection is constructed from it.
    #[must_use]
    pub const fn new(capacity: usize, log_evictions: bool) -> Self {
        Self {
            capacity,
            log_evictions,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LruError::InvalidConfiguration`] if `capacity` is below [`MIN_CAPACITY`]
    /// or above [`MAX_CAPACITY`].
    pub fn validate(&self) -> Result<(), LruError> {
        check_in_range_inclusive_usize(self.capacity, MIN_CAPACITY, MAX_CAPACITY, "capacity")
            .map_err(|e| LruError::InvalidConfiguration(e.to_string()))
    }

    /// Parses a configuration from a spec string.
    ///
    /// Keys not present in the spec keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec string contains an unknown key, a key without a
    /// required value, or a capacity which is not an unsigned integer.
    pub fn from_spec(spec: &str) -> anyhow::Result<Self> {
        let mut config = Self::default();

        for kv in spec.split(';') {
            let kv = kv.trim();
            if kv.is_empty() {
                continue;
            }

            let (k, v) = match kv.split_once('=') {
                Some((k, v)) => (k.trim().to_lowercase(), Some(v.trim())),
                None => (kv.to_lowercase(), None),
            };

            match (k.as_str(), v) {
                ("log_evictions", None) => config.log_evictions = true,
                ("log_evictions", Some(v)) => config.log_evictions = parse_bool_value(v),
                ("capacity", Some(v)) => {
                    config.capacity = v
                        .replace('_', "")
                        .parse()
                        .map_err(|e| anyhow::anyhow!("Invalid capacity '{v}': {e}"))?;
                }
                _ => anyhow::bail!("Invalid spec pair: {kv}"),
            }
        }

        Ok(config)
    }

    /// Parses configuration from the `LIMITED_MEMORY_LRU` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or contains invalid syntax.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_env_value(env::var(LRU_CONFIG_ENV_VAR))
    }

    fn from_env_value(value: Result<String, env::VarError>) -> anyhow::Result<Self> {
        let spec = value.map_err(|e| anyhow::anyhow!("{LRU_CONFIG_ENV_VAR}: {e}"))?;
        Self::from_spec(&spec)
    }
}

/// Parses a boolean value from a string.
///
/// Returns `true` unless the value is explicitly "false", "0", or "no" (case-insensitive).
fn parse_bool_value(v: &str) -> bool {
    !matches!(v.to_lowercase().as_str(), "false" | "0" | "no")
}
