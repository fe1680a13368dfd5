/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde_yaml::{Mapping, Value};

/// Separator between segments of a dotted path
pub const PATH_SEPARATOR: char = '.';

/// Walks `path` from `root`, one mapping entry per segment.
///
/// Returns `None` as soon as a segment is missing or the current node is not a mapping.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for key in path.split(PATH_SEPARATOR) {
        let mapping = current.as_mapping()?;
        match mapping.get(key) {
            Some(value) => current = value,
            None => {
                debug!("Config path {} missing key: {}", path, key);
                return None;
            }
        }
    }
    Some(current)
}

/// A parsed YAML node with dotted-path access
#[derive(Debug, Clone, PartialEq)]
pub struct YamlValue(pub Value);

impl YamlValue {
    /// Get a direct child by key
    pub fn get(&self, key: &str) -> Option<YamlValue> {
        self.0.as_mapping()?.get(key).map(|v| YamlValue(v.clone()))
    }

    /// Get a descendant by dotted path, e.g. `"test.user.name"`
    pub fn get_nested(&self, path: &str) -> Option<YamlValue> {
        lookup(&self.0, path).map(|v| YamlValue(v.clone()))
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Convert to ownership string
    pub fn as_string(&self) -> Option<String> {
        self.0.as_str().map(|s| s.to_string())
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.0.as_bool()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }

    /// Convert to Array
    pub fn as_array(&self) -> Option<Vec<Value>> {
        self.0.as_sequence().cloned()
    }

    /// Convert to map
    pub fn as_map(&self) -> Option<Mapping> {
        self.0.as_mapping().cloned()
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl FromStr for YamlValue {
    type Err = serde_yaml::Error;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        serde_yaml::from_str(content).map(YamlValue)
    }
}

impl From<Value> for YamlValue {
    fn from(value: Value) -> Self {
        YamlValue(value)
    }
}

impl fmt::Display for YamlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serde_yaml::to_string(&self.0)
            .map_err(|_| fmt::Error)
            .and_then(|s| write!(f, "{}", s))
    }
}
