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

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;
use crate::value::{lookup, YamlValue};

/// Name of the configuration file read by [`ConfigStore::load`], relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// A YAML configuration file loaded into memory, with dotted-path lookups.
///
/// The store remembers the path it was opened from so that [`ConfigStore::reload`]
/// can re-read the same file. The parsed tree sits behind a lock only so a shared
/// store can be reloaded through `&self`; readers see either the old tree or the
/// new one.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    data: RwLock<Value>,
}

impl ConfigStore {
    /// Loads [`DEFAULT_CONFIG_FILE`] from the current working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::open(DEFAULT_CONFIG_FILE)
    }

    /// Loads and parses the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::NotFoundFile`] if the file does not exist
    /// * [`ConfigError::ParseError`] if the content is not valid YAML
    /// * [`ConfigError::Io`] if the file cannot be read for any other reason
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let data = read_yaml(&path)?;
        info!("Loaded config file: {}", path.display());
        Ok(ConfigStore { path, data: RwLock::new(data) })
    }

    /// Builds a store from in-memory YAML, bound to [`DEFAULT_CONFIG_FILE`] for reloads.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let path = PathBuf::from(DEFAULT_CONFIG_FILE);
        let data = parse_yaml(&path, content)?;
        Ok(ConfigStore { path, data: RwLock::new(data) })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the value at a dotted path such as `"test.user.name"`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] when a segment is missing or an
    /// intermediate value is not a mapping.
    pub fn get(&self, path: &str) -> Result<Value, ConfigError> {
        self.get_optional(path).ok_or_else(|| ConfigError::KeyNotFound(path.to_string()))
    }

    /// Returns the value at `path`, or `None` if it does not resolve.
    pub fn get_optional(&self, path: &str) -> Option<Value> {
        let data = self.data.read();
        lookup(&data, path).cloned()
    }

    /// Returns the value at `path`, or `default` if it does not resolve.
    pub fn get_with_default<V: Into<Value>>(&self, path: &str, default: V) -> Value {
        self.get_optional(path).unwrap_or_else(|| default.into())
    }

    /// Whether `path` resolves to a value.
    pub fn has_key(&self, path: &str) -> bool {
        let data = self.data.read();
        lookup(&data, path).is_some()
    }

    /// Deserializes the value at `path` into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConfigError> {
        let value = self.get(path)?;
        serde_yaml::from_value(value).map_err(|source| ConfigError::TypeMismatch { path: path.to_string(), source })
    }

    /// Copy of the whole configuration tree
    pub fn snapshot(&self) -> YamlValue {
        YamlValue(self.data.read().clone())
    }

    /// Serializes the current configuration tree to a JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        let data = self.data.read();
        Ok(serde_json::to_string(&*data)?)
    }

    /// Re-reads the backing file and replaces the configuration tree.
    ///
    /// The new file is parsed completely before anything is replaced, so on
    /// error the previously loaded configuration stays in effect.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let data = read_yaml(&self.path).map_err(|e| {
            warn!("Reload of {} failed, keeping previous config: {}", self.path.display(), e);
            e
        })?;
        *self.data.write() = data;
        info!("Reloaded config file: {}", self.path.display());
        Ok(())
    }
}

fn read_yaml(path: &Path) -> Result<Value, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, e))?;
    parse_yaml(path, &contents)
}

fn parse_yaml(path: &Path, contents: &str) -> Result<Value, ConfigError> {
    if is_blank_document(contents) {
        return Ok(Value::Mapping(Mapping::new()));
    }
    let value: Value =
        serde_yaml::from_str(contents).map_err(|source| ConfigError::ParseError { path: path.to_path_buf(), source })?;
    // A document with no root node loads as an empty mapping.
    match value {
        Value::Null => Ok(Value::Mapping(Mapping::new())),
        other => Ok(other),
    }
}

fn is_blank_document(contents: &str) -> bool {
    contents.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with('#'))
}
