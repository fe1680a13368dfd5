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

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors returned while loading or reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file does not exist
    #[error("Config file not found: {}", .0.display())]
    NotFoundFile(PathBuf),

    /// The configuration file is not valid YAML
    #[error("Failed to parse YAML in {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration file exists but could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A dotted path did not resolve
    #[error("Config key not found: {0}")]
    KeyNotFound(String),

    /// The value at a dotted path could not be deserialized into the requested type
    #[error("Config value at {path} has unexpected type: {source}")]
    TypeMismatch {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize config to JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConfigError {
    /// Maps a failed file read onto the error taxonomy.
    pub(crate) fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFoundFile(path.to_path_buf())
        } else {
            ConfigError::Io { path: path.to_path_buf(), source: err }
        }
    }

    pub fn is_not_found_file(&self) -> bool {
        matches!(self, ConfigError::NotFoundFile(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, ConfigError::ParseError { .. })
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self, ConfigError::KeyNotFound(_))
    }
}
