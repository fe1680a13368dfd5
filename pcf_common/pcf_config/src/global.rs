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

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde_yaml::Value;

use crate::error::ConfigError;
use crate::store::ConfigStore;

static INSTANCE: Lazy<Mutex<Option<Arc<ConfigStore>>>> = Lazy::new(|| Mutex::new(None));

/// Process-wide default [`ConfigStore`], loaded from `config.yaml` on first use.
///
/// Prefer passing a `ConfigStore` explicitly; this accessor exists for call sites
/// that only need a quick lookup.
pub struct Config;

impl Config {
    /// Returns the shared store, loading it if no load has succeeded yet.
    ///
    /// A failed load installs nothing, so the next call retries from scratch.
    pub fn instance() -> Result<Arc<ConfigStore>, ConfigError> {
        let mut slot = INSTANCE.lock();
        if let Some(store) = slot.as_ref() {
            return Ok(Arc::clone(store));
        }
        let store = Arc::new(ConfigStore::load()?);
        *slot = Some(Arc::clone(&store));
        Ok(store)
    }

    /// Drops the shared store. Only meant for tests.
    pub fn reset() {
        INSTANCE.lock().take();
    }
}

/// Looks up `path` in the default store.
pub fn get_config(path: &str) -> Result<Value, ConfigError> {
    Config::instance()?.get(path)
}

/// Looks up `path` in the default store, falling back to `default`.
pub fn get_config_with_default<V: Into<Value>>(path: &str, default: V) -> Result<Value, ConfigError> {
    Ok(Config::instance()?.get_with_default(path, default))
}
