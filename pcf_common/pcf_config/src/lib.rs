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

//! Dotted-path access to a YAML configuration file.
//!
//! A [`ConfigStore`] reads one YAML file, answers lookups such as `"test.user.name"`
//! against the parsed tree, and can re-read the file on demand. [`Config`] keeps a
//! process-wide store for `config.yaml` in the working directory, and
//! [`get_config`] / [`get_config_with_default`] read from it.
//!
//! # Example
//!
//! ```no_run
//! use pcf_config::{get_config_with_default, ConfigStore};
//!
//! let store = ConfigStore::open("config.yaml").expect("Failed to load config");
//! let name = store.get("test.user.name").expect("Missing user name");
//! println!("user: {:?}", name.as_str());
//!
//! if store.has_key("test.user.age") {
//!     let age: u32 = store.get_as("test.user.age").expect("Age is not a number");
//!     println!("age: {}", age);
//! }
//!
//! store.reload().expect("Failed to reload config");
//!
//! let level = get_config_with_default("logging.level", "info").expect("Failed to load config");
//! println!("level: {:?}", level.as_str());
//! ```

pub mod error;
pub mod global;
pub mod store;
pub mod value;

pub use error::ConfigError;
pub use global::{get_config, get_config_with_default, Config};
pub use store::{ConfigStore, DEFAULT_CONFIG_FILE};
pub use value::YamlValue;

// Re-export so callers can build defaults and match on results without a direct dependency
pub use serde_yaml::Value;
