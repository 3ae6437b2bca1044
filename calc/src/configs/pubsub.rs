// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.


//! Settings of the topic the calculator publishes its results to.

use super::CALC_CONF;
use crate::error::{CalcError, Result};
use crate::publish::full_topic_name;
use std::env;

/// Environment variable overriding `[pubsub] project_name`.
pub const PROJECT_NAME_ENV: &str = "PROJECT_NAME";
/// Environment variable overriding `[pubsub] result_topic`.
pub const RESULT_TOPIC_ENV: &str = "RESULT_TOPIC";

/// The project and topic that receive calculation results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PubsubConfig {
    /// The cloud project name.
    pub project_name: String,
    /// The short name of the result topic.
    pub result_topic: String,
}

impl PubsubConfig {
    /// Returns a new PubsubConfig.
    pub fn new(project_name: impl Into<String>, result_topic: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            result_topic: result_topic.into(),
        }
    }

    /// Reads the settings from the process environment, falling back to the
    /// embedded configuration file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the settings through `lookup`, falling back to the embedded
    /// configuration file for keys it doesn't resolve.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |env_key: &str, conf_key: &str| {
            lookup(env_key).unwrap_or_else(|| {
                CALC_CONF
                    .get_from(Some("pubsub"), conf_key)
                    .unwrap_or_default()
                    .to_string()
            })
        };

        Self {
            project_name: setting(PROJECT_NAME_ENV, "project_name"),
            result_topic: setting(RESULT_TOPIC_ENV, "result_topic"),
        }
    }

    /// Returns the fully qualified name of the result topic.
    ///
    /// # Errors
    /// Returns [`CalcError::Config`] if either the project or the topic is
    /// empty, in which case the publish side stays unconfigured.
    pub fn topic_id(&self) -> Result<String> {
        if self.project_name.is_empty() {
            return Err(CalcError::Config(format!("{} is not set", PROJECT_NAME_ENV)));
        }
        if self.result_topic.is_empty() {
            return Err(CalcError::Config(format!("{} is not set", RESULT_TOPIC_ENV)));
        }
        Ok(full_topic_name(&self.project_name, &self.result_topic))
    }
}
