// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What to do with an `EventType` query naming a kind outside [`crate::EventKind::KNOWN`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EventKindPolicy {
    /// Keep the kind verbatim as `EventKind::Unknown`.
    #[default]
    Preserve,
    /// Fail with `DecodeError::UnknownEventKind`.
    Reject,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub struct DecodeConfig {
    /// Handling of unrecognized event kinds.
    ///
    /// Defaults to `preserve`, so queries using event kinds added by a newer server still
    /// decode and re-encode unchanged.
    #[serde(default)]
    pub event_kind_policy: EventKindPolicy,
}

impl DecodeConfig {
    /// A config that rejects anything outside the known vocabulary.
    pub fn strict() -> Self {
        Self {
            event_kind_policy: EventKindPolicy::Reject,
        }
    }

    pub fn from_yaml_str(s: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(s).context("Unable to parse event query decode config")
    }

    pub fn from_json_str(s: &str) -> anyhow::Result<Self> {
        serde_json::from_str(s).context("Unable to parse event query decode config")
    }

    /// Load a YAML config from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to load decode config from {}", path.display()))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("Unable to parse decode config from {}", path.display()))
    }
}
