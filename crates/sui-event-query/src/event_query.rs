// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::decode;
use crate::{DecodeConfig, DecodeError, EventKind, ObjectOwner};

/// A filter selecting a subset of the events emitted on chain.
///
/// Transaction digests, addresses and object ids are opaque strings here; it is up to the
/// caller to validate them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, JsonSchema)]
pub enum EventQuery {
    /// Return all events.
    All,
    /// Return events emitted by the given transaction.
    Transaction(
        /// digest of the transaction, as base-58 encoded string
        String,
    ),
    /// Return events emitted by a Move module.
    MoveModule {
        /// the Move package ID
        package: String,
        /// the module name
        module: String,
    },
    /// Return events with the given move event struct name
    MoveEvent(String),
    /// Return events of the given kind
    EventType(#[schemars(with = "String")] EventKind),
    /// Query by sender address.
    Sender(String),
    /// Query by recipient.
    Recipient(ObjectOwner),
    /// Return events associated with the given object
    Object(String),
    /// Return events emitted in [start_time, end_time) interval.
    /// Bounds are unsigned; negative values are rejected on decode.
    TimeRange {
        /// left endpoint of time interval, milliseconds since epoch, inclusive
        start_time: u64,
        /// right endpoint of time interval, milliseconds since epoch, exclusive
        end_time: u64,
    },
}

/// The wire tag of each [`EventQuery`] variant.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
pub enum EventQueryTag {
    All,
    Transaction,
    MoveModule,
    MoveEvent,
    EventType,
    Sender,
    Recipient,
    Object,
    TimeRange,
}

impl EventQueryTag {
    /// Whether the variant carries a payload, i.e. is encoded as a single-key object.
    pub fn has_payload(&self) -> bool {
        !matches!(self, EventQueryTag::All)
    }
}

impl EventQuery {
    pub fn all() -> Self {
        Self::All
    }

    pub fn transaction(digest: impl Into<String>) -> Self {
        Self::Transaction(digest.into())
    }

    pub fn move_module(package: impl Into<String>, module: impl Into<String>) -> Self {
        Self::MoveModule {
            package: package.into(),
            module: module.into(),
        }
    }

    pub fn move_event(event_type: impl Into<String>) -> Self {
        Self::MoveEvent(event_type.into())
    }

    pub fn event_type(kind: impl Into<EventKind>) -> Self {
        Self::EventType(kind.into())
    }

    pub fn sender(address: impl Into<String>) -> Self {
        Self::Sender(address.into())
    }

    pub fn recipient(owner: ObjectOwner) -> Self {
        Self::Recipient(owner)
    }

    pub fn object(object_id: impl Into<String>) -> Self {
        Self::Object(object_id.into())
    }

    /// Bounds are taken as given; `start_time` may exceed `end_time`.
    pub fn time_range(start_time: u64, end_time: u64) -> Self {
        Self::TimeRange {
            start_time,
            end_time,
        }
    }

    pub fn tag(&self) -> EventQueryTag {
        match self {
            Self::All => EventQueryTag::All,
            Self::Transaction(_) => EventQueryTag::Transaction,
            Self::MoveModule { .. } => EventQueryTag::MoveModule,
            Self::MoveEvent(_) => EventQueryTag::MoveEvent,
            Self::EventType(_) => EventQueryTag::EventType,
            Self::Sender(_) => EventQueryTag::Sender,
            Self::Recipient(_) => EventQueryTag::Recipient,
            Self::Object(_) => EventQueryTag::Object,
            Self::TimeRange { .. } => EventQueryTag::TimeRange,
        }
    }

    pub fn transaction_digest(&self) -> Option<&str> {
        match self {
            Self::Transaction(digest) => Some(digest),
            _ => None,
        }
    }

    /// `(package, module)` of a `MoveModule` query.
    pub fn module(&self) -> Option<(&str, &str)> {
        match self {
            Self::MoveModule { package, module } => Some((package, module)),
            _ => None,
        }
    }

    pub fn move_event_type(&self) -> Option<&str> {
        match self {
            Self::MoveEvent(event_type) => Some(event_type),
            _ => None,
        }
    }

    pub fn event_kind(&self) -> Option<&EventKind> {
        match self {
            Self::EventType(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn sender_address(&self) -> Option<&str> {
        match self {
            Self::Sender(address) => Some(address),
            _ => None,
        }
    }

    pub fn recipient_owner(&self) -> Option<&ObjectOwner> {
        match self {
            Self::Recipient(owner) => Some(owner),
            _ => None,
        }
    }

    pub fn object_id(&self) -> Option<&str> {
        match self {
            Self::Object(object_id) => Some(object_id),
            _ => None,
        }
    }

    /// `(start_time, end_time)` of a `TimeRange` query.
    pub fn range(&self) -> Option<(u64, u64)> {
        match self {
            Self::TimeRange {
                start_time,
                end_time,
            } => Some((*start_time, *end_time)),
            _ => None,
        }
    }

    /// Encode into the wire representation.
    pub fn to_json(&self) -> Value {
        // Only string keys and plain scalars are produced, which `to_value` cannot reject.
        serde_json::to_value(self).expect("EventQuery serialization cannot fail")
    }

    /// Decode from the wire representation, preserving unknown event kinds.
    pub fn from_json(value: &Value) -> Result<Self, DecodeError> {
        decode::decode(value)
    }

    pub fn from_json_with(value: &Value, config: &DecodeConfig) -> Result<Self, DecodeError> {
        decode::decode_with(value, config)
    }

    pub fn json_schema() -> RootSchema {
        schemars::schema_for!(EventQuery)
    }
}

impl<'de> Deserialize<'de> for EventQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode::decode(&value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EventQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Transaction(digest) => write!(f, "Transaction({digest})"),
            Self::MoveModule { package, module } => write!(f, "MoveModule({package}::{module})"),
            Self::MoveEvent(event_type) => write!(f, "MoveEvent({event_type})"),
            Self::EventType(kind) => write!(f, "EventType({kind})"),
            Self::Sender(address) => write!(f, "Sender({address})"),
            Self::Recipient(owner) => write!(f, "Recipient({owner})"),
            Self::Object(object_id) => write!(f, "Object({object_id})"),
            Self::TimeRange {
                start_time,
                end_time,
            } => write!(f, "TimeRange[{start_time}, {end_time})"),
        }
    }
}
