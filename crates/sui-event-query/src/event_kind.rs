// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The kind of event an `EventType` query selects.
///
/// Encoded as a plain string. Kinds this crate does not know about are kept verbatim in
/// [`EventKind::Unknown`] so that a newer server vocabulary survives a round trip.
/// An `Unknown` value can only be obtained through `From`/`FromStr`, which maps every known
/// name to its dedicated variant, so each wire string has exactly one `EventKind`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Move-specific event emitted by a Move module.
    MoveEvent,
    /// Module published.
    Publish,
    /// Object transferred to a new owner.
    TransferObject,
    /// Object mutated in place.
    MutateObject,
    /// Coin balance changed.
    CoinBalanceChange,
    /// Object deleted.
    DeleteObject,
    /// Object created.
    NewObject,
    /// Epoch changed.
    EpochChange,
    /// New checkpoint.
    Checkpoint,
    Unknown(UnknownEventKind),
}

/// An event kind string outside [`EventKind::KNOWN`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnknownEventKind(String);

impl UnknownEventKind {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl EventKind {
    /// Every kind with a dedicated variant, in wire order.
    pub const KNOWN: [EventKind; 9] = [
        EventKind::MoveEvent,
        EventKind::Publish,
        EventKind::TransferObject,
        EventKind::MutateObject,
        EventKind::CoinBalanceChange,
        EventKind::DeleteObject,
        EventKind::NewObject,
        EventKind::EpochChange,
        EventKind::Checkpoint,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            EventKind::MoveEvent => "MoveEvent",
            EventKind::Publish => "Publish",
            EventKind::TransferObject => "TransferObject",
            EventKind::MutateObject => "MutateObject",
            EventKind::CoinBalanceChange => "CoinBalanceChange",
            EventKind::DeleteObject => "DeleteObject",
            EventKind::NewObject => "NewObject",
            EventKind::EpochChange => "EpochChange",
            EventKind::Checkpoint => "Checkpoint",
            EventKind::Unknown(kind) => kind.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, EventKind::Unknown(_))
    }
}

impl From<&str> for EventKind {
    fn from(kind: &str) -> Self {
        Self::KNOWN
            .iter()
            .find(|known| known.as_str() == kind)
            .cloned()
            .unwrap_or_else(|| EventKind::Unknown(UnknownEventKind(kind.to_owned())))
    }
}

impl From<String> for EventKind {
    fn from(kind: String) -> Self {
        match EventKind::from(kind.as_str()) {
            EventKind::Unknown(_) => EventKind::Unknown(UnknownEventKind(kind)),
            known => known,
        }
    }
}

impl FromStr for EventKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EventKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(EventKind::from)
    }
}
