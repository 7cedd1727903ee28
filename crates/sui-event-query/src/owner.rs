// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Ownership of an on-chain object, as carried by a `Recipient` query.
///
/// Addresses are opaque strings; this type does not check their format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub enum ObjectOwner {
    /// Object is exclusively owned by a single address, and is mutable.
    AddressOwner(String),
    /// Object is exclusively owned by a single object, and is mutable.
    /// The object ID is expressed as an address.
    ObjectOwner(String),
    /// Object is shared, can be used by any address, and is mutable.
    Shared {
        /// The version at which the object became shared.
        initial_shared_version: u64,
    },
    /// Object is immutable, and hence ownership doesn't matter.
    Immutable,
}

impl ObjectOwner {
    /// The owning address, for address- and object-owned objects.
    pub fn owner_address(&self) -> Option<&str> {
        match self {
            Self::AddressOwner(address) | Self::ObjectOwner(address) => Some(address),
            Self::Shared { .. } | Self::Immutable => None,
        }
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared { .. })
    }

    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::Immutable)
    }
}

impl fmt::Display for ObjectOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddressOwner(address) => write!(f, "Account Address ( {address} )"),
            Self::ObjectOwner(address) => write!(f, "Object ID: ( {address} )"),
            Self::Shared {
                initial_shared_version,
            } => write!(f, "Shared( {initial_shared_version} )"),
            Self::Immutable => f.write_str("Immutable"),
        }
    }
}
