// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::EventQueryTag;

/// Reasons a JSON value is not a valid event query.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Unknown event query variant `{tag}`")]
    UnknownVariant { tag: String },

    #[error("Malformed event query: {reason}")]
    ShapeMismatch { reason: String },

    #[error("Invalid type for `{field}`: expected {expected}, found {found}")]
    FieldTypeMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("Missing field `{field}` in `{tag}` query")]
    MissingField {
        tag: EventQueryTag,
        field: &'static str,
    },

    #[error("Unknown event kind `{kind}`")]
    UnknownEventKind { kind: String },

    #[error("Invalid `Recipient` owner: {reason}")]
    InvalidOwner { reason: String },
}
