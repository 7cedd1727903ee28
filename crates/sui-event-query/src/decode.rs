// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Strict decoding of the event query wire format.
//!
//! Every rejection is reported as a [`DecodeError`] naming the offending tag or field.
//! JSON types are never coerced: `"100"` is not an integer and `1` is not a string.

use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{
    DecodeConfig, DecodeError, EventKind, EventKindPolicy, EventQuery, EventQueryTag, ObjectOwner,
};

/// Decode with the default [`DecodeConfig`].
pub fn decode(value: &Value) -> Result<EventQuery, DecodeError> {
    decode_with(value, &DecodeConfig::default())
}

pub fn decode_with(value: &Value, config: &DecodeConfig) -> Result<EventQuery, DecodeError> {
    let result = match value {
        Value::String(tag) => decode_unit(tag),
        Value::Object(entries) => decode_tagged(entries, config),
        other => Err(DecodeError::ShapeMismatch {
            reason: format!(
                "expected a string or a single-key object, found {}",
                describe(other)
            ),
        }),
    };
    match &result {
        Ok(query) => trace!(%query, "Decoded event query"),
        Err(error) => debug!(%error, "Rejected event query"),
    }
    result
}

fn decode_unit(tag: &str) -> Result<EventQuery, DecodeError> {
    match EventQueryTag::from_str(tag) {
        Ok(EventQueryTag::All) => Ok(EventQuery::All),
        Ok(tag) => Err(DecodeError::ShapeMismatch {
            reason: format!("`{tag}` requires a payload"),
        }),
        Err(_) => Err(DecodeError::UnknownVariant {
            tag: tag.to_owned(),
        }),
    }
}

fn decode_tagged(
    entries: &Map<String, Value>,
    config: &DecodeConfig,
) -> Result<EventQuery, DecodeError> {
    let mut iter = entries.iter();
    let (key, payload) = match (iter.next(), iter.next()) {
        (Some(entry), None) => entry,
        _ => {
            return Err(DecodeError::ShapeMismatch {
                reason: format!("expected exactly one variant key, found {}", entries.len()),
            })
        }
    };
    let tag = EventQueryTag::from_str(key)
        .map_err(|_| DecodeError::UnknownVariant { tag: key.clone() })?;

    Ok(match tag {
        EventQueryTag::All => {
            return Err(DecodeError::ShapeMismatch {
                reason: "`All` carries no payload and must be the bare string \"All\"".to_owned(),
            })
        }
        EventQueryTag::Transaction => EventQuery::Transaction(expect_string(tag.as_ref(), payload)?),
        EventQueryTag::MoveModule => {
            let fields = expect_object(tag, payload, &["package", "module"])?;
            EventQuery::MoveModule {
                package: string_field(tag, fields, "package")?,
                module: string_field(tag, fields, "module")?,
            }
        }
        EventQueryTag::MoveEvent => EventQuery::MoveEvent(expect_string(tag.as_ref(), payload)?),
        EventQueryTag::EventType => {
            EventQuery::EventType(decode_event_kind(payload, config.event_kind_policy)?)
        }
        EventQueryTag::Sender => EventQuery::Sender(expect_string(tag.as_ref(), payload)?),
        EventQueryTag::Recipient => EventQuery::Recipient(
            ObjectOwner::deserialize(payload).map_err(|e| DecodeError::InvalidOwner {
                reason: e.to_string(),
            })?,
        ),
        EventQueryTag::Object => EventQuery::Object(expect_string(tag.as_ref(), payload)?),
        EventQueryTag::TimeRange => {
            let fields = expect_object(tag, payload, &["start_time", "end_time"])?;
            EventQuery::TimeRange {
                start_time: u64_field(tag, fields, "start_time")?,
                end_time: u64_field(tag, fields, "end_time")?,
            }
        }
    })
}

fn decode_event_kind(payload: &Value, policy: EventKindPolicy) -> Result<EventKind, DecodeError> {
    let kind = EventKind::from(expect_string(EventQueryTag::EventType.as_ref(), payload)?);
    match (&kind, policy) {
        (EventKind::Unknown(unknown), EventKindPolicy::Reject) => {
            Err(DecodeError::UnknownEventKind {
                kind: unknown.to_string(),
            })
        }
        _ => Ok(kind),
    }
}

/// Checks that `payload` is an object holding only `allowed` keys.
fn expect_object<'a>(
    tag: EventQueryTag,
    payload: &'a Value,
    allowed: &[&str],
) -> Result<&'a Map<String, Value>, DecodeError> {
    let Value::Object(fields) = payload else {
        return Err(DecodeError::ShapeMismatch {
            reason: format!("`{tag}` payload must be an object, found {}", describe(payload)),
        });
    };
    if let Some(unexpected) = fields.keys().find(|k| !allowed.contains(&k.as_str())) {
        return Err(DecodeError::ShapeMismatch {
            reason: format!("unexpected field `{unexpected}` in `{tag}` payload"),
        });
    }
    Ok(fields)
}

fn expect_string(field: &str, value: &Value) -> Result<String, DecodeError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(DecodeError::FieldTypeMismatch {
            field: field.to_owned(),
            expected: "string",
            found: describe(other),
        }),
    }
}

fn string_field(
    tag: EventQueryTag,
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<String, DecodeError> {
    let value = fields
        .get(name)
        .ok_or(DecodeError::MissingField { tag, field: name })?;
    expect_string(&format!("{tag}.{name}"), value)
}

fn u64_field(
    tag: EventQueryTag,
    fields: &Map<String, Value>,
    name: &'static str,
) -> Result<u64, DecodeError> {
    let value = fields
        .get(name)
        .ok_or(DecodeError::MissingField { tag, field: name })?;
    value
        .as_u64()
        .ok_or_else(|| DecodeError::FieldTypeMismatch {
            field: format!("{tag}.{name}"),
            expected: "unsigned 64-bit integer",
            found: describe(value),
        })
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(_) => "boolean".to_owned(),
        Value::Number(n) => format!("number {n}"),
        Value::String(_) => "string".to_owned(),
        Value::Array(_) => "array".to_owned(),
        Value::Object(_) => "object".to_owned(),
    }
}
