// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use super::*;
use serde_json::json;

fn decode_err(value: serde_json::Value) -> DecodeError {
    EventQuery::from_json(&value).unwrap_err()
}

#[test]
fn decode_all() {
    assert_eq!(EventQuery::from_json(&json!("All")).unwrap(), EventQuery::All);
    assert_eq!(
        decode_err(json!("all")),
        DecodeError::UnknownVariant {
            tag: "all".to_owned()
        }
    );
    assert!(matches!(
        decode_err(json!({ "All": null })),
        DecodeError::ShapeMismatch { .. }
    ));
    assert!(matches!(
        decode_err(json!({})),
        DecodeError::ShapeMismatch { .. }
    ));
}

#[test]
fn decode_move_module() {
    let query =
        EventQuery::from_json(&json!({ "MoveModule": { "package": "0x2", "module": "coin" } }))
            .unwrap();
    assert_eq!(
        query,
        EventQuery::MoveModule {
            package: "0x2".to_owned(),
            module: "coin".to_owned()
        }
    );

    assert_eq!(
        decode_err(json!({ "MoveModule": { "package": "0x2" } })),
        DecodeError::MissingField {
            tag: EventQueryTag::MoveModule,
            field: "module"
        }
    );
    assert!(matches!(
        decode_err(json!({ "MoveModule": "0x2::coin" })),
        DecodeError::ShapeMismatch { .. }
    ));
    assert!(matches!(
        decode_err(json!({ "MoveModule": { "package": "0x2", "module": "coin", "function": "mint" } })),
        DecodeError::ShapeMismatch { .. }
    ));
}

#[test]
fn decode_time_range() {
    let query = EventQuery::from_json(&json!({ "TimeRange": { "start_time": 100, "end_time": 200 } }))
        .unwrap();
    assert_eq!(query.range(), Some((100, 200)));

    // No ordering is enforced between the bounds.
    let inverted =
        EventQuery::from_json(&json!({ "TimeRange": { "start_time": 200, "end_time": 100 } }))
            .unwrap();
    assert_eq!(inverted, EventQuery::time_range(200, 100));

    assert_eq!(
        decode_err(json!({ "TimeRange": { "start_time": "100", "end_time": 200 } })),
        DecodeError::FieldTypeMismatch {
            field: "TimeRange.start_time".to_owned(),
            expected: "unsigned 64-bit integer",
            found: "string".to_owned(),
        }
    );
    assert!(matches!(
        decode_err(json!({ "TimeRange": { "start_time": -1, "end_time": 200 } })),
        DecodeError::FieldTypeMismatch { .. }
    ));
    assert!(matches!(
        decode_err(json!({ "TimeRange": { "start_time": 1.5, "end_time": 200 } })),
        DecodeError::FieldTypeMismatch { .. }
    ));
    assert_eq!(
        decode_err(json!({ "TimeRange": { "start_time": 100 } })),
        DecodeError::MissingField {
            tag: EventQueryTag::TimeRange,
            field: "end_time"
        }
    );
    assert_eq!(
        EventQuery::from_json(&json!({ "TimeRange": { "start_time": 0, "end_time": u64::MAX } }))
            .unwrap(),
        EventQuery::time_range(0, u64::MAX)
    );
}

#[test]
fn decode_rejects_multiple_keys() {
    assert!(matches!(
        decode_err(json!({ "Transaction": "abc", "Sender": "0x1" })),
        DecodeError::ShapeMismatch { .. }
    ));
}

#[test]
fn decode_rejects_unknown_tags() {
    assert_eq!(
        decode_err(json!({ "Bogus": "x" })),
        DecodeError::UnknownVariant {
            tag: "Bogus".to_owned()
        }
    );
    assert_eq!(
        decode_err(json!({ "sender": "0x1" })),
        DecodeError::UnknownVariant {
            tag: "sender".to_owned()
        }
    );
}

#[test]
fn decode_rejects_non_query_values() {
    for value in [json!(null), json!(1), json!(true), json!(["All"])] {
        assert!(matches!(
            decode_err(value),
            DecodeError::ShapeMismatch { .. }
        ));
    }
    // A payload-carrying tag is never a bare string.
    assert!(matches!(
        decode_err(json!("Transaction")),
        DecodeError::ShapeMismatch { .. }
    ));
}

#[test]
fn decode_string_payloads_are_not_coerced() {
    assert_eq!(
        decode_err(json!({ "Sender": 1 })),
        DecodeError::FieldTypeMismatch {
            field: "Sender".to_owned(),
            expected: "string",
            found: "number 1".to_owned(),
        }
    );
    assert!(matches!(
        decode_err(json!({ "Object": null })),
        DecodeError::FieldTypeMismatch { .. }
    ));
    assert!(matches!(
        decode_err(json!({ "MoveModule": { "package": 2, "module": "coin" } })),
        DecodeError::FieldTypeMismatch { .. }
    ));
}

#[test]
fn decode_recipient() {
    assert_eq!(
        EventQuery::from_json(&json!({ "Recipient": { "AddressOwner": "0x3" } })).unwrap(),
        EventQuery::recipient(ObjectOwner::AddressOwner("0x3".to_owned()))
    );
    assert_eq!(
        EventQuery::from_json(&json!({ "Recipient": { "Shared": { "initial_shared_version": 4 } } }))
            .unwrap(),
        EventQuery::recipient(ObjectOwner::Shared {
            initial_shared_version: 4
        })
    );
    assert_eq!(
        EventQuery::from_json(&json!({ "Recipient": "Immutable" })).unwrap(),
        EventQuery::recipient(ObjectOwner::Immutable)
    );
    assert!(matches!(
        decode_err(json!({ "Recipient": { "Nobody": "0x3" } })),
        DecodeError::InvalidOwner { .. }
    ));
    assert!(matches!(
        decode_err(json!({ "Recipient": "0x3" })),
        DecodeError::InvalidOwner { .. }
    ));
}

#[test]
fn unknown_event_kinds_are_preserved_by_default() {
    let value = json!({ "EventType": "SplitCoin" });
    let query = EventQuery::from_json(&value).unwrap();
    match query.event_kind() {
        Some(EventKind::Unknown(kind)) => assert_eq!(kind.as_str(), "SplitCoin"),
        other => panic!("expected an unknown kind, got {other:?}"),
    }
    assert_eq!(query.to_json(), value);

    assert_eq!(
        EventQuery::from_json(&json!({ "EventType": "NewObject" })).unwrap(),
        EventQuery::EventType(EventKind::NewObject)
    );
}

#[test]
fn unknown_event_kinds_are_rejected_when_strict() {
    let strict = DecodeConfig::strict();
    assert_eq!(
        EventQuery::from_json_with(&json!({ "EventType": "SplitCoin" }), &strict).unwrap_err(),
        DecodeError::UnknownEventKind {
            kind: "SplitCoin".to_owned()
        }
    );
    for kind in EventKind::KNOWN {
        let value = json!({ "EventType": kind.as_str() });
        assert_eq!(
            EventQuery::from_json_with(&value, &strict).unwrap(),
            EventQuery::EventType(kind)
        );
    }
}

#[test]
fn serde_deserialize_uses_the_strict_decoder() {
    let query: EventQuery =
        serde_json::from_str(r#"{"MoveModule":{"package":"0x2","module":"coin"}}"#).unwrap();
    assert_eq!(query, EventQuery::move_module("0x2", "coin"));
    assert_eq!(serde_json::from_str::<EventQuery>("\"All\"").unwrap(), EventQuery::All);

    let err = serde_json::from_str::<EventQuery>(r#"{"Bogus":"x"}"#).unwrap_err();
    assert!(err.to_string().contains("Unknown event query variant `Bogus`"));

    let err = serde_json::from_str::<EventQuery>(
        r#"{"TimeRange":{"start_time":"100","end_time":200}}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("TimeRange.start_time"));
}

#[test]
fn error_messages_name_the_offender() {
    assert_eq!(
        decode_err(json!({ "MoveModule": { "module": "coin" } })).to_string(),
        "Missing field `package` in `MoveModule` query"
    );
    assert_eq!(
        decode_err(json!({ "Transaction": ["abc"] })).to_string(),
        "Invalid type for `Transaction`: expected string, found array"
    );
}

#[test]
fn every_constructible_event_kind_survives_a_round_trip() {
    let mut names: Vec<String> = EventKind::KNOWN
        .iter()
        .map(|kind| kind.as_str().to_owned())
        .collect();
    names.extend(["SplitCoin", "publish", ""].map(str::to_owned));
    for name in names {
        for kind in [EventKind::from(name.as_str()), EventKind::from(name.clone())] {
            let query = EventQuery::event_type(kind);
            assert_eq!(EventQuery::from_json(&query.to_json()).unwrap(), query);
        }
    }
}
