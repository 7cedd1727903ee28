// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Event query filters understood by the Sui event RPC, and their JSON wire encoding.
//!
//! An [`EventQuery`] is encoded with the externally tagged convention used throughout
//! the Sui JSON-RPC: `All` is the bare string `"All"`, every other variant is a
//! single-key object whose key is the variant name.

pub use config::{DecodeConfig, EventKindPolicy};
pub use error::DecodeError;
pub use event_kind::{EventKind, UnknownEventKind};
pub use event_query::{EventQuery, EventQueryTag};
pub use owner::ObjectOwner;

pub mod config;
pub mod decode;
mod error;
mod event_kind;
mod event_query;
mod owner;

#[cfg(test)]
#[path = "unit_tests/event_query_tests.rs"]
mod event_query_tests;

#[cfg(test)]
#[path = "unit_tests/decode_tests.rs"]
mod decode_tests;

#[cfg(test)]
#[path = "unit_tests/config_tests.rs"]
mod config_tests;
