// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure predicates that classify property keys and values.
//!
//! None of these functions fail: unexpected shapes classify as "not a
//! handler", "not a style", or "not prevented".

use super::PropValue;
use super::merge::MergeConfig;

/// Category of a property key for merge purposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropKind {
    /// Matches the handler syntax (`onClick`, `onPointerDown`, ...).
    Handler,
    /// The style key.
    Style,
    /// The class-list key.
    ClassList,
    /// Anything else.
    Opaque,
}

/// Classifies `key` under the given configuration.
///
/// Handler syntax wins over the style and class-list keys, which can only
/// collide under an unusual [`MergeConfig`].
#[must_use]
pub fn classify(key: &str, config: &MergeConfig) -> PropKind {
    if is_event_handler_with(key, config.handler_prefix) {
        PropKind::Handler
    } else if key == config.style_key {
        PropKind::Style
    } else if key == config.class_key {
        PropKind::ClassList
    } else {
        PropKind::Opaque
    }
}

/// Returns `true` if `key` is `on` followed by an ASCII uppercase letter.
///
/// Purely syntactic; the value is not inspected.
#[must_use]
pub fn is_event_handler(key: &str) -> bool {
    is_event_handler_with(key, MergeConfig::react().handler_prefix)
}

fn is_event_handler_with(key: &str, prefix: &str) -> bool {
    key.strip_prefix(prefix)
        .and_then(|rest| rest.bytes().next())
        .is_some_and(|b| b.is_ascii_uppercase())
}

/// Returns `true` if `value` is callable.
#[must_use]
pub fn is_event_handler_value(value: &PropValue) -> bool {
    matches!(value, PropValue::Handler(_))
}

/// Returns `true` if `value` is a non-null, non-list structured value.
#[must_use]
pub fn is_style_object(value: &PropValue) -> bool {
    matches!(value, PropValue::Object(_))
}

/// Returns `true` if `value` is an event whose default was prevented.
///
/// Both [`Event`](super::Event) descriptors and plain objects carrying
/// `defaultPrevented: true` count. Absent values, primitives, and lists are
/// never prevented.
#[must_use]
pub fn is_default_prevented(value: Option<&PropValue>) -> bool {
    match value {
        Some(PropValue::Event(event)) => event.is_default_prevented(),
        Some(PropValue::Object(object)) => {
            matches!(object.get("defaultPrevented"), Some(PropValue::Bool(true)))
        }
        _ => false,
    }
}
