// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Merging a wrapper's property set into its target's.
//!
//! [`merge_props`] takes the *parent* (wrapper) properties and the *child*
//! (target element) properties and returns a fresh set. For every key the
//! child defines, the first matching policy applies:
//!
//! | Key                 | Result                                                |
//! |---------------------|-------------------------------------------------------|
//! | handler syntax      | child then parent, parent skipped if default-prevented |
//! | style key           | shallow merge, child wins per sub-key                 |
//! | class-list key      | parent tokens then child tokens, space-joined         |
//! | anything else       | child value                                           |
//!
//! Keys only the parent defines are carried through unchanged. Neither input
//! is modified.

use super::class_names::class_names;
use super::classify::{PropKind, classify, is_default_prevented};
use super::{Handler, PropValue, Props};
use crate::trace::{MergeEvent, Tracer};

/// Names of the keys that receive special merge treatment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeConfig {
    /// Prefix that, followed by an ASCII uppercase letter, marks a handler key.
    pub handler_prefix: &'static str,
    /// Key holding the style mapping.
    pub style_key: &'static str,
    /// Key holding the space-separated class list.
    pub class_key: &'static str,
}

impl MergeConfig {
    /// `onClick` / `style` / `className`.
    #[must_use]
    pub const fn react() -> Self {
        Self {
            handler_prefix: "on",
            style_key: "style",
            class_key: "className",
        }
    }

    /// `onClick` / `style` / `class`.
    #[must_use]
    pub const fn html() -> Self {
        Self {
            class_key: "class",
            ..Self::react()
        }
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self::react()
    }
}

/// Which rule decided a merged key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MergePolicy {
    /// Handler key where the parent had no handler; the child value is kept.
    ChildHandler,
    /// Handler key where the child value was not callable; the parent's
    /// handler is kept.
    ParentHandler,
    /// Both sides were callable and were chained.
    ComposedHandler,
    /// Shallow style merge.
    Style,
    /// Class-list concatenation.
    ClassList,
    /// Last writer wins.
    Opaque,
}

/// Merges `parent` into `child` using [`MergeConfig::react`].
#[must_use]
pub fn merge_props(parent: &Props, child: &Props) -> Props {
    merge_props_with(parent, child, &MergeConfig::react(), &mut Tracer::none())
}

/// Merges `parent` into `child` using the given configuration, reporting to
/// `tracer`.
pub fn merge_props_with(
    parent: &Props,
    child: &Props,
    config: &MergeConfig,
    tracer: &mut Tracer<'_>,
) -> Props {
    let mut merged = parent.clone();
    let mut handlers_composed = 0;

    for (key, child_value) in child.iter() {
        let parent_value = parent.get(key);
        let (value, policy) = match classify(key, config) {
            PropKind::Handler => merge_handler(parent_value, child_value),
            PropKind::Style => (merge_style(parent_value, child_value), MergePolicy::Style),
            PropKind::ClassList => (
                merge_class_list(parent_value, child_value),
                MergePolicy::ClassList,
            ),
            PropKind::Opaque => (child_value.clone(), MergePolicy::Opaque),
        };
        if policy == MergePolicy::ComposedHandler {
            handlers_composed += 1;
        }
        #[cfg(feature = "trace-rich")]
        tracer.prop_merged(&crate::trace::PropMergeEvent { key, policy });
        merged.insert(key, value);
    }

    tracer.merge(&MergeEvent {
        parent_keys: parent.len(),
        child_keys: child.len(),
        merged_keys: merged.len(),
        handlers_composed,
    });
    merged
}

fn merge_handler(parent: Option<&PropValue>, child: &PropValue) -> (PropValue, MergePolicy) {
    let Some(parent_handler) = parent.and_then(PropValue::as_handler) else {
        return (child.clone(), MergePolicy::ChildHandler);
    };
    let Some(child_handler) = child.as_handler() else {
        return (
            PropValue::Handler(parent_handler.clone()),
            MergePolicy::ParentHandler,
        );
    };
    (
        PropValue::Handler(chain_handlers(child_handler.clone(), parent_handler.clone())),
        MergePolicy::ComposedHandler,
    )
}

/// Calls `first`, then `second` unless `first` prevented the default of the
/// leading argument.
fn chain_handlers(first: Handler, second: Handler) -> Handler {
    Handler::new(move |args| {
        first.call(args);
        if !is_default_prevented(args.first()) {
            second.call(args);
        }
    })
}

fn merge_style(parent: Option<&PropValue>, child: &PropValue) -> PropValue {
    let mut style = Props::new();
    if let Some(parent_style) = parent.and_then(PropValue::as_object) {
        style.overlay(parent_style);
    }
    if let Some(child_style) = child.as_object() {
        style.overlay(child_style);
    }
    PropValue::Object(style)
}

fn merge_class_list(parent: Option<&PropValue>, child: &PropValue) -> PropValue {
    PropValue::Str(class_names([
        parent.and_then(PropValue::as_str),
        child.as_str(),
    ]))
}
