// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forging the slot's props onto the resolved target.

use crate::error::SlotError;
use crate::props::{MergeConfig, Props, merge_props_with};
use crate::refs::{RefSink, compose_refs};
use crate::trace::Tracer;
use crate::tree::{Element, Node};

/// Merges `props` into `target` and composes `slot_ref` with the target's
/// own reference.
///
/// Non-element targets produce `Ok(None)`, unless they count more than one
/// child, which is a cardinality violation.
pub(crate) fn clone_into_target(
    props: &Props,
    slot_ref: Option<&RefSink>,
    target: Node,
    config: &MergeConfig,
    tracer: &mut Tracer<'_>,
) -> Result<Option<Element>, SlotError> {
    let Node::Element(child) = target else {
        let count = target.count();
        return if count > 1 {
            Err(SlotError::MultipleChildren { count })
        } else {
            Ok(None)
        };
    };

    let merged = merge_props_with(props, child.props(), config, tracer);
    let child_ref = child.node_ref().cloned();
    let node_ref = match slot_ref {
        Some(slot_ref) => Some(compose_refs([Some(slot_ref.clone()), child_ref])),
        None => child_ref,
    };
    Ok(Some(child.cloned(Some(&merged), None, Some(node_ref))))
}
