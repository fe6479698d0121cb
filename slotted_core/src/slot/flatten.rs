// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fragment flattening.

use alloc::vec::Vec;

use crate::tree::Node;

/// Expands fragments in `children` into a flat, ordered sequence.
///
/// Nested lists are flattened and empty children dropped (see
/// [`Node::to_vec`]); every fragment is replaced in place by its own
/// flattened children. The result is in depth-first, left-to-right order and
/// never contains a fragment.
#[must_use]
pub fn flatten_children(children: &Node) -> Vec<Node> {
    flatten_counting(children).0
}

/// Like [`flatten_children`], also returning how many fragments were expanded.
pub(crate) fn flatten_counting(children: &Node) -> (Vec<Node>, usize) {
    let mut out = Vec::new();
    let mut expanded = 0;
    flatten_into(children, &mut out, &mut expanded);
    (out, expanded)
}

fn flatten_into(children: &Node, out: &mut Vec<Node>, expanded: &mut usize) {
    for child in children.to_vec() {
        match child {
            Node::Element(element) if element.is_fragment() => {
                *expanded += 1;
                flatten_into(element.children(), out, expanded);
            }
            other => out.push(other),
        }
    }
}
