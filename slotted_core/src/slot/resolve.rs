// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Designated-child resolution.

use alloc::vec::Vec;

use super::flatten::flatten_counting;
use crate::error::SlotError;
use crate::trace::{FlattenEvent, ResolveEvent, ResolveOutcome, Tracer};
use crate::tree::{Element, Node};

/// The element a slot should merge into.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// No marker: the raw, unflattened children are the merge target.
    Direct(Node),
    /// A marker wrapped an element. The element is returned with the slot's
    /// other children grafted in, the marker's position holding the element's
    /// own children.
    Promoted(Element),
    /// A marker was present but wrapped no element; nothing is rendered.
    Empty,
}

/// Resolves the merge target among `children`.
///
/// Fails if more than one marker is found, or if the marker's content holds
/// more than one child.
pub fn resolve(children: &Node, tracer: &mut Tracer<'_>) -> Result<Resolution, SlotError> {
    let (flat, fragments_expanded) = flatten_counting(children);
    tracer.flatten(&FlattenEvent {
        input_len: children.count(),
        output_len: flat.len(),
        fragments_expanded,
    });

    let markers = flat.iter().filter(|child| is_slottable(child)).count();
    if markers > 1 {
        return Err(SlotError::MultipleSlottables { count: markers });
    }

    let marker = flat.iter().enumerate().find_map(|(i, child)| {
        child
            .as_element()
            .filter(|element| element.is_slottable())
            .map(|element| (i, element))
    });
    let Some((position, marker)) = marker else {
        tracer.resolve(&ResolveEvent {
            outcome: ResolveOutcome::NoSlottable,
            children: flat.len(),
        });
        return Ok(Resolution::Direct(children.clone()));
    };

    let content = marker.children();
    let count = content.count();
    if count > 1 {
        return Err(SlotError::SlottableContent { count });
    }

    let Some(target) = content.as_element() else {
        tracer.resolve(&ResolveEvent {
            outcome: ResolveOutcome::EmptySlot,
            children: flat.len(),
        });
        return Ok(Resolution::Empty);
    };

    let grafted: Vec<Node> = flat
        .iter()
        .enumerate()
        .map(|(i, child)| {
            if i == position {
                target.children().clone()
            } else {
                child.clone()
            }
        })
        .collect();

    tracer.resolve(&ResolveEvent {
        outcome: ResolveOutcome::Promoted,
        children: flat.len(),
    });
    Ok(Resolution::Promoted(target.cloned(
        None,
        Some(Node::List(grafted)),
        None,
    )))
}

fn is_slottable(node: &Node) -> bool {
    node.as_element().is_some_and(Element::is_slottable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::Slottable;
    use alloc::vec;

    fn resolve_plain(children: &Node) -> Result<Resolution, SlotError> {
        resolve(children, &mut Tracer::none())
    }

    #[test]
    fn no_marker_returns_raw_children() {
        let children = Node::List(vec![Element::fragment(vec![Node::from("a")]).into()]);
        assert_eq!(
            resolve_plain(&children),
            Ok(Resolution::Direct(children.clone()))
        );
    }

    #[test]
    fn marker_promotes_and_grafts_siblings() {
        let target = Element::host("span").with_children("X");
        let children = Node::List(vec![
            "before".into(),
            Slottable::wrap(target.clone()).into(),
            "after".into(),
        ]);
        let Ok(Resolution::Promoted(promoted)) = resolve_plain(&children) else {
            panic!("expected promotion");
        };
        assert_eq!(promoted.tag(), Some("span"));
        assert_eq!(
            promoted.children(),
            &Node::List(vec!["before".into(), "X".into(), "after".into()])
        );
    }

    #[test]
    fn marker_inside_fragment_is_found() {
        let children = Node::List(vec![Element::fragment(vec![
            Node::from("a"),
            Slottable::wrap(Element::host("b")).into(),
        ])
        .into()]);
        let Ok(Resolution::Promoted(promoted)) = resolve_plain(&children) else {
            panic!("expected promotion");
        };
        assert_eq!(promoted.tag(), Some("b"));
        assert_eq!(promoted.children(), &Node::List(vec!["a".into(), Node::Empty]));
    }

    #[test]
    fn marker_with_text_is_empty_slot() {
        let children = Node::List(vec![Slottable::wrap("just text").into()]);
        assert_eq!(resolve_plain(&children), Ok(Resolution::Empty));
        let children = Node::List(vec![Slottable::wrap(Node::Empty).into()]);
        assert_eq!(resolve_plain(&children), Ok(Resolution::Empty));
    }

    #[test]
    fn marker_with_two_children_fails() {
        let content = Node::List(vec![Element::host("a").into(), Element::host("b").into()]);
        let children = Node::List(vec![Slottable::wrap(content).into()]);
        assert_eq!(
            resolve_plain(&children),
            Err(SlotError::SlottableContent { count: 2 })
        );
    }

    #[test]
    fn two_markers_fail() {
        let children = Node::List(vec![
            Slottable::wrap(Element::host("a")).into(),
            Element::fragment(vec![Node::from(Slottable::wrap(Element::host("b")))]).into(),
        ]);
        assert_eq!(
            resolve_plain(&children),
            Err(SlotError::MultipleSlottables { count: 2 })
        );
    }
}
