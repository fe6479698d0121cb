// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element descriptors.

use alloc::boxed::Box;
use alloc::string::String;

use super::node::Node;
use crate::component::Component;
use crate::props::{PropValue, Props};
use crate::refs::RefSink;

/// What an element renders as.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementKind {
    /// A host tag such as `"a"` or `"button"`.
    Host(String),
    /// Groups children without a rendered node of its own.
    Fragment,
    /// Marks the designated child of a [`Slot`](crate::slot::Slot).
    Slottable,
    /// A function component.
    Component(Component),
}

/// An immutable element descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    kind: ElementKind,
    key: Option<String>,
    props: Props,
    node_ref: Option<RefSink>,
    children: Box<Node>,
}

impl Element {
    /// Creates an element of the given kind with no props or children.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            key: None,
            props: Props::new(),
            node_ref: None,
            children: Box::new(Node::Empty),
        }
    }

    /// Creates a host element, e.g. `Element::host("a")`.
    #[must_use]
    pub fn host(tag: impl Into<String>) -> Self {
        Self::new(ElementKind::Host(tag.into()))
    }

    /// Creates a fragment around `children`.
    #[must_use]
    pub fn fragment(children: impl Into<Node>) -> Self {
        Self::new(ElementKind::Fragment).with_children(children)
    }

    /// Creates an element that renders `component`.
    #[must_use]
    pub fn component(component: Component) -> Self {
        Self::new(ElementKind::Component(component))
    }

    /// Returns `self` with `key` set to `value`.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// Returns `self` with `props` overlaid on its existing props.
    #[must_use]
    pub fn with_props(mut self, props: &Props) -> Self {
        self.props.overlay(props);
        self
    }

    /// Returns `self` with its children replaced.
    #[must_use]
    pub fn with_children(mut self, children: impl Into<Node>) -> Self {
        self.children = Box::new(children.into());
        self
    }

    /// Returns `self` with its node reference replaced.
    #[must_use]
    pub fn with_ref(mut self, node_ref: impl Into<Option<RefSink>>) -> Self {
        self.node_ref = node_ref.into();
        self
    }

    /// Returns `self` with a reconciliation key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Produces a new element of the same kind and key.
    ///
    /// `overlay` props win over the existing ones (existing key positions are
    /// kept). Children and node reference are replaced only when given.
    #[must_use]
    pub fn cloned(
        &self,
        overlay: Option<&Props>,
        children: Option<Node>,
        node_ref: Option<Option<RefSink>>,
    ) -> Self {
        let mut out = self.clone();
        if let Some(overlay) = overlay {
            out.props.overlay(overlay);
        }
        if let Some(children) = children {
            out.children = Box::new(children);
        }
        if let Some(node_ref) = node_ref {
            out.node_ref = node_ref;
        }
        out
    }

    /// The element kind.
    #[must_use]
    pub const fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// The host tag, if this is a host element.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Host(tag) => Some(tag),
            _ => None,
        }
    }

    /// The reconciliation key.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The element's own props (children and node reference excluded).
    #[must_use]
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// The element's node reference.
    #[must_use]
    pub const fn node_ref(&self) -> Option<&RefSink> {
        self.node_ref.as_ref()
    }

    /// The element's children.
    #[must_use]
    pub fn children(&self) -> &Node {
        &self.children
    }

    /// Returns `true` for [`ElementKind::Fragment`].
    #[must_use]
    pub const fn is_fragment(&self) -> bool {
        matches!(self.kind, ElementKind::Fragment)
    }

    /// Returns `true` for [`ElementKind::Slottable`].
    #[must_use]
    pub const fn is_slottable(&self) -> bool {
        matches!(self.kind, ElementKind::Slottable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn builder_sets_fields() {
        let el = Element::host("a")
            .with_key("k")
            .with_prop("href", "/x")
            .with_children("link");
        assert_eq!(el.tag(), Some("a"));
        assert_eq!(el.key(), Some("k"));
        assert_eq!(el.props().get_str("href"), Some("/x"));
        assert_eq!(el.children(), &Node::from("link"));
        assert!(el.node_ref().is_none(), "no ref by default");
    }

    #[test]
    fn cloned_overlays_props_and_keeps_original() {
        let original = Element::host("a")
            .with_prop("href", "/x")
            .with_prop("id", "one")
            .with_children("text");
        let overlay = Props::new().with("id", "two").with("title", "t");
        let copy = original.cloned(Some(&overlay), Some(Node::List(vec!["new".into()])), None);

        assert_eq!(copy.tag(), Some("a"));
        assert_eq!(copy.props().get_str("id"), Some("two"));
        assert_eq!(copy.props().get_str("href"), Some("/x"));
        assert_eq!(copy.props().get_str("title"), Some("t"));
        assert_eq!(copy.children(), &Node::List(vec!["new".into()]));

        assert_eq!(original.props().get_str("id"), Some("one"));
        assert_eq!(original.children(), &Node::from("text"));
    }

    #[test]
    fn cloned_can_clear_ref() {
        let (sink, _) = RefSink::cell();
        let el = Element::host("div").with_ref(sink);
        assert!(el.cloned(None, None, None).node_ref().is_some(), "ref kept");
        assert!(el.cloned(None, None, Some(None)).node_ref().is_none(), "ref cleared");
    }

    #[test]
    fn fragment_kind() {
        let frag = Element::fragment(vec![Node::from("a")]);
        assert!(frag.is_fragment(), "fragment");
        assert!(!frag.is_slottable(), "not slottable");
        assert_eq!(frag.tag(), None);
    }
}
