// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Child values and the counting/enumeration primitives.

use alloc::string::String;
use alloc::vec::Vec;

use super::element::Element;

/// A child value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Node {
    /// No content (null, absent, or a boolean).
    #[default]
    Empty,
    /// A text run.
    Text(String),
    /// A number rendered as text.
    Number(f64),
    /// An element.
    Element(Element),
    /// A nested list of children.
    List(Vec<Self>),
}

impl Node {
    /// Returns `true` for [`Node::Element`].
    #[must_use]
    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element(_))
    }

    /// Returns the element if this is [`Node::Element`].
    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Consumes the node and returns the element if it is one.
    #[must_use]
    pub fn into_element(self) -> Option<Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Flattens nested lists depth-first and drops [`Node::Empty`].
    ///
    /// Fragments are left as-is; see
    /// [`flatten_children`](crate::slot::flatten_children) for that.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Self> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut Vec<Self>) {
        match self {
            Self::Empty => {}
            Self::List(items) => {
                for item in items {
                    item.collect_into(out);
                }
            }
            other => out.push(other.clone()),
        }
    }

    /// Counts children the way a host runtime does.
    ///
    /// A top-level [`Node::Empty`] counts as zero. Inside a list every leaf
    /// counts as one, empty leaves included, and nested lists are summed.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::List(items) => items.iter().map(Self::count_leaf).sum(),
            _ => 1,
        }
    }

    fn count_leaf(&self) -> usize {
        match self {
            Self::List(items) => items.iter().map(Self::count_leaf).sum(),
            _ => 1,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Vec<Self>> for Node {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl<T> From<Option<T>> for Node
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn div() -> Node {
        Element::host("div").into()
    }

    #[test]
    fn to_vec_flattens_lists_and_drops_empty() {
        let node = Node::List(vec![
            "a".into(),
            Node::Empty,
            Node::List(vec![div(), Node::List(vec!["b".into()])]),
        ]);
        assert_eq!(node.to_vec(), vec!["a".into(), div(), "b".into()]);
    }

    #[test]
    fn to_vec_keeps_single_leaf() {
        assert_eq!(Node::from("x").to_vec(), vec![Node::from("x")]);
        assert!(Node::Empty.to_vec().is_empty(), "empty has no children");
    }

    #[test]
    fn count_matches_host_rules() {
        assert_eq!(Node::Empty.count(), 0);
        assert_eq!(Node::from("x").count(), 1);
        assert_eq!(div().count(), 1);
        assert_eq!(Node::List(vec![]).count(), 0);
        assert_eq!(Node::List(vec![Node::Empty, div()]).count(), 2);
        assert_eq!(
            Node::List(vec![div(), Node::List(vec!["a".into(), "b".into()])]).count(),
            3
        );
    }

    #[test]
    fn option_conversion() {
        assert_eq!(Node::from(None::<&str>), Node::Empty);
        assert_eq!(Node::from(Some(Element::host("p"))), Node::Element(Element::host("p")));
        assert_eq!(
            Node::from(vec![Node::from(2.0)]),
            Node::List(vec![Node::Number(2.0)])
        );
        assert_eq!(Node::from(Some("t")), Node::Text("t".into()));
    }
}
