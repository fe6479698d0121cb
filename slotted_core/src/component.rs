// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Function components and the decorators that pre-fill their props.
//!
//! A [`Component`] is a shared render function plus an optional display
//! name. The decorators in this module wrap one component in another that
//! fills in missing values before delegating; the caller's own values always
//! win over the defaults.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use crate::error::SlotError;
use crate::props::{MergeConfig, PropValue, Props, class_names};
use crate::refs::RefSink;
use crate::tree::{Element, Node};

/// Display name used when a wrapped component has none.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Input to a component's render function.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComponentProps {
    /// Props other than children and node reference.
    pub props: Props,
    /// Node reference passed by the caller.
    pub node_ref: Option<RefSink>,
    /// Children passed by the caller.
    pub children: Node,
}

impl ComponentProps {
    /// Creates an input with the given props and no children.
    #[must_use]
    pub fn new(props: Props) -> Self {
        Self {
            props,
            ..Self::default()
        }
    }

    /// Returns `self` with `children` set.
    #[must_use]
    pub fn with_children(mut self, children: impl Into<Node>) -> Self {
        self.children = children.into();
        self
    }

    /// Returns `self` with a node reference.
    #[must_use]
    pub fn with_ref(mut self, node_ref: RefSink) -> Self {
        self.node_ref = Some(node_ref);
        self
    }
}

impl From<&Element> for ComponentProps {
    fn from(element: &Element) -> Self {
        Self {
            props: element.props().clone(),
            node_ref: element.node_ref().cloned(),
            children: element.children().clone(),
        }
    }
}

type RenderFn = dyn Fn(ComponentProps) -> Result<Node, SlotError>;

/// A shared render function with an optional display name.
///
/// Equality is identity of the render function.
#[derive(Clone)]
pub struct Component {
    display_name: Option<String>,
    render: Rc<RenderFn>,
}

impl Component {
    /// Wraps a render function.
    pub fn new(render: impl Fn(ComponentProps) -> Result<Node, SlotError> + 'static) -> Self {
        Self {
            display_name: None,
            render: Rc::new(render),
        }
    }

    /// The display name, if one was set.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Renders the component.
    pub fn render(&self, input: ComponentProps) -> Result<Node, SlotError> {
        (self.render)(input)
    }

    /// Renders an element of this component's kind.
    pub fn render_element(&self, element: &Element) -> Result<Node, SlotError> {
        self.render(element.into())
    }

    fn name_or_unknown(&self) -> &str {
        self.display_name().unwrap_or(UNKNOWN_NAME)
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.render, &other.render)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Component")
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

/// Returns `component` with its display name set to `name`.
#[must_use]
pub fn with_display_name(component: Component, name: impl Into<String>) -> Component {
    Component {
        display_name: Some(name.into()),
        ..component
    }
}

/// Wraps `component` so that `defaults` fill in props the caller omits.
///
/// The wrapper inherits the inner display name, or [`UNKNOWN_NAME`].
#[must_use]
pub fn with_default_props(component: Component, defaults: Props) -> Component {
    let name = String::from(component.name_or_unknown());
    let wrapped = Component::new(move |mut input: ComponentProps| {
        let mut props = defaults.clone();
        props.overlay(&input.props);
        input.props = props;
        component.render(input)
    });
    with_display_name(wrapped, name)
}

/// Wraps `component` so that its class list always starts with `defaults`.
///
/// A non-empty caller class list is appended after the defaults; otherwise
/// the defaults are used alone. The class list lives under
/// [`MergeConfig::react`]'s class key. The wrapper is named
/// `withDefaultClassNames<Inner>`.
#[must_use]
pub fn with_default_class_names(component: Component, defaults: impl Into<String>) -> Component {
    let defaults: String = defaults.into();
    let name = format!("withDefaultClassNames<{}>", component.name_or_unknown());
    let class_key = MergeConfig::react().class_key;
    let wrapped = Component::new(move |mut input: ComponentProps| {
        let merged = match input.props.get_str(class_key) {
            Some(caller) if !caller.is_empty() => {
                class_names([Some(defaults.as_str()), Some(caller)])
            }
            _ => defaults.clone(),
        };
        input.props.insert(class_key, PropValue::Str(merged));
        component.render(input)
    });
    with_display_name(wrapped, name)
}

/// Clones `element` with `additional` props overlaid.
///
/// Returns [`Node::Empty`] when there is no element.
#[must_use]
pub fn render_with_additional_props(element: Option<&Element>, additional: &Props) -> Node {
    match element {
        Some(element) => Node::Element(element.cloned(Some(additional), None, None)),
        None => Node::Empty,
    }
}
