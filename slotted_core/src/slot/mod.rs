// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slot primitives.
//!
//! A [`Slot`] renders no element of its own. Each pass runs three steps:
//!
//! 1. **Resolve** ([`resolve`]): flatten fragments among the children and
//!    look for a [`Slottable`] marker. Without a marker, the raw children are
//!    the target. With one, the element it wraps is promoted and the slot's
//!    other children are grafted into it, the marker's position holding the
//!    promoted element's own children.
//! 2. **Merge**: the slot's props are merged into the target's with
//!    [`merge_props_with`](crate::props::merge_props_with), and the slot's
//!    node reference is composed with the target's.
//! 3. **Clone**: the target is cloned with the merged props and reference.
//!
//! Only an element target produces output. An empty marker or non-element
//! content resolves to `Ok(None)`; too many candidates abort the pass with a
//! [`SlotError`].

mod clone;
mod flatten;
mod resolve;

pub use flatten::flatten_children;
pub use resolve::{Resolution, resolve};

use crate::component::{Component, ComponentProps, with_display_name};
use crate::error::SlotError;
use crate::props::{MergeConfig, PropValue, Props};
use crate::refs::RefSink;
use crate::trace::{ComposeEvent, ComposeOutcome, Tracer};
use crate::tree::{Element, ElementKind, Node};

use alloc::string::String;

use clone::clone_into_target;

/// A transparent wrapper that forges its props onto a single child element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slot {
    props: Props,
    node_ref: Option<RefSink>,
    children: Node,
    config: MergeConfig,
}

impl Slot {
    /// Creates a slot around `children` with no props of its own.
    #[must_use]
    pub fn new(children: impl Into<Node>) -> Self {
        Self {
            children: children.into(),
            ..Self::default()
        }
    }

    /// Creates a slot from component input.
    #[must_use]
    pub fn from_input(input: ComponentProps) -> Self {
        Self {
            props: input.props,
            node_ref: input.node_ref,
            children: input.children,
            config: MergeConfig::default(),
        }
    }

    /// Returns `self` with `key` set to `value`.
    #[must_use]
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key, value);
        self
    }

    /// Returns `self` with `props` overlaid on its own.
    #[must_use]
    pub fn with_props(mut self, props: &Props) -> Self {
        self.props.overlay(props);
        self
    }

    /// Returns `self` with a node reference.
    #[must_use]
    pub fn with_ref(mut self, node_ref: RefSink) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// Returns `self` with a different merge configuration.
    #[must_use]
    pub fn with_config(mut self, config: MergeConfig) -> Self {
        self.config = config;
        self
    }

    /// The slot's own props.
    #[must_use]
    pub const fn props(&self) -> &Props {
        &self.props
    }

    /// Runs a composition pass.
    pub fn render(&self) -> Result<Option<Element>, SlotError> {
        self.render_traced(&mut Tracer::none())
    }

    /// Runs a composition pass, reporting to `tracer`.
    pub fn render_traced(&self, tracer: &mut Tracer<'_>) -> Result<Option<Element>, SlotError> {
        let result = self.compose(tracer);
        let (outcome, ref_composed) = match &result {
            Ok(Some(_)) => (ComposeOutcome::Cloned, self.node_ref.is_some()),
            Ok(None) => (ComposeOutcome::NoOutput, false),
            Err(error) => {
                tracer.error(error);
                (ComposeOutcome::Failed, false)
            }
        };
        tracer.compose(&ComposeEvent {
            outcome,
            ref_composed,
        });
        result
    }

    fn compose(&self, tracer: &mut Tracer<'_>) -> Result<Option<Element>, SlotError> {
        let target = match resolve(&self.children, tracer)? {
            Resolution::Direct(children) => children,
            Resolution::Promoted(element) => Node::Element(element),
            Resolution::Empty => return Ok(None),
        };
        clone_into_target(
            &self.props,
            self.node_ref.as_ref(),
            target,
            &self.config,
            tracer,
        )
    }

    /// The slot as a [`Component`] named `"Slot"`.
    ///
    /// A pass that produces nothing renders [`Node::Empty`].
    #[must_use]
    pub fn component() -> Component {
        with_display_name(
            Component::new(|input| Ok(Self::from_input(input).render()?.into())),
            "Slot",
        )
    }
}

/// Marker designating which descendant of a [`Slot`] receives its props.
#[derive(Clone, Copy, Debug, Default)]
pub struct Slottable;

impl Slottable {
    /// Wraps `children` in a marker element.
    ///
    /// The children should be exactly one element.
    #[must_use]
    pub fn wrap(children: impl Into<Node>) -> Element {
        Element::new(ElementKind::Slottable).with_children(children)
    }

    /// Outside of a slot, a marker renders its children unchanged.
    #[must_use]
    pub fn render(marker: &Element) -> Node {
        marker.children().clone()
    }

    /// The marker as a [`Component`] named `"Slottable"`, rendering its
    /// children unchanged.
    #[must_use]
    pub fn component() -> Component {
        with_display_name(Component::new(|input| Ok(input.children)), "Slottable")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::with_default_class_names;
    use crate::props::{Event, Handler};
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    type CallLog = Rc<RefCell<Vec<&'static str>>>;

    fn logging_handler(log: &CallLog, name: &'static str) -> Handler {
        let log = Rc::clone(log);
        Handler::new(move |_| log.borrow_mut().push(name))
    }

    fn click_handler(element: &Element) -> Handler {
        element
            .props()
            .get("onClick")
            .and_then(PropValue::as_handler)
            .cloned()
            .expect("onClick should be a handler")
    }

    #[test]
    fn wraps_single_element_child() {
        let log = CallLog::default();
        let link = Element::host("a")
            .with_prop("href", "/x")
            .with_prop("className", "link")
            .with_prop("onClick", logging_handler(&log, "h2"));
        let slot = Slot::new(link)
            .with_prop("className", "base")
            .with_prop("onClick", logging_handler(&log, "h1"));

        let out = slot.render().unwrap().expect("element output");
        assert_eq!(out.tag(), Some("a"));
        assert_eq!(out.props().get_str("className"), Some("base link"));
        assert_eq!(out.props().get_str("href"), Some("/x"));

        click_handler(&out).call(&[PropValue::Event(Event::new("click"))]);
        assert_eq!(*log.borrow(), vec!["h2", "h1"]);
    }

    #[test]
    fn leaf_can_suppress_wrapper_handler() {
        let log = CallLog::default();
        let leaf_log = Rc::clone(&log);
        let button = Element::host("button").with_prop(
            "onClick",
            Handler::new(move |args| {
                leaf_log.borrow_mut().push("leaf");
                if let Some(PropValue::Event(event)) = args.first() {
                    event.prevent_default();
                }
            }),
        );
        let slot = Slot::new(button).with_prop("onClick", logging_handler(&log, "wrapper"));
        let out = slot.render().unwrap().expect("element output");
        click_handler(&out).call(&[PropValue::Event(Event::new("click"))]);
        assert_eq!(*log.borrow(), vec!["leaf"]);
    }

    #[test]
    fn promotes_slottable_and_grafts_siblings() {
        let span = Element::host("span").with_children("X");
        let children = Node::List(vec![Slottable::wrap(span).into(), "Y".into()]);
        let slot = Slot::new(children).with_prop("className", "wrapper");

        let out = slot.render().unwrap().expect("element output");
        assert_eq!(out.tag(), Some("span"));
        assert_eq!(out.props().get_str("className"), Some("wrapper"));
        assert_eq!(out.children(), &Node::List(vec!["X".into(), "Y".into()]));
    }

    #[test]
    fn slottable_around_childless_element() {
        let children = Node::List(vec![
            Element::host("i").into(),
            Slottable::wrap(Element::host("button")).into(),
        ]);
        let out = Slot::new(children).render().unwrap().expect("element output");
        assert_eq!(out.tag(), Some("button"));
        assert_eq!(
            out.children(),
            &Node::List(vec![Element::host("i").into(), Node::Empty])
        );
    }

    #[test]
    fn two_slottables_fail() {
        let children = Node::List(vec![
            Slottable::wrap(Element::host("a")).into(),
            Slottable::wrap(Element::host("b")).into(),
        ]);
        let err = Slot::new(children).render().unwrap_err();
        assert_eq!(err, SlotError::MultipleSlottables { count: 2 });
        assert_eq!(err.count(), 2);
    }

    #[test]
    fn bare_text_renders_nothing() {
        assert_eq!(Slot::new("hello").render(), Ok(None));
    }

    #[test]
    fn empty_slottable_renders_nothing() {
        let children = Node::List(vec![Slottable::wrap("text only").into(), "Y".into()]);
        assert_eq!(Slot::new(children).render(), Ok(None));
    }

    #[test]
    fn multiple_plain_children_fail() {
        let children = Node::List(vec![Element::host("a").into(), Element::host("b").into()]);
        assert_eq!(
            Slot::new(children).render(),
            Err(SlotError::MultipleChildren { count: 2 })
        );
    }

    #[test]
    fn slottable_with_many_children_fails() {
        let content = Node::List(vec!["a".into(), Element::host("b").into()]);
        let children = Node::List(vec![Slottable::wrap(content).into()]);
        assert_eq!(
            Slot::new(children).render(),
            Err(SlotError::SlottableContent { count: 2 })
        );
    }

    #[test]
    fn slot_and_child_refs_are_composed() {
        let (slot_sink, slot_cell) = RefSink::cell();
        let (child_sink, child_cell) = RefSink::cell();
        let child = Element::host("div").with_ref(child_sink);
        let out = Slot::new(child)
            .with_ref(slot_sink)
            .render()
            .unwrap()
            .expect("element output");

        let node_ref = out.node_ref().expect("composed ref");
        node_ref.set(Some(Rc::new(5_u32)));
        assert!(slot_cell.borrow().is_some(), "slot ref attached");
        assert!(child_cell.borrow().is_some(), "child ref attached");
        node_ref.set(None);
        assert!(slot_cell.borrow().is_none(), "slot ref detached");
        assert!(child_cell.borrow().is_none(), "child ref detached");
    }

    #[test]
    fn repeated_passes_are_equivalent() {
        let slot = Slot::new(Element::host("p").with_prop("className", "b"))
            .with_prop("className", "a")
            .with_prop("style", Props::new().with("color", "red"));
        let first = slot.render().unwrap();
        let second = slot.render().unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.as_ref().and_then(|e| e.props().get_str("className")),
            Some("a b")
        );
    }

    #[test]
    fn html_config_merges_class() {
        let slot = Slot::new(Element::host("p").with_prop("class", "leaf"))
            .with_prop("class", "root")
            .with_config(MergeConfig::html());
        let out = slot.render().unwrap().expect("element output");
        assert_eq!(out.props().get_str("class"), Some("root leaf"));
    }

    #[test]
    fn slot_component_with_default_class_names() {
        let button = with_default_class_names(Slot::component(), "btn");
        assert_eq!(button.display_name(), Some("withDefaultClassNames<Slot>"));

        let input = ComponentProps::new(Props::new().with("className", "primary"))
            .with_children(Element::host("a").with_prop("className", "link"));
        let out = button.render(input).unwrap();
        let element = out.as_element().expect("element output");
        assert_eq!(element.props().get_str("className"), Some("btn primary link"));

        let empty = button
            .render(ComponentProps::default().with_children("text"))
            .unwrap();
        assert_eq!(empty, Node::Empty);
    }

    #[test]
    fn slottable_renders_children_outside_slot() {
        let marker = Slottable::wrap("content");
        assert_eq!(Slottable::render(&marker), Node::from("content"));

        let component = Slottable::component();
        assert_eq!(component.display_name(), Some("Slottable"));
        let out = component
            .render(ComponentProps::default().with_children("content"))
            .unwrap();
        assert_eq!(out, Node::from("content"));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn trace_reports_pass() {
        use crate::trace::{
            FlattenEvent, MergeEvent, ResolveEvent, ResolveOutcome, TraceSink,
        };

        #[derive(Default)]
        struct Sink {
            flattened: Vec<usize>,
            resolved: Vec<ResolveOutcome>,
            merged: Vec<usize>,
            composed: Vec<ComposeOutcome>,
            errors: Vec<SlotError>,
        }
        impl TraceSink for Sink {
            fn on_flatten(&mut self, e: &FlattenEvent) {
                self.flattened.push(e.output_len);
            }
            fn on_resolve(&mut self, e: &ResolveEvent) {
                self.resolved.push(e.outcome);
            }
            fn on_merge(&mut self, e: &MergeEvent) {
                self.merged.push(e.merged_keys);
            }
            fn on_compose(&mut self, e: &ComposeEvent) {
                self.composed.push(e.outcome);
            }
            fn on_error(&mut self, error: &SlotError) {
                self.errors.push(*error);
            }
        }

        let mut sink = Sink::default();
        let mut tracer = Tracer::new(&mut sink);
        let children = Node::List(vec![
            Element::fragment(vec![Node::from(Slottable::wrap(Element::host("b")))]).into(),
            "tail".into(),
        ]);
        let slot = Slot::new(children).with_prop("id", "s");
        slot.render_traced(&mut tracer).unwrap();
        Slot::new(Node::List(vec!["a".into(), "b".into()]))
            .render_traced(&mut tracer)
            .unwrap_err();
        drop(tracer);

        assert_eq!(sink.flattened, vec![2, 2]);
        assert_eq!(sink.resolved, vec![ResolveOutcome::Promoted, ResolveOutcome::NoSlottable]);
        assert_eq!(sink.merged, vec![1]);
        assert_eq!(sink.composed, vec![ComposeOutcome::Cloned, ComposeOutcome::Failed]);
        assert_eq!(sink.errors, vec![SlotError::MultipleChildren { count: 2 }]);
    }
}
