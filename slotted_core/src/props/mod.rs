// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property sets and the values they carry.
//!
//! A [`Props`] is an open, insertion-ordered mapping from string keys to
//! [`PropValue`]s. Only a handful of keys get special treatment when two
//! property sets are merged (see [`merge`]):
//!
//! - Keys matching the handler syntax (`on` followed by an uppercase letter)
//!   whose values are [`Handler`]s.
//! - The style key, whose value is an [`Object`](PropValue::Object).
//! - The class-list key, whose value is a space-separated
//!   [`Str`](PropValue::Str).
//!
//! Everything else is opaque and last-writer-wins.

mod class_names;
pub mod classify;
pub mod merge;

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

pub use class_names::class_names;
pub use merge::{MergeConfig, MergePolicy, merge_props, merge_props_with};

/// An insertion-ordered property set.
///
/// Overwriting an existing key keeps its original position, so merged output
/// lists the parent's keys first, followed by keys only the child defines.
#[derive(Clone, Default, PartialEq)]
pub struct Props {
    map: IndexMap<String, PropValue, FxBuildHasher>,
}

impl Props {
    /// Creates an empty property set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `self` with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, returning the previous value if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropValue>,
    ) -> Option<PropValue> {
        self.map.insert(key.into(), value.into())
    }

    /// Removes `key`, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        self.map.shift_remove(key)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.map.get(key)
    }

    /// Returns the value under `key` if it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.map.get(key) {
            Some(PropValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Copies every entry of `other` into `self`; `other` wins on conflicts.
    pub fn overlay(&mut self, other: &Self) {
        for (key, value) in &other.map {
            self.map.insert(key.clone(), value.clone());
        }
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}

/// A single property value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    Str(String),
    /// An ordered list of values.
    List(Vec<Self>),
    /// A structured value, e.g. a style mapping.
    Object(Props),
    /// A callable event handler.
    Handler(Handler),
    /// An event descriptor passed as a handler argument.
    Event(Event),
}

impl PropValue {
    /// Returns the string slice if this is a [`Str`](Self::Str).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the handler if this is a [`Handler`](Self::Handler).
    #[must_use]
    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            Self::Handler(h) => Some(h),
            _ => None,
        }
    }

    /// Returns the mapping if this is an [`Object`](Self::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&Props> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<Vec<Self>> for PropValue {
    fn from(items: Vec<Self>) -> Self {
        Self::List(items)
    }
}

impl From<Props> for PropValue {
    fn from(props: Props) -> Self {
        Self::Object(props)
    }
}

impl From<Handler> for PropValue {
    fn from(handler: Handler) -> Self {
        Self::Handler(handler)
    }
}

impl From<Event> for PropValue {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

type HandlerFn = dyn Fn(&[PropValue]);

/// A shared, callable event handler.
///
/// Handlers receive positional arguments; by convention the first one is the
/// [`Event`] being dispatched. Equality is identity.
#[derive(Clone)]
pub struct Handler(Rc<HandlerFn>);

impl Handler {
    /// Wraps a closure as a handler.
    pub fn new(f: impl Fn(&[PropValue]) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the handler.
    pub fn call(&self, args: &[PropValue]) {
        (self.0)(args);
    }

    /// Returns `true` if both handles point at the same closure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// An event descriptor with a shared `defaultPrevented` flag.
///
/// Clones share the flag, so a handler that calls
/// [`prevent_default`](Self::prevent_default) is observed by every later
/// handler receiving the same event.
#[derive(Clone)]
pub struct Event(Rc<EventState>);

struct EventState {
    kind: String,
    default_prevented: Cell<bool>,
}

impl Event {
    /// Creates an event of the given kind (e.g. `"click"`).
    pub fn new(kind: impl Into<String>) -> Self {
        Self(Rc::new(EventState {
            kind: kind.into(),
            default_prevented: Cell::new(false),
        }))
    }

    /// The event kind.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.0.kind
    }

    /// Marks the event as default-prevented.
    pub fn prevent_default(&self) {
        self.0.default_prevented.set(true);
    }

    /// Returns `true` once [`prevent_default`](Self::prevent_default) was called.
    #[must_use]
    pub fn is_default_prevented(&self) -> bool {
        self.0.default_prevented.get()
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("kind", &self.0.kind)
            .field("default_prevented", &self.0.default_prevented.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn overwrite_keeps_position() {
        let mut props = Props::new().with("a", 1).with("b", 2);
        props.insert("a", 3);
        let keys: Vec<&str> = props.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(props.get("a"), Some(&PropValue::Number(3.0)));
    }

    #[test]
    fn remove_preserves_order() {
        let mut props = Props::new().with("a", 1).with("b", 2).with("c", 3);
        props.remove("a");
        let keys: Vec<&str> = props.keys().collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn overlay_other_wins() {
        let mut base = Props::new().with("id", "x").with("title", "t");
        base.overlay(&Props::new().with("id", "y").with("lang", "en"));
        assert_eq!(base.get_str("id"), Some("y"));
        assert_eq!(base.get_str("title"), Some("t"));
        assert_eq!(base.get_str("lang"), Some("en"));
    }

    #[test]
    fn nested_values_convert() {
        let list = PropValue::from(vec![PropValue::from(1), PropValue::from("a")]);
        assert_eq!(
            list,
            PropValue::List(vec![PropValue::Number(1.0), PropValue::Str("a".into())])
        );
        let object = PropValue::from(Props::new().with("k", true));
        assert_eq!(
            object.as_object().and_then(|o| o.get("k")),
            Some(&PropValue::Bool(true))
        );
    }

    #[test]
    fn handler_receives_arguments() {
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let handler = Handler::new(move |args| sink.set(args.len()));
        handler.call(&[PropValue::Null, PropValue::Bool(true)]);
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn handler_equality_is_identity() {
        let a = Handler::new(|_| {});
        let b = Handler::new(|_| {});
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn event_clones_share_flag() {
        let event = Event::new("click");
        let alias = event.clone();
        alias.prevent_default();
        assert!(event.is_default_prevented(), "flag should be shared");
        assert_eq!(event.kind(), "click");
    }
}
