// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node reference sinks.
//!
//! The host runtime reports the underlying node of a mounted element through
//! a [`RefSink`]: `Some(node)` on attach, `None` on detach. A slot needs to
//! notify both its own sink and the target element's sink, so several sinks
//! are folded into one with [`compose_refs`].

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::any::Any;
use core::cell::RefCell;
use core::fmt;

/// Handle to a node created by the host runtime.
pub type HostNode = Rc<dyn Any>;

/// Mutable slot written by [`RefSink::Cell`].
pub type NodeCell = Rc<RefCell<Option<HostNode>>>;

/// An external subscriber to node attach/detach.
#[derive(Clone)]
pub enum RefSink {
    /// Called with the node on attach and `None` on detach.
    Callback(Rc<dyn Fn(Option<HostNode>)>),
    /// Overwritten with the node on attach and `None` on detach.
    Cell(NodeCell),
}

impl RefSink {
    /// Wraps a closure as a callback sink.
    pub fn callback(f: impl Fn(Option<HostNode>) + 'static) -> Self {
        Self::Callback(Rc::new(f))
    }

    /// Creates a cell sink and returns it with a handle to its slot.
    #[must_use]
    pub fn cell() -> (Self, NodeCell) {
        let cell = NodeCell::default();
        (Self::Cell(Rc::clone(&cell)), cell)
    }

    /// Notifies the sink.
    pub fn set(&self, node: Option<HostNode>) {
        match self {
            Self::Callback(f) => f(node),
            Self::Cell(cell) => *cell.borrow_mut() = node,
        }
    }

    /// Returns `true` if both sinks share the same callback or cell.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Callback(a), Self::Callback(b)) => Rc::ptr_eq(a, b),
            (Self::Cell(a), Self::Cell(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for RefSink {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for RefSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callback(_) => f.write_str("RefSink::Callback(..)"),
            Self::Cell(cell) => f
                .debug_tuple("RefSink::Cell")
                .field(&cell.borrow().is_some())
                .finish(),
        }
    }
}

/// Folds several optional sinks into one callback sink.
///
/// The composed sink notifies every present sink, in the given order, with
/// the same value. Attach and detach are handled identically.
pub fn compose_refs<I>(sinks: I) -> RefSink
where
    I: IntoIterator<Item = Option<RefSink>>,
{
    let sinks: Vec<RefSink> = sinks.into_iter().flatten().collect();
    RefSink::callback(move |node| {
        for sink in &sinks {
            sink.set(node.clone());
        }
    })
}
