// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property merging and child resolution for transparent wrapper components.
//!
//! A *slot* is a component that does not render an element of its own. It
//! forges its behavioral properties (event handlers, style, class list, node
//! reference) onto the single child element it wraps, so that a generic
//! wrapper can delegate the rendered tag to caller-supplied markup.
//!
//! # Architecture
//!
//! One composition pass turns a slot's children into a single output element:
//!
//! ```text
//!   Slot { props, node_ref, children }
//!       │
//!       ▼
//!   flatten_children() ──► resolve() ──► Resolution
//!                                           │
//!                 ┌─────────────────────────┘
//!                 ▼
//!   merge_props() + compose_refs() ──► Element (cloned target)
//! ```
//!
//! **[`tree`]**: The host tree vocabulary: [`Node`](tree::Node),
//! [`Element`](tree::Element), and the counting/enumeration primitives the
//! rest of the crate consumes.
//!
//! **[`props`]**: Ordered property sets, the classifier predicates, the
//! per-key merge policy, and the class-list join helper.
//!
//! **[`refs`]**: Node reference sinks and their composition.
//!
//! **[`slot`]**: The [`Slot`](slot::Slot) and [`Slottable`](slot::Slottable)
//! primitives: flattening, designated-child resolution, and cloning.
//!
//! **[`component`]**: Function components and the defaulting decorators
//! that wrap them.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! composition-pass instrumentation, with a zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-key merge
//!   events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod component;
pub mod error;
pub mod props;
pub mod refs;
pub mod slot;
pub mod trace;
pub mod tree;

pub use error::SlotError;
