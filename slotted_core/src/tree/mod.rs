// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host tree data model.
//!
//! A composition pass reads and produces values of two kinds:
//!
//! - [`Node`]: anything that can appear as a child: nothing, text, a number,
//!   an [`Element`], or a nested list of nodes.
//! - [`Element`]: an immutable descriptor with an [`ElementKind`], a
//!   property set, an optional node reference, and children.
//!
//! Elements are never mutated in place. The builder methods consume `self`
//! and [`Element::cloned`] produces a new descriptor with props overlaid,
//! mirroring what a host runtime's clone operation does.
//!
//! Two kinds carry structural meaning for slots: [`ElementKind::Fragment`]
//! groups children without introducing a rendered node, and
//! [`ElementKind::Slottable`] marks the designated child of a slot.

mod element;
mod node;

pub use element::{Element, ElementKind};
pub use node::Node;
