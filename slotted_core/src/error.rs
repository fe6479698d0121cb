// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors that abort a composition pass.

use core::fmt;

/// Errors from [`Slot::render`](crate::slot::Slot::render).
///
/// Every variant is a cardinality violation: more than one candidate was found
/// where exactly one is required. Outcomes that can be recovered locally (an
/// empty slot, non-element content) resolve to `Ok(None)` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotError {
    /// More than one [`Slottable`](crate::slot::Slottable) among the
    /// flattened children.
    MultipleSlottables {
        /// Number of markers found.
        count: usize,
    },
    /// The marker's content holds more than one child.
    SlottableContent {
        /// Number of children under the marker.
        count: usize,
    },
    /// The merge target is not an element and there is more than one child.
    MultipleChildren {
        /// Number of children passed to the slot.
        count: usize,
    },
}

impl SlotError {
    /// Returns the number of candidates that were found.
    #[must_use]
    pub const fn count(&self) -> usize {
        match *self {
            Self::MultipleSlottables { count }
            | Self::SlottableContent { count }
            | Self::MultipleChildren { count } => count,
        }
    }
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleSlottables { count } => {
                write!(f, "expected at most one slottable child, found {count}")
            }
            Self::SlottableContent { count } => {
                write!(f, "slottable must wrap exactly one element, found {count} children")
            }
            Self::MultipleChildren { count } => {
                write!(f, "slot expected a single element child, found {count} children")
            }
        }
    }
}

impl core::error::Error for SlotError {}
