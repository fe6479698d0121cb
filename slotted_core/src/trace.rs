// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for composition passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! slot calls at each stage of a pass. All method bodies default to no-ops,
//! so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`): gates [`PropMergeEvent`] and the
//!   corresponding `TraceSink` method.

use crate::error::SlotError;
#[cfg(feature = "trace-rich")]
use crate::props::MergePolicy;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How the designated child was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResolveOutcome {
    /// No marker among the children; the raw children are the target.
    NoSlottable,
    /// A marker wrapped an element, which was promoted.
    Promoted,
    /// A marker was present but did not wrap an element.
    EmptySlot,
}

/// How a composition pass ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComposeOutcome {
    /// A single cloned element was produced.
    Cloned,
    /// The pass produced nothing.
    NoOutput,
    /// The pass was aborted by a [`SlotError`].
    Failed,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after the children have been flattened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlattenEvent {
    /// Number of children before flattening (as counted by the host).
    pub input_len: usize,
    /// Number of nodes after flattening.
    pub output_len: usize,
    /// Number of fragments that were expanded in place.
    pub fragments_expanded: usize,
}

/// Emitted once the designated child has been resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveEvent {
    /// The resolution outcome.
    pub outcome: ResolveOutcome,
    /// Number of flattened children the marker was looked up in.
    pub children: usize,
}

/// Emitted after two property sets have been merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeEvent {
    /// Keys in the wrapper's props.
    pub parent_keys: usize,
    /// Keys in the target's props.
    pub child_keys: usize,
    /// Keys in the result.
    pub merged_keys: usize,
    /// Handler keys where both sides were chained.
    pub handlers_composed: usize,
}

/// A per-key merge record.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct PropMergeEvent<'a> {
    /// The merged key.
    pub key: &'a str,
    /// The rule that decided the merged value.
    pub policy: MergePolicy,
}

/// Emitted at the end of every composition pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComposeEvent {
    /// How the pass ended.
    pub outcome: ComposeOutcome,
    /// Whether the output carries a composed node reference.
    pub ref_composed: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from composition passes.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after the children have been flattened.
    fn on_flatten(&mut self, e: &FlattenEvent) {
        _ = e;
    }

    /// Called once the designated child has been resolved.
    fn on_resolve(&mut self, e: &ResolveEvent) {
        _ = e;
    }

    /// Called after two property sets have been merged.
    fn on_merge(&mut self, e: &MergeEvent) {
        _ = e;
    }

    /// Called for every key the target defines (requires `trace-rich`).
    #[cfg(feature = "trace-rich")]
    fn on_prop_merged(&mut self, e: &PropMergeEvent<'_>) {
        _ = e;
    }

    /// Called at the end of every pass.
    fn on_compose(&mut self, e: &ComposeEvent) {
        _ = e;
    }

    /// Called when a pass is aborted.
    fn on_error(&mut self, error: &SlotError) {
        _ = error;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`FlattenEvent`].
    #[inline]
    pub fn flatten(&mut self, e: &FlattenEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_flatten(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResolveEvent`].
    #[inline]
    pub fn resolve(&mut self, e: &ResolveEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resolve(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MergeEvent`].
    #[inline]
    pub fn merge(&mut self, e: &MergeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_merge(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PropMergeEvent`] (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn prop_merged(&mut self, e: &PropMergeEvent<'_>) {
        if let Some(s) = &mut self.sink {
            s.on_prop_merged(e);
        }
    }

    /// Emits a [`ComposeEvent`].
    #[inline]
    pub fn compose(&mut self, e: &ComposeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_compose(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Reports an aborted pass.
    #[inline]
    pub fn error(&mut self, error: &SlotError) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_error(error);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = error;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
