// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use slotted_core::SlotError;
use slotted_core::props::MergePolicy;
use slotted_core::trace::{
    ComposeEvent, ComposeOutcome, FlattenEvent, MergeEvent, PropMergeEvent, ResolveEvent,
    ResolveOutcome, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

fn resolve_name(outcome: ResolveOutcome) -> &'static str {
    match outcome {
        ResolveOutcome::NoSlottable => "direct",
        ResolveOutcome::Promoted => "promoted",
        ResolveOutcome::EmptySlot => "empty",
    }
}

fn compose_name(outcome: ComposeOutcome) -> &'static str {
    match outcome {
        ComposeOutcome::Cloned => "cloned",
        ComposeOutcome::NoOutput => "none",
        ComposeOutcome::Failed => "FAILED",
    }
}

fn policy_name(policy: MergePolicy) -> &'static str {
    match policy {
        MergePolicy::ChildHandler => "child-handler",
        MergePolicy::ParentHandler => "parent-handler",
        MergePolicy::ComposedHandler => "composed",
        MergePolicy::Style => "style",
        MergePolicy::ClassList => "class",
        MergePolicy::Opaque => "override",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_flatten(&mut self, e: &FlattenEvent) {
        let _ = writeln!(
            self.writer,
            "[flatten] in={} out={} fragments={}",
            e.input_len, e.output_len, e.fragments_expanded,
        );
    }

    fn on_resolve(&mut self, e: &ResolveEvent) {
        let _ = writeln!(
            self.writer,
            "[resolve] {} children={}",
            resolve_name(e.outcome),
            e.children,
        );
    }

    fn on_merge(&mut self, e: &MergeEvent) {
        let _ = writeln!(
            self.writer,
            "[merge] parent={} child={} merged={} composed={}",
            e.parent_keys, e.child_keys, e.merged_keys, e.handlers_composed,
        );
    }

    fn on_prop_merged(&mut self, e: &PropMergeEvent<'_>) {
        let _ = writeln!(
            self.writer,
            "[prop] key={} policy={}",
            e.key,
            policy_name(e.policy),
        );
    }

    fn on_compose(&mut self, e: &ComposeEvent) {
        let ref_note = if e.ref_composed { " ref" } else { "" };
        let _ = writeln!(self.writer, "[compose] {}{ref_note}", compose_name(e.outcome));
    }

    fn on_error(&mut self, error: &SlotError) {
        let _ = writeln!(self.writer, "[error] {error}");
    }
}
