// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as little-endian records. [`decode`] reads them back as an
//! iterator of [`RecordedEvent`].
//!
//! Per-key merge records store the key as a length-prefixed UTF-8 string,
//! truncated to `u16::MAX` bytes.

use slotted_core::SlotError;
use slotted_core::props::MergePolicy;
use slotted_core::trace::{
    ComposeEvent, ComposeOutcome, FlattenEvent, MergeEvent, PropMergeEvent, ResolveEvent,
    ResolveOutcome, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_FLATTEN: u8 = 1;
const TAG_RESOLVE: u8 = 2;
const TAG_MERGE: u8 = 3;
const TAG_PROP_MERGED: u8 = 4;
const TAG_COMPOSE: u8 = 5;
const TAG_ERROR: u8 = 6;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: usize) {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "counts capped at u32::MAX for recording"
        )]
        let v = v.min(u32::MAX as usize) as u32;
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_str(&mut self, s: &str) {
        let mut end = s.len().min(usize::from(u16::MAX));
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "length capped at u16::MAX above"
        )]
        self.buf.extend_from_slice(&(end as u16).to_le_bytes());
        self.buf.extend_from_slice(&s.as_bytes()[..end]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }
}

fn resolve_code(outcome: ResolveOutcome) -> u8 {
    match outcome {
        ResolveOutcome::NoSlottable => 0,
        ResolveOutcome::Promoted => 1,
        ResolveOutcome::EmptySlot => 2,
    }
}

fn compose_code(outcome: ComposeOutcome) -> u8 {
    match outcome {
        ComposeOutcome::Cloned => 0,
        ComposeOutcome::NoOutput => 1,
        ComposeOutcome::Failed => 2,
    }
}

fn policy_code(policy: MergePolicy) -> u8 {
    match policy {
        MergePolicy::ChildHandler => 0,
        MergePolicy::ParentHandler => 1,
        MergePolicy::ComposedHandler => 2,
        MergePolicy::Style => 3,
        MergePolicy::ClassList => 4,
        MergePolicy::Opaque => 5,
    }
}

impl TraceSink for RecorderSink {
    fn on_flatten(&mut self, e: &FlattenEvent) {
        self.write_u8(TAG_FLATTEN);
        self.write_u32(e.input_len);
        self.write_u32(e.output_len);
        self.write_u32(e.fragments_expanded);
    }

    fn on_resolve(&mut self, e: &ResolveEvent) {
        self.write_u8(TAG_RESOLVE);
        self.write_u8(resolve_code(e.outcome));
        self.write_u32(e.children);
    }

    fn on_merge(&mut self, e: &MergeEvent) {
        self.write_u8(TAG_MERGE);
        self.write_u32(e.parent_keys);
        self.write_u32(e.child_keys);
        self.write_u32(e.merged_keys);
        self.write_u32(e.handlers_composed);
    }

    fn on_prop_merged(&mut self, e: &PropMergeEvent<'_>) {
        self.write_u8(TAG_PROP_MERGED);
        self.write_u8(policy_code(e.policy));
        self.write_str(e.key);
    }

    fn on_compose(&mut self, e: &ComposeEvent) {
        self.write_u8(TAG_COMPOSE);
        self.write_u8(compose_code(e.outcome));
        self.write_bool(e.ref_composed);
    }

    fn on_error(&mut self, error: &SlotError) {
        self.write_u8(TAG_ERROR);
        self.write_u8(match error {
            SlotError::MultipleSlottables { .. } => 0,
            SlotError::SlottableContent { .. } => 1,
            SlotError::MultipleChildren { .. } => 2,
        });
        self.write_u32(error.count());
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A [`FlattenEvent`].
    Flatten(FlattenEvent),
    /// A [`ResolveEvent`].
    Resolve(ResolveEvent),
    /// A [`MergeEvent`].
    Merge(MergeEvent),
    /// An owned [`PropMergeEvent`].
    PropMerged {
        /// The merged key.
        key: String,
        /// The rule that decided the merged value.
        policy: MergePolicy,
    },
    /// A [`ComposeEvent`].
    Compose(ComposeEvent),
    /// An aborted pass.
    Error(SlotError),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Decoding stops at the first truncated or unknown record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take(&mut self, n: usize) -> Option<&[u8]> {
        let end = self.pos.checked_add(n)?;
        let bytes = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take(1).map(|b| b[0])
    }

    fn read_u16(&mut self) -> Option<u16> {
        Some(u16::from_le_bytes(self.take(2)?.try_into().ok()?))
    }

    fn read_u32(&mut self) -> Option<usize> {
        let v = u32::from_le_bytes(self.take(4)?.try_into().ok()?);
        usize::try_from(v).ok()
    }

    fn read_str(&mut self) -> Option<String> {
        let len = usize::from(self.read_u16()?);
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).ok()
    }

    fn read_resolve_outcome(&mut self) -> Option<ResolveOutcome> {
        Some(match self.read_u8()? {
            0 => ResolveOutcome::NoSlottable,
            1 => ResolveOutcome::Promoted,
            2 => ResolveOutcome::EmptySlot,
            _ => return None,
        })
    }

    fn read_compose_outcome(&mut self) -> Option<ComposeOutcome> {
        Some(match self.read_u8()? {
            0 => ComposeOutcome::Cloned,
            1 => ComposeOutcome::NoOutput,
            2 => ComposeOutcome::Failed,
            _ => return None,
        })
    }

    fn read_policy(&mut self) -> Option<MergePolicy> {
        Some(match self.read_u8()? {
            0 => MergePolicy::ChildHandler,
            1 => MergePolicy::ParentHandler,
            2 => MergePolicy::ComposedHandler,
            3 => MergePolicy::Style,
            4 => MergePolicy::ClassList,
            5 => MergePolicy::Opaque,
            _ => return None,
        })
    }

    fn read_error(&mut self) -> Option<SlotError> {
        let kind = self.read_u8()?;
        let count = self.read_u32()?;
        Some(match kind {
            0 => SlotError::MultipleSlottables { count },
            1 => SlotError::SlottableContent { count },
            2 => SlotError::MultipleChildren { count },
            _ => return None,
        })
    }

    fn decode_next(&mut self) -> Option<RecordedEvent> {
        Some(match self.read_u8()? {
            TAG_FLATTEN => RecordedEvent::Flatten(FlattenEvent {
                input_len: self.read_u32()?,
                output_len: self.read_u32()?,
                fragments_expanded: self.read_u32()?,
            }),
            TAG_RESOLVE => RecordedEvent::Resolve(ResolveEvent {
                outcome: self.read_resolve_outcome()?,
                children: self.read_u32()?,
            }),
            TAG_MERGE => RecordedEvent::Merge(MergeEvent {
                parent_keys: self.read_u32()?,
                child_keys: self.read_u32()?,
                merged_keys: self.read_u32()?,
                handlers_composed: self.read_u32()?,
            }),
            TAG_PROP_MERGED => {
                let policy = self.read_policy()?;
                let key = self.read_str()?;
                RecordedEvent::PropMerged { key, policy }
            }
            TAG_COMPOSE => RecordedEvent::Compose(ComposeEvent {
                outcome: self.read_compose_outcome()?,
                ref_composed: self.read_u8()? != 0,
            }),
            TAG_ERROR => RecordedEvent::Error(self.read_error()?),
            _ => return None,
        })
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.decode_next();
        if event.is_none() {
            // Stop for good on a bad record.
            self.pos = self.data.len();
        }
        event
    }
}
