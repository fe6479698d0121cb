// Copyright 2026 the Slotted Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Passes carry no clock, so each event's position in the recording is used
//! as its timestamp. Every composition pass becomes a `Pass` duration span
//! from its first event to its compose event. Events recorded outside a slot
//! pass (a bare merge, say) form a span closed at the last event.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let mut pass_open = false;
    let mut last_ts = 0;

    for (ts, recorded) in decode(bytes).enumerate() {
        last_ts = ts;
        if !pass_open {
            events.push(span("B", ts));
            pass_open = true;
        }
        match recorded {
            RecordedEvent::Flatten(e) => {
                events.push(instant(
                    "Flatten",
                    "Resolve",
                    ts,
                    json!({
                        "input_len": e.input_len,
                        "output_len": e.output_len,
                        "fragments_expanded": e.fragments_expanded,
                    }),
                ));
            }
            RecordedEvent::Resolve(e) => {
                events.push(instant(
                    "Resolve",
                    "Resolve",
                    ts,
                    json!({
                        "outcome": format!("{:?}", e.outcome),
                        "children": e.children,
                    }),
                ));
            }
            RecordedEvent::Merge(e) => {
                events.push(instant(
                    "Merge",
                    "Merge",
                    ts,
                    json!({
                        "parent_keys": e.parent_keys,
                        "child_keys": e.child_keys,
                        "merged_keys": e.merged_keys,
                        "handlers_composed": e.handlers_composed,
                    }),
                ));
            }
            RecordedEvent::PropMerged { key, policy } => {
                events.push(instant(
                    "PropMerged",
                    "Rich",
                    ts,
                    json!({
                        "key": key,
                        "policy": format!("{policy:?}"),
                    }),
                ));
            }
            RecordedEvent::Error(error) => {
                events.push(instant(
                    "Error",
                    "Error",
                    ts,
                    json!({
                        "message": error.to_string(),
                        "count": error.count(),
                    }),
                ));
            }
            RecordedEvent::Compose(e) => {
                events.push(instant(
                    "Compose",
                    "Compose",
                    ts,
                    json!({
                        "outcome": format!("{:?}", e.outcome),
                        "ref_composed": e.ref_composed,
                    }),
                ));
                events.push(span("E", ts));
                pass_open = false;
            }
        }
    }
    if pass_open {
        events.push(span("E", last_ts));
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn span(ph: &str, ts: usize) -> Value {
    json!({
        "ph": ph,
        "name": "Pass",
        "cat": "Slot",
        "ts": ts,
        "pid": 0,
        "tid": 0,
    })
}

fn instant(name: &str, cat: &str, ts: usize, args: Value) -> Value {
    json!({
        "ph": "i",
        "name": name,
        "cat": cat,
        "ts": ts,
        "pid": 0,
        "tid": 0,
        "s": "t",
        "args": args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use slotted_core::props::{MergeConfig, Props, merge_props_with};
    use slotted_core::slot::Slot;
    use slotted_core::trace::Tracer;
    use slotted_core::tree::Element;

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        let mut tracer = Tracer::new(&mut rec);
        Slot::new(Element::host("p"))
            .with_prop("id", "x")
            .render_traced(&mut tracer)
            .unwrap();
        drop(tracer);

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        // Should parse as a JSON array.
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        let names: Vec<_> = parsed.iter().map(|e| e["name"].clone()).collect();
        assert_eq!(
            names,
            ["Pass", "Flatten", "Resolve", "Merge", "Compose", "Pass"]
        );

        assert_eq!(parsed[0]["ph"], "B");
        assert_eq!(parsed[2]["args"]["outcome"], "NoSlottable");
        assert_eq!(parsed[3]["args"]["merged_keys"], 1);
        assert_eq!(parsed[4]["args"]["outcome"], "Cloned");
        assert_eq!(parsed[5]["ph"], "E");
        assert_eq!(parsed[5]["ts"], 3);
    }

    #[test]
    fn span_closed_without_compose() {
        let mut rec = RecorderSink::new();
        let mut tracer = Tracer::new(&mut rec);
        let parent = Props::new().with("id", "p");
        let child = Props::new().with("title", "c");
        let _ = merge_props_with(&parent, &child, &MergeConfig::react(), &mut tracer);
        drop(tracer);

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let parsed: Vec<Value> = serde_json::from_slice(&out).unwrap();
        let phases: Vec<_> = parsed.iter().map(|e| e["ph"].clone()).collect();
        // Begin, one per-key record, the merge summary, end.
        assert_eq!(phases, ["B", "i", "i", "E"]);
        assert_eq!(parsed[3]["ts"], 1);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty(), "got: {json_str}");
    }
}
