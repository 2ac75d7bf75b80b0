#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Spans and events enabled:
//!   cargo test -p numfield-widgets --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p numfield-widgets --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use numfield_core::{NumFieldOptions, NumericMode};
use numfield_widgets::NumericInput;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span or event with its fields.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Captured {
    name: String,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records spans and events.
struct Capture {
    spans: Arc<Mutex<Vec<Captured>>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

/// Handle to read what was captured.
struct CaptureHandle {
    spans: Arc<Mutex<Vec<Captured>>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<Captured> {
        self.spans.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    fn events(&self) -> Vec<Captured> {
        self.events.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    fn messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| e.fields.get("message").cloned())
            .collect()
    }
}

/// Visitor that extracts fields.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(Captured {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            name: event.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

/// Run a closure under a capturing subscriber.
fn with_capture<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let spans = Arc::new(Mutex::new(Vec::new()));
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = Capture {
        spans: Arc::clone(&spans),
        events: Arc::clone(&events),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    CaptureHandle { spans, events }
}

fn integer_field() -> NumericInput {
    NumericInput::new(NumFieldOptions::new().with_mode(NumericMode::Integer))
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn dispatch_opens_one_span_per_edit() {
    let handle = with_capture(|| {
        let mut input = integer_field();
        input.on_raw_change("1", 1);
        input.on_raw_change("12", 2);
        input.on_raw_change("12a", 3);
    });

    let spans: Vec<_> = handle
        .spans()
        .into_iter()
        .filter(|s| s.name == "numeric_input.dispatch")
        .collect();
    assert_eq!(spans.len(), 3);
    assert_eq!(spans[2].fields.get("caret").map(String::as_str), Some("3"));
    assert_eq!(spans[2].fields.get("raw_len").map(String::as_str), Some("3"));
}

#[test]
#[cfg(feature = "tracing")]
fn finished_edits_are_logged_with_outcome() {
    let handle = with_capture(|| {
        let mut input = integer_field();
        input.on_raw_change("1", 1);
        input.on_raw_change("1a", 2);
    });

    let finished: Vec<_> = handle
        .events()
        .into_iter()
        .filter(|e| e.fields.get("message").is_some_and(|m| m == "edit finished"))
        .collect();
    assert_eq!(finished.len(), 2);
    assert_eq!(
        finished[0].fields.get("outcome").map(String::as_str),
        Some("Committed")
    );
    assert!(
        finished[1]
            .fields
            .get("outcome")
            .is_some_and(|o| o.starts_with("Rejected(DisallowedCharacter")),
        "got {:?}",
        finished[1].fields
    );
}

#[test]
#[cfg(feature = "tracing")]
fn symbol_swap_is_logged() {
    let handle = with_capture(|| {
        let mut input = integer_field();
        input.on_raw_change("1234", 4);
        let options = input.options().with_thousands_symbol(' ');
        input.set_options(options);
    });

    assert!(
        handle.messages().iter().any(|m| m == "symbols swapped"),
        "got {:?}",
        handle.messages()
    );
}

/// Without the `tracing` feature the logging macros expand to nothing.
#[test]
fn zero_overhead_when_disabled() {
    let handle = with_capture(|| {
        let mut input = integer_field();
        input.on_raw_change("1234", 4);
    });

    #[cfg(not(feature = "tracing"))]
    assert!(handle.spans().is_empty());
    #[cfg(feature = "tracing")]
    assert!(!handle.spans().is_empty());
}
