#![forbid(unsafe_code)]

//! Tracing instrumentation of the widget controller.
//!
//! A capture layer records every `rebuild_session` span so tests can check
//! that rebuilds happen exactly when the lifecycle requires them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use feedface_engine::{MemoryContainer, MemoryEngine};
use feedface_widget::{EditorWidget, MemoryHost};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

impl CaptureHandle {
    fn rebuilds(&self) -> Vec<CapturedSpan> {
        self.spans
            .lock()
            .unwrap()
            .iter()
            .filter(|span| span.name == "rebuild_session")
            .cloned()
            .collect()
    }
}

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

impl<S> tracing_subscriber::Layer<S> for SpanCapture
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
        self.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_captured_spans<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let spans = Arc::new(Mutex::new(Vec::new()));
    let layer = SpanCapture {
        spans: spans.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    CaptureHandle { spans }
}

fn widget() -> EditorWidget<MemoryEngine, MemoryHost> {
    EditorWidget::new(MemoryEngine::new(), MemoryHost::new(), MemoryContainer::new())
}

#[test]
fn attach_opens_one_rebuild_span() {
    let handle = with_captured_spans(|| {
        let mut w = widget();
        w.set_language(Some("css"));
        w.attach();
    });
    let rebuilds = handle.rebuilds();
    assert_eq!(rebuilds.len(), 1);
    assert_eq!(rebuilds[0].fields.get("selector").map(String::as_str), Some("css"));
    assert_eq!(rebuilds[0].fields.get("rebuild").map(String::as_str), Some("1"));
}

#[test]
fn value_patches_do_not_open_rebuild_spans() {
    let handle = with_captured_spans(|| {
        let mut w = widget();
        w.attach();
        for i in 0..10 {
            w.set_value(&i.to_string());
        }
    });
    assert_eq!(handle.rebuilds().len(), 1);
}

#[test]
fn each_language_change_opens_a_span() {
    let handle = with_captured_spans(|| {
        let mut w = widget();
        w.attach();
        w.set_language(Some("json"));
        w.set_language(Some("json"));
        w.set_language(Some("md"));
        w.detach();
        w.attach();
    });
    let selectors: Vec<_> = handle
        .rebuilds()
        .into_iter()
        .map(|span| span.fields.get("selector").cloned().unwrap_or_default())
        .collect();
    assert_eq!(selectors, vec!["", "json", "md", "md"]);
}
