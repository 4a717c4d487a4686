#![forbid(unsafe_code)]

//! Behavioural properties of the editor widget, driven through the
//! in-memory engine and host.

use feedface_engine::{EditingSession, Language, MemoryContainer, MemoryEngine};
use feedface_widget::{EditorWidget, HostElement, LANGUAGE_ATTR, MemoryHost, Phase, VALUE_ATTR};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

type Widget = EditorWidget<MemoryEngine, MemoryHost>;

const SELECTORS: [&str; 7] = ["javascript", "js", "html", "css", "json", "markdown", "md"];

fn widget_in(host: MemoryHost, container: &MemoryContainer) -> Widget {
    EditorWidget::new(MemoryEngine::new(), host, container.clone())
}

fn widget(host: MemoryHost) -> Widget {
    widget_in(host, &MemoryContainer::new())
}

fn arb_selector() -> impl Strategy<Value = String> {
    (prop::sample::select(SELECTORS.to_vec()), any::<bool>()).prop_map(|(s, upper)| {
        if upper {
            s.to_ascii_uppercase()
        } else {
            s.to_owned()
        }
    })
}

fn arb_content() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[ -~]{0,40}",
        "\\PC{0,40}",
        Just("{\"a\":1}\n\tline two\r\n".to_owned()),
    ]
}

proptest! {
    #[test]
    fn set_value_then_get_before_attach(s in arb_content()) {
        let mut w = widget(MemoryHost::new());
        w.set_value(&s);
        prop_assert_eq!(w.value(), s);
    }

    #[test]
    fn set_value_then_get_after_attach(s in arb_content()) {
        let mut w = widget(MemoryHost::new().with_text("seed"));
        w.attach();
        w.set_value(&s);
        prop_assert_eq!(w.value(), s);
        prop_assert_eq!(w.rebuild_count(), 1);
    }

    #[test]
    fn language_switch_preserves_content(
        l1 in arb_selector(),
        l2 in arb_selector(),
        s in arb_content(),
    ) {
        let mut w = widget(MemoryHost::new());
        w.set_language(Some(&l1));
        w.set_value(&s);
        w.attach();
        w.set_language(Some(&l2));
        prop_assert_eq!(w.value(), s);
        prop_assert_eq!(w.container().live_sessions(), 1);
        prop_assert_eq!(w.container().peak_live_sessions(), 1);
        prop_assert_eq!(
            w.session().and_then(|session| session.capabilities().language()),
            Language::from_selector(&l2)
        );
    }

    #[test]
    fn repeated_selector_never_rebuilds(l in arb_selector(), repeats in 1usize..5) {
        let mut w = widget(MemoryHost::new());
        w.set_language(Some(&l));
        w.attach();
        for _ in 0..repeats {
            w.set_language(Some(&l));
        }
        prop_assert_eq!(w.rebuild_count(), 1);
        prop_assert_eq!(w.engine().sessions_created(), 1);
    }

    #[test]
    fn at_most_one_live_session(ops in prop::collection::vec(0u8..5, 0..24)) {
        let container = MemoryContainer::new();
        let mut w = widget_in(MemoryHost::new().with_text("x"), &container);
        for op in ops {
            match op {
                0 => w.attach(),
                1 => w.detach(),
                2 => w.set_language(Some("css")),
                3 => w.set_language(Some("md")),
                _ => w.set_value("y"),
            }
            prop_assert!(container.live_sessions() <= 1);
            prop_assert_eq!(container.live_sessions(), usize::from(w.phase() == Phase::Live));
        }
        prop_assert!(container.peak_live_sessions() <= 1);
    }
}

#[test]
fn value_attribute_wins_over_body_text() {
    let mut w = widget(MemoryHost::new().with_attribute(VALUE_ATTR, "A").with_text("B"));
    w.attach();
    assert_eq!(w.value(), "A");
}

#[test]
fn body_text_moves_into_the_session() {
    let mut w = widget(MemoryHost::new().with_text("console.log(1)"));
    w.attach();
    assert_eq!(w.host().text_content(), "");
    assert_eq!(w.value(), "console.log(1)");
}

#[test]
fn empty_host_starts_empty() {
    let mut w = widget(MemoryHost::new());
    assert_eq!(w.value(), "");
    w.attach();
    assert_eq!(w.value(), "");
}

#[test]
fn unrecognized_selector_still_edits() {
    let mut w = widget(MemoryHost::new().with_attribute(LANGUAGE_ATTR, "cobol"));
    w.attach();
    assert_eq!(w.language(), Some("cobol"));
    let view = w.container().view().expect("one mounted view");
    assert_eq!(view.language, None);
    w.set_value("IDENTIFICATION DIVISION.");
    assert_eq!(w.value(), "IDENTIFICATION DIVISION.");
}

#[test]
fn fresh_instance_reuses_container_without_overlap() {
    let container = MemoryContainer::new();
    let mut first = widget_in(MemoryHost::new().with_text("one"), &container);
    first.attach();
    first.detach();
    assert!(container.is_empty());

    let mut second = widget_in(MemoryHost::new().with_text("two"), &container);
    second.attach();
    assert_eq!(container.live_sessions(), 1);
    assert_eq!(container.peak_live_sessions(), 1);
    assert_eq!(second.value(), "two");
    assert_eq!(first.value(), "one");
}

#[test]
fn json_to_markdown_scenario() {
    let mut w = widget(MemoryHost::new());
    w.attribute_changed(LANGUAGE_ATTR, Some("json"));
    w.set_value(r#"{"a":1}"#);
    w.attach();
    assert_eq!(w.value(), r#"{"a":1}"#);
    assert_eq!(
        w.container().view().and_then(|view| view.language),
        Some(Language::Json)
    );

    w.attribute_changed(LANGUAGE_ATTR, Some("markdown"));
    assert_eq!(w.value(), r#"{"a":1}"#);
    assert_eq!(w.rebuild_count(), 2);
    assert_eq!(
        w.container().view().and_then(|view| view.language),
        Some(Language::Markdown)
    );
}

#[test]
fn language_change_before_attach_does_not_build() {
    let mut w = widget(MemoryHost::new());
    w.set_language(Some("html"));
    w.set_language(Some("css"));
    assert_eq!(w.rebuild_count(), 0);
    assert!(w.container().is_empty());
    w.attach();
    assert_eq!(w.rebuild_count(), 1);
    assert_eq!(
        w.container().view().and_then(|view| view.language),
        Some(Language::Css)
    );
}

#[test]
fn content_edited_while_detached_is_used_on_reattach() {
    let mut w = widget(MemoryHost::new());
    w.attach();
    w.set_value("first");
    w.detach();
    w.set_value("second");
    assert_eq!(w.value(), "second");
    w.attach();
    assert_eq!(w.value(), "second");
}
