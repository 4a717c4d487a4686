#![forbid(unsafe_code)]

use feedface_engine::{
    Capability, CapabilityList, EditingEngine, EditingSession, KeyBindings, Language,
};
use feedface_style::{ChromeTheme, HighlightStyle, StylingApi};
use feedface_widget::{EditorWidget, HostElement, OBSERVED_ATTRIBUTES};
use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement, ShadowRootInit, ShadowRootMode};

use crate::error::WebError;
use crate::payload::{CONTAINER_CLASS, chrome_json, highlight_json};

// `js/feed-face.js` installs the `feedfaceEngine` bridge before first use.
#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type JsEditorSession;

    #[wasm_bindgen(method, js_name = getText)]
    fn get_text(this: &JsEditorSession) -> String;

    #[wasm_bindgen(method, js_name = replaceText)]
    fn replace_text(this: &JsEditorSession, text: &str);

    #[wasm_bindgen(method, js_name = destroy)]
    fn destroy_view(this: &JsEditorSession);
}

#[wasm_bindgen(js_namespace = feedfaceEngine)]
extern "C" {
    #[wasm_bindgen(js_name = createSession)]
    fn create_session(text: &str, extensions: &Array, parent: &Element) -> JsEditorSession;

    #[wasm_bindgen(js_name = basicSetup)]
    fn basic_setup() -> JsValue;

    #[wasm_bindgen(js_name = indentWithTab)]
    fn indent_with_tab() -> JsValue;

    #[wasm_bindgen(js_name = lineWrapping)]
    fn line_wrapping() -> JsValue;

    #[wasm_bindgen(js_name = theme)]
    fn theme(rules_json: &str, dark: bool) -> JsValue;

    #[wasm_bindgen(js_name = syntaxHighlighting)]
    fn syntax_highlighting(rules_json: &str) -> JsValue;

    #[wasm_bindgen(js_name = language)]
    fn language(name: &str) -> JsValue;
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Styling API backed by the JavaScript engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsStyling;

impl StylingApi for JsStyling {
    type Extension = JsValue;

    fn theme(&self, chrome: &ChromeTheme) -> JsValue {
        match chrome_json(chrome) {
            Ok(json) => theme(&json, chrome.dark),
            Err(err) => {
                warn!(%err, "chrome theme skipped");
                Array::new().into()
            }
        }
    }

    fn syntax_highlighting(&self, style: &HighlightStyle) -> JsValue {
        match highlight_json(style) {
            Ok(json) => syntax_highlighting(&json),
            Err(err) => {
                warn!(%err, "highlight style skipped");
                Array::new().into()
            }
        }
    }
}

/// Editing engine reached through the `feedfaceEngine` namespace.
#[derive(Debug, Default)]
pub struct JsEngine {
    styling: JsStyling,
}

impl EditingEngine for JsEngine {
    type Extension = JsValue;
    type Container = Element;
    type Session = JsSession;
    type Styling = JsStyling;

    fn styling(&self) -> &JsStyling {
        &self.styling
    }

    fn language_support(&self, lang: Language) -> JsValue {
        language(lang.as_str())
    }

    fn create_session(
        &mut self,
        initial_text: &str,
        capabilities: CapabilityList<JsValue>,
        container: &Element,
    ) -> JsSession {
        let extensions = Array::new();
        for capability in &capabilities {
            match capability {
                Capability::BaseBehavior => {
                    extensions.push(&basic_setup());
                }
                Capability::KeyBindings(bindings) => {
                    if bindings.contains(KeyBindings::INDENT_WITH_TAB) {
                        extensions.push(&indent_with_tab());
                    }
                }
                Capability::LineWrapping => {
                    extensions.push(&line_wrapping());
                }
                Capability::Theme(theme) => {
                    for extension in theme.iter() {
                        extensions.push(extension);
                    }
                }
                Capability::Language(Some(support)) => {
                    extensions.push(&support.extension);
                }
                Capability::Language(None) => {}
                Capability::Extra(extension) => {
                    extensions.push(extension);
                }
            }
        }
        debug!(extensions = extensions.length(), "creating editor view");
        JsSession {
            view: create_session(initial_text, &extensions, container),
            capabilities,
        }
    }
}

/// A live editor view.
///
/// Dropping the session destroys the view, so freeing a `FeedFace` from
/// JavaScript never leaves an orphaned editor behind.
#[derive(Debug)]
pub struct JsSession {
    view: JsEditorSession,
    capabilities: CapabilityList<JsValue>,
}

impl EditingSession for JsSession {
    type Extension = JsValue;

    fn text(&self) -> String {
        self.view.get_text()
    }

    fn replace_text(&mut self, text: &str) {
        self.view.replace_text(text);
    }

    fn capabilities(&self) -> &CapabilityList<JsValue> {
        &self.capabilities
    }

    fn destroy(self) {
        debug!("editor view destroyed");
    }
}

impl Drop for JsSession {
    fn drop(&mut self) {
        self.view.destroy_view();
    }
}

/// The custom element's light DOM.
#[derive(Debug, Clone)]
pub struct DomHost {
    element: HtmlElement,
}

impl HostElement for DomHost {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn text_content(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn clear_content(&mut self) {
        // Only light-DOM children; the shadow root is untouched.
        self.element.set_text_content(None);
    }
}

/// Open a shadow root on `host` and give it an empty container.
fn mount_shadow(host: &HtmlElement) -> Result<Element, WebError> {
    let document = host.owner_document().ok_or(WebError::NoDocument)?;
    let shadow = host
        .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))
        .map_err(|err| WebError::ShadowRoot(format!("{err:?}")))?;
    let container = document
        .create_element("div")
        .map_err(|err| WebError::Dom(format!("{err:?}")))?;
    container.set_class_name(CONTAINER_CLASS);
    shadow
        .append_child(&container)
        .map_err(|err| WebError::Dom(format!("{err:?}")))?;
    Ok(container)
}

/// Backing object of one `<feed-face>` element.
///
/// The element class in `js/feed-face.js` forwards its lifecycle callbacks
/// and the `value` property here.
#[wasm_bindgen]
pub struct FeedFace {
    widget: EditorWidget<JsEngine, DomHost>,
}

#[wasm_bindgen]
impl FeedFace {
    /// Attach the shadow root and container. No editor exists until
    /// `connectedCallback`.
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement) -> Result<FeedFace, JsValue> {
        let container = mount_shadow(&host)?;
        let widget = EditorWidget::new(JsEngine::default(), DomHost { element: host }, container);
        Ok(Self { widget })
    }

    #[wasm_bindgen(js_name = observedAttributes)]
    pub fn observed_attributes() -> Array {
        OBSERVED_ATTRIBUTES
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect()
    }

    #[wasm_bindgen(js_name = connectedCallback)]
    pub fn connected_callback(&mut self) {
        self.widget.attach();
    }

    #[wasm_bindgen(js_name = disconnectedCallback)]
    pub fn disconnected_callback(&mut self) {
        self.widget.detach();
    }

    #[wasm_bindgen(js_name = attributeChangedCallback)]
    pub fn attribute_changed_callback(
        &mut self,
        name: &str,
        _old_value: Option<String>,
        new_value: Option<String>,
    ) {
        self.widget.attribute_changed(name, new_value.as_deref());
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.widget.value()
    }

    #[wasm_bindgen(setter)]
    pub fn set_value(&mut self, value: &str) {
        self.widget.set_value(value);
    }

    #[wasm_bindgen(getter)]
    pub fn language(&self) -> Option<String> {
        self.widget.language().map(str::to_owned)
    }

    /// Direct route into the controller. The element class in
    /// `js/feed-face.js` reflects its `language` property onto the
    /// attribute instead, which reaches here through
    /// `attributeChangedCallback`.
    #[wasm_bindgen(setter)]
    pub fn set_language(&mut self, language: Option<String>) {
        self.widget.set_language(language.as_deref());
    }

    /// Number of editor views built by this element.
    #[wasm_bindgen(getter, js_name = rebuildCount)]
    pub fn rebuild_count(&self) -> f64 {
        self.widget.rebuild_count() as f64
    }
}
