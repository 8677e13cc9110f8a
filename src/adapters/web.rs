//! Browser bindings: resolves the page elements with `web-sys` and
//! attaches the event listeners that drive the core controllers.

use crate::adapters::http::ReqwestLikeClient;
use crate::config::PageConfig;
use crate::core::char_counter::CharCounter;
use crate::core::like_toggle::LikeToggle;
use crate::core::page::{ElementLookup, Feature, ModalBinding, MountReport, Page};
use crate::core::{
    ClassList, ClickEvent, ClickTarget, InlineDisplay, LikeTarget, TextInput, TextLabel,
};
use crate::utils::error::{Result, UiError};
use crate::utils::logger::init_web_logger;
use crate::utils::validation::Validate;
use std::rc::Rc;
use std::sync::Arc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    KeyboardEvent, MouseEvent, Node, Window,
};

fn js_error(err: JsValue) -> UiError {
    UiError::dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl ClassList for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<()> {
        self.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        self.class_list().remove_1(class).map_err(js_error)
    }
}

impl LikeTarget for Element {
    fn element_id(&self) -> String {
        self.id()
    }

    fn closest_button(&self) -> Option<Self> {
        self.closest("button").ok().flatten()
    }
}

impl ClickEvent for MouseEvent {
    type Target = Element;

    fn target(&self) -> Option<Element> {
        web_sys::Event::target(self).and_then(|t| t.dyn_into::<Element>().ok())
    }

    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

impl InlineDisplay for HtmlElement {
    fn display(&self) -> Option<String> {
        self.style()
            .get_property_value("display")
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn set_display(&self, value: &str) -> Result<()> {
        self.style()
            .set_property("display", value)
            .map_err(js_error)
    }
}

impl TextLabel for HtmlElement {
    fn set_text(&self, text: &str) {
        self.set_inner_text(text);
    }
}

/// The message field may be a single-line input or a textarea.
pub enum WebTextInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl WebTextInput {
    fn event_target(&self) -> &EventTarget {
        match self {
            WebTextInput::Input(input) => input.as_ref(),
            WebTextInput::TextArea(area) => area.as_ref(),
        }
    }
}

impl TextInput for WebTextInput {
    fn value(&self) -> String {
        match self {
            WebTextInput::Input(input) => input.value(),
            WebTextInput::TextArea(area) => area.value(),
        }
    }
}

pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn require_id(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| UiError::missing(format!("#{}", id)))
    }

    fn require_html(&self, id: &str) -> Result<HtmlElement> {
        self.require_id(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| UiError::WrongElementType {
                selector: format!("#{}", id),
                expected: "HTML element".to_string(),
            })
    }
}

impl ElementLookup for WebDocument {
    type Button = Element;
    type Modal = HtmlElement;
    type Trigger = Element;
    type Input = WebTextInput;
    type Label = HtmlElement;

    fn like_buttons(&self, class: &str) -> Result<Vec<Element>> {
        let nodes = self
            .document
            .query_selector_all(&format!(".{}", class))
            .map_err(js_error)?;

        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn modal(&self, id: &str) -> Result<HtmlElement> {
        self.require_html(id)
    }

    fn trigger_by_id(&self, id: &str) -> Result<Element> {
        self.require_id(id)
    }

    fn first_trigger_by_class(&self, class: &str) -> Result<Element> {
        let selector = format!(".{}", class);
        self.document
            .query_selector(&selector)
            .map_err(js_error)?
            .ok_or(UiError::MissingElement { selector })
    }

    fn input(&self, id: &str) -> Result<WebTextInput> {
        let element = self.require_id(id)?;
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Ok(WebTextInput::Input(input)),
            Err(element) => element,
        };
        element
            .dyn_into::<HtmlTextAreaElement>()
            .map(WebTextInput::TextArea)
            .map_err(|_| UiError::WrongElementType {
                selector: format!("#{}", id),
                expected: "text input".to_string(),
            })
    }

    fn label(&self, id: &str) -> Result<HtmlElement> {
        self.require_html(id)
    }
}

fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::<dyn FnMut(E)>::wrap(Box::new(handler));
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(js_error)?;
    // Listeners live as long as the page.
    callback.forget();
    Ok(())
}

fn bind_like_button(button: &Element, toggle: Rc<LikeToggle>) -> Result<()> {
    let bound = button.clone();
    listen(button, "click", move |event: MouseEvent| {
        if let Err(e) = toggle.handle_click(&event, &bound) {
            tracing::warn!("Like click ignored: {}", e);
        }
    })
}

fn bind_modal(window: &Window, modal: ModalBinding<WebDocument>) -> Result<()> {
    let ModalBinding {
        controller,
        open_link,
        close_control,
    } = modal;
    let controller = Rc::new(controller);

    let on_open = Rc::clone(&controller);
    listen(&open_link, "click", move |event: MouseEvent| {
        if let Err(e) = on_open.on_open_click(&event) {
            tracing::warn!("Could not open modal: {}", e);
        }
    })?;

    let on_close = Rc::clone(&controller);
    listen(&close_control, "click", move |_event: MouseEvent| {
        if let Err(e) = on_close.close() {
            tracing::warn!("Could not close modal: {}", e);
        }
    })?;

    let on_window = controller;
    listen(window, "click", move |event: MouseEvent| {
        let on_backdrop = web_sys::Event::target(&event)
            .and_then(|t| t.dyn_into::<Node>().ok())
            .map(|node| on_window.element().is_same_node(Some(&node)))
            .unwrap_or(false);
        let target = if on_backdrop {
            ClickTarget::Backdrop
        } else {
            ClickTarget::Elsewhere
        };
        if let Err(e) = on_window.on_window_click(target) {
            tracing::warn!("Could not close modal: {}", e);
        }
    })
}

fn bind_counter(counter: CharCounter<WebTextInput, HtmlElement>) -> Result<()> {
    let counter = Rc::new(counter);
    let target = counter.input().event_target().clone();
    listen(&target, "keyup", move |_event: KeyboardEvent| {
        counter.on_key_up();
    })
}

/// Binds every page behaviour to the current document.
///
/// Like requests go to the page's own origin. Each feature binds on its
/// own; failures are logged and listed in the report.
pub fn mount(config: &PageConfig) -> Result<MountReport> {
    let window = web_sys::window().ok_or_else(|| UiError::dom("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| UiError::dom("window has no document"))?;
    let origin = window.location().origin().map_err(js_error)?;
    let client = ReqwestLikeClient::new(&origin, &config.like_path)?;

    let Page {
        like_toggle,
        like_buttons,
        modal,
        counter,
        mut report,
    } = Page::resolve(&WebDocument::new(document), config, Arc::new(client));

    let like_toggle = Rc::new(like_toggle);
    for button in &like_buttons {
        let bound = bind_like_button(button, Rc::clone(&like_toggle));
        report.record(Feature::LikeToggle, bound);
    }
    if let Some(modal) = modal {
        report.record(Feature::Modal, bind_modal(&window, modal));
    }
    if let Some(counter) = counter {
        report.record(Feature::CharCounter, bind_counter(counter));
    }

    Ok(report)
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_web_logger();
}

/// Entry point for the page script. `config_toml` overrides the default DOM contract.
#[wasm_bindgen]
pub fn mount_page(config_toml: Option<String>) -> std::result::Result<(), JsValue> {
    let to_js = |e: UiError| JsValue::from_str(&e.user_friendly_message());

    let config = match config_toml {
        Some(text) => PageConfig::from_toml_str(&text).map_err(to_js)?,
        None => PageConfig::default(),
    };
    config.validate().map_err(to_js)?;

    let report = mount(&config).map_err(to_js)?;
    if report.is_complete() {
        return Ok(());
    }

    let failed: Vec<String> = report
        .failures
        .iter()
        .map(|(feature, e)| format!("{}: {}", feature, e))
        .collect();
    Err(JsValue::from_str(&failed.join("; ")))
}
