//! Headless stand-in for the browser page.
//!
//! `MemoryElement` implements every element port over shared in-memory
//! state, and `MemoryPage` dispatches clicks and key releases the way the
//! browser would, so the page behaviours run without a DOM.

use crate::config::PageConfig;
use crate::core::page::{ElementLookup, Feature, MountReport, Page};
use crate::core::{
    ButtonStyle, ClassList, ClickEvent, ClickTarget, InlineDisplay, LikeClient, LikeTarget,
    ModalState, TextInput, TextLabel,
};
use crate::utils::error::{Result, UiError};
use crate::utils::task::TaskHandle;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

#[derive(Debug, Default)]
struct ElementState {
    id: String,
    tag: String,
    parent: Option<MemoryElement>,
    classes: Vec<String>,
    display: Option<String>,
    value: String,
    text: String,
}

/// Cloning yields another handle to the same element.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    pub fn new(id: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(ElementState {
                id: id.to_string(),
                ..ElementState::default()
            })),
        }
    }

    pub fn button(id: &str) -> Self {
        let element = Self::new(id);
        element.state.borrow_mut().tag = "button".to_string();
        element
    }

    /// Nests this element inside `parent`.
    pub fn inside(self, parent: &MemoryElement) -> Self {
        self.state.borrow_mut().parent = Some(parent.clone());
        self
    }

    pub fn parent(&self) -> Option<MemoryElement> {
        self.state.borrow().parent.clone()
    }

    /// True for `ancestor` itself and everything nested below it.
    pub fn is_within(&self, ancestor: &MemoryElement) -> bool {
        let mut current = Some(self.clone());
        while let Some(element) = current {
            if element.is_same(ancestor) {
                return true;
            }
            current = element.parent();
        }
        false
    }

    pub fn with_classes(self, classes: &[&str]) -> Self {
        self.state
            .borrow_mut()
            .classes
            .extend(classes.iter().map(|c| c.to_string()));
        self
    }

    pub fn id(&self) -> String {
        self.state.borrow().id.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }

    pub fn set_value(&self, value: &str) {
        self.state.borrow_mut().value = value.to_string();
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn is_same(&self, other: &MemoryElement) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl ClassList for MemoryElement {
    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) -> Result<()> {
        if !self.has_class(class) {
            self.state.borrow_mut().classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        self.state.borrow_mut().classes.retain(|c| c != class);
        Ok(())
    }
}

impl LikeTarget for MemoryElement {
    fn element_id(&self) -> String {
        self.id()
    }

    fn closest_button(&self) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(element) = current {
            if element.state.borrow().tag == "button" {
                return Some(element);
            }
            current = element.parent();
        }
        None
    }
}

impl InlineDisplay for MemoryElement {
    fn display(&self) -> Option<String> {
        self.state.borrow().display.clone()
    }

    fn set_display(&self, value: &str) -> Result<()> {
        self.state.borrow_mut().display = Some(value.to_string());
        Ok(())
    }
}

impl TextInput for MemoryElement {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }
}

impl TextLabel for MemoryElement {
    fn set_text(&self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
    }
}

/// A click on one element; records whether a listener cancelled its default action.
#[derive(Debug)]
pub struct MemoryEvent {
    target: MemoryElement,
    default_prevented: Cell<bool>,
}

impl MemoryEvent {
    pub fn click(target: &MemoryElement) -> Self {
        Self {
            target: target.clone(),
            default_prevented: Cell::new(false),
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl ClickEvent for MemoryEvent {
    type Target = MemoryElement;

    fn target(&self) -> Option<MemoryElement> {
        Some(self.target.clone())
    }

    fn prevent_default(&self) {
        self.default_prevented.set(true);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock message page: the modal, its triggers, the counter and
    /// one like-button per `(message id, style)` pair.
    pub fn warbler_page(config: &PageConfig, likes: &[(&str, ButtonStyle)]) -> Self {
        let mut doc = Self::new()
            .with(MemoryElement::new(&config.modal_id).with_classes(&["modal"]))
            .with(MemoryElement::new("modal-content").with_classes(&["modal-content"]))
            .with(MemoryElement::new(&config.open_link_id))
            .with(MemoryElement::new("").with_classes(&[config.close_class.as_str()]))
            .with(MemoryElement::new(&config.input_id))
            .with(MemoryElement::new(&config.label_id));

        for (message_id, style) in likes {
            let style_class = match style {
                ButtonStyle::Primary => config.primary_class.as_str(),
                ButtonStyle::Secondary => config.secondary_class.as_str(),
            };
            doc.insert(
                MemoryElement::button(message_id)
                    .with_classes(&[config.like_button_class.as_str(), style_class]),
            );
        }
        doc
    }

    pub fn with(mut self, element: MemoryElement) -> Self {
        self.insert(element);
        self
    }

    pub fn insert(&mut self, element: MemoryElement) {
        self.elements.push(element);
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.iter().find(|e| e.id() == id).cloned()
    }

    pub fn elements_by_class(&self, class: &str) -> Vec<MemoryElement> {
        self.elements
            .iter()
            .filter(|e| e.has_class(class))
            .cloned()
            .collect()
    }

    fn require_id(&self, id: &str) -> Result<MemoryElement> {
        self.get_element_by_id(id)
            .ok_or_else(|| UiError::missing(format!("#{}", id)))
    }
}

impl ElementLookup for MemoryDocument {
    type Button = MemoryElement;
    type Modal = MemoryElement;
    type Trigger = MemoryElement;
    type Input = MemoryElement;
    type Label = MemoryElement;

    fn like_buttons(&self, class: &str) -> Result<Vec<MemoryElement>> {
        Ok(self.elements_by_class(class))
    }

    fn modal(&self, id: &str) -> Result<MemoryElement> {
        self.require_id(id)
    }

    fn trigger_by_id(&self, id: &str) -> Result<MemoryElement> {
        self.require_id(id)
    }

    fn first_trigger_by_class(&self, class: &str) -> Result<MemoryElement> {
        self.elements_by_class(class)
            .into_iter()
            .next()
            .ok_or_else(|| UiError::missing(format!(".{}", class)))
    }

    fn input(&self, id: &str) -> Result<MemoryElement> {
        self.require_id(id)
    }

    fn label(&self, id: &str) -> Result<MemoryElement> {
        self.require_id(id)
    }
}

#[derive(Debug)]
pub struct ClickOutcome {
    /// The like request, when a like-button was hit and the request started.
    pub like_task: Option<TaskHandle>,
    pub default_prevented: bool,
}

/// A mounted page that reacts to simulated user input.
pub struct MemoryPage {
    page: Page<MemoryDocument>,
}

impl MemoryPage {
    pub fn mount(doc: &MemoryDocument, config: &PageConfig, client: Arc<dyn LikeClient>) -> Self {
        Self {
            page: Page::resolve(doc, config, client),
        }
    }

    pub fn report(&self) -> &MountReport {
        &self.page.report
    }

    pub fn modal_state(&self) -> Option<ModalState> {
        self.page.modal.as_ref().map(|m| m.controller.state())
    }

    /// Dispatches a click on `target`, letting it bubble through its
    /// ancestors and then to the window.
    pub fn click(&self, target: &MemoryElement) -> Result<ClickOutcome> {
        let event = MemoryEvent::click(target);
        let mut like_task = None;

        if let Some(button) = self.page.like_buttons.iter().find(|b| target.is_within(b)) {
            like_task = self.page.like_toggle.handle_click(&event, button)?;
        }

        if let Some(modal) = &self.page.modal {
            if target.is_within(&modal.open_link) {
                modal.controller.on_open_click(&event)?;
            } else if target.is_within(&modal.close_control) {
                modal.controller.close()?;
            }

            let on_backdrop = if modal.controller.element().is_same(target) {
                ClickTarget::Backdrop
            } else {
                ClickTarget::Elsewhere
            };
            modal.controller.on_window_click(on_backdrop)?;
        }

        Ok(ClickOutcome {
            like_task,
            default_prevented: event.default_prevented(),
        })
    }

    /// Replaces the message text and fires the key-release handler.
    pub fn type_text(&self, input: &MemoryElement, text: &str) -> Result<String> {
        input.set_value(text);
        let counter = self
            .page
            .counter
            .as_ref()
            .ok_or_else(|| UiError::dom(format!("{} is not bound", Feature::CharCounter)))?;
        Ok(counter.on_key_up())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_has_no_duplicates() {
        let el = MemoryElement::new("1").with_classes(&["btn"]);
        el.add_class("btn").unwrap();
        assert_eq!(el.classes(), vec!["btn".to_string()]);
        el.remove_class("btn").unwrap();
        assert!(el.classes().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let el = MemoryElement::new("label");
        let other = el.clone();
        other.set_text("hi");
        assert_eq!(el.text(), "hi");
        assert!(el.is_same(&other));
        assert!(!el.is_same(&MemoryElement::new("label")));
    }

    #[test]
    fn test_closest_button_walks_ancestors() {
        let button = MemoryElement::button("9");
        let span = MemoryElement::new("").inside(&button);
        let icon = MemoryElement::new("").inside(&span);

        assert!(icon.closest_button().unwrap().is_same(&button));
        assert!(button.closest_button().unwrap().is_same(&button));
        assert!(icon.is_within(&button));
        assert!(!button.is_within(&icon));
        assert!(MemoryElement::new("x").closest_button().is_none());
    }

    #[test]
    fn test_missing_id_lookup() {
        let doc = MemoryDocument::new();
        assert!(matches!(
            doc.modal("myModal"),
            Err(UiError::MissingElement { ref selector }) if selector == "#myModal"
        ));
    }
}
