use crate::config::PageConfig;
use crate::core::char_counter::CharCounter;
use crate::core::like_toggle::LikeToggle;
use crate::core::modal::ModalController;
use crate::core::{ClassList, InlineDisplay, LikeClient, TextInput, TextLabel};
use crate::utils::error::{Result, UiError};
use std::fmt;
use std::sync::Arc;

/// Finds the handles each behaviour binds to.
pub trait ElementLookup {
    type Button: ClassList;
    type Modal: InlineDisplay;
    type Trigger;
    type Input: TextInput;
    type Label: TextLabel;

    fn like_buttons(&self, class: &str) -> Result<Vec<Self::Button>>;
    fn modal(&self, id: &str) -> Result<Self::Modal>;
    fn trigger_by_id(&self, id: &str) -> Result<Self::Trigger>;
    fn first_trigger_by_class(&self, class: &str) -> Result<Self::Trigger>;
    fn input(&self, id: &str) -> Result<Self::Input>;
    fn label(&self, id: &str) -> Result<Self::Label>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    LikeToggle,
    Modal,
    CharCounter,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Feature::LikeToggle => "like toggle",
            Feature::Modal => "new message modal",
            Feature::CharCounter => "character counter",
        };
        f.write_str(name)
    }
}

/// Outcome of binding the page. A failed feature stays unbound; the others still work.
#[derive(Debug, Default)]
pub struct MountReport {
    pub like_buttons: usize,
    pub failures: Vec<(Feature, UiError)>,
}

impl MountReport {
    pub fn record<T>(&mut self, feature: Feature, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Could not bind {}: {}", feature, e);
                self.failures.push((feature, e));
                None
            }
        }
    }

    pub fn is_bound(&self, feature: Feature) -> bool {
        !self.failures.iter().any(|(failed, _)| *failed == feature)
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct ModalBinding<D: ElementLookup> {
    pub controller: ModalController<D::Modal>,
    pub open_link: D::Trigger,
    pub close_control: D::Trigger,
}

/// Every behaviour of the message page, resolved against one document.
pub struct Page<D: ElementLookup> {
    pub like_toggle: LikeToggle,
    pub like_buttons: Vec<D::Button>,
    pub modal: Option<ModalBinding<D>>,
    pub counter: Option<CharCounter<D::Input, D::Label>>,
    pub report: MountReport,
}

impl<D: ElementLookup> Page<D> {
    pub fn resolve(doc: &D, config: &PageConfig, client: Arc<dyn LikeClient>) -> Self {
        let mut report = MountReport::default();

        let like_buttons = report
            .record(
                Feature::LikeToggle,
                doc.like_buttons(&config.like_button_class),
            )
            .unwrap_or_default();
        report.like_buttons = like_buttons.len();

        let modal = report.record(Feature::Modal, Self::resolve_modal(doc, config));
        let counter = report.record(
            Feature::CharCounter,
            doc.input(&config.input_id).and_then(|input| {
                let label = doc.label(&config.label_id)?;
                Ok(CharCounter::new(input, label, config))
            }),
        );

        tracing::info!(
            "Page bound: {} like buttons, modal {}, counter {}",
            report.like_buttons,
            if modal.is_some() { "ready" } else { "missing" },
            if counter.is_some() { "ready" } else { "missing" },
        );

        Self {
            like_toggle: LikeToggle::new(client, config),
            like_buttons,
            modal,
            counter,
            report,
        }
    }

    fn resolve_modal(doc: &D, config: &PageConfig) -> Result<ModalBinding<D>> {
        Ok(ModalBinding {
            controller: ModalController::new(doc.modal(&config.modal_id)?),
            open_link: doc.trigger_by_id(&config.open_link_id)?,
            close_control: doc.first_trigger_by_class(&config.close_class)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_tracks_failures_per_feature() {
        let mut report = MountReport::default();
        assert_eq!(report.record(Feature::LikeToggle, Ok(3)), Some(3));
        assert_eq!(
            report.record::<()>(Feature::Modal, Err(UiError::missing("#myModal"))),
            None
        );

        assert!(report.is_bound(Feature::LikeToggle));
        assert!(!report.is_bound(Feature::Modal));
        assert!(report.is_bound(Feature::CharCounter));
        assert!(!report.is_complete());
    }
}
