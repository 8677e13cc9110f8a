use crate::config::PageConfig;
use crate::core::{ButtonStyle, ClassList, ClickEvent, LikeClient, LikeTarget, MessageId};
use crate::utils::error::Result;
use crate::utils::task::{spawn_detached, TaskHandle};
use std::sync::Arc;

/// Works out which message a click likes and which element shows it.
///
/// The id comes from the click target, or from the bound button when the
/// target has none. The style goes on the closest `<button>` around the
/// target, falling back to the bound element.
pub fn resolve_like_target<E: LikeTarget>(bound: &E, target: Option<E>) -> (String, E) {
    let target = target.unwrap_or_else(|| bound.clone());
    let message_id = match target.element_id() {
        id if id.is_empty() => bound.element_id(),
        id => id,
    };
    let styled = target.closest_button().unwrap_or_else(|| bound.clone());
    (message_id, styled)
}

/// Click behaviour shared by every like-button on the page.
///
/// A click sends the like request as a detached task and flips the
/// button's style right away. The request outcome never feeds back into
/// the button; failures only reach the log.
pub struct LikeToggle {
    client: Arc<dyn LikeClient>,
    primary_class: String,
    secondary_class: String,
    prevents_default: bool,
}

impl LikeToggle {
    pub fn new(client: Arc<dyn LikeClient>, config: &PageConfig) -> Self {
        Self {
            client,
            primary_class: config.primary_class.clone(),
            secondary_class: config.secondary_class.clone(),
            prevents_default: config.like_prevents_default,
        }
    }

    pub fn class_for(&self, style: ButtonStyle) -> &str {
        match style {
            ButtonStyle::Primary => &self.primary_class,
            ButtonStyle::Secondary => &self.secondary_class,
        }
    }

    pub fn style_of<B: ClassList + ?Sized>(&self, button: &B) -> Option<ButtonStyle> {
        if button.has_class(&self.primary_class) {
            Some(ButtonStyle::Primary)
        } else if button.has_class(&self.secondary_class) {
            Some(ButtonStyle::Secondary)
        } else {
            None
        }
    }

    /// Flips the button's style class and returns the new style.
    ///
    /// A button carrying neither class ends up primary.
    pub fn toggle_style<B: ClassList + ?Sized>(&self, button: &B) -> Result<ButtonStyle> {
        let next = match self.style_of(button) {
            Some(ButtonStyle::Primary) => ButtonStyle::Secondary,
            Some(ButtonStyle::Secondary) | None => ButtonStyle::Primary,
        };

        button.remove_class(self.class_for(next.flipped()))?;
        button.add_class(self.class_for(next))?;
        Ok(next)
    }

    /// Click listener body for the like-button `bound`.
    pub fn handle_click<Ev, E>(&self, event: &Ev, bound: &E) -> Result<Option<TaskHandle>>
    where
        Ev: ClickEvent<Target = E>,
        E: LikeTarget,
    {
        if self.prevents_default {
            event.prevent_default();
        }

        let (message_id, styled) = resolve_like_target(bound, event.target());
        self.on_click(&styled, MessageId::new(message_id)?)
    }

    /// Returns the request task, or `None` when the request could not be started.
    pub fn on_click<B: ClassList + ?Sized>(
        &self,
        button: &B,
        message_id: MessageId,
    ) -> Result<Option<TaskHandle>> {
        let handle = self.send_like(message_id);
        let style = self.toggle_style(button)?;
        tracing::debug!("Like button now {:?}", style);
        Ok(handle)
    }

    fn send_like(&self, message_id: MessageId) -> Option<TaskHandle> {
        let client = Arc::clone(&self.client);
        tracing::debug!("Sending like for message {}", message_id);

        let label = message_id.clone();
        let spawned = spawn_detached(async move {
            match client.add_like(&message_id).await {
                Ok(()) => tracing::debug!("Like registered for message {}", message_id),
                Err(e) => tracing::warn!("Like request for message {} failed: {}", message_id, e),
            }
        });

        match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!("Like for message {} not sent: {}", label, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{MemoryElement, MemoryEvent};
    use crate::utils::error::UiError;
    use async_trait::async_trait;
    use tokio::sync::mpsc;

    struct ChannelClient {
        sent: mpsc::UnboundedSender<String>,
        fail: bool,
    }

    #[async_trait]
    impl LikeClient for ChannelClient {
        async fn add_like(&self, message_id: &MessageId) -> Result<()> {
            let _ = self.sent.send(message_id.to_string());
            if self.fail {
                return Err(UiError::UnexpectedStatus {
                    status: 500,
                    url: format!("/users/add_like/{}", message_id),
                });
            }
            Ok(())
        }
    }

    fn toggle_with(config: &PageConfig, fail: bool) -> (LikeToggle, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = Arc::new(ChannelClient { sent: tx, fail });
        (LikeToggle::new(client, config), rx)
    }

    fn toggle(fail: bool) -> (LikeToggle, mpsc::UnboundedReceiver<String>) {
        toggle_with(&PageConfig::default(), fail)
    }

    #[test]
    fn test_toggle_flips_and_restores() {
        let (toggle, _rx) = toggle(false);
        let button = MemoryElement::new("7").with_classes(&["btn", "btn-primary"]);

        assert_eq!(toggle.toggle_style(&button).unwrap(), ButtonStyle::Secondary);
        assert!(button.has_class("btn-secondary"));
        assert!(!button.has_class("btn-primary"));

        assert_eq!(toggle.toggle_style(&button).unwrap(), ButtonStyle::Primary);
        assert!(button.has_class("btn-primary"));
        assert!(!button.has_class("btn-secondary"));
        assert!(button.has_class("btn"));
    }

    #[test]
    fn test_unstyled_button_becomes_primary() {
        let (toggle, _rx) = toggle(false);
        let button = MemoryElement::new("7").with_classes(&["btn"]);

        assert_eq!(toggle.toggle_style(&button).unwrap(), ButtonStyle::Primary);
        assert_eq!(toggle.style_of(&button), Some(ButtonStyle::Primary));
    }

    #[test]
    fn test_both_classes_collapse_to_one() {
        let (toggle, _rx) = toggle(false);
        let button = MemoryElement::new("7").with_classes(&["btn-primary", "btn-secondary"]);

        toggle.toggle_style(&button).unwrap();
        assert!(button.has_class("btn-secondary"));
        assert!(!button.has_class("btn-primary"));
    }

    #[test]
    fn test_icon_with_id_names_the_message() {
        let button = MemoryElement::button("").with_classes(&["btn", "btn-primary"]);
        let icon = MemoryElement::new("5").inside(&button);

        let (message_id, styled) = resolve_like_target(&button, Some(icon));
        assert_eq!(message_id, "5");
        assert!(styled.is_same(&button));
    }

    #[test]
    fn test_icon_without_id_falls_back_to_button() {
        let button = MemoryElement::button("8").with_classes(&["btn", "btn-primary"]);
        let icon = MemoryElement::new("").inside(&button);

        let (message_id, styled) = resolve_like_target(&button, Some(icon));
        assert_eq!(message_id, "8");
        assert!(styled.is_same(&button));
    }

    #[test]
    fn test_missing_target_uses_bound_element() {
        let bound = MemoryElement::new("4").with_classes(&["btn", "btn-primary"]);

        let (message_id, styled) = resolve_like_target(&bound, None);
        assert_eq!(message_id, "4");
        assert!(styled.is_same(&bound));
    }

    #[test]
    fn test_click_without_runtime_still_toggles() {
        let (toggle, _rx) = toggle(false);
        let button = MemoryElement::button("1").with_classes(&["btn", "btn-primary"]);

        let task = toggle
            .on_click(&button, MessageId::new("1").unwrap())
            .unwrap();
        assert!(task.is_none());
        assert!(button.has_class("btn-secondary"));
    }

    #[tokio::test]
    async fn test_icon_click_styles_enclosing_button() {
        let (toggle, mut rx) = toggle(false);
        let button = MemoryElement::button("").with_classes(&["btn", "btn-primary"]);
        let icon = MemoryElement::new("21").with_classes(&["fa", "fa-thumbs-up"]);
        let icon = icon.inside(&button);

        let event = MemoryEvent::click(&icon);
        let task = toggle.handle_click(&event, &button).unwrap().expect("like task");
        task.await.unwrap();

        assert_eq!(rx.recv().await.as_deref(), Some("21"));
        assert!(button.has_class("btn-secondary"));
        assert!(!icon.has_class("btn-secondary"));
        assert!(!event.default_prevented());
    }

    #[tokio::test]
    async fn test_prevent_default_when_configured() {
        let config = PageConfig {
            like_prevents_default: true,
            ..PageConfig::default()
        };
        let (toggle, _rx) = toggle_with(&config, false);
        let button = MemoryElement::button("30").with_classes(&["btn", "btn-primary"]);

        let event = MemoryEvent::click(&button);
        toggle.handle_click(&event, &button).unwrap();
        assert!(event.default_prevented());
    }

    #[tokio::test]
    async fn test_each_click_sends_one_request() {
        let (toggle, mut rx) = toggle(false);
        let button = MemoryElement::new("12").with_classes(&["btn", "btn-secondary"]);

        let first = toggle.on_click(&button, MessageId::new("12").unwrap()).unwrap();
        let second = toggle.on_click(&button, MessageId::new("12").unwrap()).unwrap();
        first.expect("like task").await.unwrap();
        second.expect("like task").await.unwrap();

        assert_eq!(rx.recv().await.as_deref(), Some("12"));
        assert_eq!(rx.recv().await.as_deref(), Some("12"));
        assert!(rx.try_recv().is_err());
        assert!(button.has_class("btn-secondary"));
    }

    #[tokio::test]
    async fn test_failed_request_keeps_optimistic_style() {
        let (toggle, mut rx) = toggle(true);
        let button = MemoryElement::new("3").with_classes(&["btn", "btn-primary"]);

        let handle = toggle
            .on_click(&button, MessageId::new("3").unwrap())
            .unwrap()
            .expect("like task");
        // Style changes before the request has even been polled.
        assert!(button.has_class("btn-secondary"));

        handle.await.unwrap();
        assert_eq!(rx.recv().await.as_deref(), Some("3"));
        assert!(button.has_class("btn-secondary"));
    }
}
