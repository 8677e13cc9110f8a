use crate::config::PageConfig;
use crate::core::{TextInput, TextLabel};

/// Label text for a message of `len` characters.
///
/// Advisory only: lengths past `max_chars` are reported as-is.
pub fn counter_label(len: usize, warn_threshold: usize, max_chars: usize) -> String {
    if len >= warn_threshold {
        format!("Character Limit: {} / {}", len, max_chars)
    } else {
        String::new()
    }
}

pub struct CharCounter<I, L> {
    input: I,
    label: L,
    warn_threshold: usize,
    max_chars: usize,
}

impl<I: TextInput, L: TextLabel> CharCounter<I, L> {
    pub fn new(input: I, label: L, config: &PageConfig) -> Self {
        Self {
            input,
            label,
            warn_threshold: config.warn_threshold,
            max_chars: config.max_chars,
        }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Key-release handler; returns the text written to the label.
    pub fn on_key_up(&self) -> String {
        let len = self.input.value().chars().count();
        tracing::debug!("Message length {} of {}", len, self.max_chars);

        let text = counter_label(len, self.warn_threshold, self.max_chars);
        self.label.set_text(&text);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryElement;

    #[test]
    fn test_label_thresholds() {
        assert_eq!(counter_label(0, 260, 280), "");
        assert_eq!(counter_label(259, 260, 280), "");
        assert_eq!(counter_label(260, 260, 280), "Character Limit: 260 / 280");
        assert_eq!(counter_label(280, 260, 280), "Character Limit: 280 / 280");
        assert_eq!(counter_label(281, 260, 280), "Character Limit: 281 / 280");
    }

    #[test]
    fn test_key_up_updates_label() {
        let input = MemoryElement::new("new-message");
        let label = MemoryElement::new("charcount");
        let counter = CharCounter::new(input.clone(), label.clone(), &PageConfig::default());

        input.set_value(&"a".repeat(270));
        assert_eq!(counter.on_key_up(), "Character Limit: 270 / 280");
        assert_eq!(label.text(), "Character Limit: 270 / 280");

        input.set_value("short again");
        counter.on_key_up();
        assert_eq!(label.text(), "");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let input = MemoryElement::new("new-message");
        let label = MemoryElement::new("charcount");
        let counter = CharCounter::new(input.clone(), label.clone(), &PageConfig::default());

        input.set_value(&"é".repeat(260));
        assert_eq!(counter.on_key_up(), "Character Limit: 260 / 280");
    }

    #[test]
    fn test_input_is_never_truncated() {
        let input = MemoryElement::new("new-message");
        let label = MemoryElement::new("charcount");
        let counter = CharCounter::new(input.clone(), label, &PageConfig::default());

        input.set_value(&"x".repeat(300));
        assert_eq!(counter.on_key_up(), "Character Limit: 300 / 280");
        assert_eq!(input.value().len(), 300);
    }
}
