use std::sync::LazyLock;

use regex::Regex;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("word pattern"));

/// Clipboard text filter. Owns the debounce state explicitly, so a fresh
/// instance starts with no history.
pub struct WordFilter {
    last_accepted: Option<String>,
}

impl WordFilter {
    pub fn new() -> Self {
        Self {
            last_accepted: None,
        }
    }

    /// Turn raw clipboard text into a lookup term, or `None` to skip the
    /// cycle: trim, debounce against the previously accepted value, require
    /// a single ASCII-letter word, lowercase.
    ///
    /// The debounce value is recorded on acceptance only; rejected input
    /// never becomes the comparison baseline.
    pub fn accept(&mut self, raw: &str) -> Option<String> {
        let word = raw.trim();
        if self.last_accepted.as_deref() == Some(word) {
            return None;
        }
        if !WORD_PATTERN.is_match(word) {
            tracing::warn!("not a word: {:?}", word);
            return None;
        }
        self.last_accepted = Some(word.to_string());
        Some(word.to_lowercase())
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        let mut filter = WordFilter::new();
        assert_eq!(filter.accept(" Hello "), Some("hello".to_string()));
    }

    #[test]
    fn debounces_repeated_value() {
        let mut filter = WordFilter::new();
        assert_eq!(filter.accept("hello"), Some("hello".to_string()));
        assert_eq!(filter.accept("hello"), None);
        assert_eq!(filter.accept(" hello "), None);
    }

    #[test]
    fn debounces_before_pattern_check() {
        let mut filter = WordFilter::new();
        assert_eq!(filter.accept(" Hello "), Some("hello".to_string()));
        assert_eq!(filter.accept("Hello"), None);
    }

    #[test]
    fn rejects_non_words() {
        let mut filter = WordFilter::new();
        assert_eq!(filter.accept(""), None);
        assert_eq!(filter.accept("   "), None);
        assert_eq!(filter.accept("two words"), None);
        assert_eq!(filter.accept("can't"), None);
        assert_eq!(filter.accept("hello2"), None);
        assert_eq!(filter.accept("안녕"), None);
    }

    #[test]
    fn rejected_input_is_not_recorded() {
        let mut filter = WordFilter::new();
        assert_eq!(filter.accept("run!"), None);
        assert_eq!(filter.accept("run"), Some("run".to_string()));
    }

    #[test]
    fn distinct_values_pass_in_sequence() {
        let mut filter = WordFilter::new();
        assert_eq!(filter.accept("run"), Some("run".to_string()));
        assert_eq!(filter.accept("walk"), Some("walk".to_string()));
        assert_eq!(filter.accept("run"), Some("run".to_string()));
    }
}
