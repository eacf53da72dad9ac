//! Suggested-reply shortcuts
//!
//! A small fixed set of canned phrases the user may select instead of
//! typing. Selecting one is exactly equivalent to typing that text and
//! dispatching it; there is no independent behavior beyond the lookup.

/// Fixed set of suggested replies for the current panel
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    phrases: Vec<String>,
}

impl Suggestions {
    /// Creates the suggestion set from configuration
    ///
    /// # Arguments
    ///
    /// * `phrases` - The canned phrases to offer
    ///
    /// # Examples
    ///
    /// ```
    /// use chatling::suggestions::Suggestions;
    ///
    /// let suggestions = Suggestions::new(vec!["Tell me a joke".to_string()]);
    /// assert_eq!(suggestions.len(), 1);
    /// ```
    pub fn new(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    /// Resolves a 1-based selection to its exact phrase text
    ///
    /// # Arguments
    ///
    /// * `index` - 1-based index as shown in the panel listing
    ///
    /// # Returns
    ///
    /// The phrase, or `None` for an out-of-range index
    ///
    /// # Examples
    ///
    /// ```
    /// use chatling::suggestions::Suggestions;
    ///
    /// let suggestions = Suggestions::new(vec!["a".to_string(), "b".to_string()]);
    /// assert_eq!(suggestions.select(2), Some("b"));
    /// assert_eq!(suggestions.select(3), None);
    /// ```
    pub fn select(&self, index: usize) -> Option<&str> {
        if index == 0 {
            return None;
        }
        self.phrases.get(index - 1).map(String::as_str)
    }

    /// Returns all phrases in display order
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Number of offered phrases
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns true if no phrases are offered
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
