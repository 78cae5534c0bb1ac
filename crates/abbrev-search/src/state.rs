// Search states: (confirmed prefix, untouched remainder) pairs.

use std::fmt;

/// A partially rewritten candidate string.
///
/// The candidate is `confirmed + remainder`. `confirmed` holds text that has
/// already been processed (copied or rewritten); `remainder` is the part of
/// the starting string that no rule has touched yet, possibly behind one
/// re-inserted space. Rewriting only ever consumes from the front of
/// `remainder`, so a state never needs to be mutated: each rewrite produces a
/// new one.
///
/// When the search prunes, `confirmed` is always a prefix of the goal string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchState {
    confirmed: String,
    remainder: String,
}

impl SearchState {
    /// The state a directional search starts from: nothing confirmed, the
    /// whole starting string remaining.
    pub fn initial(start: &str) -> Self {
        Self {
            confirmed: String::new(),
            remainder: start.to_string(),
        }
    }

    pub fn new(confirmed: impl Into<String>, remainder: impl Into<String>) -> Self {
        Self {
            confirmed: confirmed.into(),
            remainder: remainder.into(),
        }
    }

    pub fn confirmed(&self) -> &str {
        &self.confirmed
    }

    pub fn remainder(&self) -> &str {
        &self.remainder
    }

    /// Frontier key: the number of characters still to be processed.
    pub fn priority(&self) -> usize {
        self.remainder.chars().count()
    }

    /// The full candidate string this state represents.
    pub fn candidate(&self) -> String {
        let mut candidate = String::with_capacity(self.confirmed.len() + self.remainder.len());
        candidate.push_str(&self.confirmed);
        candidate.push_str(&self.remainder);
        candidate
    }

    /// Returns `true` if `confirmed + remainder == goal`, without allocating.
    pub fn spells(&self, goal: &str) -> bool {
        goal.len() == self.confirmed.len() + self.remainder.len()
            && goal.starts_with(self.confirmed.as_str())
            && goal[self.confirmed.len()..] == self.remainder
    }

    /// Returns `true` if the confirmed prefix is still consistent with `goal`.
    pub fn is_consistent_with(&self, goal: &str) -> bool {
        goal.starts_with(self.confirmed.as_str())
    }

    /// Split the remainder at the first occurrence of `trigger`.
    pub fn split_once<'a>(&'a self, trigger: &str) -> Option<(&'a str, &'a str)> {
        self.remainder.split_once(trigger)
    }

    /// Build the successor obtained by copying `before`, then writing
    /// `replacement` and `suffix`, leaving `after` as the new remainder.
    pub fn rewrite(&self, before: &str, replacement: &str, suffix: &str, after: &str) -> Self {
        let mut confirmed = String::with_capacity(
            self.confirmed.len() + before.len() + replacement.len() + suffix.len(),
        );
        confirmed.push_str(&self.confirmed);
        confirmed.push_str(before);
        confirmed.push_str(replacement);
        confirmed.push_str(suffix);
        Self {
            confirmed,
            remainder: after.to_string(),
        }
    }

    /// The same state with a single space put back in front of the remainder.
    pub fn with_leading_space(&self) -> Self {
        let mut remainder = String::with_capacity(self.remainder.len() + 1);
        remainder.push(' ');
        remainder.push_str(&self.remainder);
        Self {
            confirmed: self.confirmed.clone(),
            remainder,
        }
    }
}

/// Renders as `"confirmed" + "remainder"`.
impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}", self.confirmed, self.remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_confirms_nothing() {
        let state = SearchState::initial("n st");
        assert_eq!(state.confirmed(), "");
        assert_eq!(state.remainder(), "n st");
        assert_eq!(state.priority(), 4);
        assert_eq!(state.candidate(), "n st");
    }

    #[test]
    fn priority_counts_characters_not_bytes() {
        let state = SearchState::new("", "ул. ленина");
        assert_eq!(state.priority(), 10);
    }

    #[test]
    fn rewrite_consumes_from_the_front() {
        let state = SearchState::initial("123 north street");
        let (before, after) = state.split_once("north").unwrap();
        let next = state.rewrite(before, "n", "", after);
        assert_eq!(next.confirmed(), "123 n");
        assert_eq!(next.remainder(), " street");
        assert_eq!(next.candidate(), "123 n street");
    }

    #[test]
    fn split_once_uses_first_occurrence() {
        let state = SearchState::new("x", "a-b-c");
        assert_eq!(state.split_once("-"), Some(("a", "b-c")));
        assert_eq!(state.split_once("+"), None);
    }

    #[test]
    fn rewrite_appends_suffix_after_replacement() {
        let state = SearchState::new("main ", "street");
        let next = state.rewrite("", "st", ".", "");
        assert_eq!(next.confirmed(), "main st.");
        assert!(next.spells("main st."));
    }

    #[test]
    fn spells_compares_without_allocating() {
        let state = SearchState::new("north", " st");
        assert!(state.spells("north st"));
        assert!(!state.spells("north street"));
        assert!(!state.spells("north s"));
        assert!(SearchState::initial("").spells(""));
    }

    #[test]
    fn consistency_is_a_prefix_check() {
        let state = SearchState::new("north", " st");
        assert!(state.is_consistent_with("north street"));
        assert!(!state.is_consistent_with("n street"));
        assert!(SearchState::initial("anything").is_consistent_with("goal"));
    }

    #[test]
    fn leading_space_keeps_confirmed() {
        let state = SearchState::new("north", "st");
        let spaced = state.with_leading_space();
        assert_eq!(spaced.confirmed(), "north");
        assert_eq!(spaced.remainder(), " st");
        assert_eq!(spaced.priority(), state.priority() + 1);
    }

    #[test]
    fn display_shows_both_halves() {
        let state = SearchState::new("north", " st");
        assert_eq!(state.to_string(), "\"north\" + \" st\"");
    }
}
