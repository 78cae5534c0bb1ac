// Search switches.

/// Options controlling how states are generated and accepted.
///
/// `prune` only affects performance. `space_insertion` and
/// `abbreviation_period` add elasticity on top of the rule table and can turn
/// a no-match into a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Discard any state whose confirmed prefix is not a prefix of the goal.
    pub prune: bool,
    /// When a rule other than the space rule fires, also try the result with
    /// a space put back in front of the remainder.
    pub space_insertion: bool,
    /// When a class rule fires, also try the replacement followed by a
    /// period ("street" -> "st.").
    pub abbreviation_period: bool,
    /// Stop after this many expansions (both directions together). `None`
    /// searches until a match is found or both frontiers are exhausted.
    pub max_expansions: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            prune: true,
            space_insertion: true,
            abbreviation_period: true,
            max_expansions: None,
        }
    }
}

impl SearchOptions {
    /// Default options with prefix pruning switched off. Only useful for
    /// diagnostics and differential testing: the verdict is the same, the
    /// explored state space is much larger.
    pub fn unpruned() -> Self {
        Self {
            prune: false,
            ..Self::default()
        }
    }

    /// Only the rules themselves: no sibling states.
    pub fn strict() -> Self {
        Self {
            space_insertion: false,
            abbreviation_period: false,
            ..Self::default()
        }
    }

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prunes_without_cap() {
        let options = SearchOptions::default();
        assert!(options.prune);
        assert!(options.space_insertion);
        assert!(options.abbreviation_period);
        assert_eq!(options.max_expansions, None);
    }

    #[test]
    fn unpruned_only_flips_pruning() {
        let options = SearchOptions::unpruned();
        assert!(!options.prune);
        assert!(options.space_insertion);
    }

    #[test]
    fn strict_disables_siblings() {
        let options = SearchOptions::strict().with_max_expansions(10);
        assert!(!options.space_insertion);
        assert!(!options.abbreviation_period);
        assert!(options.prune);
        assert_eq!(options.max_expansions, Some(10));
    }
}
