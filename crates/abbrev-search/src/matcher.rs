// Matcher: top-level entry point for equivalence checks.
//
// Owns a shared, read-only rule table plus the search options and hands out
// one fresh BidirectionalSearch per comparison. Nothing is cached between
// calls.

use std::sync::Arc;

use abbrev_core::case::fold;
use abbrev_core::{AbbrevError, EquivalenceClass, Verdict};
use abbrev_rules::RuleTable;
use abbrev_rules::corpus::default_table;

use crate::bidirectional::{BidirectionalSearch, SearchOutcome};
use crate::observer::{NoopObserver, SearchObserver};
use crate::options::SearchOptions;

/// Decides whether two strings denote the same thing under a rule table.
///
/// Cloning a `Matcher` is cheap; the rule table is shared.
#[derive(Debug, Clone)]
pub struct Matcher {
    table: Arc<RuleTable>,
    options: SearchOptions,
}

impl Matcher {
    pub fn new(table: Arc<RuleTable>) -> Self {
        Self {
            table,
            options: SearchOptions::default(),
        }
    }

    /// A matcher over the built-in street-name corpus.
    pub fn with_default_corpus() -> Self {
        Self::new(default_table())
    }

    /// Compile `classes` into a private table.
    pub fn from_classes(classes: &[EquivalenceClass]) -> Self {
        Self::new(Arc::new(RuleTable::compile(classes)))
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    /// Prepare a step-wise search between `a` and `b` (folded here).
    pub fn search(&self, a: &str, b: &str) -> BidirectionalSearch {
        BidirectionalSearch::new(&self.table, &fold(a), &fold(b), self.options)
    }

    /// Compare two strings.
    pub fn compare(&self, a: &str, b: &str) -> Verdict {
        self.compare_traced(a, b, &mut NoopObserver).verdict
    }

    /// Compare two strings, reporting filtered rule tables and popped states
    /// to `observer`.
    pub fn compare_traced(
        &self,
        a: &str,
        b: &str,
        observer: &mut dyn SearchObserver,
    ) -> SearchOutcome {
        self.search(a, b).run(observer)
    }

    /// Entry contract: exactly two strings in, a verdict out.
    pub fn evaluate<S: AsRef<str>>(&self, inputs: &[S]) -> Result<Verdict, AbbrevError> {
        match inputs {
            [a, b] => Ok(self.compare(a.as_ref(), b.as_ref())),
            _ => Err(AbbrevError::Usage {
                expected: 2,
                actual: inputs.len(),
            }),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_corpus()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidirectional::Termination;
    use crate::observer::TraceRecorder;
    use abbrev_core::Direction;

    fn small() -> Matcher {
        let classes =
            EquivalenceClass::from_lists(&[&["street", "st"][..], &["north", "n"][..]]).unwrap();
        Matcher::from_classes(&classes)
    }

    #[test]
    fn north_street_matches_abbreviated() {
        assert_eq!(small().compare("123 North Street", "123 N St"), Verdict::Match);
    }

    #[test]
    fn street_does_not_match_boulevard() {
        assert_eq!(
            small().compare("123 North Street", "123 North Boulevard"),
            Verdict::NoMatch
        );
    }

    #[test]
    fn trailing_period_is_stripped() {
        assert_eq!(small().compare("Main St.", "Main Street"), Verdict::Match);
    }

    #[test]
    fn empty_strings_match() {
        assert_eq!(small().compare("", ""), Verdict::Match);
    }

    #[test]
    fn case_is_ignored() {
        let outcome = small().compare_traced("MAIN ST", "main st", &mut NoopObserver);
        assert_eq!(outcome.termination, Termination::Identical);
    }

    #[test]
    fn verbose_trace_pops_non_increasing_remainders() {
        let mut recorder = TraceRecorder::new();
        let outcome = small().compare_traced("N St", "North Street", &mut recorder);
        assert_eq!(outcome.verdict, Verdict::Match);

        for direction in [Direction::Forward, Direction::Backward] {
            let lengths: Vec<usize> = recorder.pops(direction).map(|s| s.priority()).collect();
            assert!(!lengths.is_empty());
            assert!(
                lengths.windows(2).all(|w| w[0] >= w[1]),
                "{direction}: {lengths:?}"
            );
        }
        assert!(recorder.rules(Direction::Forward).is_some());
        assert!(recorder.rules(Direction::Backward).is_some());
    }

    #[test]
    fn tracing_does_not_change_the_verdict() {
        let m = small();
        for (a, b) in [
            ("n st", "north street"),
            ("main st.", "main street"),
            ("123 north street", "123 north boulevard"),
        ] {
            let traced = m.compare_traced(a, b, &mut TraceRecorder::new()).verdict;
            assert_eq!(traced, m.compare(a, b));
        }
    }

    #[test]
    fn evaluate_requires_two_inputs() {
        let m = small();
        assert_eq!(m.evaluate(&["n st", "north street"]), Ok(Verdict::Match));
        assert_eq!(
            m.evaluate(&["only one"]),
            Err(AbbrevError::Usage {
                expected: 2,
                actual: 1
            })
        );
        let none: [&str; 0] = [];
        assert!(m.evaluate(&none).is_err());
    }

    #[test]
    fn default_corpus_handles_mixed_languages() {
        let m = Matcher::with_default_corpus();
        assert_eq!(m.compare("Foobar Rd", "Foobar Road"), Verdict::Match);
        assert_eq!(m.compare("Улица Ленина", "ул. Ленина"), Verdict::Match);
        assert_eq!(m.compare("Hauptstraße", "Hauptstr."), Verdict::Match);
        assert_eq!(m.compare("Main Street", "Main Avenue"), Verdict::NoMatch);
    }

    #[test]
    fn matchers_share_the_default_table() {
        let a = Matcher::default();
        let b = a.clone().with_options(SearchOptions::strict());
        assert!(std::ptr::eq(a.table(), b.table()));
        assert_eq!(b.options(), SearchOptions::strict());
    }
}
