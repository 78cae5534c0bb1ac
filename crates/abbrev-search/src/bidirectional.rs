// Alternating driver for the two directional searches.
//
// One expansion per direction per round keeps the worst-case latency
// symmetric: whichever direction finds the goal first decides the match, and
// the answer is "no match" only once both frontiers are empty.

use abbrev_core::{Direction, Verdict};
use abbrev_rules::RuleTable;

use crate::direction::{DirectionalSearch, Expansion};
use crate::observer::SearchObserver;
use crate::options::SearchOptions;

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The inputs were equal; no rule was applied.
    Identical,
    /// A directional search reached its goal.
    Found(Direction),
    /// Both frontiers ran empty.
    Exhausted,
    /// The expansion cap was hit before either of the above.
    Abandoned,
}

/// Final result of a bidirectional search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub verdict: Verdict,
    pub termination: Termination,
    /// States expanded by both directions together.
    pub expansions: usize,
}

impl SearchOutcome {
    pub(crate) fn new(termination: Termination, expansions: usize) -> Self {
        let verdict = match termination {
            Termination::Identical | Termination::Found(_) => Verdict::Match,
            Termination::Exhausted | Termination::Abandoned => Verdict::NoMatch,
        };
        Self {
            verdict,
            termination,
            expansions,
        }
    }

    /// `false` only for abandoned searches, whose `NoMatch` is not a proof.
    pub fn is_conclusive(&self) -> bool {
        self.termination != Termination::Abandoned
    }
}

/// Result of one [`BidirectionalSearch::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Pending,
    Done(SearchOutcome),
}

/// Forward (`a` -> `b`) and backward (`b` -> `a`) searches run in lockstep.
///
/// Callers either drive it with [`step`](Self::step), which allows them to
/// stop at any expansion boundary, or hand it to [`run`](Self::run).
pub struct BidirectionalSearch {
    forward: DirectionalSearch,
    backward: DirectionalSearch,
    max_expansions: Option<usize>,
    identical: bool,
    started: bool,
    outcome: Option<SearchOutcome>,
}

impl BidirectionalSearch {
    /// Set up both directions. `a` and `b` must already be folded.
    pub fn new(table: &RuleTable, a: &str, b: &str, options: SearchOptions) -> Self {
        Self {
            forward: DirectionalSearch::new(Direction::Forward, table, a, b, options),
            backward: DirectionalSearch::new(Direction::Backward, table, b, a, options),
            max_expansions: options.max_expansions,
            identical: a == b,
            started: false,
            outcome: None,
        }
    }

    pub fn forward(&self) -> &DirectionalSearch {
        &self.forward
    }

    pub fn backward(&self) -> &DirectionalSearch {
        &self.backward
    }

    /// States expanded so far by both directions.
    pub fn expansions(&self) -> usize {
        self.forward.expansions() + self.backward.expansions()
    }

    /// The outcome, once the search has finished.
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }

    /// Run one round: one expansion in each direction that still has states.
    ///
    /// The first call announces both filtered rule tables to `observer`.
    /// Once the search is done, further calls keep returning the same
    /// outcome without doing any work.
    pub fn step(&mut self, observer: &mut dyn SearchObserver) -> Step {
        if let Some(outcome) = &self.outcome {
            return Step::Done(outcome.clone());
        }

        if !self.started {
            self.started = true;
            observer.on_rules(Direction::Forward, self.forward.rules());
            observer.on_rules(Direction::Backward, self.backward.rules());
            tracing::debug!(
                forward_rules = self.forward.rules().len(),
                backward_rules = self.backward.rules().len(),
                "search started"
            );
            if self.identical {
                return self.finish(Termination::Identical, observer);
            }
        }

        for direction in [Direction::Forward, Direction::Backward] {
            let search = match direction {
                Direction::Forward => &self.forward,
                Direction::Backward => &self.backward,
            };
            if search.is_exhausted() {
                continue;
            }
            if self.cap_reached() {
                return self.finish(Termination::Abandoned, observer);
            }

            let search = match direction {
                Direction::Forward => &mut self.forward,
                Direction::Backward => &mut self.backward,
            };
            if let Expansion::Found(state) = search.expand(observer) {
                tracing::debug!(%direction, confirmed = state.confirmed(), "goal reached");
                return self.finish(Termination::Found(direction), observer);
            }
        }

        if self.forward.is_exhausted() && self.backward.is_exhausted() {
            return self.finish(Termination::Exhausted, observer);
        }
        Step::Pending
    }

    /// Drive the search to completion.
    pub fn run(mut self, observer: &mut dyn SearchObserver) -> SearchOutcome {
        loop {
            if let Step::Done(outcome) = self.step(observer) {
                return outcome;
            }
        }
    }

    fn cap_reached(&self) -> bool {
        self.max_expansions.is_some_and(|max| self.expansions() >= max)
    }

    fn finish(&mut self, termination: Termination, observer: &mut dyn SearchObserver) -> Step {
        let outcome = SearchOutcome::new(termination, self.expansions());
        tracing::debug!(
            verdict = %outcome.verdict,
            termination = ?outcome.termination,
            expansions = outcome.expansions,
            "search finished"
        );
        observer.on_finish(&outcome);
        self.outcome = Some(outcome.clone());
        Step::Done(outcome)
    }
}
