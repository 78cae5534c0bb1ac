// Diagnostic hooks for the search.
//
// Observers see the filtered rule table of each direction, every state popped
// from a frontier and the final outcome. They cannot influence the search.

use abbrev_core::Direction;
use abbrev_rules::FilteredRuleTable;

use crate::bidirectional::SearchOutcome;
use crate::state::SearchState;

/// Receives diagnostic events while a search runs.
///
/// Every method has an empty default, so implementors only override what
/// they care about.
pub trait SearchObserver {
    /// Called once per direction before the first expansion.
    fn on_rules(&mut self, _direction: Direction, _rules: &FilteredRuleTable) {}

    /// Called for every state taken off a frontier.
    fn on_pop(&mut self, _direction: Direction, _state: &SearchState) {}

    /// Called once when the search terminates.
    fn on_finish(&mut self, _outcome: &SearchOutcome) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// A recorded diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Rules {
        direction: Direction,
        rules: FilteredRuleTable,
    },
    Pop {
        direction: Direction,
        state: SearchState,
    },
    Finish(SearchOutcome),
}

/// Observer that records every event in order.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    /// States popped by one direction, in pop order.
    pub fn pops(&self, direction: Direction) -> impl Iterator<Item = &SearchState> {
        self.events.iter().filter_map(move |event| match event {
            TraceEvent::Pop {
                direction: d,
                state,
            } if *d == direction => Some(state),
            _ => None,
        })
    }

    /// The filtered rule table announced for one direction.
    pub fn rules(&self, direction: Direction) -> Option<&FilteredRuleTable> {
        self.events.iter().find_map(|event| match event {
            TraceEvent::Rules {
                direction: d,
                rules,
            } if *d == direction => Some(rules),
            _ => None,
        })
    }

    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.events.iter().rev().find_map(|event| match event {
            TraceEvent::Finish(outcome) => Some(outcome),
            _ => None,
        })
    }
}

impl SearchObserver for TraceRecorder {
    fn on_rules(&mut self, direction: Direction, rules: &FilteredRuleTable) {
        self.events.push(TraceEvent::Rules {
            direction,
            rules: rules.clone(),
        });
    }

    fn on_pop(&mut self, direction: Direction, state: &SearchState) {
        self.events.push(TraceEvent::Pop {
            direction,
            state: state.clone(),
        });
    }

    fn on_finish(&mut self, outcome: &SearchOutcome) {
        self.events.push(TraceEvent::Finish(outcome.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bidirectional::Termination;
    use abbrev_core::Verdict;
    use abbrev_rules::RuleTable;

    #[test]
    fn recorder_keeps_event_order() {
        let mut recorder = TraceRecorder::new();
        let rules = FilteredRuleTable::filter(&RuleTable::default(), "abc");
        recorder.on_rules(Direction::Forward, &rules);
        recorder.on_pop(Direction::Forward, &SearchState::initial("abc"));
        recorder.on_pop(Direction::Backward, &SearchState::initial("xyz"));
        recorder.on_pop(Direction::Forward, &SearchState::new("a", "bc"));

        assert_eq!(recorder.events().len(), 4);
        let forward: Vec<&str> = recorder
            .pops(Direction::Forward)
            .map(|s| s.remainder())
            .collect();
        assert_eq!(forward, vec!["abc", "bc"]);
        assert_eq!(recorder.pops(Direction::Backward).count(), 1);
        assert!(recorder.rules(Direction::Forward).is_some());
        assert!(recorder.rules(Direction::Backward).is_none());
    }

    #[test]
    fn recorder_reports_outcome() {
        let mut recorder = TraceRecorder::new();
        assert!(recorder.outcome().is_none());
        let outcome = SearchOutcome {
            verdict: Verdict::NoMatch,
            termination: Termination::Exhausted,
            expansions: 3,
        };
        recorder.on_finish(&outcome);
        assert_eq!(recorder.outcome(), Some(&outcome));
    }

    #[test]
    fn noop_observer_accepts_everything() {
        let mut observer = NoopObserver;
        observer.on_pop(Direction::Forward, &SearchState::initial(""));
    }
}
