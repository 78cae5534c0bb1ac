// One directional best-first search: rewrite `start` until it spells `goal`.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use abbrev_core::Direction;
use abbrev_rules::{FilteredRuleTable, RuleKind, RuleTable};
use hashbrown::HashSet;

use crate::observer::SearchObserver;
use crate::options::SearchOptions;
use crate::state::SearchState;

/// Result of one expansion step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// A generated state spells the goal.
    Found(SearchState),
    /// A state was expanded without reaching the goal.
    Continue,
    /// The frontier was already empty; nothing was expanded.
    Exhausted,
}

/// Best-first search from one input string towards the other.
///
/// The frontier is a min-heap keyed on remainder length, ties broken by
/// insertion order. Every state ever accepted is recorded in the visited set
/// and never enqueued twice, which rules out cycles such as
/// "north" -> "n" -> "north".
pub struct DirectionalSearch {
    direction: Direction,
    goal: String,
    rules: FilteredRuleTable,
    options: SearchOptions,
    frontier: BinaryHeap<Reverse<(usize, u64, SearchState)>>,
    visited: HashSet<SearchState>,
    /// Insertion counter for FIFO tie-breaking.
    sequence: u64,
    expansions: usize,
}

impl DirectionalSearch {
    /// Set up a search from `start` to `goal`, both already folded.
    ///
    /// The rule table is filtered against `start`, so each direction gets
    /// its own filtered table.
    pub fn new(
        direction: Direction,
        table: &RuleTable,
        start: &str,
        goal: &str,
        options: SearchOptions,
    ) -> Self {
        let mut search = Self {
            direction,
            goal: goal.to_string(),
            rules: FilteredRuleTable::filter(table, start),
            options,
            frontier: BinaryHeap::new(),
            visited: HashSet::new(),
            sequence: 0,
            expansions: 0,
        };
        let initial = SearchState::initial(start);
        search.visited.insert(initial.clone());
        search.push(initial);
        search
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn rules(&self) -> &FilteredRuleTable {
        &self.rules
    }

    /// Number of states expanded so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Pop the most promising state and apply every rule to it once.
    pub fn expand(&mut self, observer: &mut dyn SearchObserver) -> Expansion {
        let Some(Reverse((priority, _, state))) = self.frontier.pop() else {
            return Expansion::Exhausted;
        };
        self.expansions += 1;
        observer.on_pop(self.direction, &state);
        tracing::trace!(
            direction = %self.direction,
            confirmed = state.confirmed(),
            remainder = state.remainder(),
            priority,
            "pop"
        );
        if state.spells(&self.goal) {
            return Expansion::Found(state);
        }

        for child in self.successors(&state) {
            if self.options.prune && !child.is_consistent_with(&self.goal) {
                continue;
            }
            if child.spells(&self.goal) {
                return Expansion::Found(child);
            }
            if self.visited.insert(child.clone()) {
                self.push(child);
            }
        }
        Expansion::Continue
    }

    /// Every state reachable from `state` by firing one rule at the first
    /// occurrence of its trigger, including the sibling states enabled by
    /// the options.
    fn successors(&self, state: &SearchState) -> Vec<SearchState> {
        let mut successors = Vec::new();
        for rule in &self.rules {
            let Some((before, after)) = state.split_once(&rule.trigger) else {
                continue;
            };
            let suffixes: &[&str] =
                if self.options.abbreviation_period && rule.kind == RuleKind::Class {
                    &["", "."]
                } else {
                    &[""]
                };
            let insert_space = self.options.space_insertion && !rule.is_space_rule();

            for replacement in &rule.replacements {
                for suffix in suffixes {
                    let child = state.rewrite(before, replacement, suffix, after);
                    if insert_space {
                        let spaced = child.with_leading_space();
                        successors.push(child);
                        successors.push(spaced);
                    } else {
                        successors.push(child);
                    }
                }
            }
        }
        successors
    }

    fn push(&mut self, state: SearchState) {
        let priority = state.priority();
        self.frontier.push(Reverse((priority, self.sequence, state)));
        self.sequence += 1;
    }
}
