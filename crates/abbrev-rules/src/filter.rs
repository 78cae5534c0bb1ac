// RuleFilter: restrict a rule table to one search direction's input.
//
// Rewriting only ever consumes text from the front of the untouched
// remainder, and the remainder is always a suffix of the starting string
// (possibly behind one re-inserted space). A class trigger can therefore only
// fire if it occurs in the starting string, so dropping every other trigger
// shrinks the branching factor without changing reachability.

use std::fmt;

use abbrev_core::case::fold;

use crate::table::RuleTable;
use crate::{Rule, RuleKind};

/// A rule table restricted to the triggers occurring in one starting string,
/// plus the structural rules.
///
/// Class rules come first, longest trigger first (ties broken
/// alphabetically), followed by the structural rules. The order only
/// affects which states are explored first, never the verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredRuleTable {
    rules: Vec<Rule>,
}

impl FilteredRuleTable {
    /// Keep the entries of `table` whose trigger is a literal substring of
    /// `text` (compared in folded form), then append the structural rules.
    pub fn filter(table: &RuleTable, text: &str) -> Self {
        let text = fold(text);

        let mut rules: Vec<Rule> = table
            .iter()
            .filter(|(trigger, _)| text.contains(*trigger))
            .map(|(trigger, replacements)| Rule {
                trigger: trigger.to_string(),
                replacements: replacements.to_vec(),
                kind: RuleKind::Class,
            })
            .collect();
        rules.sort_by(|a, b| {
            b.trigger
                .len()
                .cmp(&a.trigger.len())
                .then_with(|| a.trigger.cmp(&b.trigger))
        });

        rules.extend(table.structural());
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of class (non-structural) rules that survived filtering.
    pub fn class_rule_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|r| r.kind == RuleKind::Class)
            .count()
    }

    /// Look up a rule by trigger and kind.
    pub fn get(&self, trigger: &str, kind: RuleKind) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|r| r.kind == kind && r.trigger == trigger)
    }
}

impl<'a> IntoIterator for &'a FilteredRuleTable {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Renders as `{"trigger": ["a", "b"], ...}` for diagnostic traces.
impl fmt::Display for FilteredRuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: [", rule.trigger)?;
            for (j, replacement) in rule.replacements.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{replacement:?}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("}")
    }
}
