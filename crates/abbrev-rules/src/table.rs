// RuleCompiler: equivalence classes -> trigger/replacement lookup table.

use abbrev_core::EquivalenceClass;
use hashbrown::HashMap;

use crate::structural::structural_rules;
use crate::{Rule, RuleKind};

/// Mapping from trigger token to the tokens it may be replaced with.
///
/// Every member of every class is a trigger whose replacements are the other
/// members of that class. A token that belongs to several classes gets the
/// union of their replacement sets. Replacement lists are kept sorted, so two
/// tables compiled from the same classes compare equal regardless of class
/// order.
///
/// The fixed structural rules are not stored here; see
/// [`RuleTable::structural`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    rules: HashMap<String, Vec<String>>,
}

impl RuleTable {
    /// Compile a list of classes into a table.
    ///
    /// Triggers whose replacement set stays empty (single-member classes) are
    /// not registered, as they could never fire.
    pub fn compile(classes: &[EquivalenceClass]) -> Self {
        let mut rules: HashMap<String, Vec<String>> = HashMap::new();
        for class in classes {
            for member in class.members() {
                let siblings = class.siblings(member).map(str::to_string);
                rules.entry(member.clone()).or_default().extend(siblings);
            }
        }

        rules.retain(|_, replacements| {
            replacements.sort();
            replacements.dedup();
            !replacements.is_empty()
        });

        Self { rules }
    }

    /// Replacements registered for `trigger`, if any.
    pub fn replacements(&self, trigger: &str) -> Option<&[String]> {
        self.rules.get(trigger).map(Vec::as_slice)
    }

    /// Number of class triggers.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over `(trigger, replacements)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.rules
            .iter()
            .map(|(trigger, replacements)| (trigger.as_str(), replacements.as_slice()))
    }

    /// The class rules as owned [`Rule`]s, sorted by trigger.
    pub fn class_rules(&self) -> Vec<Rule> {
        let mut rules: Vec<Rule> = self
            .iter()
            .map(|(trigger, replacements)| Rule {
                trigger: trigger.to_string(),
                replacements: replacements.to_vec(),
                kind: RuleKind::Class,
            })
            .collect();
        rules.sort_by(|a, b| a.trigger.cmp(&b.trigger));
        rules
    }

    /// The fixed whitespace/hyphen/period rules that accompany every table.
    pub fn structural(&self) -> Vec<Rule> {
        structural_rules()
    }
}
