// Fixed whitespace and punctuation elasticity rules.
//
// These are always part of a filtered rule table, whatever the input text,
// because they describe formatting differences rather than vocabulary.

use crate::{Rule, RuleKind};

pub const SPACE: &str = " ";
pub const HYPHEN: &str = "-";
pub const PERIOD: &str = ".";

/// Trigger -> replacements for every structural rule.
///
/// - a space may disappear, or become a hyphen, a period, or "period space"
/// - a hyphen may become a space
/// - a period may disappear or become a space
const STRUCTURAL_RULES: &[(&str, &[&str])] = &[
    (SPACE, &["", "-", ".", ". "]),
    (HYPHEN, &[" "]),
    (PERIOD, &["", " "]),
];

/// Build the structural rules.
pub fn structural_rules() -> Vec<Rule> {
    STRUCTURAL_RULES
        .iter()
        .map(|(trigger, replacements)| {
            let mut replacements: Vec<String> =
                replacements.iter().map(|r| r.to_string()).collect();
            replacements.sort();
            Rule {
                trigger: trigger.to_string(),
                replacements,
                kind: RuleKind::Structural,
            }
        })
        .collect()
}
