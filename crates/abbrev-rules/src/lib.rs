//! Rewrite rules for abbreviation-aware string equivalence.
//!
//! # Architecture
//!
//! - [`table`] -- RuleCompiler: flattens equivalence classes into a
//!   trigger -> replacements lookup table
//! - [`structural`] -- fixed whitespace/hyphen/period elasticity rules
//! - [`filter`] -- RuleFilter: restricts a table to the triggers present in
//!   one search direction's starting string
//! - [`corpus`] -- the built-in street-name corpus, compiled once per process

pub mod corpus;
pub mod filter;
pub mod structural;
pub mod table;

pub use filter::FilteredRuleTable;
pub use table::RuleTable;

/// Where a rule comes from. The search engine treats the two kinds slightly
/// differently when generating sibling states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Compiled from an equivalence class.
    Class,
    /// One of the fixed whitespace/punctuation elasticity rules.
    Structural,
}

/// A single rewrite rule: every occurrence-split on `trigger` may be
/// replaced by any of `replacements`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub trigger: String,
    /// Sorted and de-duplicated.
    pub replacements: Vec<String>,
    pub kind: RuleKind,
}

impl Rule {
    /// Returns `true` for the structural rule triggered by a single space.
    pub fn is_space_rule(&self) -> bool {
        self.kind == RuleKind::Structural && self.trigger == structural::SPACE
    }
}
