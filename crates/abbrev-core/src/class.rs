// Equivalence classes: ordered sets of mutually interchangeable tokens.

use crate::case::fold;
use crate::error::AbbrevError;

/// An ordered set of case-folded tokens considered interchangeable, such as
/// `{"street", "st"}`.
///
/// Members are folded on construction and duplicates are dropped while
/// keeping first-seen order. The same literal token may appear in several
/// classes ("st" abbreviates both "street" and "sankt"); that ambiguity is
/// intentional and resolved by the search, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EquivalenceClass {
    members: Vec<String>,
}

impl EquivalenceClass {
    /// Build a class from its members.
    ///
    /// Members are folded and trimmed. `index` is only used to label the
    /// error when a member ends up empty; an empty trigger would match
    /// everywhere without consuming any input.
    pub fn new<I, S>(index: usize, members: I) -> Result<Self, AbbrevError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut folded: Vec<String> = Vec::new();
        for member in members {
            let token = fold(member.as_ref()).trim().to_string();
            if token.is_empty() {
                return Err(AbbrevError::EmptyToken { class: index });
            }
            if !folded.contains(&token) {
                folded.push(token);
            }
        }
        Ok(Self { members: folded })
    }

    /// Build a list of classes from nested string slices, labelling errors
    /// by position.
    pub fn from_lists<L, S>(lists: &[L]) -> Result<Vec<Self>, AbbrevError>
    where
        L: AsRef<[S]>,
        S: AsRef<str>,
    {
        lists
            .iter()
            .enumerate()
            .map(|(i, list)| Self::new(i, list.as_ref()))
            .collect()
    }

    /// The members in first-seen order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.members.iter().any(|m| m == token)
    }

    /// Every member except `token` itself.
    pub fn siblings<'a>(&'a self, token: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.members
            .iter()
            .map(String::as_str)
            .filter(move |m| *m != token)
    }
}
