/// Error type shared by the abbreviation matching crates.
///
/// A failed match is not an error; it is [`Verdict::NoMatch`](crate::Verdict).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbbrevError {
    /// The entry point received the wrong number of strings to compare.
    #[error("expected {expected} strings to compare, got {actual}")]
    Usage { expected: usize, actual: usize },

    /// A corpus class contains a token that folds to the empty string.
    #[error("equivalence class {class} contains an empty token")]
    EmptyToken { class: usize },
}
