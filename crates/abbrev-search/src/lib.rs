//! Rule-driven equivalence search.
//!
//! Decides whether two strings can be rewritten into each other using the
//! rules compiled by `abbrev-rules`. Each direction runs a best-first search
//! over `(confirmed prefix, remainder)` states; the two directions alternate
//! one expansion at a time and the first success decides the match.
//!
//! # Architecture
//!
//! - [`state`] -- immutable search states and their rewrite step
//! - [`options`] -- search switches (pruning, sibling states, expansion cap)
//! - [`direction`] -- one directional best-first search
//! - [`bidirectional`] -- alternating driver and search outcomes
//! - [`observer`] -- diagnostic hooks (filtered rule tables, popped states)
//! - [`matcher`] -- the `Matcher` handle owning the shared rule table
//! - `parallel` (feature `parallel`) -- both directions on rayon workers

pub mod bidirectional;
pub mod direction;
pub mod matcher;
pub mod observer;
pub mod options;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod state;

pub use abbrev_core::{AbbrevError, Direction, Verdict};
pub use bidirectional::{BidirectionalSearch, SearchOutcome, Step, Termination};
pub use direction::{DirectionalSearch, Expansion};
pub use matcher::Matcher;
pub use observer::{NoopObserver, SearchObserver, TraceEvent, TraceRecorder};
pub use options::SearchOptions;
pub use state::SearchState;
