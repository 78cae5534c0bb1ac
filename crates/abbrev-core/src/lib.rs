//! Shared vocabulary for abbreviation-aware string equivalence.
//!
//! - [`case`] -- case folding used for every token and input string
//! - [`class`] -- equivalence classes of interchangeable tokens
//! - [`enums`] -- verdicts and search directions
//! - [`error`] -- the crate family's error type

pub mod case;
pub mod class;
pub mod enums;
pub mod error;

pub use class::EquivalenceClass;
pub use enums::{Direction, Verdict};
pub use error::AbbrevError;
