// Parallel driver: both directions on separate rayon workers.
//
// The directions share nothing but a stop flag and the expansion counter.
// Observers are not supported here; use `Matcher::compare_traced` for
// diagnostics.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use abbrev_core::Direction;
use abbrev_core::case::fold;

use crate::bidirectional::{SearchOutcome, Termination};
use crate::direction::{DirectionalSearch, Expansion};
use crate::matcher::Matcher;
use crate::observer::NoopObserver;

/// Per-direction result of a parallel run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finish {
    Found,
    Exhausted,
    /// Stopped by the other direction or by the cap.
    Stopped,
}

struct Shared {
    stop: AtomicBool,
    expansions: AtomicUsize,
    abandoned: AtomicBool,
    max_expansions: Option<usize>,
}

impl Matcher {
    /// Like [`compare`](Matcher::compare), but runs the forward and backward
    /// searches concurrently. The first direction to reach its goal stops the
    /// other one.
    pub fn compare_parallel(&self, a: &str, b: &str) -> SearchOutcome {
        let (a, b) = (fold(a), fold(b));
        if a == b {
            return SearchOutcome::new(Termination::Identical, 0);
        }

        let options = self.options();
        let forward = DirectionalSearch::new(Direction::Forward, self.table(), &a, &b, options);
        let backward = DirectionalSearch::new(Direction::Backward, self.table(), &b, &a, options);
        let shared = Shared {
            stop: AtomicBool::new(false),
            expansions: AtomicUsize::new(0),
            abandoned: AtomicBool::new(false),
            max_expansions: options.max_expansions,
        };

        let (fwd, bwd) = rayon::join(|| drive(forward, &shared), || drive(backward, &shared));
        let expansions = shared.expansions.load(Ordering::Relaxed);

        let termination = match (fwd, bwd) {
            (Finish::Found, _) => Termination::Found(Direction::Forward),
            (_, Finish::Found) => Termination::Found(Direction::Backward),
            _ if shared.abandoned.load(Ordering::Relaxed) => Termination::Abandoned,
            _ => Termination::Exhausted,
        };
        tracing::debug!(?termination, expansions, "parallel search finished");
        SearchOutcome::new(termination, expansions)
    }
}

fn drive(mut search: DirectionalSearch, shared: &Shared) -> Finish {
    let mut observer = NoopObserver;
    loop {
        if shared.stop.load(Ordering::Acquire) {
            return Finish::Stopped;
        }
        if let Some(max) = shared.max_expansions {
            if shared.expansions.fetch_add(1, Ordering::AcqRel) >= max {
                shared.expansions.fetch_sub(1, Ordering::AcqRel);
                shared.abandoned.store(true, Ordering::Relaxed);
                shared.stop.store(true, Ordering::Release);
                return Finish::Stopped;
            }
        } else {
            shared.expansions.fetch_add(1, Ordering::AcqRel);
        }

        match search.expand(&mut observer) {
            Expansion::Found(_) => {
                shared.stop.store(true, Ordering::Release);
                return Finish::Found;
            }
            Expansion::Continue => {}
            Expansion::Exhausted => {
                // the counter was bumped for a pop that never happened
                shared.expansions.fetch_sub(1, Ordering::AcqRel);
                return Finish::Exhausted;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SearchOptions;
    use abbrev_core::{EquivalenceClass, Verdict};

    fn small() -> Matcher {
        let classes =
            EquivalenceClass::from_lists(&[&["street", "st"][..], &["north", "n"][..]]).unwrap();
        Matcher::from_classes(&classes)
    }

    #[test]
    fn parallel_agrees_with_sequential() {
        let m = small();
        for (a, b) in [
            ("123 North Street", "123 N St"),
            ("123 North Street", "123 North Boulevard"),
            ("Main St.", "Main Street"),
            ("", ""),
        ] {
            assert_eq!(m.compare_parallel(a, b).verdict, m.compare(a, b), "{a} / {b}");
        }
    }

    #[test]
    fn identical_inputs_short_circuit() {
        let outcome = small().compare_parallel("Main St", "main st");
        assert_eq!(outcome.termination, Termination::Identical);
        assert_eq!(outcome.expansions, 0);
    }

    #[test]
    fn cap_abandons_parallel_search() {
        let m = small().with_options(SearchOptions::default().with_max_expansions(1));
        let outcome = m.compare_parallel("n st", "north street");
        assert_eq!(outcome.verdict, Verdict::NoMatch);
        assert_eq!(outcome.termination, Termination::Abandoned);
        assert!(outcome.expansions <= 1);
    }
}
