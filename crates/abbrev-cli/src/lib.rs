// abbrev-cli: shared utilities for the command-line tools.

use std::io::Write;
use std::process;

use abbrev_core::Direction;
use abbrev_rules::FilteredRuleTable;
use abbrev_search::{SearchObserver, SearchOptions, SearchOutcome, SearchState};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Exit status when the inputs match (or a batch ran to completion).
pub const EXIT_MATCH: i32 = 0;

/// Exit status when the inputs do not match.
pub const EXIT_NO_MATCH: i32 = 1;

/// Exit status for usage errors.
pub const EXIT_USAGE: i32 = 2;

/// Parsed command line of `abbrev-match`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Args {
    pub verbose: bool,
    pub no_prune: bool,
    pub batch: bool,
    pub max_expansions: Option<usize>,
    /// Positional arguments in order.
    pub inputs: Vec<String>,
}

impl Args {
    /// Search options selected by the flags.
    pub fn options(&self) -> SearchOptions {
        let mut options = if self.no_prune {
            SearchOptions::unpruned()
        } else {
            SearchOptions::default()
        };
        options.max_expansions = self.max_expansions;
        options
    }
}

/// Parse `abbrev-match` arguments (program name already stripped).
///
/// A `-v` after the two inputs is accepted as well, so `A B -v` works.
/// Everything after `--` is positional.
pub fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut iter = args.iter();
    let mut positional_only = false;

    while let Some(arg) = iter.next() {
        if positional_only {
            parsed.inputs.push(arg.clone());
            continue;
        }
        match arg.as_str() {
            "--" => positional_only = true,
            "-v" | "--verbose" => parsed.verbose = true,
            "--no-prune" => parsed.no_prune = true,
            "--batch" => parsed.batch = true,
            "--max-expansions" => {
                let Some(value) = iter.next() else {
                    return Err(format!("{arg} requires a value"));
                };
                parsed.max_expansions = Some(parse_count(arg, value)?);
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--max-expansions=") {
                    parsed.max_expansions = Some(parse_count("--max-expansions", value)?);
                } else if arg.starts_with("--") {
                    return Err(format!("unknown option: {arg}"));
                } else {
                    parsed.inputs.push(arg.clone());
                }
            }
        }
    }

    Ok(parsed)
}

fn parse_count(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{flag} expects a non-negative integer, got {value:?}"))
}

/// Split one batch line into its two tab-separated inputs.
///
/// Returns `None` unless the line holds exactly one tab.
pub fn parse_batch_line(line: &str) -> Option<(&str, &str)> {
    let (a, b) = line.split_once('\t')?;
    if b.contains('\t') {
        return None;
    }
    Some((a, b))
}

/// Install the stderr log subscriber: `DEBUG` when verbose, `WARN` otherwise.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: a global tracing subscriber is already installed");
    }
}

/// Observer that writes the verbose trace to a writer (stderr in the CLI).
///
/// Rule tables are printed as `forward rules: {...}` and popped states as
/// `fpop "confirmed" + "remainder" - remaining: N`.
pub struct TraceWriter<W: Write> {
    out: W,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SearchObserver for TraceWriter<W> {
    fn on_rules(&mut self, direction: Direction, rules: &FilteredRuleTable) {
        let _ = writeln!(self.out, "{direction} rules: {rules}");
    }

    fn on_pop(&mut self, direction: Direction, state: &SearchState) {
        let _ = writeln!(
            self.out,
            "{}pop {} - remaining: {}",
            direction.tag(),
            state,
            state.priority()
        );
    }

    fn on_finish(&mut self, outcome: &SearchOutcome) {
        let _ = writeln!(
            self.out,
            "{} after {} expansions ({:?})",
            outcome.verdict, outcome.expansions, outcome.termination
        );
    }
}

/// Print a usage error and exit with [`EXIT_USAGE`].
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(EXIT_USAGE);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_two_inputs() {
        let parsed = parse_args(&args(&["Main St", "Main Street"])).unwrap();
        assert_eq!(parsed.inputs, vec!["Main St", "Main Street"]);
        assert!(!parsed.verbose);
        assert_eq!(parsed.options(), SearchOptions::default());
    }

    #[test]
    fn trailing_v_is_verbose() {
        let parsed = parse_args(&args(&["a", "b", "-v"])).unwrap();
        assert!(parsed.verbose);
        assert_eq!(parsed.inputs.len(), 2);
    }

    #[test]
    fn parses_flags() {
        let parsed =
            parse_args(&args(&["--no-prune", "--max-expansions", "10", "a", "b"])).unwrap();
        assert!(parsed.no_prune);
        let options = parsed.options();
        assert!(!options.prune);
        assert_eq!(options.max_expansions, Some(10));

        let parsed = parse_args(&args(&["--max-expansions=3", "--batch"])).unwrap();
        assert_eq!(parsed.max_expansions, Some(3));
        assert!(parsed.batch);
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(parse_args(&args(&["--max-expansions"])).is_err());
        assert!(parse_args(&args(&["--max-expansions", "many"])).is_err());
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn double_dash_ends_options() {
        let parsed = parse_args(&args(&["--", "--batch", "-v"])).unwrap();
        assert!(!parsed.batch);
        assert!(!parsed.verbose);
        assert_eq!(parsed.inputs, vec!["--batch", "-v"]);
    }

    #[test]
    fn batch_lines_need_one_tab() {
        assert_eq!(parse_batch_line("a\tb"), Some(("a", "b")));
        assert_eq!(parse_batch_line("a\t"), Some(("a", "")));
        assert_eq!(parse_batch_line("a b"), None);
        assert_eq!(parse_batch_line("a\tb\tc"), None);
    }

    #[test]
    fn trace_writer_formats_pops() {
        let mut writer = TraceWriter::new(Vec::new());
        writer.on_pop(Direction::Forward, &SearchState::new("n", " st"));
        writer.on_pop(Direction::Backward, &SearchState::initial("north"));
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            text,
            "fpop \"n\" + \" st\" - remaining: 3\nbpop \"\" + \"north\" - remaining: 5\n"
        );
    }
}
