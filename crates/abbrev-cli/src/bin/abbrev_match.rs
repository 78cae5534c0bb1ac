// abbrev-match: decide whether two strings are equivalent under abbreviation.
//
// Usage:
//   abbrev-match [OPTIONS] A B [-v]
//   abbrev-match --batch [OPTIONS] < pairs.tsv
//
// Prints MATCH or NO MATCH. In batch mode each input line holds two
// tab-separated strings and is answered with "M: a<TAB>b" or "N: a<TAB>b".
//
// Exit status: 0 match (batch: input processed), 1 no match, 2 usage error.
//
// Options:
//   -v, --verbose            Print filtered rule tables and popped states to stderr
//   --no-prune               Disable prefix pruning (diagnostics only)
//   --max-expansions N       Give up after N expansions
//   --batch                  Read tab-separated pairs from stdin
//   -h, --help               Print help

use std::io::{self, BufRead, Write};
use std::process;

use abbrev_cli::{EXIT_MATCH, EXIT_NO_MATCH, TraceWriter};
use abbrev_search::{Matcher, Verdict};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if abbrev_cli::wants_help(&args) {
        println!("abbrev-match: Compare two strings under abbreviation and expansion.");
        println!();
        println!("Usage: abbrev-match [OPTIONS] A B [-v]");
        println!("       abbrev-match --batch [OPTIONS]");
        println!();
        println!("Prints MATCH or NO MATCH and exits with 0 or 1 respectively.");
        println!("With --batch, reads one tab-separated pair per line from stdin.");
        println!();
        println!("Options:");
        println!("  -v, --verbose            Print rule tables and popped states to stderr");
        println!("  --no-prune               Disable prefix pruning (diagnostics only)");
        println!("  --max-expansions N       Give up after N expansions");
        println!("  --batch                  Read tab-separated pairs from stdin");
        println!("  -h, --help               Print this help");
        return;
    }

    let args = abbrev_cli::parse_args(&args).unwrap_or_else(|e| abbrev_cli::fatal(&e));
    abbrev_cli::init_logging(args.verbose);

    let matcher = Matcher::with_default_corpus().with_options(args.options());

    if args.batch {
        if !args.inputs.is_empty() {
            abbrev_cli::fatal("--batch takes no positional arguments");
        }
        run_batch(&matcher, args.verbose);
        process::exit(EXIT_MATCH);
    }

    let verdict = match args.inputs.as_slice() {
        [a, b] => compare(&matcher, a, b, args.verbose),
        inputs => abbrev_cli::fatal(&format!(
            "expected exactly two strings to compare, got {}",
            inputs.len()
        )),
    };

    println!("{verdict}");
    process::exit(if verdict.is_match() {
        EXIT_MATCH
    } else {
        EXIT_NO_MATCH
    });
}

fn compare(matcher: &Matcher, a: &str, b: &str, verbose: bool) -> Verdict {
    if verbose {
        let mut tracer = TraceWriter::new(io::stderr());
        matcher.compare_traced(a, b, &mut tracer).verdict
    } else {
        matcher.compare(a, b)
    }
}

fn run_batch(matcher: &Matcher, verbose: bool) {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let stdin = io::stdin();
    for (number, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some((a, b)) = abbrev_cli::parse_batch_line(&line) else {
            eprintln!("line {}: expected two tab-separated strings", number + 1);
            continue;
        };
        let tag = if compare(matcher, a, b, verbose).is_match() {
            'M'
        } else {
            'N'
        };
        let _ = writeln!(out, "{tag}: {a}\t{b}");
    }
    let _ = out.flush();
}
