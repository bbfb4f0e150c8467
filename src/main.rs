use std::{
    collections::HashSet,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use minicalc::{
    Config, Evaluator,
    config::{DEFAULT_MAX_DEPTH, DEFAULT_PRECISION},
    error::ConfigError,
    parse_with, trace_categories,
};
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Phase whose trace output can be enabled from the command line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, clap::ValueEnum)]
enum TraceEvent {
    /// Traces splitting the input into tokens.
    Tokenize,
    /// Traces building the syntax tree.
    Parse,
    /// Traces every operator application.
    Eval,
}

impl TraceEvent {
    const fn target(self) -> &'static str {
        match self {
            Self::Tokenize => trace_categories::TOKENIZE,
            Self::Parse => trace_categories::PARSE,
            Self::Eval => trace_categories::EVAL,
        }
    }
}

/// minicalc evaluates arithmetic expressions over 28-digit decimals.
///
/// Operators, loosest first: `+ -`, `* / %`, `^` (right-associative),
/// `@ $ &` (average, maximum, minimum), prefix `- ~` and postfix `!`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of significant digits kept by every result.
    #[arg(short, long, env = "MINICALC_PRECISION", default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Deepest nesting of parentheses and operators accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print trace output for a phase to stderr; may be repeated.
    #[arg(long = "log-enable", value_enum, value_name = "PHASE")]
    enabled_trace_events: Vec<TraceEvent>,

    /// Print the parsed expression in canonical form before its value.
    #[arg(long)]
    tree: bool,

    /// Expression to evaluate. Without it, expressions are read from standard
    /// input, one per line.
    expression: Option<String>,
}

impl Args {
    fn config(&self) -> Result<Config, ConfigError> {
        Config::default().with_precision(self.precision)?
                         .with_max_depth(self.max_depth)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.enabled_trace_events);

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        },
    };

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let outcome = match &args.expression {
        Some(expression) => evaluate_line(expression, &config, args.tree, &mut out, &mut err),
        None => run_lines(io::stdin().lock(), &config, args.tree, &mut out, &mut err).map(|()| true),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Evaluates every non-empty line of `input`, writing one result to `out` or
/// one error to `err` per line.
///
/// # Errors
/// Returns the first failure to read `input` or to write the output; an
/// expression that fails to evaluate does not stop the loop.
fn run_lines(input: impl BufRead,
             config: &Config,
             show_tree: bool,
             out: &mut impl Write,
             err: &mut impl Write)
             -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        evaluate_line(&line, config, show_tree, out, err)?;
    }
    Ok(())
}

/// Evaluates `source` with surrounding whitespace trimmed. With `show_tree`,
/// the canonical rendering of the parsed tree is written before the value.
///
/// # Returns
/// `true` when a value was written to `out`, `false` when an error was written
/// to `err`.
fn evaluate_line(source: &str,
                 config: &Config,
                 show_tree: bool,
                 out: &mut impl Write,
                 err: &mut impl Write)
                 -> io::Result<bool> {
    let tree = match parse_with(source.trim(), config) {
        Ok(tree) => tree,
        Err(e) => {
            writeln!(err, "error: {e}")?;
            return Ok(false);
        },
    };
    if show_tree {
        writeln!(out, "{tree}")?;
    }

    match Evaluator::new(*config).eval(&tree) {
        Ok(value) => {
            writeln!(out, "{value}")?;
            Ok(true)
        },
        Err(e) => {
            writeln!(err, "error: {e}")?;
            Ok(false)
        },
    }
}

fn init_tracing(enabled_trace_events: &[TraceEvent]) {
    let mut filter = tracing_subscriber::filter::Targets::new()
        .with_default(tracing_subscriber::filter::LevelFilter::WARN);

    let enabled: HashSet<TraceEvent> = enabled_trace_events.iter().copied().collect();
    filter = filter.with_targets(enabled.into_iter()
                                        .map(|event| (event.target(), tracing::Level::TRACE)));

    let stderr_log_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_filter(filter);

    if let Err(e) = tracing_subscriber::registry().with(stderr_log_layer).try_init() {
        eprintln!("warning: failed to initialize tracing: {e}");
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use pretty_assertions::assert_eq;

    use super::*;

    fn run(input: &str, show_tree: bool) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        run_lines(Cursor::new(input), &Config::default(), show_tree, &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn line_mode_prints_one_result_per_line() {
        let (out, err) = run("1 + 2\n\n   \n 2 * 3 \n10 @ 4", false);

        assert_eq!(out, "3\n6\n7\n");
        assert_eq!(err, "");
    }

    #[test]
    fn line_mode_continues_after_errors() {
        let (out, err) = run("1 / 0\n4 - 1\n2 # 3\n", false);

        assert_eq!(out, "3\n");
        assert_eq!(err,
                   "error: division by zero applying '/' to 1\n\
                    error: unrecognized character '#' at position 2\n");
    }

    #[test]
    fn tree_is_printed_before_the_value() {
        let (out, _) = run("1 + 2 * 3\n(3)!\n", true);

        assert_eq!(out, "1+(2*3)\n7\n3!\n6\n");
    }

    #[test]
    fn single_expression_reports_success() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        assert!(evaluate_line("  2 ^ 10 ", &Config::default(), false, &mut out, &mut err).unwrap());
        assert!(!evaluate_line("2 +", &Config::default(), false, &mut out, &mut err).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), "1024\n");
        assert_eq!(String::from_utf8(err).unwrap(),
                   "error: unexpected end of input at position 2\n");
    }

    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disconnected"))
        }
    }

    #[test]
    fn read_failures_stop_line_mode() {
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let result = run_lines(io::BufReader::new(BrokenInput),
                               &Config::default(),
                               false,
                               &mut out,
                               &mut err);

        assert_eq!(result.unwrap_err().to_string(), "disconnected");
    }

    #[test]
    fn arguments_map_onto_the_configuration() {
        let args = Args::try_parse_from(["minicalc", "-p", "5", "--max-depth", "7", "--tree", "2 / 3"])
            .unwrap();
        let config = args.config().unwrap();

        assert_eq!(config.precision(), 5);
        assert_eq!(config.max_depth(), 7);
        assert!(args.tree);
        assert_eq!(args.expression.as_deref(), Some("2 / 3"));

        let args = Args::try_parse_from(["minicalc", "--precision", "0"]).unwrap();
        assert_eq!(args.config(), Err(ConfigError::InvalidPrecision { precision: 0 }));
    }

    #[test]
    fn trace_phases_are_parsed() {
        let args = Args::try_parse_from(["minicalc", "--log-enable", "parse", "--log-enable", "eval"])
            .unwrap();

        assert_eq!(args.enabled_trace_events, [TraceEvent::Parse, TraceEvent::Eval]);
        assert_eq!(TraceEvent::Tokenize.target(), trace_categories::TOKENIZE);
    }
}
