//! # minicalc
//!
//! minicalc evaluates arithmetic expressions written as text. It tokenizes the
//! source, builds a syntax tree with a precedence-climbing parser and walks the
//! tree over fixed-precision decimal numbers (28 significant digits by
//! default, rounded half-even).
//!
//! Supported syntax: decimal literals, parentheses, the infix operators
//! `+ - * / % ^ @ $ &` (add, subtract, multiply, divide, modulo, power,
//! average, maximum, minimum), prefix negation with `-` or `~`, and postfix
//! factorial `!`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum that represents an arithmetic
/// expression as a tree. The tree is built by the parser, rendered back to
/// canonical text by its `Display` implementation and consumed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the literal, unary and binary node kinds.
/// - Links operator nodes to their descriptors in the operator table.
/// - Renders trees in a form that parses back to the same tree.
pub mod ast;
/// Evaluation settings.
///
/// Holds the precision, exponent range and nesting limit as an explicit value
/// passed to the parser and evaluator, instead of global state.
pub mod config;
/// Provides unified error types for tokenizing, parsing and evaluation.
///
/// This module defines all errors that can be raised on the way from source
/// text to a value. Each phase has its own enum; `CalcError` wraps them so the
/// pipeline composes with `?`.
///
/// # Responsibilities
/// - Defines error enums for every failure mode (tokenizer, parser, evaluator,
///   configuration).
/// - Attaches positions or operands for context.
/// - Renders lower-case, human readable messages.
pub mod error;
/// Orchestrates the evaluation of expressions.
///
/// This module ties together the operator table, the tokenizer, the parser,
/// the evaluator and the decimal value type.
///
/// # Responsibilities
/// - Coordinates all core components: operators, lexer, parser, evaluator and
///   values.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Tracing targets used by each phase.
pub mod trace_categories;
/// General big-integer helpers.
///
/// This module provides routines shared by the decimal arithmetic and the
/// series expansions: powers of ten, digit counting, half-even division and
/// the factorial size estimate.
pub mod util;

pub use crate::{
    ast::Node,
    config::Config,
    error::CalcError,
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{Token, tokenize},
        parser::core::Parser,
        value::decimal::Decimal,
    },
};

/// Parses `source` into a syntax tree using the default configuration.
///
/// # Errors
/// Returns an error if `source` contains an unrecognized character or does
/// not form a single expression.
///
/// # Examples
/// ```
/// use minicalc::parse;
///
/// let tree = parse("2 ^ 3 ^ 2").unwrap();
/// assert_eq!(tree.to_string(), "2^(3^2)");
///
/// assert!(parse("2 +").is_err());
/// ```
pub fn parse(source: &str) -> Result<Node, CalcError> {
    parse_with(source, &Config::default())
}

/// Parses `source` into a syntax tree, honouring the nesting limit of
/// `config`.
///
/// # Errors
/// Returns an error if tokenizing or parsing fails.
pub fn parse_with(source: &str, config: &Config) -> Result<Node, CalcError> {
    let tokens = tokenize(source)?;
    Ok(Parser::new(&tokens, config).parse()?)
}

/// Evaluates `source` using the default configuration.
///
/// # Errors
/// Returns an error if tokenizing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use minicalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap().to_string(), "14");
/// assert_eq!(evaluate("1 / 3").unwrap().to_string(), "0.3333333333333333333333333333");
/// assert_eq!(evaluate("10 @ 4").unwrap().to_string(), "7");
///
/// // Division by zero is reported, not panicked on.
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Decimal, CalcError> {
    evaluate_with(source, &Config::default())
}

/// Evaluates `source` under `config`.
///
/// # Errors
/// Returns an error if tokenizing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use minicalc::{Config, evaluate_with};
///
/// let config = Config::default().with_precision(5).unwrap();
/// assert_eq!(evaluate_with("2 / 3", &config).unwrap().to_string(), "0.66667");
/// ```
pub fn evaluate_with(source: &str, config: &Config) -> Result<Decimal, CalcError> {
    let tree = parse_with(source, config)?;
    tracing::debug!(target: trace_categories::EVAL, "evaluating {tree}");
    Ok(Evaluator::new(*config).eval(&tree)?)
}
