//! Tracing targets, one per evaluation phase.

/// Trace category for tokenizing source text.
pub const TOKENIZE: &str = "tokenize";
/// Trace category for building the syntax tree.
pub const PARSE: &str = "parse";
/// Trace category for evaluating the syntax tree.
pub const EVAL: &str = "eval";
