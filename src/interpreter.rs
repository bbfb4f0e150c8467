/// The evaluator module computes the value of a syntax tree.
///
/// The evaluator walks the tree depth first, evaluates operands before their
/// operators and applies each operator through the decimal arithmetic. It is
/// the core execution engine of the calculator.
///
/// # Responsibilities
/// - Evaluates every node kind.
/// - Applies the configured precision and exponent range to each result.
/// - Reports evaluation errors such as division by zero or undefined powers.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw text and produces numbers, operator symbols and
/// parentheses, skipping whitespace. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Keeps number literals as text so no digits are lost.
/// - Reports the first unrecognized character and its position.
pub mod lexer;
/// The operator table.
///
/// Describes every operator once per position it can appear in: its symbol,
/// precedence, associativity and the operation it performs. The parser looks
/// operators up here; the evaluator dispatches on the operation.
pub mod operators;
/// The parser module builds the syntax tree from tokens.
///
/// The parser processes the token sequence produced by the lexer with
/// precedence climbing and constructs a tree that reflects operator
/// precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into tree nodes.
/// - Validates the grammar, reporting errors with token positions.
/// - Bounds recursion depth and tree height by the configured limit.
pub mod parser;
/// The value module defines the number type expressions evaluate to.
///
/// # Responsibilities
/// - Defines the `Decimal` type and its rounding rules.
/// - Implements the arithmetic behind every operator.
/// - Renders values the way they are printed to the user.
pub mod value;
