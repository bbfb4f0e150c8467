use minicalc::{
    CalcError, Config, Decimal, Node, Parser, Token,
    error::ParseError,
    evaluate,
    interpreter::operators::{Fixing, lookup},
    parse, parse_with, tokenize,
};
use pretty_assertions::assert_eq;

fn number(literal: &str) -> Node {
    Node::Number(literal.parse().unwrap())
}

fn infix(symbol: char, left: Node, right: Node) -> Node {
    Node::binary(lookup(symbol, Fixing::Infix).unwrap(), left, right)
}

fn prefix(symbol: char, operand: Node) -> Node {
    Node::unary(lookup(symbol, Fixing::Prefix).unwrap(), operand)
}

fn postfix(symbol: char, operand: Node) -> Node {
    Node::unary(lookup(symbol, Fixing::Postfix).unwrap(), operand)
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Err(CalcError::Parse(e)) => e,
        other => panic!("'{src}' should fail to parse, got {other:?}"),
    }
}

#[test]
fn higher_precedence_nests_deeper() {
    assert_eq!(parse("1 + 2 * 3").unwrap(),
               infix('+', number("1"), infix('*', number("2"), number("3"))));
    assert_eq!(parse("1 * 2 + 3").unwrap(),
               infix('+', infix('*', number("1"), number("2")), number("3")));
}

#[test]
fn left_associative_operators_fold_left() {
    assert_eq!(parse("1 - 2 - 3").unwrap(),
               infix('-', infix('-', number("1"), number("2")), number("3")));
}

#[test]
fn right_associative_operators_fold_right() {
    assert_eq!(parse("2 ^ 3 ^ 4").unwrap(),
               infix('^', number("2"), infix('^', number("3"), number("4"))));
}

#[test]
fn minus_is_negate_in_prefix_position() {
    assert_eq!(parse("-1").unwrap(), prefix('-', number("1")));
    assert_eq!(parse("1 - -1").unwrap(), infix('-', number("1"), prefix('-', number("1"))));
    assert_eq!(parse("(-1)").unwrap(), prefix('-', number("1")));
}

#[test]
fn prefix_operand_excludes_infix_operators() {
    assert_eq!(parse("~2 ^ 2").unwrap(),
               infix('^', prefix('~', number("2")), number("2")));
}

#[test]
fn postfix_wraps_the_prefix_term() {
    assert_eq!(parse("-3!").unwrap(), postfix('!', prefix('-', number("3"))));
    assert_eq!(parse("3! + 1").unwrap(), infix('+', postfix('!', number("3")), number("1")));
    assert_eq!(parse("2 * 3!").unwrap(), infix('*', number("2"), postfix('!', number("3"))));
}

#[test]
fn parentheses_produce_no_nodes() {
    assert_eq!(parse("((((7))))").unwrap(), number("7"));
    assert_eq!(parse("(1 + 2) * 3").unwrap(),
               infix('*', infix('+', number("1"), number("2")), number("3")));
}

#[test]
fn literals_keep_their_digits() {
    let Node::Number(value) = parse("2.50").unwrap() else {
        panic!("expected a number node");
    };
    assert_eq!(value.to_string(), "2.50");
}

#[test]
fn errors_report_token_positions() {
    assert_eq!(parse_error(""), ParseError::EmptyInput);
    assert_eq!(parse_error("   "), ParseError::EmptyInput);
    assert_eq!(parse_error("1 +"), ParseError::UnexpectedEndOfInput { position: 2 });
    assert_eq!(parse_error("("), ParseError::UnexpectedEndOfInput { position: 1 });
    assert_eq!(parse_error("2 * (1 + 2"), ParseError::UnclosedParenthesis { position: 2 });
    assert_eq!(parse_error("(1 2)"), ParseError::UnclosedParenthesis { position: 0 });
    assert_eq!(parse_error("1 + 2)"),
               ParseError::UnexpectedTrailingToken { token:    Token::RightParen,
                                                     position: 3, });
    assert_eq!(parse_error("1 + * 2"),
               ParseError::UnexpectedToken { token:    Token::Symbol('*'),
                                             position: 2, });
    assert_eq!(parse_error("!3"),
               ParseError::UnexpectedToken { token:    Token::Symbol('!'),
                                             position: 0, });
}

#[test]
fn nesting_beyond_the_limit_is_rejected() {
    let config = Config::default().with_max_depth(3).unwrap();

    assert!(parse_with("((1))", &config).is_ok());
    assert!(parse_with("~~1", &config).is_ok());
    assert!(matches!(parse_with("(((1)))", &config),
                     Err(CalcError::Parse(ParseError::NestingTooDeep { limit: 3, .. }))));
    assert!(matches!(parse_with("~~~1", &config),
                     Err(CalcError::Parse(ParseError::NestingTooDeep { limit: 3, .. }))));
}

#[test]
fn default_limit_stops_runaway_nesting() {
    let deep = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert!(matches!(parse(&deep),
                     Err(CalcError::Parse(ParseError::NestingTooDeep { limit: 512, .. }))));

    let negations = format!("{}1", "~".repeat(10_000));
    assert!(matches!(parse(&negations),
                     Err(CalcError::Parse(ParseError::NestingTooDeep { limit: 512, .. }))));

    let shallow = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(parse(&shallow).unwrap(), number("1"));
}

#[test]
fn long_operator_chains_count_towards_the_limit() {
    let config = Config::default().with_max_depth(3).unwrap();

    assert!(parse_with("1 + 2 + 3 + 4", &config).is_ok());
    assert!(parse_with("1!!!", &config).is_ok());
    assert!(matches!(parse_with("1 + 2 + 3 + 4 + 5", &config),
                     Err(CalcError::Parse(ParseError::NestingTooDeep { limit: 3, .. }))));
    assert!(matches!(parse_with("1!!!!", &config),
                     Err(CalcError::Parse(ParseError::NestingTooDeep { limit: 3, .. }))));
    assert!(matches!(parse_with("~(1!!!)", &config),
                     Err(CalcError::Parse(ParseError::NestingTooDeep { limit: 3, .. }))));
}

#[test]
fn default_limit_stops_runaway_chains() {
    let sum = vec!["1"; 100_000].join("+");
    assert!(matches!(parse(&sum),
                     Err(CalcError::Parse(ParseError::NestingTooDeep { limit: 512, .. }))));
    assert!(evaluate(&sum).is_err());

    let factorials = format!("1{}", "!".repeat(200_000));
    assert!(matches!(parse(&factorials),
                     Err(CalcError::Parse(ParseError::NestingTooDeep { limit: 512, .. }))));
    assert!(evaluate(&factorials).is_err());

    let longest = vec!["1"; 513].join("+");
    assert_eq!(evaluate(&longest).unwrap(), Decimal::from(513));
    assert!(evaluate(&vec!["1"; 514].join("+")).is_err());
}

#[test]
fn malformed_number_tokens_are_rejected() {
    let tokens = [Token::Number("1.2.3".to_string())];
    let result = Parser::new(&tokens, &Config::default()).parse();

    assert_eq!(result,
               Err(ParseError::InvalidNumber { literal:  "1.2.3".to_string(),
                                               position: 0, }));
}

#[test]
fn parser_stops_at_the_end_of_the_tokens() {
    let tokens = tokenize("1 + 2").unwrap();
    let tree = Parser::new(&tokens, &Config::default()).parse().unwrap();

    assert_eq!(tree, infix('+', number("1"), number("2")));
}

#[test]
fn canonical_rendering() {
    let cases = [("1 + 2 * 3", "1+(2*3)"),
                 ("(1 + 2) * 3", "(1+2)*3"),
                 ("-(1 + 2)", "-(1+2)"),
                 ("(3)!", "3!"),
                 ("(2 + 1)!", "(2+1)!"),
                 ("-3!", "(-3)!"),
                 ("2 ^ 3 ^ 2", "2^(3^2)"),
                 ("0.000", "0.000")];

    for (src, rendered) in cases {
        let tree = parse(src).unwrap();
        assert_eq!(tree.to_string(), rendered, "rendering '{src}'");
        assert_eq!(parse(rendered).unwrap(), tree, "re-parsing '{rendered}'");
    }
}

#[test]
fn negative_literal_operands_render_in_parentheses() {
    let tree = infix('-', number("2"), number("-5"));
    assert_eq!(tree.to_string(), "2-(-5)");

    let reparsed = parse(&tree.to_string()).unwrap();
    assert_eq!(reparsed, infix('-', number("2"), prefix('-', number("5"))));

    let evaluator = minicalc::Evaluator::default();
    assert_eq!(evaluator.eval(&reparsed).unwrap(), evaluator.eval(&tree).unwrap());
    assert_eq!(postfix('!', number("-3")).to_string(), "(-3)!");
    assert_eq!(number("-3").to_string(), "-3");
}
