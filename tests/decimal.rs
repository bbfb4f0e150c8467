use minicalc::{
    Config, Decimal,
    config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_EXPONENT, DEFAULT_PRECISION, MAX_EXPONENT_LIMIT, MAX_PRECISION},
    error::ConfigError,
    interpreter::value::decimal::ArithmeticError,
    util::num::FACTORIAL_OPERAND_LIMIT,
};
use num_bigint::BigInt;
use pretty_assertions::assert_eq;

fn dec(literal: &str) -> Decimal {
    literal.parse()
           .unwrap_or_else(|e| panic!("'{literal}' should parse: {e}"))
}

#[test]
fn display_switches_to_scientific_notation() {
    let cases = [(Decimal::new(123, 0), "123"),
                 (Decimal::new(-123, -1), "-12.3"),
                 (Decimal::new(123, 1), "1.23E+3"),
                 (Decimal::new(123, -10), "1.23E-8"),
                 (Decimal::new(1, -6), "0.000001"),
                 (Decimal::new(1, -7), "1E-7"),
                 (Decimal::new(0, 0), "0"),
                 (Decimal::new(0, -2), "0.00"),
                 (Decimal::new(0, 2), "0E+2"),
                 (Decimal::new(5, 2), "5E+2")];

    for (value, expected) in cases {
        assert_eq!(value.to_string(), expected);
    }
}

#[test]
fn literals_parse_exactly() {
    assert_eq!(dec("2.50").coefficient(), &BigInt::from(250));
    assert_eq!(dec("2.50").exponent(), -2);
    assert_eq!(dec("-0.001").to_string(), "-0.001");
    assert_eq!(dec("+7").to_string(), "7");
    assert_eq!(dec("000123.4500").to_string(), "123.4500");
}

#[test]
fn malformed_literals_are_rejected() {
    for literal in ["", ".5", "5.", "1.2.3", "1e5", "--1", "1_000", " 1"] {
        let error = literal.parse::<Decimal>().unwrap_err();
        assert_eq!(error.literal, literal);
    }
}

#[test]
fn equality_ignores_trailing_zeros() {
    assert_eq!(dec("2.50"), dec("2.5"));
    assert_eq!(dec("0"), dec("-0.000"));
    assert_eq!(Decimal::new(1, 2), Decimal::from(100));
    assert_ne!(dec("2.5"), dec("2.05"));
}

#[test]
fn ordering_follows_numeric_value() {
    let mut values = vec![dec("3"), dec("-1.5"), dec("0.25"), dec("-10"), dec("0"), dec("2.9999")];
    values.sort();

    let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["-10", "-1.5", "0", "0.25", "2.9999", "3"]);
    assert!(Decimal::new(1, 5) > Decimal::new(99_999, 0));
}

#[test]
fn integral_queries() {
    assert!(dec("4.000").is_integer());
    assert!(!dec("0.5").is_integer());
    assert_eq!(dec("4.000").to_integer(), Some(BigInt::from(4)));
    assert_eq!(dec("-12").to_integer(), Some(BigInt::from(-12)));
    assert_eq!(dec("-12").to_u64(), None);
    assert_eq!(Decimal::new(3, 2).to_u64(), Some(300));
}

#[test]
fn rounding_is_half_even() {
    let config = Config::default().with_precision(3).unwrap();

    assert_eq!(dec("1.245").round(&config).unwrap().to_string(), "1.24");
    assert_eq!(dec("1.255").round(&config).unwrap().to_string(), "1.26");
    assert_eq!(dec("1.2451").round(&config).unwrap().to_string(), "1.25");
    assert_eq!(dec("-1.235").round(&config).unwrap().to_string(), "-1.24");
    assert_eq!(dec("999.5").round(&config).unwrap().to_string(), "1.00E+3");
    assert_eq!(dec("1.5").round(&config).unwrap().to_string(), "1.5");
}

#[test]
fn exponent_range_is_enforced() {
    let config = Config::default().with_max_exponent(10).unwrap();

    assert_eq!(Decimal::new(1, 11).round(&config), Err(ArithmeticError::Overflow));
    assert_eq!(Decimal::new(1, 10).round(&config).unwrap().to_string(), "1E+10");
    assert!(Decimal::new(1, -11).round(&config).unwrap().is_zero());
    assert_eq!(Decimal::new(1, -10).round(&config).unwrap().to_string(), "1E-10");
}

#[test]
fn arithmetic_keeps_exact_exponents() {
    let config = Config::default();

    assert_eq!(dec("1.5").add(&dec("1.5"), &config).unwrap().to_string(), "3.0");
    assert_eq!(dec("1.30").sub(&dec("1.2"), &config).unwrap().to_string(), "0.10");
    assert_eq!(dec("1.5").mul(&dec("2"), &config).unwrap().to_string(), "3.0");
    assert_eq!(dec("1").div(&dec("8"), &config).unwrap().to_string(), "0.125");
    assert_eq!(dec("7.5").rem(&dec("2"), &config).unwrap().to_string(), "1.5");
}

#[test]
fn addition_of_distant_magnitudes_rounds_correctly() {
    let config = Config::default().with_precision(5).unwrap();

    assert_eq!(Decimal::new(1, 20).add(&dec("0.001"), &config).unwrap().to_string(),
               "1.0000E+20");
    assert_eq!(Decimal::new(12_345, 0).add(&Decimal::new(5, -1), &config).unwrap().to_string(),
               "12346");
    assert_eq!(Decimal::new(12_345, 0).add(&Decimal::new(50_001, -5), &config)
                                       .unwrap()
                                       .to_string(),
               "12346");
}

#[test]
fn division_errors() {
    let config = Config::default();

    assert_eq!(dec("1").div(&dec("0"), &config), Err(ArithmeticError::DivisionByZero));
    assert_eq!(dec("0").div(&dec("0.0"), &config), Err(ArithmeticError::DivisionByZero));
    assert_eq!(dec("1").rem(&dec("0"), &config), Err(ArithmeticError::DivisionByZero));
}

#[test]
fn integral_powers() {
    let config = Config::default();
    let pow = |base: &str, exponent: &str| dec(base).pow(&dec(exponent), &config);

    assert_eq!(pow("2", "10").unwrap().to_string(), "1024");
    assert_eq!(pow("1.5", "2").unwrap().to_string(), "2.25");
    assert_eq!(pow("2", "-2").unwrap().to_string(), "0.25");
    assert_eq!(pow("-3", "3").unwrap().to_string(), "-27");
    assert_eq!(pow("7", "0").unwrap(), Decimal::one());
    assert_eq!(pow("0", "5").unwrap(), Decimal::zero());
    assert_eq!(pow("0", "0"), Err(ArithmeticError::Undefined));
    assert_eq!(pow("0", "-1"), Err(ArithmeticError::DivisionByZero));
    assert_eq!(pow("-8", "0.5"), Err(ArithmeticError::Undefined));
    assert_eq!(pow("10", "1000000"), Err(ArithmeticError::Overflow));
    assert!(pow("10", "-1000000").unwrap().is_zero());
}

#[test]
fn factorials() {
    let config = Config::default();

    assert_eq!(Decimal::factorial(0, &config).unwrap(), Decimal::one());
    assert_eq!(Decimal::factorial(1, &config).unwrap(), Decimal::one());
    assert_eq!(Decimal::factorial(10, &config).unwrap().to_string(), "3628800");
    assert_eq!(Decimal::factorial(u64::MAX, &config), Err(ArithmeticError::Overflow));
}

#[test]
fn factorial_operands_are_capped_under_a_wide_exponent_range() {
    let config = Config::default().with_max_exponent(MAX_EXPONENT_LIMIT).unwrap();

    assert_eq!(Decimal::factorial(10_000_000_000, &config), Err(ArithmeticError::Overflow));
    assert_eq!(Decimal::factorial(FACTORIAL_OPERAND_LIMIT + 1, &config),
               Err(ArithmeticError::Overflow));
    assert_eq!(Decimal::factorial(20, &config).unwrap().to_string(), "2432902008176640000");
}

#[test]
fn negation_flips_the_sign_only() {
    assert_eq!((-dec("2.50")).to_string(), "-2.50");
    assert_eq!((-&dec("-3")).to_string(), "3");
    assert_eq!((-Decimal::zero()).to_string(), "0");
}

#[test]
fn default_config() {
    let config = Config::default();

    assert_eq!(config, Config::new());
    assert_eq!(config.precision(), DEFAULT_PRECISION);
    assert_eq!(config.max_exponent(), DEFAULT_MAX_EXPONENT);
    assert_eq!(config.max_depth(), DEFAULT_MAX_DEPTH);
}

#[test]
fn config_rejects_out_of_range_settings() {
    let config = Config::default();

    assert_eq!(config.with_precision(0), Err(ConfigError::InvalidPrecision { precision: 0 }));
    assert_eq!(config.with_precision(MAX_PRECISION + 1),
               Err(ConfigError::InvalidPrecision { precision: MAX_PRECISION + 1 }));
    assert_eq!(config.with_max_exponent(0),
               Err(ConfigError::InvalidMaxExponent { max_exponent: 0 }));
    assert_eq!(config.with_max_depth(0), Err(ConfigError::InvalidMaxDepth));
    assert_eq!(config.with_precision(50).unwrap().precision(), 50);
    assert_eq!(ConfigError::InvalidMaxDepth.to_string(), "maximum nesting depth must be at least 1");
}
