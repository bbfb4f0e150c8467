use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::{
    config::Config,
    interpreter::value::decimal::{ArithmeticError, Decimal},
    util::num::{digit_count, divide_half_even, pow10},
};

/// Extra digits carried through the series beyond the requested precision.
const GUARD_DIGITS: i64 = 12;

/// Computes `base^exponent` for a positive base and a non-integral exponent
/// as `exp(exponent × ln base)`.
///
/// All intermediate values are fixed-point big integers scaled by
/// `10^working`, where `working` covers the precision, the guard digits and
/// the integer digits of `exponent × ln base`.
///
/// # Errors
/// Returns [`ArithmeticError::Overflow`] when the result leaves the exponent
/// range.
pub(crate) fn pow_fractional(base: &Decimal,
                             exponent: &Decimal,
                             config: &Config)
                             -> Result<Decimal, ArithmeticError> {
    let direction = base.cmp(&Decimal::one());
    if direction == Ordering::Equal {
        return Ok(Decimal::one());
    }
    let grows = (direction == Ordering::Greater) != exponent.is_negative();

    // |exponent| >= 10^21: the logarithm alone puts the result out of range
    if exponent.adjusted_exponent() > 20 {
        return if grows { Err(ArithmeticError::Overflow) } else { Ok(Decimal::zero()) };
    }

    let precision = i64::from(config.precision());
    let max_exponent = config.max_exponent();
    let magnitude = (exponent.adjusted_exponent() + 1).max(0)
                    + digit_count(&BigInt::from(base.adjusted_exponent()))
                    + 1;
    let working = precision + GUARD_DIGITS + magnitude;
    let scale = pow10(working);

    let logarithm = ln_scaled(base, working, &scale);
    let product = shift_scaled(&(logarithm * exponent.coefficient()), exponent.exponent());

    // product = k·ln10 + r with |r| <= ln10 / 2, so the result is exp(r)·10^k
    let ln10 = ln10_scaled(&scale);
    let decade = divide_half_even(&product, &ln10);
    let Some(power_of_ten) = decade.to_i64()
                                   .filter(|k| k.unsigned_abs() <= max_exponent.unsigned_abs() + 2)
    else {
        return if grows { Err(ArithmeticError::Overflow) } else { Ok(Decimal::zero()) };
    };

    let remainder = product - &decade * &ln10;
    let mantissa = exp_scaled(&remainder, &scale);

    Decimal::new(mantissa, power_of_ten - working).round_to(precision, max_exponent)
}

/// Natural logarithm of a positive `value`, scaled by `scale = 10^working`.
///
/// The value is split into `m × 10^a` with `m` in `[1, 10)`; `m` is halved
/// into `[1, 2)` and finished with the `atanh` series.
pub(crate) fn ln_scaled(value: &Decimal, working: i64, scale: &BigInt) -> BigInt {
    let digits = digit_count(value.coefficient());
    let adjusted = value.adjusted_exponent();

    let mut mantissa = shift_scaled(&value.coefficient().abs(), working - (digits - 1));
    let two = BigInt::from(2);
    let upper = scale * &two;
    let mut halvings = 0u32;
    while mantissa >= upper {
        mantissa = divide_half_even(&mantissa, &two);
        halvings += 1;
    }

    ln_near_one(&mantissa, scale)
    + ln2_scaled(scale) * halvings
    + ln10_scaled(scale) * adjusted
}

/// `ln(x)` for `x` in `[1, 2)` as `2·atanh((x - 1) / (x + 1))`.
fn ln_near_one(value: &BigInt, scale: &BigInt) -> BigInt {
    let ratio = divide_half_even(&((value - scale) * scale), &(value + scale));
    atanh_scaled(&ratio, scale) * 2u32
}

/// `ln 2 = 2·atanh(1/3)`.
fn ln2_scaled(scale: &BigInt) -> BigInt {
    atanh_scaled(&(scale / 3u32), scale) * 2u32
}

/// `ln 10 = 3·ln 2 + 2·atanh(1/9)`, since `10 = 2^3 × 1.25`.
fn ln10_scaled(scale: &BigInt) -> BigInt {
    ln2_scaled(scale) * 3u32 + atanh_scaled(&(scale / 9u32), scale) * 2u32
}

/// `atanh(z) = z + z^3/3 + z^5/5 + ...` for `|z| <= 1/3`.
fn atanh_scaled(value: &BigInt, scale: &BigInt) -> BigInt {
    let square = divide_half_even(&(value * value), scale);
    let mut power = value.clone();
    let mut sum = BigInt::zero();
    let mut denominator = 1u32;

    while !power.is_zero() {
        sum += &power / denominator;
        power = divide_half_even(&(power * &square), scale);
        denominator += 2;
    }
    sum
}

/// `exp(x)` by its Taylor series, for `|x|` around `ln 10 / 2` or less.
pub(crate) fn exp_scaled(value: &BigInt, scale: &BigInt) -> BigInt {
    let mut sum = scale.clone();
    let mut term = scale.clone();
    let mut n = 1u32;

    loop {
        term = divide_half_even(&(term * value), &(scale * n));
        if term.is_zero() {
            break;
        }
        sum += &term;
        n += 1;
    }
    sum
}

/// Multiplies by `10^shift`, or divides with half-even rounding when `shift`
/// is negative.
pub(crate) fn shift_scaled(value: &BigInt, shift: i64) -> BigInt {
    if shift >= 0 {
        value * pow10(shift)
    } else {
        divide_half_even(value, &pow10(-shift))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn decimal(literal: &str) -> Decimal {
        literal.parse().unwrap()
    }

    #[test]
    fn square_root_of_perfect_square_is_exact_in_value() {
        let root = pow_fractional(&decimal("4"), &decimal("0.5"), &Config::default()).unwrap();

        assert_eq!(root, decimal("2"));
    }

    #[test]
    fn square_root_of_two_is_correctly_rounded() {
        let root = pow_fractional(&decimal("2"), &decimal("0.5"), &Config::default()).unwrap();

        assert_eq!(root.to_string(), "1.414213562373095048801688724");
    }

    #[test]
    fn negative_fractional_exponent_takes_the_reciprocal() {
        let root = pow_fractional(&decimal("4"), &decimal("-0.5"), &Config::default()).unwrap();

        assert_eq!(root, decimal("0.5"));
    }

    #[test]
    fn logarithm_of_ten_matches_known_digits() {
        let scale = pow10(30);
        let ln10 = ln_scaled(&decimal("10"), 30, &scale);

        assert_eq!(shift_scaled(&ln10, -11).to_string(), "23025850929940456840");
    }

    #[test]
    fn exp_of_zero_is_one() {
        let scale = pow10(20);

        assert_eq!(exp_scaled(&BigInt::zero(), &scale), scale);
    }

    #[test]
    fn huge_exponent_overflows_or_vanishes() {
        let config = Config::default();

        assert_eq!(pow_fractional(&decimal("2"), &decimal("10000000.5"), &config),
                   Err(ArithmeticError::Overflow));
        assert_eq!(pow_fractional(&decimal("0.5"), &decimal("10000000.5"), &config),
                   Ok(Decimal::zero()));
    }
}
