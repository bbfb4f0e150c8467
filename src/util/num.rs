use std::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;

/// Returns `10^exponent` as a big integer.
///
/// Negative exponents are treated as zero, so the result is always a positive
/// integer.
///
/// ## Example
/// ```
/// use minicalc::util::num::pow10;
/// use num_bigint::BigInt;
///
/// assert_eq!(pow10(3), BigInt::from(1000));
/// assert_eq!(pow10(0), BigInt::from(1));
/// ```
#[must_use]
pub fn pow10(exponent: i64) -> BigInt {
    let exponent = u32::try_from(exponent.max(0)).unwrap_or(u32::MAX);
    BigInt::from(10u32).pow(exponent)
}

/// Counts the decimal digits of the magnitude of `value`.
///
/// Zero has one digit. The sign is ignored.
///
/// ## Example
/// ```
/// use minicalc::util::num::digit_count;
/// use num_bigint::BigInt;
///
/// assert_eq!(digit_count(&BigInt::from(0)), 1);
/// assert_eq!(digit_count(&BigInt::from(-12_345)), 5);
/// ```
#[must_use]
pub fn digit_count(value: &BigInt) -> i64 {
    usize_to_i64(value.magnitude().to_str_radix(10).len())
}

/// Divides `numerator` by a positive `denominator`, rounding the quotient to
/// the nearest integer and breaking ties towards the even neighbour.
///
/// ## Parameters
/// - `numerator`: The value to divide. May be negative.
/// - `denominator`: The divisor. Must be strictly positive.
///
/// ## Returns
/// The rounded quotient.
///
/// ## Example
/// ```
/// use minicalc::util::num::divide_half_even;
/// use num_bigint::BigInt;
///
/// let ten = BigInt::from(10);
/// assert_eq!(divide_half_even(&BigInt::from(25), &ten), BigInt::from(2));
/// assert_eq!(divide_half_even(&BigInt::from(35), &ten), BigInt::from(4));
/// assert_eq!(divide_half_even(&BigInt::from(-36), &ten), BigInt::from(-4));
/// ```
#[must_use]
pub fn divide_half_even(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let (quotient, remainder) = numerator.div_rem(denominator);
    let step = numerator.signum();

    match (remainder.abs() * 2u32).cmp(denominator) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + step,
        Ordering::Equal if quotient.is_odd() => quotient + step,
        Ordering::Equal => quotient,
    }
}

/// Converts a `usize` to `i64`, saturating at `i64::MAX`.
///
/// Digit counts and token positions never come close to the limit, so
/// saturation only guards against pathological inputs.
#[must_use]
pub fn usize_to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Largest operand whose factorial is computed.
///
/// `n!` takes `n - 1` rounded multiplications. Beyond this bound the result is
/// reported as out of range even when a very large exponent limit could hold
/// it.
pub const FACTORIAL_OPERAND_LIMIT: u64 = 1_000_000;

/// Returns `true` when `n!` is not computed: either `n` exceeds
/// [`FACTORIAL_OPERAND_LIMIT`] or `n!` certainly has more than
/// `max_exponent + 1` integer digits.
///
/// Uses the Stirling lower bound `ln(n!) >= n ln n - n + 1`, so a `true`
/// answer below the operand limit is never wrong; a `false` answer means the
/// product has to be computed to find out.
///
/// ## Example
/// ```
/// use minicalc::util::num::factorial_exceeds;
///
/// assert!(!factorial_exceeds(100, 999_999));
/// assert!(factorial_exceeds(10_000_000, 999_999));
/// assert!(factorial_exceeds(10_000_000_000, 999_999_999_999_999_999));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn factorial_exceeds(n: u64, max_exponent: i64) -> bool {
    if n > FACTORIAL_OPERAND_LIMIT {
        return true;
    }
    if n < 2 {
        return false;
    }
    let n = n as f64;
    let log10_lower_bound = (n * n.ln() - n + 1.0) / std::f64::consts::LN_10;

    log10_lower_bound > max_exponent as f64 + 1.0
}
