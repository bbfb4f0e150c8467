use std::{cmp::Ordering, fmt, ops::Neg, str::FromStr};

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{
    config::Config,
    interpreter::value::transcendental,
    util::num::{digit_count, divide_half_even, factorial_exceeds, pow10, usize_to_i64},
};

/// Failure of a single decimal operation.
///
/// These carry no operands; the evaluator attaches the operator and operand
/// values when it turns them into an [`EvalError`](crate::error::EvalError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The adjusted exponent of the result exceeded the configured maximum.
    #[error("result exceeds the exponent range")]
    Overflow,
    /// The operation has no defined value for its operands.
    #[error("undefined result")]
    Undefined,
}

/// A string that is not a decimal literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid decimal literal '{literal}'")]
pub struct ParseDecimalError {
    /// The rejected text.
    pub literal: String,
}

/// An arbitrary-precision decimal number `coefficient × 10^exponent`.
///
/// Values built from literals are exact: `2.50` keeps its trailing zero and
/// renders as `2.50`. Every arithmetic operation rounds its result to the
/// configured number of significant digits using round-half-even, and fails
/// with [`ArithmeticError::Overflow`] once the adjusted exponent of the result
/// leaves the configured range. Results too small for the range flush to zero.
///
/// Equality and ordering compare numeric values, so `2.0 == 2`.
///
/// ## Example
/// ```
/// use minicalc::{config::Config, interpreter::value::decimal::Decimal};
///
/// let config = Config::default();
/// let one: Decimal = "1".parse().unwrap();
/// let three: Decimal = "3".parse().unwrap();
///
/// let third = one.div(&three, &config).unwrap();
/// assert_eq!(third.to_string(), "0.3333333333333333333333333333");
///
/// let two: Decimal = "2.0".parse().unwrap();
/// assert_eq!(two, Decimal::from(2));
/// assert_eq!(two.to_string(), "2.0");
/// ```
#[derive(Debug, Clone)]
pub struct Decimal {
    coefficient: BigInt,
    exponent:    i64,
}

impl Decimal {
    /// Creates the value `coefficient × 10^exponent` without rounding.
    #[must_use]
    pub fn new(coefficient: impl Into<BigInt>, exponent: i64) -> Self {
        Self { coefficient: coefficient.into(),
               exponent }
    }

    /// The value `0`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    /// The value `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::new(BigInt::one(), 0)
    }

    /// The signed integer coefficient.
    #[must_use]
    pub const fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    /// The power of ten the coefficient is scaled by.
    #[must_use]
    pub const fn exponent(&self) -> i64 {
        self.exponent
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Returns `true` when the value has no fractional part.
    ///
    /// ## Example
    /// ```
    /// use minicalc::interpreter::value::decimal::Decimal;
    ///
    /// assert!(Decimal::new(500, -2).is_integer());
    /// assert!(!Decimal::new(250, -2).is_integer());
    /// ```
    #[must_use]
    pub fn is_integer(&self) -> bool {
        if self.exponent >= 0 || self.is_zero() {
            return true;
        }
        let fraction_digits = -self.exponent;
        if fraction_digits >= digit_count(&self.coefficient) {
            return false;
        }
        self.coefficient.is_multiple_of(&pow10(fraction_digits))
    }

    /// Exponent of the most significant digit: `exponent + digits - 1`.
    ///
    /// ## Example
    /// ```
    /// use minicalc::interpreter::value::decimal::Decimal;
    ///
    /// assert_eq!(Decimal::new(12_345, -2).adjusted_exponent(), 2);
    /// assert_eq!(Decimal::new(5, -3).adjusted_exponent(), -3);
    /// ```
    #[must_use]
    pub fn adjusted_exponent(&self) -> i64 {
        self.exponent.saturating_add(digit_count(&self.coefficient) - 1)
    }

    /// Returns the absolute value, keeping the exponent.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.coefficient.abs(), self.exponent)
    }

    /// Converts an integral value to a big integer.
    ///
    /// Returns `None` for values with a fractional part.
    #[must_use]
    pub fn to_integer(&self) -> Option<BigInt> {
        if !self.is_integer() {
            return None;
        }
        if self.exponent >= 0 {
            Some(&self.coefficient * pow10(self.exponent))
        } else {
            Some(&self.coefficient / pow10(-self.exponent))
        }
    }

    /// Converts an integral, non-negative value that fits in a `u64`.
    ///
    /// ## Example
    /// ```
    /// use minicalc::interpreter::value::decimal::Decimal;
    ///
    /// assert_eq!(Decimal::new(70, -1).to_u64(), Some(7));
    /// assert_eq!(Decimal::new(75, -1).to_u64(), None);
    /// assert_eq!(Decimal::new(1, 40).to_u64(), None);
    /// ```
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.adjusted_exponent() > 19 {
            return None;
        }
        self.to_integer()?.to_u64()
    }

    /// Renders the value without an exponent, as it would be written as a
    /// literal.
    ///
    /// ## Example
    /// ```
    /// use minicalc::interpreter::value::decimal::Decimal;
    ///
    /// assert_eq!(Decimal::new(1, -7).to_plain_string(), "0.0000001");
    /// assert_eq!(Decimal::new(12, 3).to_plain_string(), "12000");
    /// assert_eq!(Decimal::new(1, -7).to_string(), "1E-7");
    /// ```
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        let digits = self.coefficient.magnitude().to_str_radix(10);
        let point = self.exponent.saturating_add(usize_to_i64(digits.len()));
        let sign = if self.is_negative() { "-" } else { "" };

        format!("{sign}{}", place_point(&digits, point))
    }

    /// Rounds to the configured precision and checks the exponent range.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::Overflow`] when the rounded value's adjusted
    /// exponent exceeds [`Config::max_exponent`].
    pub fn round(&self, config: &Config) -> Result<Self, ArithmeticError> {
        self.round_to(i64::from(config.precision()), config.max_exponent())
    }

    pub(crate) fn round_to(&self, precision: i64, max_exponent: i64) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            let tiny = -max_exponent - precision + 1;
            return Ok(Self::new(BigInt::zero(), self.exponent.clamp(tiny, max_exponent)));
        }

        let mut coefficient = self.coefficient.clone();
        let mut exponent = self.exponent;
        let excess = digit_count(&coefficient) - precision;
        if excess > 0 {
            coefficient = divide_half_even(&coefficient, &pow10(excess));
            exponent = exponent.saturating_add(excess);
            // 999.5 -> 1000: one digit too many, and the dropped digit is a zero
            if digit_count(&coefficient) > precision {
                coefficient /= 10u32;
                exponent = exponent.saturating_add(1);
            }
        }

        let rounded = Self::new(coefficient, exponent);
        let adjusted = rounded.adjusted_exponent();
        if adjusted > max_exponent {
            Err(ArithmeticError::Overflow)
        } else if adjusted < -max_exponent {
            Ok(Self::zero())
        } else {
            Ok(rounded)
        }
    }

    /// Adds `other`, rounding the sum.
    ///
    /// The exponent of an exact sum is the smaller of the two operand
    /// exponents, so `1.5 + 1.5` is `3.0`.
    pub fn add(&self, other: &Self, config: &Config) -> Result<Self, ArithmeticError> {
        let precision = i64::from(config.precision());
        self.add_unrounded(other, precision).round_to(precision, config.max_exponent())
    }

    /// Subtracts `other`, rounding the difference.
    pub fn sub(&self, other: &Self, config: &Config) -> Result<Self, ArithmeticError> {
        self.add(&-other, config)
    }

    /// Multiplies by `other`, rounding the product.
    pub fn mul(&self, other: &Self, config: &Config) -> Result<Self, ArithmeticError> {
        self.mul_to(other, i64::from(config.precision()), config.max_exponent())
    }

    /// Divides by `other`.
    ///
    /// Exact quotients keep the exponent closest to `self.exponent -
    /// other.exponent`, so `8 / 4` is `2` and `1 / 4` is `0.25`. Inexact
    /// quotients carry the full precision.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::DivisionByZero`] when `other` is zero.
    ///
    /// ## Example
    /// ```
    /// use minicalc::{config::Config, interpreter::value::decimal::Decimal};
    ///
    /// let config = Config::default();
    /// let quarter = Decimal::from(1).div(&Decimal::from(4), &config).unwrap();
    ///
    /// assert_eq!(quarter.to_string(), "0.25");
    /// ```
    pub fn div(&self, other: &Self, config: &Config) -> Result<Self, ArithmeticError> {
        self.div_to(other, i64::from(config.precision()), config.max_exponent())
    }

    /// Remainder of truncated division: the result takes the sign of `self`.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::DivisionByZero`] when `other` is zero.
    ///
    /// ## Example
    /// ```
    /// use minicalc::{config::Config, interpreter::value::decimal::Decimal};
    ///
    /// let config = Config::default();
    /// let rem = Decimal::from(-7).rem(&Decimal::from(3), &config).unwrap();
    ///
    /// assert_eq!(rem, Decimal::from(-1));
    /// ```
    pub fn rem(&self, other: &Self, config: &Config) -> Result<Self, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let exponent = self.exponent.min(other.exponent);
        let dividend = self.coefficient.abs();
        let divisor = other.coefficient.abs();

        let remainder = if self.exponent >= other.exponent {
            let scale = BigInt::from(10).modpow(&BigInt::from(self.exponent - exponent), &divisor);
            (dividend * scale) % divisor
        } else if other.exponent - exponent > digit_count(&dividend) {
            dividend
        } else {
            dividend % (divisor * pow10(other.exponent - exponent))
        };

        let remainder = if self.is_negative() { -remainder } else { remainder };
        Self::new(remainder, exponent).round(config)
    }

    /// Raises `self` to the power `exponent`.
    ///
    /// Integral exponents are computed by repeated squaring with guard digits,
    /// so results that fit in the precision are exact. Fractional exponents
    /// go through `exp(exponent × ln self)`.
    ///
    /// # Errors
    /// - [`ArithmeticError::Undefined`] for `0^0` and for a negative base with
    ///   a fractional exponent.
    /// - [`ArithmeticError::DivisionByZero`] for zero raised to a negative
    ///   power.
    /// - [`ArithmeticError::Overflow`] when the result leaves the exponent
    ///   range.
    ///
    /// ## Example
    /// ```
    /// use minicalc::{config::Config, interpreter::value::decimal::Decimal};
    ///
    /// let config = Config::default();
    /// let two = Decimal::from(2);
    ///
    /// assert_eq!(two.pow(&Decimal::from(10), &config).unwrap(), Decimal::from(1024));
    /// assert_eq!(two.pow(&Decimal::from(-1), &config).unwrap().to_string(), "0.5");
    /// ```
    pub fn pow(&self, exponent: &Self, config: &Config) -> Result<Self, ArithmeticError> {
        if exponent.is_zero() {
            return if self.is_zero() { Err(ArithmeticError::Undefined) } else { Ok(Self::one()) };
        }
        if self.is_zero() {
            return if exponent.is_negative() {
                Err(ArithmeticError::DivisionByZero)
            } else {
                Ok(Self::zero())
            };
        }
        if !exponent.is_integer() {
            if self.is_negative() {
                return Err(ArithmeticError::Undefined);
            }
            return transcendental::pow_fractional(self, exponent, config);
        }
        self.pow_integral(exponent, config)
    }

    fn pow_integral(&self, exponent: &Self, config: &Config) -> Result<Self, ArithmeticError> {
        let precision = i64::from(config.precision());
        let max_exponent = config.max_exponent();

        if exponent.adjusted_exponent() >= 20 {
            return self.pow_huge(exponent);
        }
        let power = exponent.to_integer().ok_or(ArithmeticError::Undefined)?;
        let working = precision + digit_count(&power) + 2;

        let powered = self.pow_unsigned(power.magnitude(), working, max_exponent);

        if !power.is_negative() {
            return powered?.round_to(precision, max_exponent);
        }
        match powered {
            Err(ArithmeticError::Overflow) => Ok(Self::zero()),
            Err(error) => Err(error),
            Ok(result) if result.is_zero() => Err(ArithmeticError::Overflow),
            Ok(result) => Self::one().div_to(&result, precision, max_exponent),
        }
    }

    /// Square-and-multiply over the bits of `power`, most significant first.
    fn pow_unsigned(&self,
                    power: &BigUint,
                    working: i64,
                    max_exponent: i64)
                    -> Result<Self, ArithmeticError> {
        let mut result = Self::one();
        for index in (0..power.bits()).rev() {
            result = result.mul_to(&result, working, max_exponent)?;
            if power.bit(index) {
                result = result.mul_to(self, working, max_exponent)?;
            }
        }
        Ok(result)
    }

    /// Powers with `|exponent| >= 10^20`: only `|self| == 1` stays in range.
    fn pow_huge(&self, exponent: &Self) -> Result<Self, ArithmeticError> {
        let odd = exponent.exponent <= 0
                  && exponent.to_integer().is_some_and(|power| power.is_odd());

        match (self.abs().cmp(&Self::one()), exponent.is_negative()) {
            (Ordering::Equal, _) if self.is_negative() && odd => Ok(-Self::one()),
            (Ordering::Equal, _) => Ok(Self::one()),
            (Ordering::Greater, false) | (Ordering::Less, true) => Err(ArithmeticError::Overflow),
            (Ordering::Greater, true) | (Ordering::Less, false) => Ok(Self::zero()),
        }
    }

    /// Mean of `self` and `other`: the exact sum halved, rounded once.
    ///
    /// ## Example
    /// ```
    /// use minicalc::{config::Config, interpreter::value::decimal::Decimal};
    ///
    /// let config = Config::default();
    /// let mean = Decimal::from(10).average(&Decimal::from(4), &config).unwrap();
    ///
    /// assert_eq!(mean.to_string(), "7");
    /// ```
    pub fn average(&self, other: &Self, config: &Config) -> Result<Self, ArithmeticError> {
        let precision = i64::from(config.precision());
        let sum = self.add_unrounded(other, precision + 2);
        sum.div_to(&Self::from(2), precision, config.max_exponent())
    }

    /// The larger of the two values; `self` when they are equal.
    pub fn max(&self, other: &Self, config: &Config) -> Result<Self, ArithmeticError> {
        if other > self { other.round(config) } else { self.round(config) }
    }

    /// The smaller of the two values; `self` when they are equal.
    pub fn min(&self, other: &Self, config: &Config) -> Result<Self, ArithmeticError> {
        if other < self { other.round(config) } else { self.round(config) }
    }

    /// Computes `n!`, rounding after every multiplication.
    ///
    /// # Errors
    /// Returns [`ArithmeticError::Overflow`] when the product leaves the
    /// exponent range.
    ///
    /// ## Example
    /// ```
    /// use minicalc::{config::Config, interpreter::value::decimal::Decimal};
    ///
    /// let config = Config::default();
    ///
    /// assert_eq!(Decimal::factorial(5, &config).unwrap(), Decimal::from(120));
    /// assert_eq!(Decimal::factorial(30, &config).unwrap().to_string(),
    ///            "2.652528598121910586363084800E+32");
    /// ```
    pub fn factorial(n: u64, config: &Config) -> Result<Self, ArithmeticError> {
        if factorial_exceeds(n, config.max_exponent()) {
            return Err(ArithmeticError::Overflow);
        }
        let precision = i64::from(config.precision());
        (2..=n).try_fold(Self::one(), |product, factor| {
                   product.mul_to(&Self::from(factor), precision, config.max_exponent())
               })
    }

    pub(crate) fn mul_to(&self,
                         other: &Self,
                         precision: i64,
                         max_exponent: i64)
                         -> Result<Self, ArithmeticError> {
        Self::new(&self.coefficient * &other.coefficient,
                  self.exponent.saturating_add(other.exponent)).round_to(precision, max_exponent)
    }

    pub(crate) fn div_to(&self,
                         other: &Self,
                         precision: i64,
                         max_exponent: i64)
                         -> Result<Self, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let ideal = self.exponent.saturating_sub(other.exponent);
        if self.is_zero() {
            return Self::new(BigInt::zero(), ideal).round_to(precision, max_exponent);
        }

        let dividend = self.coefficient.abs();
        let divisor = other.coefficient.abs();
        let shift = digit_count(&divisor) - digit_count(&dividend) + precision + 1;
        let (mut quotient, remainder) = if shift >= 0 {
            (dividend * pow10(shift)).div_rem(&divisor)
        } else {
            dividend.div_rem(&(divisor * pow10(-shift)))
        };
        let mut exponent = ideal.saturating_sub(shift);

        let ten = BigInt::from(10);
        if remainder.is_zero() {
            while exponent < ideal && quotient.is_multiple_of(&ten) {
                quotient /= &ten;
                exponent += 1;
            }
        } else if quotient.is_multiple_of(&BigInt::from(5)) {
            // sticky digit: keeps an inexact quotient off the half-way point
            quotient += 1u32;
        }

        if self.is_negative() != other.is_negative() {
            quotient = -quotient;
        }
        Self::new(quotient, exponent).round_to(precision, max_exponent)
    }

    /// Exact sum, except that an operand too small to reach the rounding
    /// digit of the other is replaced by a one-digit stand-in.
    fn add_unrounded(&self, other: &Self, precision: i64) -> Self {
        if self.is_zero() || other.is_zero() {
            let (zero, value) = if self.is_zero() { (self, other) } else { (other, self) };
            let exponent = if value.is_zero() {
                zero.exponent.min(value.exponent)
            } else {
                zero.exponent.min(value.exponent).max(value.exponent - precision - 1)
            };
            return value.rescale_down(exponent);
        }

        let (large, small) = if self.exponent >= other.exponent { (self, other) } else { (other, self) };
        let floor = large.exponent + (-1).min(digit_count(&large.coefficient) - precision - 2);
        let small = if small.adjusted_exponent() < floor {
            Self::new(small.coefficient.signum(), floor)
        } else {
            small.clone()
        };

        let exponent = large.exponent.min(small.exponent);
        let sum = large.rescale_down(exponent).coefficient + small.rescale_down(exponent).coefficient;
        Self::new(sum, exponent)
    }

    /// Re-expresses the value with a smaller or equal exponent.
    fn rescale_down(&self, exponent: i64) -> Self {
        Self::new(&self.coefficient * pow10(self.exponent - exponent), exponent)
    }
}

/// Splits `digits` at `point` digits from the left, padding with zeros.
fn place_point(digits: &str, point: i64) -> String {
    let length = usize_to_i64(digits.len());
    if point <= 0 {
        let zeros = usize::try_from(-point).unwrap_or(0);
        format!("0.{}{digits}", "0".repeat(zeros))
    } else if point >= length {
        let zeros = usize::try_from(point - length).unwrap_or(0);
        format!("{digits}{}", "0".repeat(zeros))
    } else {
        let (integral, fraction) = digits.split_at(usize::try_from(point).unwrap_or(0));
        format!("{integral}.{fraction}")
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.coefficient, self.exponent)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::new(-&self.coefficient, self.exponent)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::new(value, 0)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Parses `[+-]digits[.digits]` exactly.
    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        let error = || ParseDecimalError { literal: literal.to_string() };

        let (negative, unsigned) = match literal.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, literal.strip_prefix('+').unwrap_or(literal)),
        };
        let (integral, fraction) = match unsigned.split_once('.') {
            Some((_, "")) => return Err(error()),
            Some(parts) => parts,
            None => (unsigned, ""),
        };
        let is_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if integral.is_empty() || !is_digits(integral) || !is_digits(fraction) {
            return Err(error());
        }

        let coefficient = BigInt::parse_bytes(format!("{integral}{fraction}").as_bytes(), 10)
                          .ok_or_else(error)?;
        let coefficient = if negative { -coefficient } else { coefficient };
        Ok(Self::new(coefficient, -usize_to_i64(fraction.len())))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let signs = self.coefficient.sign().cmp(&other.coefficient.sign());
        if signs != Ordering::Equal || self.coefficient.sign() == Sign::NoSign {
            return signs;
        }

        let magnitude =
            self.adjusted_exponent()
                .cmp(&other.adjusted_exponent())
                .then_with(|| {
                    let exponent = self.exponent.min(other.exponent);
                    self.abs()
                        .rescale_down(exponent)
                        .coefficient
                        .cmp(&other.abs().rescale_down(exponent).coefficient)
                });

        if self.is_negative() { magnitude.reverse() } else { magnitude }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl fmt::Display for Decimal {
    /// Plain notation while the exponent is non-positive and the value is not
    /// too small, scientific `d.dddE±n` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coefficient.magnitude().to_str_radix(10);
        let left_digits = self.exponent.saturating_add(usize_to_i64(digits.len()));
        let point = if self.exponent <= 0 && left_digits > -6 { left_digits } else { 1 };

        if self.is_negative() {
            f.write_str("-")?;
        }
        f.write_str(&place_point(&digits, point))?;

        let exponent = left_digits - point;
        if exponent != 0 {
            write!(f, "E{exponent:+}")?;
        }
        Ok(())
    }
}
