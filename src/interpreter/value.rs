/// Fixed-precision decimal numbers.
///
/// Defines the `Decimal` type every expression evaluates to: a big-integer
/// coefficient scaled by a power of ten. Literals are held exactly; each
/// arithmetic operation rounds its result half-even to the configured number
/// of significant digits and checks it against the exponent range.
pub mod decimal;
/// Logarithm and exponential series behind fractional powers.
///
/// Works in fixed point over big integers scaled by a power of ten, so that
/// `x^y` for non-integral `y` is computed to the same precision as the rest of
/// the arithmetic.
pub mod transcendental;
