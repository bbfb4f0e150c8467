/// Big-integer helpers shared by the decimal arithmetic.
///
/// Powers of ten, digit counting, half-even integer division and the
/// factorial overflow pre-check live here so that the decimal type and the
/// series expansions in `transcendental` round in exactly the same way.
pub mod num;
