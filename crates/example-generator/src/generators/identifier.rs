//! Registry identifier generators.

use example_core::ExampleValue;
use rand::Rng;

/// Smallest seven-digit IMO vessel number handed out by the generator.
pub const IMO_MIN: i64 = 9_000_000;
/// Largest seven-digit IMO vessel number.
pub const IMO_MAX: i64 = 9_999_999;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, min: i64, max: i64) -> ExampleValue {
    ExampleValue::Int(rng.gen_range(min..=max))
}

/// Generate an IMO vessel registry number.
pub fn generate_imo<R: Rng>(rng: &mut R) -> ExampleValue {
    generate_int_range(rng, IMO_MIN, IMO_MAX)
}
