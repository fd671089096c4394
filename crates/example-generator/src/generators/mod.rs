//! Generator catalog.
//!
//! Each catalog entry is a zero-argument producer: the output does not
//! depend on the field being overridden. Randomness comes from the RNG the
//! caller threads through; clock-based entries read the current time.

pub mod identifier;
pub mod location;
pub mod person;
pub mod timestamp;
pub mod uuid;

use example_core::{ExampleValue, GeneratorKind};
use rand::Rng;

/// Trait for producing synthetic values.
pub trait ValueGenerator {
    /// Generate a value using the given RNG.
    fn generate<R: Rng>(&self, rng: &mut R) -> ExampleValue;
}

impl ValueGenerator for GeneratorKind {
    fn generate<R: Rng>(&self, rng: &mut R) -> ExampleValue {
        match self {
            GeneratorKind::Uuid => uuid::generate_uuid_v4(rng),
            GeneratorKind::Imo => identifier::generate_imo(rng),
            GeneratorKind::FirstName => person::generate_first_name(rng),
            GeneratorKind::LastName => person::generate_last_name(rng),
            GeneratorKind::Email => person::generate_email(rng),
            GeneratorKind::Phone => person::generate_phone(),
            GeneratorKind::IsoDate => timestamp::generate_iso_date(),
            GeneratorKind::IsoTime => timestamp::generate_iso_time(),
            GeneratorKind::IsoDateTime => timestamp::generate_iso_datetime(),
            GeneratorKind::CountryName => location::generate_country_name(rng),
            GeneratorKind::CountryCode => location::generate_country_code(rng),
            GeneratorKind::City => location::generate_city(rng),
        }
    }
}
