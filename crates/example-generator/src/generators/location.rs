//! Country and city generators. Each draws independently.

use super::person::pick;
use example_core::ExampleValue;
use rand::Rng;

pub const COUNTRY_NAMES: &[&str] = &["France", "United Kingdom", "Germany", "Spain"];
pub const COUNTRY_CODES: &[&str] = &["FR", "UK", "DE", "ES"];
pub const CITIES: &[&str] = &["Paris", "London", "Berlin", "Madrid"];

pub fn generate_country_name<R: Rng>(rng: &mut R) -> ExampleValue {
    ExampleValue::string(pick(rng, COUNTRY_NAMES))
}

pub fn generate_country_code<R: Rng>(rng: &mut R) -> ExampleValue {
    ExampleValue::string(pick(rng, COUNTRY_CODES))
}

pub fn generate_city<R: Rng>(rng: &mut R) -> ExampleValue {
    ExampleValue::string(pick(rng, CITIES))
}
