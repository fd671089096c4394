//! Person and contact generators.

use example_core::ExampleValue;
use rand::seq::SliceRandom;
use rand::Rng;

pub const FIRST_NAMES: &[&str] = &["John", "Jane", "Alice", "Bob", "Eve"];
pub const LAST_NAMES: &[&str] = &["Smith", "Doe", "Johnson", "Brown", "Wilson"];
pub const PHONE_NUMBER: &str = "+44 (0) 123 456 7890";

/// Pick one entry of a non-empty pool.
pub(crate) fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

pub fn generate_first_name<R: Rng>(rng: &mut R) -> ExampleValue {
    ExampleValue::string(pick(rng, FIRST_NAMES))
}

pub fn generate_last_name<R: Rng>(rng: &mut R) -> ExampleValue {
    ExampleValue::string(pick(rng, LAST_NAMES))
}

/// Generate `<first>.<last>@example.com`, lower-cased.
pub fn generate_email<R: Rng>(rng: &mut R) -> ExampleValue {
    let first = pick(rng, FIRST_NAMES).to_lowercase();
    let last = pick(rng, LAST_NAMES).to_lowercase();
    ExampleValue::String(format!("{first}.{last}@example.com"))
}

pub fn generate_phone() -> ExampleValue {
    ExampleValue::string(PHONE_NUMBER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_names_come_from_pools() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let first = generate_first_name(&mut rng);
            let last = generate_last_name(&mut rng);
            assert!(FIRST_NAMES.contains(&first.as_str().unwrap()));
            assert!(LAST_NAMES.contains(&last.as_str().unwrap()));
        }
    }

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let email = generate_email(&mut rng);
        let email = email.as_str().unwrap();

        let (local, domain) = email.split_once('@').unwrap();
        assert_eq!(domain, "example.com");
        let (first, last) = local.split_once('.').unwrap();
        assert!(FIRST_NAMES.iter().any(|n| n.to_lowercase() == first));
        assert!(LAST_NAMES.iter().any(|n| n.to_lowercase() == last));
        assert_eq!(email, email.to_lowercase());
    }

    #[test]
    fn test_phone_is_fixed() {
        assert_eq!(generate_phone(), ExampleValue::string("+44 (0) 123 456 7890"));
    }
}
