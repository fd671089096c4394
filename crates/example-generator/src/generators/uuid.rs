//! UUID value generator.

use example_core::ExampleValue;
use rand::Rng;
use uuid::{Builder, Uuid};

/// Random v4 UUID in hyphenated form, drawn from `rng`.
pub fn generate_uuid_v4<R: Rng>(rng: &mut R) -> ExampleValue {
    ExampleValue::String(random_uuid(rng).hyphenated().to_string())
}

fn random_uuid<R: Rng>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Variant;

    #[test]
    fn test_uuid_is_v4_rfc4122() {
        let mut rng = StdRng::seed_from_u64(42);
        let value = generate_uuid_v4(&mut rng);
        let text = value.as_str().unwrap();

        assert_eq!(text.len(), 36);
        let parsed = Uuid::parse_str(text).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), Variant::RFC4122);
    }

    #[test]
    fn test_same_seed_same_uuid() {
        let first = generate_uuid_v4(&mut StdRng::seed_from_u64(9));
        let second = generate_uuid_v4(&mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
        assert_ne!(first, generate_uuid_v4(&mut StdRng::seed_from_u64(10)));
    }
}
