//! Override rule resolution.
//!
//! Universal rules (`"*"`/`"*"`) are consulted first, then rules bound to
//! the exact service/method pair. A scoped match supersedes a universal
//! one. Only the winning directive is evaluated, so generators are never
//! invoked for a candidate that loses.

use crate::generators::ValueGenerator;
use example_core::{ExampleValue, FieldOverride, GeneratorDirective, OverrideConfig, RuleScope};
use rand::Rng;

/// Outcome of a successful override lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedOverride {
    /// A scalar (or list of scalars) that replaces the field value outright
    Scalar(ExampleValue),
    /// An object, or list with objects, that nested message keys merge into
    Structural(ExampleValue),
}

impl ResolvedOverride {
    fn new(value: ExampleValue) -> Self {
        if value.is_structural() {
            ResolvedOverride::Structural(value)
        } else {
            ResolvedOverride::Scalar(value)
        }
    }

    pub fn value(&self) -> &ExampleValue {
        match self {
            ResolvedOverride::Scalar(v) | ResolvedOverride::Structural(v) => v,
        }
    }

    pub fn into_value(self) -> ExampleValue {
        match self {
            ResolvedOverride::Scalar(v) | ResolvedOverride::Structural(v) => v,
        }
    }
}

/// A matched field override together with the scope of its rule.
#[derive(Debug, Clone, Copy)]
pub struct OverrideMatch<'a> {
    pub scope: RuleScope,
    pub field: &'a FieldOverride,
}

/// Resolves field overrides against a loaded rule set.
#[derive(Debug, Clone, Copy)]
pub struct OverrideResolver<'a> {
    config: &'a OverrideConfig,
}

impl<'a> OverrideResolver<'a> {
    pub fn new(config: &'a OverrideConfig) -> Self {
        Self { config }
    }

    /// Find the winning override for a field without evaluating it.
    pub fn find(&self, service: &str, method: &str, field_name: &str) -> Option<OverrideMatch<'a>> {
        let universal = self
            .config
            .universal_rules()
            .find_map(|rule| rule.first_match(field_name))
            .map(|field| OverrideMatch {
                scope: RuleScope::Universal,
                field,
            });

        let scoped = self
            .config
            .scoped_rules(service, method)
            .find_map(|rule| rule.first_match(field_name))
            .map(|field| OverrideMatch {
                scope: RuleScope::Scoped,
                field,
            });

        scoped.or(universal)
    }

    /// Resolve the override value for a field, or `None` when no rule applies.
    pub fn resolve<R: Rng>(
        &self,
        rng: &mut R,
        service: &str,
        method: &str,
        field_name: &str,
    ) -> Option<ResolvedOverride> {
        let matched = self.find(service, method, field_name)?;

        let value = match matched.field.directive() {
            GeneratorDirective::Generator(kind) => kind.generate(rng),
            GeneratorDirective::Literal(value) => value.clone(),
        };

        tracing::trace!(
            field = field_name,
            pattern = matched.field.pattern(),
            scope = ?matched.scope,
            "override matched"
        );

        Some(ResolvedOverride::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(yaml: &str) -> OverrideConfig {
        OverrideConfig::from_yaml(yaml).unwrap()
    }

    const PRECEDENCE: &str = r#"
overrides:
  - service: "*"
    method: "*"
    fields:
      "^id$": uuid
      "^status$": UNIVERSAL
  - service: OrderService
    method: GetOrder
    fields:
      "^status$": SCOPED
      "^count$": "12"
"#;

    #[test]
    fn test_universal_rule_applies_everywhere() {
        let config = config(PRECEDENCE);
        let resolver = OverrideResolver::new(&config);
        let mut rng = StdRng::seed_from_u64(1);

        let resolved = resolver
            .resolve(&mut rng, "AnyService", "AnyMethod", "id")
            .unwrap();
        assert_eq!(resolved.value().as_str().unwrap().len(), 36);
    }

    #[test]
    fn test_scoped_rule_wins_over_universal() {
        let config = config(PRECEDENCE);
        let resolver = OverrideResolver::new(&config);
        let mut rng = StdRng::seed_from_u64(1);

        let resolved = resolver
            .resolve(&mut rng, "OrderService", "GetOrder", "status")
            .unwrap();
        assert_eq!(resolved, ResolvedOverride::Scalar(ExampleValue::string("SCOPED")));

        // Other methods only see the universal rule
        let resolved = resolver
            .resolve(&mut rng, "OrderService", "ListOrders", "status")
            .unwrap();
        assert_eq!(resolved.into_value(), ExampleValue::string("UNIVERSAL"));
    }

    #[test]
    fn test_find_reports_scope() {
        let config = config(PRECEDENCE);
        let resolver = OverrideResolver::new(&config);

        let matched = resolver.find("OrderService", "GetOrder", "status").unwrap();
        assert_eq!(matched.scope, RuleScope::Scoped);
        let matched = resolver.find("OrderService", "GetOrder", "id").unwrap();
        assert_eq!(matched.scope, RuleScope::Universal);
    }

    #[test]
    fn test_numeric_literal_coerced() {
        let config = config(PRECEDENCE);
        let resolver = OverrideResolver::new(&config);
        let mut rng = StdRng::seed_from_u64(1);

        let resolved = resolver
            .resolve(&mut rng, "OrderService", "GetOrder", "count")
            .unwrap();
        assert_eq!(resolved.into_value(), ExampleValue::Int(12));
    }

    #[test]
    fn test_no_match_is_not_applied() {
        let config = config(PRECEDENCE);
        let resolver = OverrideResolver::new(&config);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(resolver
            .resolve(&mut rng, "OrderService", "GetOrder", "order_id")
            .is_none());
        assert!(OverrideResolver::new(&OverrideConfig::default())
            .resolve(&mut rng, "A", "B", "id")
            .is_none());
    }

    #[test]
    fn test_structural_literal() {
        let config = config(
            r#"
overrides:
  - service: "*"
    method: "*"
    fields:
      "^owner$": { name: ACME }
      "^tags$": [a, b]
"#,
        );
        let resolver = OverrideResolver::new(&config);
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            resolver.resolve(&mut rng, "S", "M", "owner"),
            Some(ResolvedOverride::Structural(_))
        ));
        assert!(matches!(
            resolver.resolve(&mut rng, "S", "M", "tags"),
            Some(ResolvedOverride::Scalar(_))
        ));
    }

    #[test]
    fn test_first_rule_in_file_order_wins_within_phase() {
        let config = config(
            r#"
overrides:
  - service: "*"
    method: "*"
    fields:
      "name": FIRST
  - service: "*"
    method: "*"
    fields:
      "name": SECOND
"#,
        );
        let resolver = OverrideResolver::new(&config);
        let mut rng = StdRng::seed_from_u64(1);

        let resolved = resolver.resolve(&mut rng, "S", "M", "first_name").unwrap();
        assert_eq!(resolved.into_value(), ExampleValue::string("FIRST"));
    }
}
