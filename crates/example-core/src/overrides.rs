//! Field override rules.
//!
//! Override rules are loaded from a YAML document shaped like:
//!
//! ```yaml
//! overrides:
//!   - service: "*"
//!     method: "*"
//!     fields:
//!       "^id$": uuid
//!       "email": email
//!   - service: VesselService
//!     method: GetVessel
//!     fields:
//!       "^imo$": imo
//!       "^status$": ACTIVE
//! ```
//!
//! Every field pattern is compiled when the document is loaded, so a bad
//! regular expression is reported as a configuration error before any
//! example is generated. Patterns keep their declaration order.

use crate::values::ExampleValue;
use regex::Regex;
use serde::Deserialize;
use serde_yaml::Value as YamlValue;
use std::fmt;
use std::fs;
use std::path::Path;

/// Wildcard accepted for the service and method names.
pub const WILDCARD: &str = "*";

// ============================================================================
// Error Types
// ============================================================================

/// Error type for override configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the override file
    #[error("Failed to read override file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse override YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A field pattern is not a valid regular expression
    #[error("Invalid field pattern '{pattern}' in override #{index} ({service}/{method}): {source}")]
    InvalidPattern {
        index: usize,
        service: String,
        method: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A field pattern key is not a string
    #[error("Field pattern in override #{index} ({service}/{method}) must be a string")]
    InvalidPatternKey {
        index: usize,
        service: String,
        method: String,
    },

    /// Service or method name left empty
    #[error("Override #{index} has an empty {what} name")]
    EmptyName { index: usize, what: &'static str },
}

// ============================================================================
// Generator Directives
// ============================================================================

/// Named synthetic value producers available to override rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    Uuid,
    /// Seven-digit vessel registry identifier
    Imo,
    FirstName,
    LastName,
    Email,
    IsoDate,
    IsoTime,
    IsoDateTime,
    Phone,
    CountryName,
    CountryCode,
    City,
}

impl GeneratorKind {
    /// Every catalog entry, in documentation order.
    pub const ALL: [GeneratorKind; 12] = [
        GeneratorKind::Uuid,
        GeneratorKind::Imo,
        GeneratorKind::FirstName,
        GeneratorKind::LastName,
        GeneratorKind::Email,
        GeneratorKind::IsoDate,
        GeneratorKind::IsoTime,
        GeneratorKind::IsoDateTime,
        GeneratorKind::Phone,
        GeneratorKind::CountryName,
        GeneratorKind::CountryCode,
        GeneratorKind::City,
    ];

    /// Name used in override files.
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::Uuid => "uuid",
            GeneratorKind::Imo => "imo",
            GeneratorKind::FirstName => "first_name",
            GeneratorKind::LastName => "last_name",
            GeneratorKind::Email => "email",
            GeneratorKind::IsoDate => "iso_date",
            GeneratorKind::IsoTime => "iso_time",
            GeneratorKind::IsoDateTime => "iso_datetime",
            GeneratorKind::Phone => "phone",
            GeneratorKind::CountryName => "country_name",
            GeneratorKind::CountryCode => "country_code",
            GeneratorKind::City => "city",
        }
    }

    /// Look up a generator by its override-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.name() == name)
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What an override rule substitutes for a matched field.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorDirective {
    /// Invoke a catalog generator
    Generator(GeneratorKind),
    /// Use this value verbatim
    Literal(ExampleValue),
}

impl GeneratorDirective {
    /// Interpret a directive from the override file.
    ///
    /// Strings naming a catalog generator select it. Other strings are
    /// literals, coerced to integers when they parse as one. Non-string YAML
    /// values become the equivalent literal.
    pub fn from_yaml(yaml: &YamlValue) -> Self {
        match yaml {
            YamlValue::String(s) => {
                if let Some(kind) = GeneratorKind::from_name(s) {
                    GeneratorDirective::Generator(kind)
                } else if let Ok(i) = s.parse::<i64>() {
                    GeneratorDirective::Literal(ExampleValue::Int(i))
                } else {
                    GeneratorDirective::Literal(ExampleValue::String(s.clone()))
                }
            }
            other => GeneratorDirective::Literal(ExampleValue::from_yaml(other)),
        }
    }
}

// ============================================================================
// Rules
// ============================================================================

/// A compiled field-name pattern and its directive.
#[derive(Debug, Clone)]
pub struct FieldOverride {
    pattern: Regex,
    directive: GeneratorDirective,
}

impl FieldOverride {
    /// Compile a field override.
    pub fn new(pattern: &str, directive: GeneratorDirective) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            directive,
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn directive(&self) -> &GeneratorDirective {
        &self.directive
    }

    /// Whether the pattern matches anywhere in `field_name`.
    pub fn matches(&self, field_name: &str) -> bool {
        self.pattern.is_match(field_name)
    }
}

/// How widely a rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Service and method are both the wildcard
    Universal,
    /// Bound to one service/method pair
    Scoped,
}

/// One entry of the override file.
#[derive(Debug, Clone)]
pub struct OverrideRule {
    pub service: String,
    pub method: String,
    pub fields: Vec<FieldOverride>,
}

impl OverrideRule {
    pub fn scope(&self) -> RuleScope {
        if self.service == WILDCARD && self.method == WILDCARD {
            RuleScope::Universal
        } else {
            RuleScope::Scoped
        }
    }

    /// Whether a scoped rule targets exactly this service/method pair.
    pub fn targets(&self, service: &str, method: &str) -> bool {
        self.service == service && self.method == method
    }

    /// First directive whose pattern matches `field_name`, in declaration order.
    pub fn first_match(&self, field_name: &str) -> Option<&FieldOverride> {
        self.fields.iter().find(|f| f.matches(field_name))
    }
}

#[derive(Debug, Deserialize)]
struct RawOverrideFile {
    #[serde(default)]
    overrides: Vec<RawOverrideRule>,
}

#[derive(Debug, Deserialize)]
struct RawOverrideRule {
    service: String,
    method: String,
    #[serde(default)]
    fields: serde_yaml::Mapping,
}

/// The full, validated rule set. Read-only for the lifetime of a run.
#[derive(Debug, Clone, Default)]
pub struct OverrideConfig {
    rules: Vec<OverrideRule>,
}

impl OverrideConfig {
    /// Build a configuration from already-compiled rules.
    pub fn new(rules: Vec<OverrideRule>) -> Self {
        Self { rules }
    }

    /// Load overrides from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate overrides from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let raw: RawOverrideFile = serde_yaml::from_str(yaml)?;

        let rules = raw
            .overrides
            .into_iter()
            .enumerate()
            .map(|(index, rule)| compile_rule(index, rule))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// All rules in file order.
    pub fn rules(&self) -> &[OverrideRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules that apply to every service and method.
    pub fn universal_rules(&self) -> impl Iterator<Item = &OverrideRule> {
        self.rules
            .iter()
            .filter(|r| r.scope() == RuleScope::Universal)
    }

    /// Rules bound to this exact service/method pair.
    pub fn scoped_rules<'r, 'q>(
        &'r self,
        service: &'q str,
        method: &'q str,
    ) -> impl Iterator<Item = &'r OverrideRule> + 'q
    where
        'r: 'q,
    {
        self.rules
            .iter()
            .filter(move |r| r.scope() == RuleScope::Scoped && r.targets(service, method))
    }
}

fn compile_rule(index: usize, raw: RawOverrideRule) -> Result<OverrideRule, ConfigError> {
    if raw.service.is_empty() {
        return Err(ConfigError::EmptyName {
            index,
            what: "service",
        });
    }
    if raw.method.is_empty() {
        return Err(ConfigError::EmptyName {
            index,
            what: "method",
        });
    }

    let mut fields = Vec::with_capacity(raw.fields.len());
    for (key, value) in &raw.fields {
        let pattern = match key {
            YamlValue::String(s) => s.clone(),
            YamlValue::Number(n) => n.to_string(),
            _ => {
                return Err(ConfigError::InvalidPatternKey {
                    index,
                    service: raw.service.clone(),
                    method: raw.method.clone(),
                })
            }
        };

        let field = FieldOverride::new(&pattern, GeneratorDirective::from_yaml(value)).map_err(
            |source| ConfigError::InvalidPattern {
                index,
                service: raw.service.clone(),
                method: raw.method.clone(),
                pattern: pattern.clone(),
                source,
            },
        )?;
        fields.push(field);
    }

    Ok(OverrideRule {
        service: raw.service,
        method: raw.method,
        fields,
    })
}
