//! Example value synthesizer.
//!
//! Walks a message's field list and produces one example entry per field:
//!
//! 1. Base value: type default for scalars, a recursively synthesized object
//!    for messages, the current instant for the well-known timestamp. Repeated
//!    fields wrap the base value in a single-element list.
//! 2. A matching override replaces the base value.
//! 3. For message fields whose override is structural, the synthesized nested
//!    keys are merged into the override (nested keys win).
//!
//! Recursion into nested messages is bounded three ways: total nesting depth,
//! how often one message type may repeat on the current path, and the number
//! of messages synthesized per call. Whichever limit trips first yields the
//! `MAX_DEPTH_EXCEEDED` sentinel for that field.

use crate::defaults::{type_default, UNKNOWN_TYPE};
use crate::generators::timestamp::generate_timestamp_now;
use crate::resolver::{OverrideResolver, ResolvedOverride};
use example_core::{
    ExampleObject, ExampleValue, FieldDescriptor, OverrideConfig, SchemaError, SchemaTree,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default nesting limit for message recursion.
pub const DEFAULT_MAX_DEPTH: usize = 8;
/// Default number of times one message type may appear on a recursion path.
pub const DEFAULT_MAX_RECURSION: usize = 2;
/// Default number of nested messages synthesized per top-level object.
pub const DEFAULT_MAX_MESSAGES: usize = 10_000;
/// Value substituted for a message past any recursion limit.
pub const MAX_DEPTH_EXCEEDED: &str = "MAX_DEPTH_EXCEEDED";

/// Error type for synthesizer operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Service, method or message missing from the schema
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl GeneratorError {
    /// Whether the selected service or method does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GeneratorError::Schema(
                SchemaError::ServiceNotFound(_) | SchemaError::MethodNotFound { .. }
            )
        )
    }
}

/// Request and response examples for one method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodExamples {
    pub request: ExampleObject,
    pub response: ExampleObject,
}

/// Produces example objects for messages in a schema.
pub struct ExampleSynthesizer<'a> {
    /// Schema used to look up nested message types
    schema: &'a SchemaTree,
    /// Override rules, read-only for the lifetime of the synthesizer
    resolver: OverrideResolver<'a>,
    /// RNG for generators that draw randomness
    rng: StdRng,
    /// Maximum message nesting depth
    max_depth: usize,
    /// Maximum occurrences of one message type on a recursion path
    max_recursion: usize,
    /// Maximum nested messages per top-level object
    max_messages: usize,
    /// Nested messages synthesized so far for the current object
    messages: usize,
}

impl<'a> ExampleSynthesizer<'a> {
    /// Create a synthesizer seeded from OS entropy.
    pub fn new(schema: &'a SchemaTree, overrides: &'a OverrideConfig) -> Self {
        Self {
            schema,
            resolver: OverrideResolver::new(overrides),
            rng: StdRng::from_entropy(),
            max_depth: DEFAULT_MAX_DEPTH,
            max_recursion: DEFAULT_MAX_RECURSION,
            max_messages: DEFAULT_MAX_MESSAGES,
            messages: 0,
        }
    }

    /// Re-seed the RNG. Clock-based generators stay non-deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Set the maximum message nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set how many times one message type may appear on a recursion path.
    pub fn with_max_recursion(mut self, max_recursion: usize) -> Self {
        self.max_recursion = max_recursion;
        self
    }

    /// Set the nested message budget per top-level object.
    pub fn with_max_messages(mut self, max_messages: usize) -> Self {
        self.max_messages = max_messages;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Generate request and response examples for a method.
    pub fn synthesize_method(
        &mut self,
        service: &str,
        method: &str,
    ) -> Result<MethodExamples, GeneratorError> {
        let schema = self.schema;
        let (_, method_desc) = schema.find_method(service, method)?;

        tracing::debug!(service, method, "Generating request fields");
        let request = self.synthesize_message(service, method, &method_desc.input_type)?;

        tracing::debug!(service, method, "Generating response fields");
        let response = self.synthesize_message(service, method, &method_desc.output_type)?;

        Ok(MethodExamples { request, response })
    }

    /// Generate an example object for a named message type.
    ///
    /// The root type counts towards its own recursion limit.
    pub fn synthesize_message(
        &mut self,
        service: &str,
        method: &str,
        type_name: &str,
    ) -> Result<ExampleObject, GeneratorError> {
        let schema = self.schema;
        let message = schema
            .get_message(type_name)
            .ok_or_else(|| SchemaError::MessageTypeNotFound(type_name.to_string()))?;

        self.messages = 0;
        let mut path = vec![message.full_name.as_str()];
        Ok(self.synthesize_at(service, method, &message.fields, 0, &mut path))
    }

    /// Generate an example object for a field list.
    pub fn synthesize(
        &mut self,
        service: &str,
        method: &str,
        fields: &[FieldDescriptor],
    ) -> ExampleObject {
        self.messages = 0;
        self.synthesize_at(service, method, fields, 0, &mut Vec::new())
    }

    fn synthesize_at(
        &mut self,
        service: &str,
        method: &str,
        fields: &[FieldDescriptor],
        depth: usize,
        path: &mut Vec<&'a str>,
    ) -> ExampleObject {
        let mut example = ExampleObject::new();
        for field in fields {
            let value = self.field_value(service, method, field, depth, path);
            example.insert(field.name.clone(), value);
        }
        example
    }

    fn field_value(
        &mut self,
        service: &str,
        method: &str,
        field: &FieldDescriptor,
        depth: usize,
        path: &mut Vec<&'a str>,
    ) -> ExampleValue {
        let resolved = self
            .resolver
            .resolve(&mut self.rng, service, method, &field.name);

        match resolved {
            None => {
                let single = if field.is_timestamp() {
                    generate_timestamp_now()
                } else if field.is_message() {
                    match self.nested_example(service, method, field, depth, path) {
                        Ok(obj) => ExampleValue::Object(obj),
                        Err(sentinel) => ExampleValue::string(sentinel),
                    }
                } else {
                    type_default(field.wire_type)
                };

                let value = if field.repeated {
                    ExampleValue::List(vec![single])
                } else {
                    single
                };

                tracing::debug!(
                    field = %field.name,
                    wire_type = %field.wire_type,
                    value = ?value,
                    "generated field"
                );
                value
            }
            Some(resolved) => {
                let value = match resolved {
                    ResolvedOverride::Structural(mut value)
                        if field.is_message() && !field.is_timestamp() =>
                    {
                        if let Ok(nested) = self.nested_example(service, method, field, depth, path)
                        {
                            value.merge_nested(&nested);
                        }
                        value
                    }
                    resolved => resolved.into_value(),
                };

                tracing::debug!(
                    field = %field.name,
                    wire_type = %field.wire_type,
                    value = ?value,
                    "applied override"
                );
                value
            }
        }
    }

    /// Recursively synthesize the nested message of a message field.
    ///
    /// Returns the sentinel to use instead when the type is missing from the
    /// schema or a recursion limit is reached.
    fn nested_example(
        &mut self,
        service: &str,
        method: &str,
        field: &FieldDescriptor,
        depth: usize,
        path: &mut Vec<&'a str>,
    ) -> Result<ExampleObject, &'static str> {
        if depth >= self.max_depth {
            tracing::debug!(
                field = %field.name,
                max_depth = self.max_depth,
                "Message nesting limit reached"
            );
            return Err(MAX_DEPTH_EXCEEDED);
        }

        let schema = self.schema;
        let Some(message) = field
            .type_name
            .as_deref()
            .and_then(|name| schema.get_message(name))
        else {
            tracing::warn!(
                field = %field.name,
                type_name = ?field.type_name,
                "Message type not found in schema"
            );
            return Err(UNKNOWN_TYPE);
        };

        let seen = path
            .iter()
            .filter(|name| **name == message.full_name)
            .count();
        if seen >= self.max_recursion {
            tracing::debug!(
                field = %field.name,
                type_name = %message.full_name,
                max_recursion = self.max_recursion,
                "Recursive message limit reached"
            );
            return Err(MAX_DEPTH_EXCEEDED);
        }

        if self.messages >= self.max_messages {
            tracing::warn!(
                field = %field.name,
                max_messages = self.max_messages,
                "Nested message budget exhausted"
            );
            return Err(MAX_DEPTH_EXCEEDED);
        }
        self.messages += 1;

        path.push(&message.full_name);
        let example = self.synthesize_at(service, method, &message.fields, depth + 1, path);
        path.pop();

        Ok(example)
    }
}
