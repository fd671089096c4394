//! Core types for proto-examples.
//!
//! This crate provides the foundational types shared by the schema parser,
//! the example generator and the CLI:
//!
//! - [`SchemaTree`] - Parsed services, methods and messages
//! - [`FieldDescriptor`] / [`WireType`] - Field metadata consumed by the synthesizer
//! - [`ExampleValue`] / [`ExampleObject`] - Generated example structures
//! - [`OverrideConfig`] - Validated field override rules loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! example-core (this crate)
//!    │
//!    ├─── proto-schema        (builds SchemaTree from .proto files)
//!    │
//!    ├─── example-generator   (walks SchemaTree, applies OverrideConfig)
//!    │
//!    └─── proto-examples      (CLI: selection and rendering)
//! ```
//!
//! # Example
//!
//! ```rust
//! use example_core::{ExampleObject, ExampleValue, OverrideConfig};
//!
//! let config = OverrideConfig::from_yaml(r#"
//! overrides:
//!   - service: "*"
//!     method: "*"
//!     fields:
//!       "^id$": uuid
//! "#).unwrap();
//! assert_eq!(config.rules().len(), 1);
//!
//! let mut example = ExampleObject::new();
//! example.insert("id", ExampleValue::string("abc"));
//! assert_eq!(serde_json::to_string(&example).unwrap(), r#"{"id":"abc"}"#);
//! ```

pub mod overrides;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use overrides::{
    ConfigError, FieldOverride, GeneratorDirective, GeneratorKind, OverrideConfig, OverrideRule,
    RuleScope, WILDCARD,
};
pub use schema::{
    FieldDescriptor, MessageDescriptor, MethodDescriptor, SchemaError, SchemaTree,
    ServiceDescriptor, WireType, TIMESTAMP_TYPE,
};
pub use values::{ExampleObject, ExampleValue};
