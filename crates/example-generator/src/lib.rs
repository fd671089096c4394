//! Example payload generator for proto-examples.
//!
//! This crate turns a parsed [`SchemaTree`](example_core::SchemaTree) and a set of
//! override rules into example request and response objects for a gRPC method.
//!
//! # Architecture
//!
//! ```text
//! SchemaTree + OverrideConfig
//!        │
//!        ▼
//! ┌──────────────────────┐
//! │ ExampleSynthesizer   │
//! │                      │
//! │  - OverrideResolver  │──▶ generators (catalog)
//! │  - rng (StdRng)      │──▶ type_default (fallback)
//! │  - max_depth         │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!    MethodExamples { request, response }
//! ```
//!
//! # Example
//!
//! ```rust
//! use example_core::{FieldDescriptor, OverrideConfig, SchemaTree, WireType};
//! use example_generator::ExampleSynthesizer;
//!
//! let overrides = OverrideConfig::from_yaml(r#"
//! overrides:
//!   - service: "*"
//!     method: "*"
//!     fields:
//!       "^city$": city
//! "#).unwrap();
//! let schema = SchemaTree::new();
//!
//! let fields = vec![
//!     FieldDescriptor::scalar("city", WireType::String),
//!     FieldDescriptor::scalar("count", WireType::Int32),
//! ];
//! let mut synthesizer = ExampleSynthesizer::new(&schema, &overrides).with_seed(42);
//! let example = synthesizer.synthesize("AnyService", "AnyMethod", &fields);
//! assert_eq!(example.len(), 2);
//! ```
//!
//! # Generators
//!
//! Override directives may name one of the catalog generators:
//!
//! - `uuid` - Random UUID v4
//! - `imo` - Seven-digit ship identifier (integer)
//! - `first_name`, `last_name`, `email`, `phone` - Person details
//! - `iso_date`, `iso_time`, `iso_datetime` - Current local date/time
//! - `country_name`, `country_code`, `city` - Locations

pub mod defaults;
pub mod generators;
pub mod resolver;
pub mod synthesizer;

pub use defaults::{type_default, ENUM_PLACEHOLDER, NOT_SUPPORTED, STRING_PLACEHOLDER, UNKNOWN_TYPE};
pub use generators::ValueGenerator;
pub use resolver::{OverrideMatch, OverrideResolver, ResolvedOverride};
pub use synthesizer::{
    ExampleSynthesizer, GeneratorError, MethodExamples, DEFAULT_MAX_DEPTH, DEFAULT_MAX_MESSAGES,
    DEFAULT_MAX_RECURSION, MAX_DEPTH_EXCEEDED,
};
