//! proto-examples library
//!
//! Generates example request and response payloads for gRPC methods declared
//! in `.proto` files, with field values steered by regex-based override rules.
//!
//! # Crates
//!
//! - `example_core` - Schema descriptors, example values and override rules
//! - `example_generator` - Generator catalog, type defaults and the synthesizer
//! - `proto_schema` - `.proto` parsing into a schema tree
//!
//! This crate adds method selection and output rendering on top.
//!
//! # CLI Usage
//!
//! ```bash
//! # Interactive: list methods, then type 1/1 or Service/Method
//! proto-examples --proto api/shop.proto
//!
//! # Non-interactive, compact JSON, reproducible random values
//! proto-examples --proto api/shop.proto --include api \
//!   --overrides overrides.yaml --method OrderService/GetOrder --uglify --seed 42
//! ```

pub mod output;
pub mod selection;

pub use output::{grpcurl_command, render, JsonStyle, OutputError, Report};
pub use selection::{MethodEntry, MethodIndex, Selection, SelectionError};
