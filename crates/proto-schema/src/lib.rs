//! Protobuf schema loading for proto-examples.
//!
//! Parses `.proto` files with the pure-Rust `protobuf-parse` frontend and
//! flattens the resulting descriptors into a [`SchemaTree`](example_core::SchemaTree):
//! every message (nested ones included) keyed by its fully-qualified name, and
//! every service with its methods in declaration order.
//!
//! ```rust,no_run
//! use proto_schema::ProtoParser;
//!
//! let tree = ProtoParser::new()
//!     .include("protos")
//!     .parse_files(&["protos/shop.proto"])
//!     .unwrap();
//! for service in &tree.services {
//!     println!("{}", service.full_name());
//! }
//! ```

pub mod error;
pub mod parser;

pub use error::{Error, Result};
pub use parser::ProtoParser;
