//! Descriptor tree for RPC schemas.
//!
//! These types are the already-parsed view of a schema: services with their
//! methods, and messages with their fields. They are produced by the
//! `proto-schema` crate and consumed read-only by the example synthesizer.
//!
//! Message fields reference their nested type by fully-qualified name
//! rather than by pointer, so self-referential and mutually recursive
//! messages are representable without shared ownership.

use std::collections::HashMap;
use std::fmt;

/// Fully-qualified name of the well-known timestamp message.
pub const TIMESTAMP_TYPE: &str = "google.protobuf.Timestamp";

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema lookups.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SchemaError {
    /// Service not found in the schema
    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    /// Method not found on an existing service
    #[error("Method '{method}' not found in service '{service}'")]
    MethodNotFound { service: String, method: String },

    /// Message type referenced but never defined
    #[error("Message type not found: {0}")]
    MessageTypeNotFound(String),
}

// ============================================================================
// Field Types
// ============================================================================

/// Primitive data kind of a field, as declared by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    Double,
    Float,
    Int64,
    Uint64,
    Int32,
    Uint32,
    Fixed64,
    Fixed32,
    Sfixed32,
    Sfixed64,
    Sint32,
    Sint64,
    Bool,
    String,
    Bytes,
    Enum,
    Message,
    Group,
    /// A type the schema collaborator could not classify
    Unknown,
}

impl WireType {
    /// Get the protobuf type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            WireType::Double => "double",
            WireType::Float => "float",
            WireType::Int64 => "int64",
            WireType::Uint64 => "uint64",
            WireType::Int32 => "int32",
            WireType::Uint32 => "uint32",
            WireType::Fixed64 => "fixed64",
            WireType::Fixed32 => "fixed32",
            WireType::Sfixed32 => "sfixed32",
            WireType::Sfixed64 => "sfixed64",
            WireType::Sint32 => "sint32",
            WireType::Sint64 => "sint64",
            WireType::Bool => "bool",
            WireType::String => "string",
            WireType::Bytes => "bytes",
            WireType::Enum => "enum",
            WireType::Message => "message",
            WireType::Group => "group",
            WireType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Describes a single field in a message.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name, unique within its parent message
    pub name: String,
    /// Declared wire type
    pub wire_type: WireType,
    /// Whether the field is repeated
    pub repeated: bool,
    /// Fully-qualified message or enum type name (no leading dot)
    pub type_name: Option<String>,
}

impl FieldDescriptor {
    /// Create a scalar field.
    pub fn scalar(name: impl Into<String>, wire_type: WireType) -> Self {
        Self {
            name: name.into(),
            wire_type,
            repeated: false,
            type_name: None,
        }
    }

    /// Create a message-typed field referencing `type_name`.
    pub fn message(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            wire_type: WireType::Message,
            repeated: false,
            type_name: Some(type_name.into()),
        }
    }

    /// Mark this field as repeated.
    pub fn into_repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    /// Whether the field carries a nested message (message or group).
    pub fn is_message(&self) -> bool {
        matches!(self.wire_type, WireType::Message | WireType::Group)
    }

    /// Whether the field is the well-known timestamp message.
    pub fn is_timestamp(&self) -> bool {
        self.is_message() && self.type_name.as_deref() == Some(TIMESTAMP_TYPE)
    }
}

/// Describes a message type.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDescriptor {
    /// Fully-qualified message name (e.g., "shop.v1.Order")
    pub full_name: String,
    /// Fields in declaration order
    pub fields: Vec<FieldDescriptor>,
}

impl MessageDescriptor {
    pub fn new(full_name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            full_name: full_name.into(),
            fields,
        }
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

// ============================================================================
// Services
// ============================================================================

/// Describes an RPC method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    /// Method name
    pub name: String,
    /// Fully-qualified request message name
    pub input_type: String,
    /// Fully-qualified response message name
    pub output_type: String,
}

/// Describes an RPC service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDescriptor {
    /// Service name (unqualified)
    pub name: String,
    /// Package the service was declared in
    pub package: Option<String>,
    /// Methods in declaration order
    pub methods: Vec<MethodDescriptor>,
}

impl ServiceDescriptor {
    /// Fully-qualified service name.
    pub fn full_name(&self) -> String {
        match &self.package {
            Some(package) if !package.is_empty() => format!("{package}.{}", self.name),
            _ => self.name.clone(),
        }
    }

    /// Get a method by name.
    pub fn get_method(&self, name: &str) -> Option<&MethodDescriptor> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Parsed schema: services and every message they can reach.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaTree {
    /// Services in declaration order
    pub services: Vec<ServiceDescriptor>,
    /// Messages keyed by fully-qualified name
    pub messages: HashMap<String, MessageDescriptor>,
}

impl SchemaTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a message type, replacing any previous definition.
    pub fn add_message(&mut self, message: MessageDescriptor) {
        self.messages.insert(message.full_name.clone(), message);
    }

    /// Register a service.
    pub fn add_service(&mut self, service: ServiceDescriptor) {
        self.services.push(service);
    }

    /// Get a message descriptor by fully-qualified name.
    pub fn get_message(&self, name: &str) -> Option<&MessageDescriptor> {
        self.messages.get(name.trim_start_matches('.'))
    }

    /// Get a service by its unqualified name.
    pub fn get_service(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Look up a method by service and method name.
    pub fn find_method(
        &self,
        service: &str,
        method: &str,
    ) -> Result<(&ServiceDescriptor, &MethodDescriptor), SchemaError> {
        let service_desc = self
            .get_service(service)
            .ok_or_else(|| SchemaError::ServiceNotFound(service.to_string()))?;

        let method_desc =
            service_desc
                .get_method(method)
                .ok_or_else(|| SchemaError::MethodNotFound {
                    service: service.to_string(),
                    method: method.to_string(),
                })?;

        Ok((service_desc, method_desc))
    }

    /// Fields of a message, or an error when the type is not defined.
    pub fn message_fields(&self, name: &str) -> Result<&[FieldDescriptor], SchemaError> {
        self.get_message(name)
            .map(|m| m.fields.as_slice())
            .ok_or_else(|| SchemaError::MessageTypeNotFound(name.to_string()))
    }
}
