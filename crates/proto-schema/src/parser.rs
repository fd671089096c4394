use crate::error::{Error, Result};
use example_core::{
    FieldDescriptor, MessageDescriptor, MethodDescriptor, SchemaTree, ServiceDescriptor, WireType,
};
use protobuf::descriptor::field_descriptor_proto::{Label, Type};
use protobuf::descriptor::{DescriptorProto, FieldDescriptorProto, FileDescriptorProto};
use protobuf_parse::Parser;
use std::path::{Path, PathBuf};

/// Loads `.proto` files into a [`SchemaTree`].
#[derive(Debug, Clone, Default)]
pub struct ProtoParser {
    includes: Vec<PathBuf>,
}

impl ProtoParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import search directory.
    pub fn include<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.includes.push(dir.as_ref().to_path_buf());
        self
    }

    /// Parse and typecheck the given files along with everything they import.
    ///
    /// Each input's parent directory is also searched for imports.
    pub fn parse_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<SchemaTree> {
        if paths.is_empty() {
            return Err(Error::NoInputFiles);
        }

        let mut includes = self.includes.clone();
        for path in paths {
            if let Some(parent) = path.as_ref().parent() {
                if !includes.iter().any(|dir| dir == parent) {
                    includes.push(parent.to_path_buf());
                }
            }
        }

        let mut parser = Parser::new();
        parser.includes(&includes);
        for path in paths {
            parser.input(path.as_ref());
        }

        let parsed = parser
            .parse_and_typecheck()
            .map_err(|e| Error::ProtobufParse(format!("{e:#}")))?;

        let mut tree = SchemaTree::new();
        for file_descriptor in &parsed.file_descriptors {
            collect_file(&mut tree, file_descriptor);
        }

        tracing::debug!(
            files = parsed.file_descriptors.len(),
            services = tree.services.len(),
            messages = tree.messages.len(),
            "Parsed proto schema"
        );

        Ok(tree)
    }

    /// Parse `.proto` content from a string.
    pub fn parse_str(&self, content: &str) -> Result<SchemaTree> {
        use std::io::Write;

        let mut temp_file = tempfile::Builder::new()
            .prefix("schema")
            .suffix(".proto")
            .tempfile()?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;

        self.parse_files(&[temp_file.path()])
    }
}

fn collect_file(tree: &mut SchemaTree, file_descriptor: &FileDescriptorProto) {
    let package = file_descriptor
        .package
        .clone()
        .filter(|p| !p.is_empty());

    for message in &file_descriptor.message_type {
        collect_message(tree, package.as_deref(), message);
    }

    for service in &file_descriptor.service {
        let methods = service
            .method
            .iter()
            .map(|m| MethodDescriptor {
                name: m.name.clone().unwrap_or_default(),
                input_type: strip_leading_dot(m.input_type.as_deref().unwrap_or_default()),
                output_type: strip_leading_dot(m.output_type.as_deref().unwrap_or_default()),
            })
            .collect();

        tree.add_service(ServiceDescriptor {
            name: service.name.clone().unwrap_or_default(),
            package: package.clone(),
            methods,
        });
    }
}

/// Register a message and, recursively, its nested types.
fn collect_message(tree: &mut SchemaTree, scope: Option<&str>, message: &DescriptorProto) {
    let simple_name = message.name.as_deref().unwrap_or_default();
    let full_name = match scope {
        Some(scope) => format!("{scope}.{simple_name}"),
        None => simple_name.to_string(),
    };

    for nested in &message.nested_type {
        collect_message(tree, Some(&full_name), nested);
    }

    let fields = message
        .field
        .iter()
        .filter(|f| f.name.as_deref().is_some_and(|n| !n.is_empty()))
        .map(convert_field)
        .collect();

    tree.add_message(MessageDescriptor::new(full_name, fields));
}

fn convert_field(field: &FieldDescriptorProto) -> FieldDescriptor {
    let wire_type = field
        .type_
        .and_then(|t| t.enum_value().ok())
        .map(map_wire_type)
        .unwrap_or(WireType::Unknown);

    FieldDescriptor {
        name: field.name.clone().unwrap_or_default(),
        wire_type,
        repeated: field.label == Some(Label::LABEL_REPEATED.into()),
        type_name: field
            .type_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .map(strip_leading_dot),
    }
}

fn map_wire_type(t: Type) -> WireType {
    match t {
        Type::TYPE_DOUBLE => WireType::Double,
        Type::TYPE_FLOAT => WireType::Float,
        Type::TYPE_INT64 => WireType::Int64,
        Type::TYPE_UINT64 => WireType::Uint64,
        Type::TYPE_INT32 => WireType::Int32,
        Type::TYPE_FIXED64 => WireType::Fixed64,
        Type::TYPE_FIXED32 => WireType::Fixed32,
        Type::TYPE_BOOL => WireType::Bool,
        Type::TYPE_STRING => WireType::String,
        Type::TYPE_GROUP => WireType::Group,
        Type::TYPE_MESSAGE => WireType::Message,
        Type::TYPE_BYTES => WireType::Bytes,
        Type::TYPE_UINT32 => WireType::Uint32,
        Type::TYPE_ENUM => WireType::Enum,
        Type::TYPE_SFIXED32 => WireType::Sfixed32,
        Type::TYPE_SFIXED64 => WireType::Sfixed64,
        Type::TYPE_SINT32 => WireType::Sint32,
        Type::TYPE_SINT64 => WireType::Sint64,
    }
}

fn strip_leading_dot(name: &str) -> String {
    name.trim_start_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOP_PROTO: &str = r#"
        syntax = "proto3";
        package shop.v1;

        enum Status {
            STATUS_UNSPECIFIED = 0;
            STATUS_OPEN = 1;
        }

        message Order {
            message Line {
                string sku = 1;
                uint32 quantity = 2;
            }

            string id = 1;
            repeated Line lines = 2;
            Status status = 3;
            bytes blob = 4;
            repeated string tags = 5;
        }

        message GetOrderRequest {
            string id = 1;
        }

        service OrderService {
            rpc GetOrder(GetOrderRequest) returns (Order);
            rpc ListOrders(GetOrderRequest) returns (stream Order);
        }
    "#;

    #[test]
    fn test_parse_messages_with_package() {
        let tree = ProtoParser::new()
            .parse_str(SHOP_PROTO)
            .expect("Failed to parse proto");

        let order = tree.get_message("shop.v1.Order").expect("Order not found");
        let names: Vec<&str> = order.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "lines", "status", "blob", "tags"]);

        let id = order.get_field("id").unwrap();
        assert_eq!(id.wire_type, WireType::String);
        assert!(!id.repeated);

        let blob = order.get_field("blob").unwrap();
        assert_eq!(blob.wire_type, WireType::Bytes);

        let tags = order.get_field("tags").unwrap();
        assert!(tags.repeated);
        assert_eq!(tags.wire_type, WireType::String);
    }

    #[test]
    fn test_nested_messages_are_fully_qualified() {
        let tree = ProtoParser::new().parse_str(SHOP_PROTO).unwrap();

        let order = tree.get_message("shop.v1.Order").unwrap();
        let lines = order.get_field("lines").unwrap();
        assert!(lines.repeated);
        assert_eq!(lines.wire_type, WireType::Message);
        assert_eq!(lines.type_name.as_deref(), Some("shop.v1.Order.Line"));

        let line = tree
            .get_message("shop.v1.Order.Line")
            .expect("nested Line not found");
        assert_eq!(line.get_field("quantity").unwrap().wire_type, WireType::Uint32);
    }

    #[test]
    fn test_enum_field() {
        let tree = ProtoParser::new().parse_str(SHOP_PROTO).unwrap();

        let status = tree
            .get_message("shop.v1.Order")
            .unwrap()
            .get_field("status")
            .unwrap();
        assert_eq!(status.wire_type, WireType::Enum);
        assert_eq!(status.type_name.as_deref(), Some("shop.v1.Status"));
    }

    #[test]
    fn test_services_and_methods() {
        let tree = ProtoParser::new().parse_str(SHOP_PROTO).unwrap();

        assert_eq!(tree.services.len(), 1);
        let service = &tree.services[0];
        assert_eq!(service.name, "OrderService");
        assert_eq!(service.package.as_deref(), Some("shop.v1"));
        assert_eq!(service.full_name(), "shop.v1.OrderService");

        let (_, method) = tree.find_method("OrderService", "GetOrder").unwrap();
        assert_eq!(method.input_type, "shop.v1.GetOrderRequest");
        assert_eq!(method.output_type, "shop.v1.Order");

        let method_names: Vec<&str> = service.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(method_names, vec!["GetOrder", "ListOrders"]);
    }

    #[test]
    fn test_parse_without_package() {
        let proto = r#"
            syntax = "proto3";

            message Ping {
                int64 sent_at = 1;
            }

            service Health {
                rpc Check(Ping) returns (Ping);
            }
        "#;

        let tree = ProtoParser::new().parse_str(proto).unwrap();
        assert!(tree.get_message("Ping").is_some());
        assert_eq!(tree.services[0].package, None);
        assert_eq!(tree.services[0].full_name(), "Health");
    }

    #[test]
    fn test_parse_all_numeric_types() {
        let proto = r#"
            syntax = "proto3";

            message NumericTypes {
                int32 int32_field = 1;
                int64 int64_field = 2;
                uint32 uint32_field = 3;
                uint64 uint64_field = 4;
                sint32 sint32_field = 5;
                sint64 sint64_field = 6;
                fixed32 fixed32_field = 7;
                fixed64 fixed64_field = 8;
                sfixed32 sfixed32_field = 9;
                sfixed64 sfixed64_field = 10;
                float float_field = 11;
                double double_field = 12;
                bool bool_field = 13;
            }
        "#;

        let tree = ProtoParser::new().parse_str(proto).unwrap();
        let msg = tree.get_message("NumericTypes").unwrap();

        let expected = [
            ("int32_field", WireType::Int32),
            ("int64_field", WireType::Int64),
            ("uint32_field", WireType::Uint32),
            ("uint64_field", WireType::Uint64),
            ("sint32_field", WireType::Sint32),
            ("sint64_field", WireType::Sint64),
            ("fixed32_field", WireType::Fixed32),
            ("fixed64_field", WireType::Fixed64),
            ("sfixed32_field", WireType::Sfixed32),
            ("sfixed64_field", WireType::Sfixed64),
            ("float_field", WireType::Float),
            ("double_field", WireType::Double),
            ("bool_field", WireType::Bool),
        ];
        for (name, wire_type) in expected {
            assert_eq!(msg.get_field(name).unwrap().wire_type, wire_type, "{name}");
        }
    }

    #[test]
    fn test_imports_resolved_from_include_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("common.proto"),
            r#"
                syntax = "proto3";
                package common;
                message Money {
                    string currency = 1;
                    int64 units = 2;
                }
            "#,
        )
        .unwrap();
        let main = dir.path().join("billing.proto");
        std::fs::write(
            &main,
            r#"
                syntax = "proto3";
                package billing;
                import "common.proto";
                message Invoice {
                    common.Money total = 1;
                }
                service Billing {
                    rpc Get(Invoice) returns (Invoice);
                }
            "#,
        )
        .unwrap();

        let tree = ProtoParser::new()
            .include(dir.path())
            .parse_files(&[&main])
            .unwrap();

        let total = tree
            .get_message("billing.Invoice")
            .unwrap()
            .get_field("total")
            .unwrap();
        assert_eq!(total.type_name.as_deref(), Some("common.Money"));
        assert!(tree.get_message("common.Money").is_some());
    }

    #[test]
    fn test_syntax_error() {
        let result = ProtoParser::new().parse_str("message Broken { string = ; }");
        assert!(matches!(result, Err(Error::ProtobufParse(_))));
    }

    #[test]
    fn test_no_input_files() {
        let paths: [&str; 0] = [];
        let result = ProtoParser::new().parse_files(&paths);
        assert!(matches!(result, Err(Error::NoInputFiles)));
    }
}
