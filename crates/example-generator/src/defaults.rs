//! Type default table.
//!
//! Maps every wire type to a fixed example that sits at the edge of the
//! type's range. Values follow the proto3 JSON mapping: 64-bit integers are
//! decimal strings, 32-bit integers and floats are numbers.

use example_core::{ExampleValue, WireType};

/// Sentinel for types that have no meaningful placeholder.
pub const NOT_SUPPORTED: &str = "NOT_SUPPORTED";
/// Sentinel for types the schema could not classify.
pub const UNKNOWN_TYPE: &str = "UNKNOWN_TYPE";
/// 32-character text placeholder.
pub const STRING_PLACEHOLDER: &str = "abcdefghijklmnopqrstuvwxyzABCDEF";
/// Enum placeholder.
pub const ENUM_PLACEHOLDER: &str = "ENUM_VALUE_MAX";

/// Example value for a primitive wire type.
pub fn type_default(wire_type: WireType) -> ExampleValue {
    match wire_type {
        WireType::Double => ExampleValue::Float(f64::MAX),
        WireType::Float => ExampleValue::Float(f32::MAX as f64),
        WireType::Int64 | WireType::Sfixed64 | WireType::Sint64 => {
            ExampleValue::String(i64::MAX.to_string())
        }
        WireType::Uint64 | WireType::Fixed64 => ExampleValue::String(u64::MAX.to_string()),
        WireType::Int32 | WireType::Sfixed32 | WireType::Sint32 => {
            ExampleValue::Int(i32::MAX as i64)
        }
        WireType::Uint32 | WireType::Fixed32 => ExampleValue::UInt(u32::MAX as u64),
        WireType::Bool => ExampleValue::Bool(true),
        WireType::String => ExampleValue::string(STRING_PLACEHOLDER),
        WireType::Enum => ExampleValue::string(ENUM_PLACEHOLDER),
        WireType::Bytes | WireType::Group | WireType::Message => {
            ExampleValue::string(NOT_SUPPORTED)
        }
        WireType::Unknown => ExampleValue::string(UNKNOWN_TYPE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [WireType; 19] = [
        WireType::Double,
        WireType::Float,
        WireType::Int64,
        WireType::Uint64,
        WireType::Int32,
        WireType::Uint32,
        WireType::Fixed64,
        WireType::Fixed32,
        WireType::Sfixed32,
        WireType::Sfixed64,
        WireType::Sint32,
        WireType::Sint64,
        WireType::Bool,
        WireType::String,
        WireType::Bytes,
        WireType::Enum,
        WireType::Message,
        WireType::Group,
        WireType::Unknown,
    ];

    #[test]
    fn test_type_default_is_stable() {
        for wire_type in ALL_TYPES {
            assert_eq!(
                type_default(wire_type),
                type_default(wire_type),
                "{wire_type} default changed between calls"
            );
        }
    }

    #[test]
    fn test_string_placeholder_is_32_chars() {
        assert_eq!(STRING_PLACEHOLDER.len(), 32);
        assert_eq!(
            type_default(WireType::String),
            ExampleValue::string(STRING_PLACEHOLDER)
        );
    }

    #[test]
    fn test_numeric_extremes() {
        assert_eq!(type_default(WireType::Double), ExampleValue::Float(f64::MAX));
        assert_eq!(
            type_default(WireType::Uint64),
            ExampleValue::string("18446744073709551615")
        );
        assert_eq!(
            type_default(WireType::Sint64),
            ExampleValue::string("9223372036854775807")
        );
        assert_eq!(type_default(WireType::Int32), ExampleValue::Int(2147483647));
        assert_eq!(type_default(WireType::Fixed32), ExampleValue::UInt(4294967295));
        assert_eq!(type_default(WireType::Bool), ExampleValue::Bool(true));
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(type_default(WireType::Bytes), ExampleValue::string(NOT_SUPPORTED));
        assert_eq!(type_default(WireType::Group), ExampleValue::string(NOT_SUPPORTED));
        assert_eq!(type_default(WireType::Unknown), ExampleValue::string(UNKNOWN_TYPE));
    }
}
