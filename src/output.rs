//! Rendering of generated examples.

use example_core::{ExampleObject, ServiceDescriptor};
use example_generator::MethodExamples;
use serde::Serialize;
use std::fmt;

/// Placeholder prefix used when the service was declared without a package.
pub const SERVICE_VERSION_PLACEHOLDER: &str = "${API_PROTO_SERVICE_VERSION}";

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to serialize example: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Serialized example is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// JSON layout for rendered documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Indented with four spaces
    #[default]
    Pretty,
    /// Single line
    Compact,
}

impl JsonStyle {
    pub fn from_uglify(uglify: bool) -> Self {
        if uglify {
            JsonStyle::Compact
        } else {
            JsonStyle::Pretty
        }
    }
}

/// Serialize an example object as JSON.
pub fn render(example: &ExampleObject, style: JsonStyle) -> Result<String, OutputError> {
    match style {
        JsonStyle::Compact => Ok(serde_json::to_string(example)?),
        JsonStyle::Pretty => {
            let mut buf = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
            example.serialize(&mut serializer)?;
            Ok(String::from_utf8(buf)?)
        }
    }
}

/// Build an advisory grpcurl invocation for a request body.
///
/// Connection details are left as shell placeholders.
pub fn grpcurl_command(service: &ServiceDescriptor, method: &str, request_json: &str) -> String {
    let target = match service.package.as_deref() {
        Some(package) if !package.is_empty() => format!("{package}.{}/{method}", service.name),
        _ => format!("{SERVICE_VERSION_PLACEHOLDER}.{}/{method}", service.name),
    };
    let body = request_json.replace('\'', r"'\''");

    format!(
        "grpcurl -d '{body}' -H \"Authorization: Bearer ${{TOKEN}}\" -plaintext ${{HOST}}:${{PORT}} {target}"
    )
}

/// Rendered request, response and grpcurl call for one method.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub request: String,
    pub grpcurl: String,
    pub response: String,
}

impl Report {
    pub fn assemble(
        service: &ServiceDescriptor,
        method: &str,
        examples: &MethodExamples,
        style: JsonStyle,
    ) -> Result<Self, OutputError> {
        let request = render(&examples.request, style)?;
        let response = render(&examples.response, style)?;
        let grpcurl = grpcurl_command(service, method, &request);

        Ok(Self {
            request,
            grpcurl,
            response,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Request example:\n{}\n\n", self.request)?;
        write!(f, "gRPCurl call example:\n{}\n\n", self.grpcurl)?;
        write!(f, "Response example:\n{}\n\n", self.response)
    }
}
