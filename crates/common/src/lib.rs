//! Common types and utilities for the gRPC Gateway Generator
//!
//! This crate contains the shared service/method model and error types
//! used across the parser, generator, and CLI components.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during gateway generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// HTTP verb carried by a transcoding annotation
///
/// Defaults to `Post` for methods with no `google.api.http` binding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Parse a verb name case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            _ => None,
        }
    }

    /// Uppercase verb name as it appears in generated code
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One RPC method declared inside a service block
///
/// Request and response types are opaque identifiers; they are never
/// resolved against message definitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDefinition {
    /// Method name, unique within its service
    pub name: String,

    /// Request message type identifier
    pub request_type: String,

    /// Response message type identifier
    pub response_type: String,

    /// HTTP verb from the transcoding annotation, POST when absent
    #[serde(default)]
    pub http_method: HttpMethod,

    /// URL path template, empty when no binding was found
    #[serde(default)]
    pub path: String,

    /// First `{placeholder}` captured from `path`, if any
    #[serde(default)]
    pub param: Option<String>,
}

impl MethodDefinition {
    /// Create a method with default binding (POST, no path, no param)
    pub fn new(name: &str, request_type: &str, response_type: &str) -> Self {
        Self {
            name: name.to_string(),
            request_type: request_type.to_string(),
            response_type: response_type.to_string(),
            http_method: HttpMethod::default(),
            path: String::new(),
            param: None,
        }
    }
}

/// A named service block and its RPC methods, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Service name as declared in the source
    pub name: String,

    /// Methods in declaration order
    pub methods: Vec<MethodDefinition>,
}

impl ServiceDefinition {
    /// Create an empty service
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            methods: Vec::new(),
        }
    }
}
