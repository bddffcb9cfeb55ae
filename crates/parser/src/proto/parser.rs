//! Proto definition file parser

use super::scanner::LineScanner;
use grpc_gateway_generator_common::{GeneratorError, Result, ServiceDefinition};
use std::fs;
use std::path::Path;

/// Proto/gRPC service parser
///
/// Reads a `.proto` definition file and extracts service definitions,
/// RPC methods, and HTTP transcoding bindings.
pub struct ProtoParser {
    /// Full definition source text
    source: String,
}

impl ProtoParser {
    /// Load proto source from a file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = ProtoParser::from_file("user.proto")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read proto file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Ok(Self::from_source(&source))
    }

    /// Create a parser over in-memory proto source
    pub fn from_source(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }

    /// Scan the source into service definitions, in declaration order
    ///
    /// The scan itself never fails; unrecognized lines are skipped.
    pub fn parse(&self) -> Vec<ServiceDefinition> {
        LineScanner::new(&self.source).scan()
    }

    /// Get the underlying source text
    pub fn source(&self) -> &str {
        &self.source
    }
}
