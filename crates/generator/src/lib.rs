//! REST gateway class generation
//!
//! This crate renders one JAX-RS gateway class per parsed service. Each
//! RPC method becomes an HTTP endpoint that delegates to a blocking gRPC
//! stub named after the service.

mod templates;

use grpc_gateway_generator_common::{GeneratorError, Result, ServiceDefinition};
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;

/// Gateway generator
///
/// Transforms parsed service definitions into one `<Name>Rest.java`
/// artifact per service. Rendering is deterministic and writes always
/// overwrite existing files.
pub struct GatewayGenerator {
    services: Vec<ServiceDefinition>,
    tera: Tera,
}

impl GatewayGenerator {
    /// Create a new generator from parsed service definitions
    pub fn new(services: Vec<ServiceDefinition>) -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { services, tera })
    }

    /// Generate one REST class per service into a directory
    ///
    /// The directory is created recursively if missing. Returns the paths
    /// of the written files in service declaration order, so the caller
    /// can report them.
    pub fn generate_to_directory(&self, output_dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir).map_err(|e| {
            GeneratorError::Generation(format!("Failed to create output directory: {}", e))
        })?;

        let mut written = Vec::with_capacity(self.services.len());
        for service in &self.services {
            written.push(self.generate_rest_class(output_dir, service)?);
        }

        Ok(written)
    }

    /// Render and write one service's REST class
    fn generate_rest_class(&self, output_dir: &Path, service: &ServiceDefinition) -> Result<PathBuf> {
        let mut context = tera::Context::new();
        context.insert("service", service);
        context.insert("service_name", &service.name);
        context.insert("service_path", &service.name.to_lowercase());

        let rendered = self
            .tera
            .render("rest_class.java", &context)
            .map_err(|e| GeneratorError::Generation(format!("Template error: {}", e)))?;

        let output_path = output_dir.join(format!("{}Rest.java", service.name));
        fs::write(&output_path, rendered).map_err(|e| {
            GeneratorError::Generation(format!(
                "Failed to write {}Rest.java: {}",
                service.name, e
            ))
        })?;

        Ok(output_path)
    }

    /// Services this generator will render
    pub fn services(&self) -> &[ServiceDefinition] {
        &self.services
    }
}

/// Generate gateway artifacts (convenience function)
pub fn generate_gateway(
    services: Vec<ServiceDefinition>,
    output_path: &str,
) -> Result<Vec<PathBuf>> {
    let generator = GatewayGenerator::new(services)?;
    generator.generate_to_directory(Path::new(output_path))
}
