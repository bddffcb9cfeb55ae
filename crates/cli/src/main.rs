//! gRPC Gateway Generator CLI
//!
//! Command-line interface for generating JAX-RS REST gateway classes
//! from gRPC service definitions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use grpc_gateway_generator_generator::GatewayGenerator;
use grpc_gateway_generator_parser::ProtoParser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "grpc-gateway-generator")]
#[command(version, about = "Generate REST gateway classes from gRPC service definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a .proto file and display the extracted services
    #[command(after_help = "EXAMPLES:\n  \
        # Show the services and bindings found in a proto file\n  \
        grpc-gateway-generator parse --proto user.proto\n\n  \
        # Dump the parsed model as JSON\n  \
        grpc-gateway-generator parse --proto user.proto --json")]
    Parse {
        /// Path to the .proto file
        #[arg(short, long)]
        proto: PathBuf,

        /// Print the parsed model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate one REST gateway class per service
    #[command(after_help = "EXAMPLES:\n  \
        # Generate gateway classes next to the proto file\n  \
        grpc-gateway-generator generate \\\n    \
        --proto user.proto \\\n    \
        --output ./generated_rest_classes")]
    Generate {
        /// Path to the .proto file
        #[arg(short, long)]
        proto: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "./generated")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { proto, json } => {
            parse_command(proto.as_path(), json, cli.verbose)?;
        }
        Commands::Generate { proto, output } => {
            generate_command(proto.as_path(), output.as_path(), cli.verbose)?;
        }
    }

    Ok(())
}

fn parse_command(proto_path: &Path, json: bool, verbose: bool) -> Result<()> {
    println!(
        "{} Parsing proto file: {}",
        "→".cyan(),
        proto_path.display()
    );

    let parser = ProtoParser::from_file(proto_path).context("Failed to load proto file")?;
    let services = parser.parse();

    if json {
        println!("{}", serde_json::to_string_pretty(&services)?);
        return Ok(());
    }

    println!(
        "{} Found {} service(s)",
        "✓".green(),
        services.len().to_string().yellow()
    );

    for service in &services {
        println!("\n{}", service.name.bold());
        for method in &service.methods {
            let binding = if method.path.is_empty() {
                format!("{} (default)", method.http_method)
            } else {
                format!("{} {}", method.http_method, method.path)
            };
            println!(
                "  • {} ({} → {}) [{}]",
                method.name.cyan(),
                method.request_type,
                method.response_type,
                binding.yellow()
            );
            if verbose {
                match &method.param {
                    Some(param) => println!("    Path param: {}", param),
                    None => println!("    Path param: none"),
                }
            }
        }
    }

    Ok(())
}

fn generate_command(proto_path: &Path, output: &Path, verbose: bool) -> Result<()> {
    println!(
        "{} Parsing proto file: {}",
        "→".cyan(),
        proto_path.display()
    );

    let parser = ProtoParser::from_file(proto_path).context("Failed to load proto file")?;
    let services = parser.parse();

    println!(
        "{} Found {} service(s)",
        "✓".green(),
        services.len().to_string().yellow()
    );

    if verbose {
        for service in &services {
            println!("  {} ({} methods)", service.name, service.methods.len());
        }
    }

    println!("{} Generating REST gateway classes...", "→".cyan());

    let generator = GatewayGenerator::new(services).context("Failed to create generator")?;
    let written = generator
        .generate_to_directory(output)
        .context("Failed to generate gateway classes")?;

    for path in &written {
        println!("{} Generated: {}", "✓".green(), path.display());
    }

    println!("\n{}", "✓ Generation complete!".green().bold());

    Ok(())
}
