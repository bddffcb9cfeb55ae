//! Template loading and management

use grpc_gateway_generator_common::{GeneratorError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    // Override the builtin capitalize: setter names need the tail of the
    // identifier preserved (userId -> UserId, not Userid).
    tera.register_filter("capitalize", capitalize_filter);

    tera.add_raw_template(
        "rest_class.java",
        include_str!("../templates/rest_class.java.tera"),
    )
    .map_err(|e| {
        GeneratorError::Generation(format!("Failed to load rest_class.java template: {}", e))
    })?;

    Ok(tera)
}

/// Filter to capitalize the first letter, leaving the rest intact
fn capitalize_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("capitalize filter expects a string"))?;

    if s.is_empty() {
        return Ok(Value::String(s.to_string()));
    }

    let mut chars = s.chars();
    let first = chars.next().unwrap().to_uppercase().to_string();
    let rest: String = chars.collect();

    Ok(Value::String(format!("{}{}", first, rest)))
}
