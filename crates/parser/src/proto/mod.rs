//! Proto source scanning
//!
//! `parser` owns loading and the public API; `scanner` holds the
//! line-driven state machine and the HTTP binding rule.

mod parser;
mod scanner;

pub use parser::ProtoParser;
