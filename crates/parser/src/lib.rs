//! Service definition parsing for gRPC gateway generation
//!
//! This crate recovers a structured model of services, RPC methods, and
//! their `google.api.http` transcoding annotations from `.proto` source
//! text.
//!
//! ## Parsing Strategy
//!
//! The scanner is a best-effort, line-oriented pass rather than a
//! grammar-correct proto front end. Three line shapes are recognized:
//! - `service <Name> {` opens a service block
//! - `rpc <Name> (<Req>) returns (<Resp>) {` appends a method
//! - `option (google.api.http) = {` starts a binding block; the first
//!   following line containing `}` supplies the verb/path pair
//!
//! Everything else (imports, messages, comments, multi-line declarations)
//! is skipped without error.

mod proto;

pub use proto::ProtoParser;
