//! HTTP client for the external Alfred MCP Server.
//!
//! Layout:
//! - `types.rs`: request/response bodies (camelCase on the wire)
//! - `client.rs`: the four-endpoint client used by the debug trigger

pub mod client;
pub mod types;

pub use client::AlfredClient;
pub use types::{ClientInfo, TextReply};
