mod config;
mod mcp;
mod schemas;

pub use config::{Config, ServerConfig};
pub use mcp::McpServer;
pub use schemas::*;
