use super::schemas::AppCardInput;
use cardmeta_core::html::render_meta_tags;
use cardmeta_core::{AppCardService, CardError};
use rmcp::handler::server::{router::tool::ToolRouter, tool::Parameters, ServerHandler};
use rmcp::model::{CallToolResult, Content, ErrorCode, ErrorData as McpError, Implementation, InitializeResult, ProtocolVersion, ServerCapabilities};
use rmcp::{tool, tool_handler, tool_router};
use serde_json::{json, Value};
use std::{borrow::Cow, future::Future};
use tracing::{info, warn};

/// MCP Server for cardmeta
#[derive(Clone)]
pub struct McpServer {
    service: AppCardService,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl McpServer {
    /// Create a new MCP server with the given card service
    pub fn new(service: AppCardService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Render an app card
    #[tool(description = "Render Twitter App Card meta tags. Requires iphone, ipad and google_play ids plus a site username (or a configured default). Returns the ordered tags and the HTML <meta> elements.")]
    async fn card_render_app(
        &self,
        Parameters(input): Parameters<AppCardInput>,
    ) -> Result<CallToolResult, McpError> {
        info!("Rendering app card");

        match self.service.render(input.into()) {
            Ok(tags) => {
                let response = json!({
                    "success": true,
                    "card": "app",
                    "count": tags.len(),
                    "html": render_meta_tags(&tags),
                    "tags": tags,
                });

                Ok(CallToolResult::success(vec![json_content(&response)?]))
            }
            Err(e) => {
                warn!("App card rejected: {}", e);
                let response = json!({
                    "success": false,
                    "missing_field": e.field().as_str(),
                    "message": e.to_string(),
                });

                Ok(CallToolResult::error(vec![json_content(&response)?]))
            }
        }
    }

    /// Validate an app card without rendering it
    #[tool(description = "Check whether a Twitter App Card has all required fields. Returns the first missing field, checked in the order google_play, ipad, site_username, iphone.")]
    async fn card_validate_app(
        &self,
        Parameters(input): Parameters<AppCardInput>,
    ) -> Result<CallToolResult, McpError> {
        info!("Validating app card");

        let response = match self.service.validate(input.into()) {
            Ok(()) => json!({ "valid": true }),
            Err(e) => invalid_response(&e),
        };

        Ok(CallToolResult::success(vec![json_content(&response)?]))
    }
}

fn invalid_response(e: &CardError) -> Value {
    json!({
        "valid": false,
        "missing_field": e.field().as_str(),
        "message": e.to_string(),
    })
}

fn json_content(value: &Value) -> Result<Content, McpError> {
    serde_json::to_string_pretty(value)
        .map(Content::text)
        .map_err(|e| McpError {
            code: ErrorCode::INTERNAL_ERROR,
            message: Cow::from(format!("Failed to serialize response: {}", e)),
            data: None,
        })
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "cardmeta".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Renders Twitter App Card <meta> tags. Use card_validate_app to check inputs and card_render_app to produce tags.".to_string(),
            ),
        }
    }
}
