use anyhow::Result;
use cardmeta_server::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with INFO level by default; stderr keeps stdio transport clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::load_default()?;

    tracing::info!("cardmeta server starting...");
    tracing::info!("Transport: {}", config.server.transport);

    // Initialize card service
    let card_service = cardmeta_core::AppCardService::new(config.card.clone());
    match &card_service.defaults().site_username {
        Some(username) => tracing::info!("Default site username: {}", username),
        None => tracing::info!("No default site username configured"),
    }

    // Create MCP server
    let mcp_server = cardmeta_server::McpServer::new(card_service);

    match config.server.transport.as_str() {
        "http" => {
            tracing::info!("MCP server initialized successfully");
            tracing::info!(
                "cardmeta ready to accept MCP requests via HTTP on {}:{}",
                config.server.bind_address,
                config.server.port
            );
            tracing::info!(
                "MCP endpoints: http://localhost:{}/sse (SSE), http://localhost:{}/message (POST)",
                config.server.port,
                config.server.port
            );

            // Run HTTP server with SSE transport
            use rmcp::transport::sse_server::SseServer;
            use rmcp::ServiceExt;

            let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port).parse()?;
            let mut sse_server = SseServer::serve(bind_addr).await?;

            // Process incoming SSE transports
            while let Some(transport) = sse_server.next_transport().await {
                let server = mcp_server.clone();
                tokio::spawn(async move {
                    match server.serve(transport).await {
                        Ok(service) => {
                            if let Err(e) = service.waiting().await {
                                tracing::error!("Service error: {}", e);
                            }
                        }
                        Err(e) => {
                            tracing::error!("Failed to serve transport: {}", e);
                        }
                    }
                });
            }
        }
        "stdio" => {
            tracing::info!("MCP server initialized successfully");
            tracing::info!("cardmeta ready to accept MCP requests via stdio");

            use rmcp::{transport::stdio, ServiceExt};
            let service = mcp_server.serve(stdio()).await?;
            service.waiting().await?;
        }
        other => {
            anyhow::bail!("Invalid transport type: {}. Must be 'stdio' or 'http'", other);
        }
    }

    Ok(())
}
