//! MCP server exposing the Cisco Meraki Dashboard API.
//!
//! Organizations, networks and devices are published as resources addressed
//! by URIs such as `networks://org/{orgId}` (see [`uri`]). Read-only tools
//! return Markdown summaries of the same data plus clients, SSIDs and VLANs.

use std::sync::Arc;

use meraki_api::Dashboard;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{
        Implementation, ListResourcesResult, PaginatedRequestParams, ReadResourceRequestParams,
        ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool_handler,
};

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod resolve;
pub mod tools;
pub mod uri;

#[cfg(test)]
mod testing;

pub use config::ServerConfig;
pub use error::ResourceError;

/// MCP server over a shared Dashboard client.
#[derive(Clone)]
pub struct MerakiServer {
    pub(crate) api: Arc<dyn Dashboard>,
    pub(crate) config: ServerConfig,
    pub(crate) tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for MerakiServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "meraki-mcp".into(),
                title: Some("Meraki Dashboard MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Read-only access to Meraki organizations, networks, devices, clients, SSIDs and \
                 VLANs. Resources use organizations://, networks:// and devices:// URIs."
                    .into(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        let resources = catalog::build(self.api.as_ref())
            .await
            .into_iter()
            .map(catalog::ResourceDescriptor::into_resource)
            .collect();
        Ok(ListResourcesResult::with_all_items(resources))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let contents = resolve::read(self.api.as_ref(), &request.uri).await;
        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}
