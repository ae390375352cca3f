//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Both transports serve tools through this router; every route delegates
//! to a handler from the registry catalog.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    registry
        .handlers()
        .fold(ToolRouter::new(), |router, handler| {
            let handler = Arc::clone(handler);
            let client = Arc::clone(registry.client());

            router.with_route(ToolRoute::new_dyn(
                handler.to_tool(),
                move |ctx: ToolCallContext<'_, S>| {
                    let handler = Arc::clone(&handler);
                    let client = Arc::clone(&client);
                    let args = ctx.arguments.clone().unwrap_or_default();
                    async move {
                        handler
                            .call(&client, args)
                            .await
                            .map_err(|e| McpError::invalid_params(e.to_string(), None))
                    }
                    .boxed()
                },
            ))
        })
}
