//! Route planner endpoints
//!
//! Inspect and reset the node's outbound IP rotation. This is the node's own
//! address management, unrelated to choosing which node to call.

use tracing::{info, instrument};

use crate::executor::TransportExecutor;
use crate::request::RequestBuilder;
use crate::types::RoutePlannerStatus;
use crate::Result;

/// Route planner operations on one node, borrowed from a
/// [`NodeRestClient`](crate::NodeRestClient)
#[derive(Clone, Copy)]
pub struct RoutePlanner<'a> {
    requests: &'a RequestBuilder,
    executor: &'a TransportExecutor,
}

impl<'a> RoutePlanner<'a> {
    pub(crate) fn new(requests: &'a RequestBuilder, executor: &'a TransportExecutor) -> Self {
        Self { requests, executor }
    }

    /// Current planner class and its class-specific details
    #[instrument(skip(self))]
    pub async fn status(&self) -> Result<RoutePlannerStatus> {
        self.executor
            .execute(self.requests.build_route_planner_status())
            .await
    }

    /// Remove one address from the failing list
    #[instrument(skip(self))]
    pub async fn free_address(&self, address: &str) -> Result<()> {
        self.executor
            .execute_without_body(self.requests.build_free_address(address))
            .await?;
        info!(address, "Freed route planner address");
        Ok(())
    }

    /// Clear the failing list
    #[instrument(skip(self))]
    pub async fn free_all(&self) -> Result<()> {
        self.executor
            .execute_without_body(self.requests.build_free_all())
            .await?;
        info!("Freed all route planner addresses");
        Ok(())
    }
}
