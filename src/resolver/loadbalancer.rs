//! Resolver for load balancers, matching by UUID or name.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::LoadBalancer;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for load balancers.
pub type CachingLoadBalancer = CachingResolver<LoadBalancer>;

#[async_trait]
impl Resolvable for LoadBalancer {
    const POSITIONAL_HELP: &'static str = "<UUID/Name...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<LoadBalancer>> {
        api.list_load_balancers().await
    }

    fn canonical_id(&self) -> &str {
        &self.uuid
    }

    fn display_names(&self) -> Vec<&str> {
        vec![&self.name]
    }
}
