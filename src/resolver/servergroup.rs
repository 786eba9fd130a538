//! Resolver for server groups, matching by UUID or title.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::ServerGroup;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for server groups.
pub type CachingServerGroup = CachingResolver<ServerGroup>;

#[async_trait]
impl Resolvable for ServerGroup {
    const POSITIONAL_HELP: &'static str = "<UUID/Title...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<ServerGroup>> {
        api.list_server_groups().await
    }

    fn canonical_id(&self) -> &str {
        &self.uuid
    }

    fn display_names(&self) -> Vec<&str> {
        vec![&self.title]
    }
}
