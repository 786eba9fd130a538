//! Resolver for servers, matching by UUID, title or hostname.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::Server;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for servers.
pub type CachingServer = CachingResolver<Server>;

#[async_trait]
impl Resolvable for Server {
    const POSITIONAL_HELP: &'static str = "<UUID/Title/Hostname...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<Server>> {
        api.list_servers().await
    }

    fn canonical_id(&self) -> &str {
        &self.uuid
    }

    fn display_names(&self) -> Vec<&str> {
        vec![&self.title, &self.hostname]
    }
}
