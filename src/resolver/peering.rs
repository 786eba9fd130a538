//! Resolver for network peerings, matching by UUID or name.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::NetworkPeering;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for network peerings.
pub type CachingNetworkPeering = CachingResolver<NetworkPeering>;

#[async_trait]
impl Resolvable for NetworkPeering {
    const POSITIONAL_HELP: &'static str = "<UUID/Name...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<NetworkPeering>> {
        api.list_network_peerings().await
    }

    fn canonical_id(&self) -> &str {
        &self.uuid
    }

    fn display_names(&self) -> Vec<&str> {
        vec![&self.name]
    }
}
