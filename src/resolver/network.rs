//! Resolver for networks, matching by UUID or name.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::Network;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for networks.
pub type CachingNetwork = CachingResolver<Network>;

#[async_trait]
impl Resolvable for Network {
    const POSITIONAL_HELP: &'static str = "<UUID/Name...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<Network>> {
        api.list_networks().await
    }

    fn canonical_id(&self) -> &str {
        &self.uuid
    }

    fn display_names(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::mock::MockApi;
    use crate::resolver::ResolveError;

    fn network(uuid: &str, name: &str, zone: &str) -> Network {
        Network {
            uuid: uuid.to_owned(),
            name: name.to_owned(),
            network_type: "private".to_owned(),
            zone: zone.to_owned(),
            router: None,
        }
    }

    fn fixture() -> Vec<Network> {
        vec![
            network("28e15cf5-8817-42ab-b017-970666be96ec", "network-1", "eu-west1"),
            network("f9f5ad16-a63a-4670-8449-c01d1e97281e", "network-2", "eu-west1"),
            network("e157ce0a-eeb0-49fc-9f2c-a05c3ac57066", "network-3", "us-east1"),
            // shares its name with network 1
            network("b3e49768-f13a-42c3-bea7-4e2471657f2f", "network-1", "us-east1"),
        ]
    }

    #[tokio::test]
    async fn test_resolve_uuid_and_name() {
        let api = MockApi {
            networks: fixture(),
            ..MockApi::default()
        };
        let mut provider = CachingNetwork::new();
        let resolver = provider.get(&api).await.expect("listing succeeds");

        for network in fixture() {
            assert_eq!(
                resolver.resolve(&network.uuid).get_only(),
                Ok(network.uuid.clone())
            );
        }
        assert_eq!(
            resolver.resolve("network-2").get_only(),
            Ok("f9f5ad16-a63a-4670-8449-c01d1e97281e".to_owned())
        );
        assert_eq!(api.call_count("list_networks"), 1);
    }

    #[tokio::test]
    async fn test_ambiguous_name_and_not_found() {
        let api = MockApi {
            networks: fixture(),
            ..MockApi::default()
        };
        let mut provider = CachingNetwork::new();
        let resolver = provider.get(&api).await.expect("listing succeeds");

        assert_eq!(
            resolver.resolve("network-1").get_only(),
            Err(ResolveError::Ambiguous("network-1".to_owned()))
        );
        assert_eq!(
            resolver.resolve("notfound").get_only(),
            Err(ResolveError::NotFound("notfound".to_owned()))
        );
        assert_eq!(api.call_count("list_networks"), 1);
    }

    #[tokio::test]
    async fn test_get_cached() {
        let api = MockApi {
            networks: fixture(),
            ..MockApi::default()
        };
        let mut provider = CachingNetwork::new();
        assert!(matches!(
            provider.get_cached("28e15cf5-8817-42ab-b017-970666be96ec"),
            Err(ResolveError::CacheUninitialized(_))
        ));

        provider.get(&api).await.expect("listing succeeds");
        let cached = provider
            .get_cached("e157ce0a-eeb0-49fc-9f2c-a05c3ac57066")
            .expect("cached");
        assert_eq!(cached.name, "network-3");
        assert_eq!(api.call_count("list_networks"), 1);
    }
}
