//! Resolver for routers, matching by UUID or name.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::Router;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for routers.
pub type CachingRouter = CachingResolver<Router>;

#[async_trait]
impl Resolvable for Router {
    const POSITIONAL_HELP: &'static str = "<UUID/Name...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<Router>> {
        api.list_routers().await
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

    #[tokio::test]
    async fn test_resolve_name_case_insensitively() {
        let api = MockApi {
            routers: vec![Router {
                uuid: "8ba5f587-9aeb-4e44-ba5e-bbd1f97e8f13".to_owned(),
                name: "Production Router".to_owned(),
                router_type: "normal".to_owned(),
                attached_networks: Vec::new(),
            }],
            ..MockApi::default()
        };
        let mut provider = CachingRouter::new();
        let resolver = provider.get(&api).await.expect("listing succeeds");

        assert_eq!(
            resolver.resolve("production\\ router").get_only(),
            Ok("8ba5f587-9aeb-4e44-ba5e-bbd1f97e8f13".to_owned())
        );
        assert_eq!(api.call_count("list_routers"), 1);
    }
}
