//! Resolver for gateways, matching by UUID or name.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::Gateway;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for gateways.
pub type CachingGateway = CachingResolver<Gateway>;

#[async_trait]
impl Resolvable for Gateway {
    const POSITIONAL_HELP: &'static str = "<UUID/Name...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<Gateway>> {
        api.list_gateways().await
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

    #[tokio::test]
    async fn test_failing_listing_propagates() {
        let api = MockApi::failing("MOCKERROR");
        let mut provider = CachingGateway::new();
        let err = provider.get(&api).await.expect_err("listing fails");
        assert_eq!(err.to_string(), "MOCKERROR");
        // a failed fetch must leave the cache uninitialized
        assert!(matches!(
            provider.get_cached("anything"),
            Err(ResolveError::CacheUninitialized(_))
        ));
    }
}
