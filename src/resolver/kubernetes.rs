//! Resolver for Kubernetes clusters, matching by UUID or name.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::KubernetesCluster;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for Kubernetes clusters.
pub type CachingKubernetes = CachingResolver<KubernetesCluster>;

#[async_trait]
impl Resolvable for KubernetesCluster {
    const POSITIONAL_HELP: &'static str = "<UUID/Name...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<KubernetesCluster>> {
        api.list_kubernetes_clusters().await
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
    async fn test_resolve_name() {
        let api = MockApi {
            kubernetes_clusters: vec![KubernetesCluster {
                uuid: "5be80e0e-8d2f-41b4-a8cc-c791e982dede".to_owned(),
                name: "staging-cluster".to_owned(),
                ..KubernetesCluster::default()
            }],
            ..MockApi::default()
        };
        let mut provider = CachingKubernetes::new();
        let resolver = provider.get(&api).await.expect("listing succeeds");
        assert_eq!(
            resolver.resolve("staging-cluster").get_only(),
            Ok("5be80e0e-8d2f-41b4-a8cc-c791e982dede".to_owned())
        );
        assert_eq!(api.call_count("list_kubernetes_clusters"), 1);
    }
}
