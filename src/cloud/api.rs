//! Cloud API contract
//!
//! The narrow interface the resolution and command layers consume. Each
//! resource type has one listing operation; detail and mutation operations
//! exist only where a command needs them. Implemented by
//! [`CloudClient`](super::client::CloudClient) against the live API and by
//! [`MockApi`](super::mock::MockApi) in tests.

use super::types::*;
use anyhow::Result;
use async_trait::async_trait;

/// Synchronous-feeling facade over the Nimbus REST API.
///
/// Every call is atomic from the caller's point of view: it returns data or
/// an error, with no internal retry. Timeouts and cancellation belong to
/// the underlying transport.
#[async_trait]
pub trait CloudApi: Send + Sync {
    async fn list_accounts(&self) -> Result<Vec<Account>>;
    async fn list_servers(&self) -> Result<Vec<Server>>;
    async fn list_storages(&self) -> Result<Vec<Storage>>;
    async fn list_networks(&self) -> Result<Vec<Network>>;
    async fn list_routers(&self) -> Result<Vec<Router>>;
    async fn list_databases(&self) -> Result<Vec<Database>>;
    async fn list_kubernetes_clusters(&self) -> Result<Vec<KubernetesCluster>>;
    async fn list_load_balancers(&self) -> Result<Vec<LoadBalancer>>;
    async fn list_gateways(&self) -> Result<Vec<Gateway>>;
    async fn list_object_storages(&self) -> Result<Vec<ObjectStorage>>;
    async fn list_server_groups(&self) -> Result<Vec<ServerGroup>>;
    async fn list_tokens(&self) -> Result<Vec<Token>>;
    async fn list_file_storages(&self) -> Result<Vec<FileStorage>>;
    async fn list_network_peerings(&self) -> Result<Vec<NetworkPeering>>;
    async fn list_ip_addresses(&self) -> Result<Vec<IpAddress>>;

    async fn get_server_details(&self, uuid: &str) -> Result<ServerDetails>;
    async fn get_network_details(&self, uuid: &str) -> Result<Network>;

    async fn delete_server(&self, uuid: &str) -> Result<()>;
}
