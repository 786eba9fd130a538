//! Mock API implementation for tests
//!
//! Serves canned listings from memory, records per-method call counts and
//! can be switched to fail every call with a fixed error message.

use super::api::CloudApi;
use super::types::*;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory [`CloudApi`] used by unit and integration tests.
#[derive(Debug, Default)]
pub struct MockApi {
    pub accounts: Vec<Account>,
    pub servers: Vec<Server>,
    pub storages: Vec<Storage>,
    pub networks: Vec<Network>,
    pub routers: Vec<Router>,
    pub databases: Vec<Database>,
    pub kubernetes_clusters: Vec<KubernetesCluster>,
    pub load_balancers: Vec<LoadBalancer>,
    pub gateways: Vec<Gateway>,
    pub object_storages: Vec<ObjectStorage>,
    pub server_groups: Vec<ServerGroup>,
    pub tokens: Vec<Token>,
    pub file_storages: Vec<FileStorage>,
    pub network_peerings: Vec<NetworkPeering>,
    pub ip_addresses: Vec<IpAddress>,

    /// Detail responses keyed by uuid.
    pub server_details: HashMap<String, ServerDetails>,
    pub network_details: HashMap<String, Network>,

    /// When set, every call fails with this message instead of returning data.
    pub fail_with: Option<String>,

    pub calls: Mutex<HashMap<String, usize>>,
}

impl MockApi {
    /// Mock that fails every call with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_owned()),
            ..Self::default()
        }
    }

    /// Number of times `method` has been invoked.
    pub fn call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .expect("mock call counter poisoned")
            .get(method)
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, method: &str) -> Result<()> {
        *self
            .calls
            .lock()
            .expect("mock call counter poisoned")
            .entry(method.to_owned())
            .or_insert(0) += 1;
        match &self.fail_with {
            Some(message) => Err(anyhow!("{}", message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CloudApi for MockApi {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.record("list_accounts")?;
        Ok(self.accounts.clone())
    }

    async fn list_servers(&self) -> Result<Vec<Server>> {
        self.record("list_servers")?;
        Ok(self.servers.clone())
    }

    async fn list_storages(&self) -> Result<Vec<Storage>> {
        self.record("list_storages")?;
        Ok(self.storages.clone())
    }

    async fn list_networks(&self) -> Result<Vec<Network>> {
        self.record("list_networks")?;
        Ok(self.networks.clone())
    }

    async fn list_routers(&self) -> Result<Vec<Router>> {
        self.record("list_routers")?;
        Ok(self.routers.clone())
    }

    async fn list_databases(&self) -> Result<Vec<Database>> {
        self.record("list_databases")?;
        Ok(self.databases.clone())
    }

    async fn list_kubernetes_clusters(&self) -> Result<Vec<KubernetesCluster>> {
        self.record("list_kubernetes_clusters")?;
        Ok(self.kubernetes_clusters.clone())
    }

    async fn list_load_balancers(&self) -> Result<Vec<LoadBalancer>> {
        self.record("list_load_balancers")?;
        Ok(self.load_balancers.clone())
    }

    async fn list_gateways(&self) -> Result<Vec<Gateway>> {
        self.record("list_gateways")?;
        Ok(self.gateways.clone())
    }

    async fn list_object_storages(&self) -> Result<Vec<ObjectStorage>> {
        self.record("list_object_storages")?;
        Ok(self.object_storages.clone())
    }

    async fn list_server_groups(&self) -> Result<Vec<ServerGroup>> {
        self.record("list_server_groups")?;
        Ok(self.server_groups.clone())
    }

    async fn list_tokens(&self) -> Result<Vec<Token>> {
        self.record("list_tokens")?;
        Ok(self.tokens.clone())
    }

    async fn list_file_storages(&self) -> Result<Vec<FileStorage>> {
        self.record("list_file_storages")?;
        Ok(self.file_storages.clone())
    }

    async fn list_network_peerings(&self) -> Result<Vec<NetworkPeering>> {
        self.record("list_network_peerings")?;
        Ok(self.network_peerings.clone())
    }

    async fn list_ip_addresses(&self) -> Result<Vec<IpAddress>> {
        self.record("list_ip_addresses")?;
        Ok(self.ip_addresses.clone())
    }

    async fn get_server_details(&self, uuid: &str) -> Result<ServerDetails> {
        self.record("get_server_details")?;
        self.server_details
            .get(uuid)
            .cloned()
            .ok_or_else(|| anyhow!("no such server: {}", uuid))
    }

    async fn get_network_details(&self, uuid: &str) -> Result<Network> {
        self.record("get_network_details")?;
        self.network_details
            .get(uuid)
            .cloned()
            .ok_or_else(|| anyhow!("no such network: {}", uuid))
    }

    async fn delete_server(&self, uuid: &str) -> Result<()> {
        self.record("delete_server")?;
        if self.servers.iter().any(|server| server.uuid == uuid) {
            Ok(())
        } else {
            Err(anyhow!("no such server: {}", uuid))
        }
    }
}
