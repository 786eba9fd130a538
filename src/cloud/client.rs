//! Nimbus API client
//!
//! Implements [`CloudApi`] against the live REST API, combining the token
//! from configuration with the shared HTTP client.

use super::api::CloudApi;
use super::http::HttpClient;
use super::types::*;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Main client for the Nimbus REST API
#[derive(Clone)]
pub struct CloudClient {
    http: HttpClient,
    base_url: Url,
    token: String,
}

impl CloudClient {
    /// Create a new API client
    pub fn new(base_url: Url, token: String) -> Result<Self> {
        let http = HttpClient::new()?;
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Build an API URL for the given path
    fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str, key: &str) -> Result<Vec<T>> {
        let response = self.http.get(&self.api_url(path), &self.token).await?;
        decode_list(response, key)
    }
}

/// Extract the listing array under `key` from a response envelope.
///
/// A missing key is treated as an empty listing; the API omits the array
/// when the account has no resources of that type.
fn decode_list<T: DeserializeOwned>(response: Value, key: &str) -> Result<Vec<T>> {
    let items = response
        .get(key)
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()));
    serde_json::from_value(items).with_context(|| format!("Failed to decode {} listing", key))
}

#[async_trait]
impl CloudApi for CloudClient {
    async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.get_list("accounts", "accounts").await
    }

    async fn list_servers(&self) -> Result<Vec<Server>> {
        self.get_list("servers", "servers").await
    }

    async fn list_storages(&self) -> Result<Vec<Storage>> {
        self.get_list("storages", "storages").await
    }

    async fn list_networks(&self) -> Result<Vec<Network>> {
        self.get_list("networks", "networks").await
    }

    async fn list_routers(&self) -> Result<Vec<Router>> {
        self.get_list("routers", "routers").await
    }

    async fn list_databases(&self) -> Result<Vec<Database>> {
        self.get_list("databases", "databases").await
    }

    async fn list_kubernetes_clusters(&self) -> Result<Vec<KubernetesCluster>> {
        self.get_list("kubernetes/clusters", "clusters").await
    }

    async fn list_load_balancers(&self) -> Result<Vec<LoadBalancer>> {
        self.get_list("load-balancers", "load_balancers").await
    }

    async fn list_gateways(&self) -> Result<Vec<Gateway>> {
        self.get_list("gateways", "gateways").await
    }

    async fn list_object_storages(&self) -> Result<Vec<ObjectStorage>> {
        self.get_list("object-storages", "object_storages").await
    }

    async fn list_server_groups(&self) -> Result<Vec<ServerGroup>> {
        self.get_list("server-groups", "server_groups").await
    }

    async fn list_tokens(&self) -> Result<Vec<Token>> {
        self.get_list("tokens", "tokens").await
    }

    async fn list_file_storages(&self) -> Result<Vec<FileStorage>> {
        self.get_list("file-storages", "file_storages").await
    }

    async fn list_network_peerings(&self) -> Result<Vec<NetworkPeering>> {
        self.get_list("network-peerings", "peerings").await
    }

    async fn list_ip_addresses(&self) -> Result<Vec<IpAddress>> {
        self.get_list("ip-addresses", "ip_addresses").await
    }

    async fn get_server_details(&self, uuid: &str) -> Result<ServerDetails> {
        let response = self
            .http
            .get(&self.api_url(&format!("servers/{}", uuid)), &self.token)
            .await?;
        serde_json::from_value(response).context("Failed to decode server details")
    }

    async fn get_network_details(&self, uuid: &str) -> Result<Network> {
        let response = self
            .http
            .get(&self.api_url(&format!("networks/{}", uuid)), &self.token)
            .await?;
        serde_json::from_value(response).context("Failed to decode network details")
    }

    async fn delete_server(&self, uuid: &str) -> Result<()> {
        self.http
            .delete(&self.api_url(&format!("servers/{}", uuid)), &self.token)
            .await?;
        Ok(())
    }
}
