//! Typed models for Nimbus API resources
//!
//! Listing payloads deserialize into these structs; fields the resolution
//! layer does not need are kept to the handful commands actually render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A virtual server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub uuid: String,
    pub title: String,
    pub hostname: String,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Full server details, returned by the per-server detail endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerDetails {
    #[serde(flatten)]
    pub server: Server,
    #[serde(default)]
    pub networking: Vec<ServerInterface>,
}

/// One network interface of a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerInterface {
    pub network: String,
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    #[serde(default, rename = "type")]
    pub interface_type: String,
}

/// A block storage device.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Storage {
    pub uuid: String,
    pub title: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub size_gib: u64,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An SDN network.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Network {
    pub uuid: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub network_type: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub router: Option<String>,
}

/// A router connecting SDN networks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Router {
    pub uuid: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub router_type: String,
    /// UUIDs of networks attached to this router.
    #[serde(default)]
    pub attached_networks: Vec<String>,
}

/// A managed database service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    pub uuid: String,
    pub title: String,
    #[serde(default, rename = "type")]
    pub database_type: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub state: String,
}

/// A managed Kubernetes cluster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KubernetesCluster {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub network: String,
}

/// A managed load balancer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub operational_state: String,
}

/// A network gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Gateway {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// A managed object storage service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectStorage {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub state: String,
}

/// An anti-affinity server group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerGroup {
    pub uuid: String,
    pub title: String,
    #[serde(default)]
    pub anti_affinity_policy: String,
    #[serde(default)]
    pub members: Vec<String>,
}

/// An API access token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub can_create_tokens: bool,
}

/// A managed file storage service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileStorage {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub size_gib: u64,
}

/// An account, main or sub-account. Accounts have no UUID; the username is
/// the canonical identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    #[serde(default)]
    pub account_type: String,
}

/// A peering between two SDN networks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkPeering {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub state: String,
}

/// An IP address, identified by the address itself rather than a UUID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpAddress {
    pub address: String,
    #[serde(default)]
    pub ptr_record: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub server: Option<String>,
}
