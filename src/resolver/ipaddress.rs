//! Resolver for IP addresses, matching by address or PTR record.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::IpAddress;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for IP addresses.
pub type CachingIpAddress = CachingResolver<IpAddress>;

#[async_trait]
impl Resolvable for IpAddress {
    const POSITIONAL_HELP: &'static str = "<Address/PTR-Record...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<IpAddress>> {
        api.list_ip_addresses().await
    }

    fn canonical_id(&self) -> &str {
        &self.address
    }

    fn display_names(&self) -> Vec<&str> {
        vec![&self.ptr_record]
    }
}
