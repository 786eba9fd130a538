//! Resolver for managed object storages, matching by UUID or name.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::ObjectStorage;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for managed object storages.
pub type CachingObjectStorage = CachingResolver<ObjectStorage>;

#[async_trait]
impl Resolvable for ObjectStorage {
    const POSITIONAL_HELP: &'static str = "<UUID/Name...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<ObjectStorage>> {
        api.list_object_storages().await
    }

    fn canonical_id(&self) -> &str {
        &self.uuid
    }

    fn display_names(&self) -> Vec<&str> {
        vec![&self.name]
    }
}
