//! Resolver for managed file storages, matching by UUID or name.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::FileStorage;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for managed file storages.
pub type CachingFileStorage = CachingResolver<FileStorage>;

#[async_trait]
impl Resolvable for FileStorage {
    const POSITIONAL_HELP: &'static str = "<UUID/Name...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<FileStorage>> {
        api.list_file_storages().await
    }

    fn canonical_id(&self) -> &str {
        &self.uuid
    }

    fn display_names(&self) -> Vec<&str> {
        vec![&self.name]
    }
}
