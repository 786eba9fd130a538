//! Resolver for storages, matching by UUID or title.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::Storage;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for storages.
pub type CachingStorage = CachingResolver<Storage>;

#[async_trait]
impl Resolvable for Storage {
    const POSITIONAL_HELP: &'static str = "<UUID/Title...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<Storage>> {
        api.list_storages().await
    }

    fn canonical_id(&self) -> &str {
        &self.uuid
    }

    fn display_names(&self) -> Vec<&str> {
        vec![&self.title]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::mock::MockApi;
    use crate::resolver::ResolveError;

    fn fixture() -> Vec<Storage> {
        vec![
            Storage {
                uuid: "0127dfd6-3884-4079-a948-3a8881df1a7a".to_owned(),
                title: "database backups".to_owned(),
                zone: "eu-west1".to_owned(),
                size_gib: 100,
                ..Storage::default()
            },
            Storage {
                uuid: "012c61a6-b8f0-48c2-a63a-b4bf7d26a655".to_owned(),
                title: "web data".to_owned(),
                zone: "eu-west1".to_owned(),
                size_gib: 50,
                ..Storage::default()
            },
        ]
    }

    #[tokio::test]
    async fn test_resolve_title_with_whitespace() {
        let api = MockApi {
            storages: fixture(),
            ..MockApi::default()
        };
        let mut provider = CachingStorage::new();
        let resolver = provider.get(&api).await.expect("listing succeeds");

        // completion escapes spaces in suggestions; both forms must resolve
        assert_eq!(
            resolver.resolve("database backups").get_only(),
            Ok("0127dfd6-3884-4079-a948-3a8881df1a7a".to_owned())
        );
        assert_eq!(
            resolver.resolve("database\\ backups").get_only(),
            Ok("0127dfd6-3884-4079-a948-3a8881df1a7a".to_owned())
        );
        assert_eq!(api.call_count("list_storages"), 1);
    }

    #[tokio::test]
    async fn test_uuid_prefix_shared_by_two_storages() {
        let api = MockApi {
            storages: fixture(),
            ..MockApi::default()
        };
        let mut provider = CachingStorage::new();
        let resolver = provider.get(&api).await.expect("listing succeeds");

        assert_eq!(
            resolver.resolve("012").get_only(),
            Err(ResolveError::Ambiguous("012".to_owned()))
        );
        assert_eq!(
            resolver.resolve("0127").get_only(),
            Ok("0127dfd6-3884-4079-a948-3a8881df1a7a".to_owned())
        );
    }
}
