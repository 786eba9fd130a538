//! Resolver for managed databases, matching by UUID or title.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::Database;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for managed databases.
pub type CachingDatabase = CachingResolver<Database>;

#[async_trait]
impl Resolvable for Database {
    const POSITIONAL_HELP: &'static str = "<UUID/Title...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<Database>> {
        api.list_databases().await
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

    #[tokio::test]
    async fn test_resolution_and_caching() {
        let api = MockApi {
            databases: vec![
                Database {
                    uuid: "9a8f4905-76e8-4b14-9cb6-6bb4b41a4d62".to_owned(),
                    title: "orders-pg".to_owned(),
                    database_type: "pg".to_owned(),
                    ..Database::default()
                },
                Database {
                    uuid: "9b19019e-4546-4b15-a46a-3db0f0b823b8".to_owned(),
                    title: "sessions-redis".to_owned(),
                    database_type: "redis".to_owned(),
                    ..Database::default()
                },
            ],
            ..MockApi::default()
        };
        let mut provider = CachingDatabase::new();
        let resolver = provider.get(&api).await.expect("listing succeeds");

        assert_eq!(
            resolver.resolve("orders-pg").get_only(),
            Ok("9a8f4905-76e8-4b14-9cb6-6bb4b41a4d62".to_owned())
        );
        // shared uuid prefix is ambiguous, longer prefix is not
        assert_eq!(
            resolver.resolve("9").get_only(),
            Err(ResolveError::Ambiguous("9".to_owned()))
        );
        assert_eq!(
            resolver.resolve("9b").get_only(),
            Ok("9b19019e-4546-4b15-a46a-3db0f0b823b8".to_owned())
        );

        let cached = provider
            .get_cached("9b19019e-4546-4b15-a46a-3db0f0b823b8")
            .expect("cached");
        assert_eq!(cached.database_type, "redis");
        assert_eq!(api.call_count("list_databases"), 1);
    }
}
