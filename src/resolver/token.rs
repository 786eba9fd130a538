//! Resolver for API tokens, matching by id or name.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::Token;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for API tokens.
pub type CachingToken = CachingResolver<Token>;

#[async_trait]
impl Resolvable for Token {
    const POSITIONAL_HELP: &'static str = "<ID/Name...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<Token>> {
        api.list_tokens().await
    }

    fn canonical_id(&self) -> &str {
        &self.id
    }

    fn display_names(&self) -> Vec<&str> {
        vec![&self.name]
    }
}
