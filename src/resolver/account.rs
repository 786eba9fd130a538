//! Resolver for accounts.
//!
//! Accounts have no UUID; the username is both the canonical identifier
//! and the only thing users type, so exact and prefix matching against it
//! is all there is.

use super::{CachingResolver, Resolvable};
use crate::cloud::api::CloudApi;
use crate::cloud::types::Account;
use anyhow::Result;
use async_trait::async_trait;

/// Caching resolver for accounts.
pub type CachingAccount = CachingResolver<Account>;

#[async_trait]
impl Resolvable for Account {
    const POSITIONAL_HELP: &'static str = "<Username...>";

    async fn list(api: &dyn CloudApi) -> Result<Vec<Account>> {
        api.list_accounts().await
    }

    fn canonical_id(&self) -> &str {
        &self.username
    }

    fn display_names(&self) -> Vec<&str> {
        Vec::new()
    }
}
