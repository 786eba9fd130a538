//! Server completion, optionally filtered by state
//!
//! Commands that only operate on servers in a given state (stop wants
//! started servers, start wants stopped ones) complete only those.

use super::{match_string_prefix, none, Directive, Provider};
use crate::cloud::api::CloudApi;
use async_trait::async_trait;

/// Completes started servers only, by uuid, title or hostname.
pub struct StartedServer;

/// Completes stopped servers only, by uuid, title or hostname.
pub struct StoppedServer;

#[async_trait]
impl Provider for StartedServer {
    async fn complete_argument(
        &self,
        api: &dyn CloudApi,
        to_complete: &str,
    ) -> (Vec<String>, Directive) {
        complete_servers(api, to_complete, &["started"]).await
    }
}

#[async_trait]
impl Provider for StoppedServer {
    async fn complete_argument(
        &self,
        api: &dyn CloudApi,
        to_complete: &str,
    ) -> (Vec<String>, Directive) {
        complete_servers(api, to_complete, &["stopped"]).await
    }
}

async fn complete_servers(
    api: &dyn CloudApi,
    to_complete: &str,
    states: &[&str],
) -> (Vec<String>, Directive) {
    let servers = match api.list_servers().await {
        Ok(servers) => servers,
        Err(_) => return none(),
    };
    let mut vals = Vec::new();
    for server in &servers {
        if states.is_empty() || states.contains(&server.state.as_str()) {
            vals.push(server.uuid.clone());
            vals.push(server.hostname.clone());
            vals.push(server.title.clone());
        }
    }
    (
        match_string_prefix(&vals, to_complete, true),
        Directive::NoFileComp,
    )
}
