//! Reference resolution layer
//!
//! Turns a heterogeneous, user-typed string (UUID, UUID prefix, title,
//! hostname, wildcard pattern) into exactly one canonical resource
//! identifier, or a well-defined ambiguity/not-found error.
//!
//! # Architecture
//!
//! - [`matcher`] - pure functions classifying argument-vs-candidate matches
//! - [`cache`] - lazily-initialized id-to-object cache shared with detail rendering
//! - [`CachingResolver`] - the per-resource-type provider: one listing call
//!   per command invocation, then purely in-memory matching
//!
//! Each resource type plugs in through the [`Resolvable`] trait, so the
//! fifteen-odd provider implementations are thin projections instead of
//! hand-written near-duplicates.

pub mod cache;
pub mod matcher;

mod account;
mod database;
mod filestorage;
mod gateway;
mod ipaddress;
mod kubernetes;
mod loadbalancer;
mod network;
mod objectstorage;
mod peering;
mod router;
mod server;
mod servergroup;
mod storage;
mod token;

pub use account::CachingAccount;
pub use cache::Cache;
pub use database::CachingDatabase;
pub use filestorage::CachingFileStorage;
pub use gateway::CachingGateway;
pub use ipaddress::CachingIpAddress;
pub use kubernetes::CachingKubernetes;
pub use loadbalancer::CachingLoadBalancer;
pub use network::CachingNetwork;
pub use objectstorage::CachingObjectStorage;
pub use peering::CachingNetworkPeering;
pub use router::CachingRouter;
pub use server::CachingServer;
pub use servergroup::CachingServerGroup;
pub use storage::CachingStorage;
pub use token::CachingToken;

use crate::cloud::api::CloudApi;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced by argument resolution and the resolution cache.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No candidate matched the argument at any tier.
    #[error("nothing found matching '{0}'")]
    NotFound(String),
    /// More than one candidate tied at the best tier.
    #[error("'{0}' is ambiguous, found multiple matches")]
    Ambiguous(String),
    /// A non-wildcard argument matched several resources in a bulk command.
    #[error("'{0}' matches multiple resources, use a wildcard pattern or an exact identifier")]
    NonGlobMultipleMatches(String),
    /// `get_cached` was called before the provider fetched anything.
    #[error("{0} cache is not initialized")]
    CacheUninitialized(&'static str),
}

/// How well a candidate matches an argument. Ranking only, no arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    None,
    Prefix,
    CaseInsensitive,
    WildCard,
    Exact,
}

impl MatchType {
    /// Tier rank: `Exact` > `CaseInsensitive` = `WildCard` > `Prefix` > `None`.
    pub fn rank(self) -> u8 {
        match self {
            MatchType::None => 0,
            MatchType::Prefix => 1,
            MatchType::CaseInsensitive | MatchType::WildCard => 2,
            MatchType::Exact => 3,
        }
    }
}

/// Match tiers in strict priority order. The first tier with any member
/// wins outright; tiers are never merged.
const TIERS: [&[MatchType]; 3] = [
    &[MatchType::Exact],
    &[MatchType::CaseInsensitive, MatchType::WildCard],
    &[MatchType::Prefix],
];

/// Per-argument accumulator of candidate match results.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub arg: String,
    matches: HashMap<String, MatchType>,
}

impl Resolved {
    pub fn new(arg: impl Into<String>) -> Self {
        Self {
            arg: arg.into(),
            matches: HashMap::new(),
        }
    }

    /// Record a match result for a candidate. When several matchers fire
    /// for the same candidate, the best rank is retained, never downgraded.
    pub fn add_match(&mut self, id: &str, match_type: MatchType) {
        if match_type == MatchType::None {
            return;
        }
        let current = self.matches.entry(id.to_owned()).or_insert(MatchType::None);
        if match_type.rank() > current.rank() {
            *current = match_type;
        }
    }

    fn tier_members(&self, tier: &[MatchType]) -> Vec<String> {
        let mut ids: Vec<String> = self
            .matches
            .iter()
            .filter(|(_, match_type)| tier.contains(match_type))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// All ids in the best non-empty tier, sorted for deterministic output.
    pub fn get_all(&self) -> Result<Vec<String>, ResolveError> {
        for tier in TIERS {
            let ids = self.tier_members(tier);
            if !ids.is_empty() {
                return Ok(ids);
            }
        }
        Err(ResolveError::NotFound(self.arg.clone()))
    }

    /// The single winning id, or [`ResolveError::Ambiguous`] on a tie.
    pub fn get_only(&self) -> Result<String, ResolveError> {
        let mut all = self.get_all()?;
        if all.len() > 1 {
            return Err(ResolveError::Ambiguous(self.arg.clone()));
        }
        Ok(all.remove(0))
    }

    /// Winning tier for bulk commands: multiple matches are only accepted
    /// when the user opted in by passing a wildcard pattern.
    pub fn get_matching(&self) -> Result<Vec<String>, ResolveError> {
        let all = self.get_all()?;
        if all.len() > 1 && !matcher::is_wildcard_pattern(&self.arg) {
            return Err(ResolveError::NonGlobMultipleMatches(self.arg.clone()));
        }
        Ok(all)
    }
}

/// One listed resource as seen by the matching loop.
#[derive(Debug, Clone)]
struct Candidate {
    id: String,
    names: Vec<String>,
}

/// Argument resolver for one resource type.
///
/// Holds the listing snapshot captured when the provider was built;
/// [`Resolver::resolve`] is O(listing size) and never touches the network.
#[derive(Debug, Clone)]
pub struct Resolver {
    candidates: Vec<Candidate>,
}

impl Resolver {
    fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Classify `arg` against every candidate in the snapshot.
    pub fn resolve(&self, arg: &str) -> Resolved {
        let mut resolved = Resolved::new(arg);
        for candidate in &self.candidates {
            resolved.add_match(&candidate.id, matcher::match_uuid(arg, &candidate.id));
            for name in &candidate.names {
                resolved.add_match(&candidate.id, matcher::match_title(arg, name));
            }
        }
        resolved
    }
}

/// Per-resource-type projection used by [`CachingResolver`].
///
/// Implementations list the resource from the API once and expose the
/// canonical id plus the display fields users may type instead of it.
#[async_trait]
pub trait Resolvable: Clone + Send + Sync + 'static {
    /// Usage hint for positional arguments of this type, e.g. `"<UUID/Title...>"`.
    const POSITIONAL_HELP: &'static str;

    /// Fetch the full listing. Errors propagate to the caller unchanged.
    async fn list(api: &dyn CloudApi) -> Result<Vec<Self>>;

    /// The stable identifier all resolution ultimately produces.
    fn canonical_id(&self) -> &str;

    /// Display fields matched case-insensitively against arguments.
    fn display_names(&self) -> Vec<&str>;
}

/// Resolution provider for one resource type, caching the fetched listing.
///
/// Created fresh per command invocation and discarded afterwards; the
/// listing is treated as an immutable snapshot for the command's lifetime.
#[derive(Debug, Clone)]
pub struct CachingResolver<T> {
    cache: Cache<T>,
}

impl<T: Resolvable> CachingResolver<T> {
    pub fn new() -> Self {
        Self { cache: Cache::new() }
    }

    /// Fetch the listing (exactly one call) and build a [`Resolver`] over it.
    ///
    /// The fetched objects are also cached by canonical id so commands can
    /// render details without a second round trip.
    pub async fn get(&mut self, api: &dyn CloudApi) -> Result<Resolver> {
        let items = T::list(api).await?;
        let candidates = items
            .iter()
            .map(|item| Candidate {
                id: item.canonical_id().to_owned(),
                names: item
                    .display_names()
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            })
            .collect();
        for item in items {
            let id = item.canonical_id().to_owned();
            self.cache.add_cached(id, item);
        }
        Ok(Resolver::new(candidates))
    }

    /// Retrieve a fetched object from the cache by canonical id.
    pub fn get_cached(&self, id: &str) -> Result<T, ResolveError> {
        self.cache.get_cached(id)
    }

    /// Usage hint for positional arguments of this resource type.
    pub fn positional_argument_help(&self) -> &'static str {
        T::POSITIONAL_HELP
    }
}

impl<T: Resolvable> Default for CachingResolver<T> {
    fn default() -> Self {
        Self::new()
    }
}
