//! Shell completion providers
//!
//! Produce tab-completion suggestions from the same listing data the
//! resolvers match against, filtered by literal prefix. Completion runs on
//! every tab press inside the shell, so providers must return quickly and
//! never surface hard errors: a failed listing collapses to an empty
//! suggestion list.

pub mod server;

use crate::cloud::api::CloudApi;
use crate::resolver::Resolvable;
use async_trait::async_trait;
use std::marker::PhantomData;

/// Tells the shell how to treat the returned suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Directive {
    /// Let the shell fall back to its default behavior.
    #[default]
    Default,
    /// Suggestions are complete; do not add file name completion.
    NoFileComp,
}

impl Directive {
    /// Numeric code consumed by the generated shell completion scripts.
    pub fn code(self) -> u8 {
        match self {
            Directive::Default => 0,
            Directive::NoFileComp => 4,
        }
    }
}

/// Per-resource-type completion capability.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn complete_argument(
        &self,
        api: &dyn CloudApi,
        to_complete: &str,
    ) -> (Vec<String>, Directive);
}

/// Empty suggestion set with the default directive, used when a listing
/// fails.
pub fn none() -> (Vec<String>, Directive) {
    (Vec::new(), Directive::Default)
}

/// Quote a suggestion if it contains characters the shell would split on.
pub fn escape(value: &str) -> String {
    if value.contains(' ') || value.contains('(') || value.contains(')') {
        format!("\"{}\"", value)
    } else {
        value.to_owned()
    }
}

/// Strip surrounding quotes from a partially-typed word. A leading quote
/// without its closing pair is also stripped, since the user is mid-word.
fn unquote(key: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(stripped) = key.strip_prefix(quote) {
            return stripped.strip_suffix(quote).unwrap_or(stripped);
        }
    }
    key
}

/// Filter values by literal prefix, escaping the survivors for shell output.
pub fn match_string_prefix(vals: &[String], key: &str, case_sensitive: bool) -> Vec<String> {
    let key = unquote(key);
    let folded = key.to_lowercase();
    let mut result = Vec::new();
    for value in vals {
        let matched = if case_sensitive {
            value.starts_with(key)
        } else {
            value.to_lowercase().starts_with(&folded)
        };
        if matched {
            result.push(escape(value));
        }
    }
    result
}

/// Generic completion provider for any resolvable resource type: offers the
/// canonical id and every display name of each listed item.
pub struct Complete<T>(PhantomData<T>);

impl<T> Default for Complete<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

#[async_trait]
impl<T: Resolvable> Provider for Complete<T> {
    async fn complete_argument(
        &self,
        api: &dyn CloudApi,
        to_complete: &str,
    ) -> (Vec<String>, Directive) {
        let items = match T::list(api).await {
            Ok(items) => items,
            Err(_) => return none(),
        };
        let mut vals = Vec::new();
        for item in &items {
            vals.push(item.canonical_id().to_owned());
            vals.extend(item.display_names().into_iter().map(str::to_owned));
        }
        (
            match_string_prefix(&vals, to_complete, true),
            Directive::NoFileComp,
        )
    }
}
