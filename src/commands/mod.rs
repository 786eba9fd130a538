//! Command implementations
//!
//! Each command obtains a resolver from its resolution provider once per
//! invocation, resolves every user-supplied positional argument against it,
//! and aborts with the resolution error verbatim when an argument is
//! ambiguous or unknown.

pub mod database;
pub mod network;
pub mod router;
pub mod server;
pub mod storage;

use crate::resolver::{ResolveError, Resolver};

/// Resolve each positional argument to exactly one canonical id, in input
/// order. The first failing argument aborts the command.
pub fn resolve_args(resolver: &Resolver, args: &[String]) -> Result<Vec<String>, ResolveError> {
    args.iter()
        .map(|arg| resolver.resolve(arg).get_only())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::mock::MockApi;
    use crate::cloud::types::Network;
    use crate::resolver::CachingNetwork;

    #[test]
    fn test_resolve_args_keeps_input_order() {
        let api = MockApi {
            networks: vec![
                Network {
                    uuid: "aaaa0000-0000-4000-8000-000000000001".to_owned(),
                    name: "alpha".to_owned(),
                    ..Network::default()
                },
                Network {
                    uuid: "bbbb0000-0000-4000-8000-000000000002".to_owned(),
                    name: "beta".to_owned(),
                    ..Network::default()
                },
            ],
            ..MockApi::default()
        };
        let mut provider = CachingNetwork::new();
        let resolver = tokio_test::block_on(provider.get(&api)).expect("listing succeeds");

        let resolved = resolve_args(&resolver, &["beta".to_owned(), "alpha".to_owned()])
            .expect("both resolve");
        assert_eq!(
            resolved,
            vec![
                "bbbb0000-0000-4000-8000-000000000002".to_owned(),
                "aaaa0000-0000-4000-8000-000000000001".to_owned(),
            ]
        );
        assert_eq!(api.call_count("list_networks"), 1);
    }

    #[test]
    fn test_resolve_args_surfaces_first_error() {
        let api = MockApi::default();
        let mut provider = CachingNetwork::new();
        let resolver = tokio_test::block_on(provider.get(&api)).expect("listing succeeds");

        let err = resolve_args(&resolver, &["ghost".to_owned()]).expect_err("must fail");
        assert_eq!(err, ResolveError::NotFound("ghost".to_owned()));
    }
}
