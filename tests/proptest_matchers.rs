//! Property-based tests using proptest
//!
//! These verify the correctness of the matcher functions and tier
//! aggregation using randomized inputs.

use nimbusctl::resolver::matcher::{match_title, match_uuid};
use nimbusctl::resolver::{MatchType, Resolved};
use proptest::prelude::*;

fn arb_uuid() -> impl Strategy<Value = String> {
    "[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-8[0-9a-f]{3}-[0-9a-f]{12}"
}

fn arb_name() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 _-]{0,30}"
}

proptest! {
    /// A candidate id always matches itself exactly.
    #[test]
    fn uuid_matches_itself(uuid in arb_uuid()) {
        prop_assert_eq!(match_uuid(&uuid, &uuid), MatchType::Exact);
    }

    /// Any non-empty prefix of an id matches at the prefix tier (or better
    /// for the full id).
    #[test]
    fn uuid_prefix_matches(uuid in arb_uuid(), len in 1usize..36) {
        let prefix = &uuid[..len];
        let expected = if prefix == uuid { MatchType::Exact } else { MatchType::Prefix };
        prop_assert_eq!(match_uuid(prefix, &uuid), expected);
    }

    /// A name always matches itself exactly, and case-folding never turns
    /// a match into a non-match.
    #[test]
    fn name_matches_itself(name in arb_name()) {
        prop_assert_eq!(match_title(&name, &name), MatchType::Exact);
        let folded = name.to_uppercase();
        prop_assert_ne!(match_title(&folded, &name), MatchType::None);
    }

    /// Case-insensitive matching is symmetric in the argument's casing.
    #[test]
    fn case_fold_symmetry(name in arb_name()) {
        let upper = match_title(&name.to_uppercase(), &name);
        let lower = match_title(&name.to_lowercase(), &name);
        prop_assert_eq!(upper.rank() > 0, lower.rank() > 0);
    }

    /// `add_match` is order-independent: the retained rank is the maximum
    /// regardless of insertion order.
    #[test]
    fn add_match_order_independent(ranks in prop::collection::vec(0u8..4, 1..6)) {
        let as_match = |rank: u8| match rank {
            0 => MatchType::None,
            1 => MatchType::Prefix,
            2 => MatchType::CaseInsensitive,
            _ => MatchType::Exact,
        };

        let mut forward = Resolved::new("arg");
        for rank in &ranks {
            forward.add_match("id", as_match(*rank));
        }
        let mut backward = Resolved::new("arg");
        for rank in ranks.iter().rev() {
            backward.add_match("id", as_match(*rank));
        }
        prop_assert_eq!(forward.get_all().ok(), backward.get_all().ok());
    }

    /// A wildcard built from any name by replacing its tail with `*`
    /// matches that name.
    #[test]
    fn wildcard_from_prefix_matches(name in arb_name(), cut in 0usize..10) {
        let cut = cut.min(name.len());
        let pattern = format!("{}*", &name[..cut]);
        let got = match_title(&pattern, &name);
        prop_assert_ne!(got, MatchType::None);
    }
}
