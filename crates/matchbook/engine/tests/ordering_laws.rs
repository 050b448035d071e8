//! Property tests: ordered dispatch is deterministic and first-match-wins
//! under arbitrary subjects, no matter how many later branches would also
//! claim them.

use matchbook_engine::{eq, guard, otherwise, select, select_or};
use proptest::prelude::*;

proptest! {
    /// The first satisfied branch wins even when later branches are shadowed
    /// duplicates of it.
    #[test]
    fn first_match_wins(subject in any::<i64>(), cut in any::<i64>()) {
        let chosen = select_or(
            subject,
            vec![
                guard(move |v: &i64| *v >= cut).to("first"),
                guard(move |v: &i64| *v >= cut).to("shadowed"),
                guard(|_: &i64| true).to("always"),
            ],
            || "fallback",
        );
        if subject >= cut {
            prop_assert_eq!(chosen, "first");
        } else {
            prop_assert_eq!(chosen, "always");
        }
    }

    /// A leading literal branch claims exactly its own subject; everything
    /// else falls to the trailing default.
    #[test]
    fn literal_claims_exactly_its_subject(subject in any::<i64>(), literal in any::<i64>()) {
        let chosen = select(
            subject,
            vec![eq(literal).to("literal"), otherwise(|_| "default")],
        );
        if subject == literal {
            prop_assert_eq!(chosen, Ok("literal"));
        } else {
            prop_assert_eq!(chosen, Ok("default"));
        }
    }

    /// Branch order is the only tie-break: reversing two overlapping guards
    /// flips the winner for every subject both of them claim.
    #[test]
    fn reversing_overlapping_branches_flips_the_winner(subject in 1_i64..1000) {
        let forward = select_or(
            subject,
            vec![
                guard(|v: &i64| *v > 0).to("broad"),
                guard(|v: &i64| *v > 10).to("narrow"),
            ],
            || "none",
        );
        prop_assert_eq!(forward, "broad");

        let reversed = select_or(
            subject,
            vec![
                guard(|v: &i64| *v > 10).to("narrow"),
                guard(|v: &i64| *v > 0).to("broad"),
            ],
            || "none",
        );
        if subject > 10 {
            prop_assert_eq!(reversed, "narrow");
        } else {
            prop_assert_eq!(reversed, "broad");
        }
    }
}
