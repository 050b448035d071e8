//! End-to-end dispatch behavior across both engine modes

use matchbook_engine::{
    any, eq, failure, fields, guard, otherwise, select, select_or, success, MaybeArms,
    NoMatchError, OutcomeArms,
};
use matchbook_types::{defer, Eventual, Maybe, Outcome};
use serde_json::json;

#[test]
fn ordered_guards_resolve_the_first_claiming_branch() {
    let branches = vec![
        guard(|v: &i64| *v > 10).to("big"),
        guard(|v: &i64| *v > 0).to("small"),
        otherwise(|_| "other"),
    ];
    assert_eq!(select(5, branches), Ok("small"));
}

#[test]
fn the_trailing_default_receives_the_subject() {
    let branches = vec![
        guard(|v: &i64| *v > 100).to("x"),
        otherwise(|v| if v < 0 { "negative" } else { "modest" }),
    ];
    assert_eq!(select(-3, branches), Ok("negative"));
}

#[test]
fn literal_branches_and_guard_branches_mix_in_order() {
    let run = |subject: i64| {
        select_or(
            subject,
            vec![
                eq(0_i64).to("zero"),
                guard(|v: &i64| v % 2 == 0).to("even"),
            ],
            || "odd",
        )
    };
    assert_eq!(run(0), "zero");
    assert_eq!(run(4), "even");
    assert_eq!(run(7), "odd");
}

#[test]
fn object_patterns_ignore_fields_they_do_not_name() {
    let subject = json!({ "a": 1, "b": 2 });
    let branches = vec![fields(vec![("a", eq(json!(1)))]).to("matchedA")];
    assert_eq!(select(subject, branches), Ok("matchedA"));
}

#[test]
fn keyed_arms_hand_the_payload_to_the_variant_arm() {
    let doubled = select(
        Outcome::<i32, String>::Success(5),
        OutcomeArms::new().success(|v| v * 2).failure(|_| -1),
    );
    assert_eq!(doubled, Ok(10));
}

#[test]
fn an_unclaimed_variant_falls_through_to_otherwise() {
    let label = select(
        Outcome::<i32, String>::Failure("x".into()),
        OutcomeArms::new()
            .success(|v: i32| v.to_string())
            .otherwise(|| "fallback".to_string()),
    );
    assert_eq!(label.as_deref(), Ok("fallback"));
}

#[test]
fn an_unclaimed_variant_without_otherwise_is_a_miss() {
    let result: Result<&str, NoMatchError> =
        select(Maybe::Present(1), MaybeArms::new().absent(|| "gone"));
    assert_eq!(result, Err(NoMatchError));
}

#[test]
fn a_miss_without_fallback_is_a_no_match_error() {
    let branches = vec![guard(|v: &i64| *v > 100).to("x")];
    assert_eq!(select(5, branches), Err(NoMatchError));
}

#[test]
fn select_or_returns_the_fallback_on_a_miss() {
    let branches = vec![guard(|v: &i64| *v > 100).to("x")];
    assert_eq!(select_or(5, branches, || "fell back"), "fell back");
}

#[test]
fn wildcard_payloads_match_the_variant_alone() {
    let branches = vec![success(any()).to("anySuccess")];
    assert_eq!(
        select(Outcome::<i32, String>::Success(99), branches),
        Ok("anySuccess")
    );

    let branches = vec![success(any()).to("anySuccess")];
    assert_eq!(
        select(Outcome::<i32, String>::Failure("x".into()), branches),
        Err(NoMatchError)
    );
}

#[test]
fn maybe_arms_route_both_variants() {
    let arms = || MaybeArms::new().present(|v: i32| v + 1).absent(|| 0);
    assert_eq!(select(Maybe::Present(41), arms()), Ok(42));
    assert_eq!(select(Maybe::Absent, arms()), Ok(0));
}

#[test]
fn nested_branches_refine_the_claimed_variant() {
    let classify = |outcome: Outcome<i32, String>| {
        select_or(
            outcome,
            OutcomeArms::new()
                .success_where(vec![
                    success(guard(|n: &i32| *n >= 100)).to("large win"),
                    success(any()).to("small win"),
                ])
                .failure(|_| "loss"),
            || "unclaimed",
        )
    };
    assert_eq!(classify(Outcome::Success(250)), "large win");
    assert_eq!(classify(Outcome::Success(3)), "small win");
    assert_eq!(classify(Outcome::Failure("x".into())), "loss");
}

#[test]
fn a_nested_miss_reaches_the_outer_fallback_not_the_sibling_catch_all() {
    let label = select_or(
        Outcome::<i32, String>::Success(3),
        OutcomeArms::new()
            .success_where(vec![success(eq(10)).to("ten")])
            .otherwise(|| "sibling"),
        || "outer",
    );
    assert_eq!(label, "outer");
}

#[test]
fn nested_branches_refine_the_failing_variant() {
    let classify = |outcome: Outcome<i32, String>| {
        select_or(
            outcome,
            OutcomeArms::new()
                .success(|_| "won")
                .failure_where(vec![
                    failure(guard(|e: &String| e.len() > 5)).to("verbose loss"),
                    failure(any()).to("terse loss"),
                ]),
            || "unclaimed",
        )
    };
    assert_eq!(classify(Outcome::Failure("catastrophic".into())), "verbose loss");
    assert_eq!(classify(Outcome::Failure("x".into())), "terse loss");
    assert_eq!(classify(Outcome::Success(5)), "won");
}

#[test]
fn a_failure_side_nested_miss_reaches_the_outer_fallback() {
    let label = select_or(
        Outcome::<i32, String>::Failure("x".into()),
        OutcomeArms::new()
            .failure_where(vec![failure(eq("boom".to_string())).to("boom")])
            .otherwise(|| "sibling"),
        || "outer",
    );
    assert_eq!(label, "outer");
}

#[test]
#[should_panic(expected = "handler blew up")]
fn handler_panics_propagate_unmodified() {
    let branches = vec![guard(|v: &i64| *v > 0).then(|_| -> i32 { panic!("handler blew up") })];
    let _ = select(1, branches);
}

#[tokio::test]
async fn handlers_may_defer_their_results() {
    let branches = vec![
        guard(|v: &i64| *v > 0).then(|v| defer(async move { v * 2 })),
        otherwise(|_| Eventual::ready(-1)),
    ];
    let eventual = select(21, branches).expect("a branch should claim a positive subject");
    assert_eq!(eventual.await, 42);
}

#[tokio::test]
async fn keyed_handlers_may_defer_too() {
    let eventual = select(
        Maybe::Present("halibut".to_string()),
        MaybeArms::new()
            .present(|name: String| defer(async move { name.len() }))
            .absent(|| Eventual::ready(0)),
    )
    .expect("the present arm should claim the subject");
    assert_eq!(eventual.await, 7);
}
