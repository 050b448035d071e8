//! # Engine Tour
//!
//! This example walks through both dispatch modes of the matching engine:
//! - Ordered branch lists over plain values and JSON documents
//! - Variant-keyed arm sets over `Maybe` and `Outcome` subjects
//! - Deferred handlers awaited by the caller
//!
//! Run with: `cargo run --example engine_tour`

use matchbook_engine::{
    any, eq, fields, guard, otherwise, select, select_or, success, MaybeArms, OutcomeArms,
};
use matchbook_types::{defer, Maybe, Outcome};
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing so branch selection is visible with RUST_LOG=debug
    tracing_subscriber::fmt::init();

    println!("Matchbook Engine Tour\n");

    // Step 1: Ordered dispatch over plain values
    println!("Ordered branches:");
    for reading in [42_i64, -7, 0] {
        let label = select_or(
            reading,
            vec![
                eq(0_i64).to("zero"),
                guard(|v: &i64| *v > 0).to("positive"),
            ],
            || "negative",
        );
        println!("  {reading:>3} -> {label}");
    }

    // Step 2: Structural dispatch over a JSON event
    println!("\nStructural branches:");
    let event = json!({ "kind": "deploy", "env": "prod", "replicas": 3 });
    let routed = select(
        event,
        vec![
            fields(vec![("kind", eq(json!("deploy"))), ("env", eq(json!("prod")))])
                .to("page the on-call"),
            fields(vec![("kind", eq(json!("deploy")))]).to("log only"),
            otherwise(|_| "ignore"),
        ],
    )?;
    println!("  deploy to prod -> {routed}");

    // Step 3: Variant-keyed dispatch over container values
    println!("\nVariant-keyed arms:");
    let lookup: Maybe<&str> = Maybe::Present("maple");
    let greeting = select(
        lookup,
        MaybeArms::new()
            .present(|name| format!("hello, {name}"))
            .absent(|| "hello, stranger".to_string()),
    )?;
    println!("  {greeting}");

    let parsed: Outcome<i64, String> = Outcome::Success(140);
    let verdict = select_or(
        parsed,
        OutcomeArms::new()
            .success_where(vec![
                success(guard(|n: &i64| *n >= 100)).to("big number".to_string()),
                success(any()).then(|o| format!("small number: {o:?}")),
            ])
            .failure(|err| format!("unparseable: {err}")),
        || "unclaimed".to_string(),
    );
    println!("  {verdict}");

    // Step 4: Handlers that defer work until the caller awaits
    let deferred = select(
        Maybe::Present(21_u64),
        MaybeArms::new()
            .present(|n| defer(async move { n * 2 }))
            .absent(|| defer(async { 0 })),
    )?;
    println!("\nDeferred handler answered: {}", deferred.await);

    Ok(())
}
