use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ctxgroup::{ContextGroupResolver, StaticContext};
use ctxgroup_test_utils::TreeBuilder;
use serde_json::json;

fn wide_context() -> StaticContext {
    let mut builder = TreeBuilder::new()
        .all(json!({ "project": "bench", "region": "us-east-1" }))
        .default_group("group-0");
    let base: serde_json::Map<String, serde_json::Value> = (0..50)
        .map(|i| (format!("key-{}", i), json!(i)))
        .collect();
    builder = builder.group("base", serde_json::Value::Object(base));
    for i in 0..20 {
        builder = builder.child(
            &format!("group-{}", i),
            "base",
            json!({ "index": i, "key-0": "overridden" }),
        );
    }
    builder.build()
}

fn resolve_benchmark(c: &mut Criterion) {
    let context = wide_context();

    c.bench_function("resolver::resolve (default)", |b| {
        b.iter(|| {
            ContextGroupResolver::new(black_box(&context))
                .resolve()
                .unwrap()
        })
    });

    c.bench_function("resolver::resolve (explicit)", |b| {
        b.iter(|| {
            ContextGroupResolver::new(black_box(&context))
                .with_group("group-19")
                .resolve()
                .unwrap()
        })
    });
}

criterion_group!(benches, resolve_benchmark);
criterion_main!(benches);
