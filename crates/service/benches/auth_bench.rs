use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;

use service::auth::token::TokenService;

fn bench_issue_and_verify(c: &mut Criterion) {
    let tokens = TokenService::new("bench-secret");
    let token = tokens.issue(json!({"email": "bench@example.com"})).unwrap();

    c.bench_function("token_issue", |b| {
        b.iter(|| tokens.issue(json!({"email": "bench@example.com"})).unwrap());
    });

    c.bench_function("token_verify", |b| {
        b.iter(|| tokens.verify(&token).unwrap());
    });
}

criterion_group!(benches, bench_issue_and_verify);
criterion_main!(benches);
