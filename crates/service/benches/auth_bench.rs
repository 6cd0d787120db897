use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::auth::service::{AuthService, AuthConfig};
use service::auth::repository::mock::MockAuthRepository;
use service::auth::domain::LoginInput;

fn bench_login(c: &mut Criterion) {
    let repo = Arc::new(MockAuthRepository::default());
    repo.insert("bench@example.com", "Benchmark1", true).unwrap();
    let svc = AuthService::new(repo.clone(), AuthConfig { jwt_secret: "secret".into(), access_token_expire_minutes: 20 });

    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("auth_login_verify", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.login(LoginInput { username: "bench@example.com".into(), password: "Benchmark1".into() })).unwrap();
        });
    });
}

criterion_group!(benches, bench_login);
criterion_main!(benches);
