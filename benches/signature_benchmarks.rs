use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use payment_signature::{HashAlgorithm, SignatureEngine, SignatureRequest};

fn request() -> SignatureRequest {
    SignatureRequest {
        merchant_id: "123".to_string(),
        secret_key: "SecretKey".to_string(),
        currency: "EUR".to_string(),
        amount: "1000".to_string(),
        webhook_id: Some("wh-42".to_string()),
    }
}

fn benchmark_construction(c: &mut Criterion) {
    let req = request();
    c.bench_function("engine_construction", |b| {
        b.iter(|| {
            black_box(SignatureEngine::new(&req).unwrap());
        });
    });
}

fn benchmark_generate(c: &mut Criterion) {
    let engine = SignatureEngine::new(&request()).unwrap();
    let mut group = c.benchmark_group("generate");

    for algorithm in [
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm.name()),
            &algorithm,
            |b, &algorithm| {
                b.iter(|| black_box(engine.generate_with(algorithm).unwrap()));
            },
        );
    }

    group.finish();
}

fn benchmark_verify(c: &mut Criterion) {
    let engine = SignatureEngine::new(&request()).unwrap();
    let signature = engine.generate_with(HashAlgorithm::Sha256).unwrap();

    c.bench_function("verify", |b| {
        b.iter(|| {
            black_box(
                engine
                    .verify_with(&signature, HashAlgorithm::Sha256)
                    .unwrap(),
            );
        });
    });
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_generate,
    benchmark_verify
);
criterion_main!(benches);
