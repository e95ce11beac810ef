//! Benchmarks for ECDH-B233k key agreement operations
//!
//! This benchmark suite measures the performance of:
//! - Key pair generation
//! - Shared secret computation

use ccrypt_api::KeyExchange;
use ccrypt_kex::ecdh::b233k::EcdhB233k;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::OsRng;

fn bench_keypair_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdh_b233k_keypair");
    // Reduce sample size for this slow operation
    group.sample_size(10);
    group.measurement_time(std::time::Duration::from_secs(10));

    group.bench_function("generate", |b| {
        let mut rng = OsRng;
        b.iter(|| {
            let keypair = EcdhB233k::keypair(&mut rng).expect("Keypair generation failed");
            black_box(keypair);
        });
    });

    group.finish();
}

fn bench_shared_secret(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdh_b233k_shared_secret");
    group.sample_size(10);
    group.measurement_time(std::time::Duration::from_secs(15));

    let mut rng = OsRng;
    let (alice_pk, _) = EcdhB233k::keypair(&mut rng).expect("Keypair generation failed");
    let (_, bob_sk) = EcdhB233k::keypair(&mut rng).expect("Keypair generation failed");

    group.bench_function("compute", |b| {
        b.iter(|| {
            let secret = EcdhB233k::shared_secret(black_box(&bob_sk), black_box(&alice_pk))
                .expect("Shared secret computation failed");
            black_box(secret);
        });
    });

    group.finish();
}

fn bench_complete_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdh_b233k_complete");
    group.sample_size(10);
    group.measurement_time(std::time::Duration::from_secs(20));

    group.bench_function("full_agreement_flow", |b| {
        let mut rng = OsRng;
        b.iter(|| {
            let (alice_pk, alice_sk) =
                EcdhB233k::keypair(&mut rng).expect("Keypair generation failed");
            let (bob_pk, bob_sk) = EcdhB233k::keypair(&mut rng).expect("Keypair generation failed");

            let alice_secret = EcdhB233k::shared_secret(&alice_sk, &bob_pk)
                .expect("Shared secret computation failed");
            let bob_secret = EcdhB233k::shared_secret(&bob_sk, &alice_pk)
                .expect("Shared secret computation failed");

            black_box((alice_secret, bob_secret));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_keypair_generation,
    bench_shared_secret,
    bench_complete_flow
);

criterion_main!(benches);
