// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use decoy_identity::{IdentityData, random_digit_string, random_hostname, random_unix_time};

fn benchmark_identity(c: &mut Criterion) {
    let mut group = c.benchmark_group("identity");
    let data = IdentityData::default();
    let mut rng = StdRng::seed_from_u64(0);

    group.bench_function("hostname", |b| {
        b.iter(|| {
            random_hostname(&mut rng, black_box(&data))
                .expect("random_hostname failed")
                .len()
        });
    });
    group.bench_function("unix_time", |b| {
        b.iter(|| {
            random_unix_time(&mut rng, black_box("01.01.2005"), black_box("01.01.2018"))
                .expect("random_unix_time failed")
        });
    });
    group.bench_function("digit_string 20", |b| {
        b.iter(|| random_digit_string(&mut rng, black_box(20)));
    });
    group.finish();
}

criterion_group!(benches, benchmark_identity);
criterion_main!(benches);
