// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::sync::LazyLock;

use criterion::{criterion_group, criterion_main, Criterion};
use opensearch_core::{Context, SignRequest};
use opensearch_sign::{canonicalize_pairs, Credential, RequestSigner};

criterion_group!(benches, bench);
criterion_main!(benches);

static RUNTIME: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("must success")
});

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("opensearch");

    group.bench_function("sign_request", |b| {
        let cred = Credential::new("access_key_id", "access_key_secret");
        let s = RequestSigner::new();
        let ctx = Context::new();

        b.to_async(&*RUNTIME).iter(|| async {
            let mut req = http::Request::new("");
            *req.method_mut() = http::Method::GET;
            *req.uri_mut() = "http://127.0.0.1:9000/v3/openapi/apps/app/search?query=config%3Dstart%3A0&fetch_fields=title"
                .parse()
                .expect("url must be valid");

            let (mut parts, _) = req.into_parts();
            s.sign_request(&ctx, &mut parts, Some(&cred), None)
                .await
                .expect("must success")
        })
    });

    group.bench_function("canonicalize_pairs", |b| {
        let pairs: Vec<(String, String)> = (0..32)
            .map(|i| (format!("key{}", 32 - i), format!("value{i}")))
            .collect();

        b.iter(|| canonicalize_pairs(&pairs).len())
    });

    group.finish();
}
