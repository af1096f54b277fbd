//! Decoding and composition benchmarks
//!
//! Token decoding across payload sizes and failure modes, plus the three
//! artifact composers on realistic input.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use time::macros::date;
use toolkitlab::*;

/// Helper to generate test tokens of different sizes
mod helpers {
    use toolkitlab::utils::base64;

    pub fn generate_token_with_payload_size(payload_size: usize) -> String {
        let header = r#"{"alg":"HS256","typ":"JWT"}"#;

        let mut payload =
            r#"{"sub":"user123","iss":"https://example.com","iat":1516239022,"exp":9999999999"#
                .to_string();
        let extra_size = payload_size.saturating_sub(payload.len());
        if extra_size > 0 {
            payload.push_str(",\"data\":\"");
            payload.push_str(&"x".repeat(extra_size.saturating_sub(10)));
            payload.push_str("\"}");
        } else {
            payload.push('}');
        }

        format!(
            "{}.{}.{}",
            base64::encode(header),
            base64::encode(&payload),
            base64::encode([0u8; 32])
        )
    }
}

fn bench_decoding_by_size(c: &mut Criterion) {
    use helpers::generate_token_with_payload_size;

    let mut group = c.benchmark_group("decode_by_size");

    for size in [64, 256, 1024, 4096, 16384] {
        let token = generate_token_with_payload_size(size);
        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_function(format!("size_{size}"), |b| {
            b.iter(|| decode_token(black_box(&token)));
        });
    }

    group.finish();
}

fn bench_claims(c: &mut Criterion) {
    let token = helpers::generate_token_with_payload_size(256);
    let decoded = decode_token(&token).unwrap();

    c.bench_function("derive_claims", |b| {
        b.iter(|| derive_claims(black_box(decoded.payload())));
    });
}

fn bench_invalid_tokens(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_invalid");

    group.bench_function("missing_parts", |b| {
        let invalid = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9";
        b.iter(|| decode_token(black_box(invalid)));
    });

    group.bench_function("invalid_base64", |b| {
        let invalid = "invalid!!.base64.signature";
        b.iter(|| decode_token(black_box(invalid)));
    });

    group.bench_function("invalid_json", |b| {
        let invalid = "eyJpbnZhbGlkX2pzb24.Invalid.Signature";
        b.iter(|| decode_token(black_box(invalid)));
    });

    group.finish();
}

fn bench_composers(c: &mut Criterion) {
    let registry = Registry::global();
    let mut group = c.benchmark_group("compose");

    let mut readme = ArtifactSpec {
        title: "Benchmark".into(),
        github_username: "user".into(),
        repo_name: "bench".into(),
        author: "Someone".into(),
        ..ArtifactSpec::starter()
    };
    for badge in ["npm", "license", "stars", "build"] {
        readme.toggle_badge(badge);
    }
    for n in 0..10 {
        readme.add_feature(&format!("Feature {n}"));
    }
    for section in ["demo", "api", "faq"] {
        if readme.add_section(section, registry).is_ok() {
            readme.update_section_content(section, "Lorem ipsum dolor sit amet.");
        }
    }

    group.bench_function("readme", |b| {
        b.iter(|| compose_readme_with(black_box(&readme), registry));
    });

    let meta = MetaSpec::sample();
    group.bench_function("meta_html", |b| {
        b.iter(|| compose_meta_html(black_box(&meta)));
    });

    let selection: Vec<&str> = registry.gitignore.iter().map(|t| t.id.as_str()).collect();
    group.bench_function("gitignore_all", |b| {
        b.iter(|| compose_gitignore_on(black_box(&selection), registry, date!(2025 - 01 - 01)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_decoding_by_size,
    bench_claims,
    bench_invalid_tokens,
    bench_composers
);
criterion_main!(benches);
