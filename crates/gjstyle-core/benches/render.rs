// Rust guideline compliant 2026-10-14

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use gjstyle_core::{normalize, optimize, Document, ErrorDetail, ErrorSection, ResponseEnvelope};
use serde_json::json;

fn build_envelope(count: usize) -> ResponseEnvelope {
    let mut envelope = ResponseEnvelope::new();
    envelope.method = Some("items.list".to_string());
    for i in 0..count {
        let mut item = Document::new();
        item.insert("id".to_string(), json!(i));
        item.insert("title".to_string(), json!(format!("Item {}", i)));
        envelope.data_mut().push_item(item);
    }
    envelope
}

fn bench_render_items(c: &mut Criterion) {
    let envelope = build_envelope(1000);
    c.bench_function("render_1000_items", |b| {
        b.iter(|| black_box(envelope.render()))
    });
}

fn bench_optimize_error(c: &mut Criterion) {
    let mut envelope = ResponseEnvelope::new();
    let mut error = ErrorSection::new(400, "Invalid request");
    for i in 0..100 {
        error.add_error(ErrorDetail::default().with_reason(format!("reason{}", i)));
    }
    envelope.error = Some(error);
    let doc = normalize(&envelope);

    c.bench_function("optimize_100_errors", |b| {
        b.iter_batched(|| doc.clone(), |doc| black_box(optimize(doc)), BatchSize::SmallInput)
    });
}

criterion_group!(benches, bench_render_items, bench_optimize_error);
criterion_main!(benches);
