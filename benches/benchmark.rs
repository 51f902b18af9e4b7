//! パフォーマンスベンチマーク
//!
//! 行処理（重複排除）と6成果物のレンダリングにかかる時間を測定します。
//! 入力は数千行規模のスプレッドシートを想定した合成データです。

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use uniseed::{process_rows, SeedBuilder};

/// 大学数 × 学部数 × 学科数 の合成行を生成（ヘッダー付き）
fn synthetic_rows(universities: usize, faculties: usize, departments: usize) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Üniversite".to_string(),
        "Fakülte".to_string(),
        "Bölüm".to_string(),
        "Puan".to_string(),
        "Tür".to_string(),
        "Şehir".to_string(),
    ]];

    for u in 0..universities {
        for f in 0..faculties {
            for d in 0..departments {
                rows.push(vec![
                    format!("Üniversite {}", u),
                    format!("Fakülte {}", f),
                    format!("Bölüm {}", d),
                    String::new(),
                    if u % 2 == 0 { "Devlet" } else { "Vakıf" }.to_string(),
                    format!("Şehir {}", u % 81),
                ]);
            }
        }
    }
    rows
}

fn benchmark_process_rows(c: &mut Criterion) {
    let rows = synthetic_rows(200, 10, 5);

    let mut group = c.benchmark_group("process_rows");
    group.throughput(Throughput::Elements(rows.len() as u64 - 1));
    group.bench_function("10k_rows", |b| {
        b.iter(|| process_rows(black_box(&rows)).unwrap());
    });
    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let rows = synthetic_rows(200, 10, 5);
    let catalog = process_rows(&rows).unwrap();
    let generator = SeedBuilder::new().build().unwrap();

    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(catalog.departments().len() as u64));
    group.bench_function("all_artifacts", |b| {
        b.iter(|| generator.render(black_box(&catalog)).unwrap());
    });
    group.finish();
}

criterion_group!(benches, benchmark_process_rows, benchmark_render);
criterion_main!(benches);
