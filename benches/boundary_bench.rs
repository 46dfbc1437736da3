use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use wordhop::document::Document;
use wordhop::movement::BoundarySearch;
use wordhop::position::Position;
use wordhop::segment::{OracleConfig, SegmentationService};

fn mixed_document() -> Document {
    let latin = "the quick brown fox jumps over the lazy dog ".repeat(4);
    let cjk = "尊重用户的自由和社区".repeat(8);
    let mut lines = Vec::new();
    for i in 0..200 {
        match i % 4 {
            0 => lines.push(latin.clone()),
            1 => lines.push(cjk.clone()),
            2 => lines.push(String::new()), // blank line to cross
            _ => lines.push(format!("{} {}", latin.trim_end(), cjk)),
        }
    }
    Document::from_lines(lines)
}

fn configured_search() -> BoundarySearch {
    let service = Arc::new(SegmentationService::new());
    service.configure(OracleConfig::default());
    BoundarySearch::new(service)
}

fn boundary_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundary_search");
    let doc = mixed_document();
    let search = configured_search();

    group.bench_function("walk_document_forward", |b| {
        b.iter(|| {
            let mut pos = Position::new(0, 0);
            // walk 1000 jumps through the document
            for _ in 0..1000 {
                let jump = search.compute_forward(&doc, pos).unwrap();
                if jump.position == pos {
                    pos = Position::new(0, 0); // wrapped at the end
                } else {
                    pos = jump.position;
                }
            }
            black_box(pos)
        })
    });

    group.bench_function("walk_document_backward", |b| {
        let end = Position::new(199, 0);
        b.iter(|| {
            let mut pos = end;
            for _ in 0..1000 {
                let jump = search.compute_backward(&doc, pos).unwrap();
                if jump.position == pos {
                    pos = end;
                } else {
                    pos = jump.position;
                }
            }
            black_box(pos)
        })
    });

    group.finish();
}

fn segmentation_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation_cache");
    let line = "尊重用户的自由和社区".repeat(8);

    group.bench_function("segment_cached_line", |b| {
        let service = SegmentationService::new();
        service.configure(OracleConfig::default());
        service.segment(&line).unwrap();
        b.iter(|| black_box(service.segment(&line).unwrap()))
    });

    group.bench_function("segment_distinct_lines", |b| {
        let service = SegmentationService::new();
        service.configure(OracleConfig::default());
        let lines: Vec<String> = (0..100).map(|i| format!("{}{}", line, i)).collect();
        b.iter(|| {
            // 100 distinct lines against a 25-entry cache: mostly misses
            for line in &lines {
                black_box(service.segment(line).unwrap());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, boundary_forward, segmentation_cache);
criterion_main!(benches);
