use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spices::{parse_part, parse_spices, segments, SpicesParser};

fn polymer(n: usize) -> String {
    format!("A-{}{{B[HEAD]-C-D[TAIL]}}-E", n)
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_small", |b| {
        b.iter(|| parse_part(black_box("A-B(C)D[1]-E[1]")))
    });
    let input = polymer(100);
    c.bench_function("parse_polymer_100", |b| {
        b.iter(|| parse_part(black_box(&input)))
    });
    c.bench_function("parse_assembly", |b| {
        b.iter(|| parse_spices(black_box("<A-B(C)D>10<E-F>")))
    });
}

fn bench_cached(c: &mut Criterion) {
    c.bench_function("parse_assembly_cached", |b| {
        let parser = SpicesParser::new();
        b.iter(|| parser.parse(black_box("<A-B(C)D>10<E-F>")))
    });
}

fn bench_matrix(c: &mut Criterion) {
    let spices = parse_spices(&format!("<{}>", polymer(100))).unwrap();
    c.bench_function("matrix_polymer_100", |b| b.iter(|| spices.matrix()));
}

fn bench_segments(c: &mut Criterion) {
    let unit = parse_part(&polymer(50)).unwrap();
    c.bench_function("segments_to_trimers", |b| {
        b.iter(|| segments::enumerate(black_box(&unit), 3, false))
    });
}

criterion_group!(benches, bench_parse, bench_cached, bench_matrix, bench_segments);
criterion_main!(benches);
