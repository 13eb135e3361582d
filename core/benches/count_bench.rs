use criterion::{criterion_group, criterion_main, Criterion};
use core::freq::count_words;
use core::StopwordSet;
use std::io::Cursor;

fn bench_count(c: &mut Criterion) {
    let text = include_str!("../README.md").repeat(64);
    let stops = StopwordSet::from_reader(Cursor::new("the a an and of to in is for\n")).unwrap();
    c.bench_function("count_readme_x64", |b| {
        b.iter(|| count_words(Cursor::new(text.as_bytes()), &stops, true).unwrap())
    });
}

criterion_group!(benches, bench_count);
criterion_main!(benches);
