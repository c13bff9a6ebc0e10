//! Benchmarks for walking text.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use textwalk::report;
use textwalk::walker::Walker;

fn sample_text(crlf: bool) -> String {
    let eol = if crlf { "\r\n" } else { "\n" };
    (0..500)
        .map(|i| format!("  line {i}: some *marked* text with a [link]{eol}"))
        .collect()
}

fn bench_forward_to_end(c: &mut Criterion) {
    let unix = sample_text(false);
    let windows = sample_text(true);
    c.bench_function("forward_unix", |b| {
        b.iter(|| {
            let mut walker = Walker::new(black_box(&unix));
            while walker.has_more() {
                walker.forward();
            }
        });
    });
    c.bench_function("forward_windows", |b| {
        b.iter(|| {
            let mut walker = Walker::new(black_box(&windows));
            while walker.has_more() {
                walker.forward();
            }
        });
    });
}

fn bench_scan_lines(c: &mut Criterion) {
    let text = sample_text(false);
    c.bench_function("skip_spaces_and_match", |b| {
        b.iter(|| {
            let mut walker = Walker::new(black_box(&text));
            let mut hits = 0;
            while walker.has_more() {
                walker.skip_spaces();
                if walker.match_str("line") {
                    hits += 1;
                }
                walker.go_to_next_line();
            }
            hits
        });
    });
    c.bench_function("summarize", |b| b.iter(|| report::summarize(black_box(&text))));
}

criterion_group!(benches, bench_forward_to_end, bench_scan_lines);
criterion_main!(benches);
