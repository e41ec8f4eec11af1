use criterion::{black_box, criterion_group, criterion_main, Criterion};

use examdeck_core::aiken::{classify_line, parse_aiken, validate_questions};

fn generate_aiken_text(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        s.push_str(&format!(
            "What is the answer to question {i}?\nA) first {i}\nB) second {i}\nC) third {i}\nD) fourth {i}\nANSWER: B\n\n"
        ));
    }
    s
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_line");

    group.bench_function("question_start", |b| {
        b.iter(|| classify_line(black_box("What is the capital of Spain?")))
    });
    group.bench_function("option_line", |b| {
        b.iter(|| classify_line(black_box("B) Madrid")))
    });
    group.bench_function("answer_line", |b| {
        b.iter(|| classify_line(black_box("ANSWER: B")))
    });
    group.bench_function("ignored_line", |b| {
        b.iter(|| classify_line(black_box("some stray commentary")))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_aiken");

    let small = generate_aiken_text(5);
    let medium = generate_aiken_text(50);
    let large = generate_aiken_text(200);

    group.bench_function("5_questions", |b| b.iter(|| parse_aiken(black_box(&small))));
    group.bench_function("50_questions", |b| b.iter(|| parse_aiken(black_box(&medium))));
    group.bench_function("200_questions", |b| b.iter(|| parse_aiken(black_box(&large))));

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let questions = parse_aiken(&generate_aiken_text(200));

    c.bench_function("validate_200_questions", |b| {
        b.iter(|| validate_questions(black_box(&questions)))
    });
}

criterion_group!(benches, bench_classify, bench_parse, bench_validate);
criterion_main!(benches);
