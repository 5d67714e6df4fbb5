// Criterion benchmarks for kosei-ja.
//
// Benchmarks the full check/apply pipeline over a defect-heavy paragraph
// using only the built-in checkers (no rules directory needed).
//
// Run:
//   cargo bench -p kosei-ja

use criterion::{Criterion, criterion_group, criterion_main};

use kosei_ja::RuleEngine;

const PARAGRAPH: &str = "ユーザーはサーバにアクセスします。ユーザの情報をサーバーで管理します。\
学校は行って、本はは読みます。すいません。１２３件の（報告）を取扱いとして行なう。\
ウェブサイトの更新はは明日である。手続きを進めます。";

fn bench_check(c: &mut Criterion) {
    let engine = RuleEngine::default();
    c.bench_function("check_paragraph", |b| {
        b.iter(|| engine.check(std::hint::black_box(PARAGRAPH)))
    });
}

fn bench_check_apply(c: &mut Criterion) {
    let engine = RuleEngine::default();
    c.bench_function("check_apply_paragraph", |b| {
        b.iter(|| {
            let corrections = engine.check(std::hint::black_box(PARAGRAPH));
            engine.apply(PARAGRAPH, &corrections)
        })
    });
}

fn bench_escalation(c: &mut Criterion) {
    let engine = RuleEngine::default();
    c.bench_function("should_escalate_paragraph", |b| {
        b.iter(|| engine.should_escalate(std::hint::black_box(PARAGRAPH)))
    });
}

criterion_group!(benches, bench_check, bench_check_apply, bench_escalation);
criterion_main!(benches);
