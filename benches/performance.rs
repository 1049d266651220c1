// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for VERSECRAFT
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Candidate generation throughput per section type
//! - Dedup filtering against a growing used-phrase set
//! - Full wizard pass throughput
//! - Prompt rendering at pattern scale

use std::collections::HashSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use versecraft::export::{render_prompt, VocalStyle};
use versecraft::phrases::PhraseBank;
use versecraft::session::{CommitOutcome, CompositionSession};
use versecraft::structure::{sections_from_pattern, SectionKind, StructurePattern};
use versecraft::suggest::{SuggestionContext, SuggestionEngine};

/// Benchmark candidate generation for each section type
fn bench_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidates");
    let used = HashSet::new();

    let cases = [
        ("intro", SectionKind::Intro, 0),
        ("chorus_opener", SectionKind::Chorus, 0),
        ("chorus_middle", SectionKind::Chorus, 1),
        ("chorus_ending", SectionKind::Chorus, 3),
        ("verse", SectionKind::Verse, 0),
        ("pre_chorus", SectionKind::PreChorus, 0),
        ("bridge", SectionKind::Bridge, 0),
        ("outro", SectionKind::Outro, 0),
    ];

    for (name, kind, line_index) in cases {
        let mut engine = SuggestionEngine::with_seed(PhraseBank::builtin(), 42);
        group.bench_function(name, |b| {
            b.iter(|| {
                let ctx = SuggestionContext {
                    kind,
                    line_index,
                    first_chorus: true,
                    used_phrases: &used,
                };
                black_box(engine.candidates(&ctx))
            })
        });
    }

    group.finish();
}

/// Benchmark verse candidate generation against a growing used-phrase set
fn bench_dedup_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dedup_filter");

    for used_count in [0usize, 3, 6] {
        let bank = PhraseBank::builtin();
        let used: HashSet<String> = bank.verse_phrases.iter().take(used_count).cloned().collect();
        let mut engine = SuggestionEngine::with_seed(bank, 42);

        group.bench_with_input(
            BenchmarkId::new("verse", used_count),
            &used_count,
            |b, _| {
                b.iter(|| {
                    let ctx = SuggestionContext {
                        kind: SectionKind::Verse,
                        line_index: 0,
                        first_chorus: false,
                        used_phrases: &used,
                    };
                    black_box(engine.candidates(&ctx))
                })
            },
        );
    }

    group.finish();
}

/// Benchmark a complete wizard pass: open a session, commit the first
/// candidate on every line, render the prompt
fn bench_full_pass(c: &mut Criterion) {
    let patterns = StructurePattern::builtin();

    let mut group = c.benchmark_group("full_pass");
    for pattern in &patterns {
        group.bench_with_input(
            BenchmarkId::new("compose", &pattern.id),
            pattern,
            |b, pattern| {
                b.iter(|| {
                    let mut engine = SuggestionEngine::with_seed(PhraseBank::builtin(), 42);
                    let mut session = CompositionSession::from_pattern(pattern);
                    loop {
                        let candidates = session.regenerate_candidates(&mut engine);
                        if session.commit(&candidates[0]) == CommitOutcome::Completed {
                            break;
                        }
                    }
                    let sections = session.into_sections();
                    black_box(render_prompt("題名", &sections, VocalStyle::Male))
                })
            },
        );
    }
    group.finish();
}

/// Benchmark prompt rendering alone on a filled structure
fn bench_render_prompt(c: &mut Criterion) {
    let patterns = StructurePattern::builtin();

    let mut engine = SuggestionEngine::with_seed(PhraseBank::builtin(), 42);
    let mut session = CompositionSession::from_pattern(&patterns[1]);
    loop {
        let candidates = session.regenerate_candidates(&mut engine);
        if session.commit(&candidates[0]) == CommitOutcome::Completed {
            break;
        }
    }
    let sections = session.into_sections();

    c.bench_function("render_prompt", |b| {
        b.iter(|| black_box(render_prompt("漆黒の侍", &sections, VocalStyle::Female)))
    });
}

/// Benchmark section instantiation and relabeling at pattern scale
fn bench_structure(c: &mut Criterion) {
    let patterns = StructurePattern::builtin();

    c.bench_function("sections_from_pattern", |b| {
        b.iter(|| black_box(sections_from_pattern(&patterns[1])))
    });
}

criterion_group!(
    benches,
    bench_candidates,
    bench_dedup_filter,
    bench_full_pass,
    bench_render_prompt,
    bench_structure
);
criterion_main!(benches);
