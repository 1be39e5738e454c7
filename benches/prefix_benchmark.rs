use std::{sync::LazyLock, time::Duration};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fasim::{
    default_identifier_automaton, find_longest_prefix, Automaton, AutomatonBuilder,
    PrefixStrategy, Scanner, ScannerBuilder,
};

const SCANNER_INPUT: &str = include_str!("../tests/data/program.input");

const IDENTIFIER_INPUT: &str = "a_rather_long_identifier_with_digits_0123456789 = 1";

static IDENTIFIER: LazyLock<Automaton> =
    LazyLock::new(|| default_identifier_automaton().unwrap());

// Strings over {a, b} whose third to last symbol is `a`.
static NFA: LazyLock<Automaton> = LazyLock::new(|| {
    AutomatonBuilder::new()
        .states(["q0", "q1", "q2", "q3"])
        .alphabet(['a', 'b'])
        .transitions("q0", ['a', 'b'], "q0")
        .transition("q0", 'a', "q1")
        .transitions("q1", ['a', 'b'], "q2")
        .transitions("q2", ['a', 'b'], "q3")
        .initial_state("q0")
        .final_states(["q3"])
        .build()
        .unwrap()
});

static NFA_INPUT: LazyLock<String> = LazyLock::new(|| "abbab".repeat(20));

static SCANNER: LazyLock<Scanner> = LazyLock::new(|| ScannerBuilder::new().build().unwrap());

static INCREMENTAL_SCANNER: LazyLock<Scanner> = LazyLock::new(|| {
    ScannerBuilder::new()
        .prefix_strategy(PrefixStrategy::Incremental)
        .build()
        .unwrap()
});

fn dfa_prefix_benchmark(c: &mut Criterion) {
    for strategy in [PrefixStrategy::Restart, PrefixStrategy::Incremental] {
        c.bench_function(&format!("dfa_prefix_{:?}", strategy), |b| {
            b.iter(|| {
                black_box(find_longest_prefix(&IDENTIFIER, IDENTIFIER_INPUT, strategy));
            });
        });
    }
}

fn nfa_prefix_benchmark(c: &mut Criterion) {
    for strategy in [PrefixStrategy::Restart, PrefixStrategy::Incremental] {
        c.bench_function(&format!("nfa_prefix_{:?}", strategy), |b| {
            b.iter(|| {
                black_box(find_longest_prefix(&NFA, &NFA_INPUT, strategy));
            });
        });
    }
}

fn scanner_benchmark(c: &mut Criterion) {
    c.bench_function("scanner_benchmark", |b| {
        b.iter(|| {
            for t in SCANNER.find_iter(SCANNER_INPUT) {
                black_box(t);
            }
        });
    });
}

fn incremental_scanner_benchmark(c: &mut Criterion) {
    c.bench_function("incremental_scanner_benchmark", |b| {
        b.iter(|| {
            for t in INCREMENTAL_SCANNER.find_iter(SCANNER_INPUT) {
                black_box(t);
            }
        });
    });
}

criterion_group! {
    name = benchesprefix;
    config = Criterion::default();
    targets = dfa_prefix_benchmark, nfa_prefix_benchmark
}

criterion_group! {
    name = benchesscanner;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = scanner_benchmark, incremental_scanner_benchmark
}

criterion_main!(benchesprefix, benchesscanner);
