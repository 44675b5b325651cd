//! Keyword currying benchmark.
//!
//! Measures a full dispatch through the positional fast path, the
//! positional-then-keyword path and the keyword-only path, plus the cost of
//! branching a partial wrapper.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use keyword_curry::dictionary;
use keyword_curry::keyword::curry;
use keyword_curry::signature::ParameterList;
use keyword_curry::target::{Arguments, Target};
use keyword_curry::value::{Dictionary, Value};
use std::hint::black_box;

const ARITIES: [usize; 3] = [1, 4, 16];

fn positional_target(arity: usize) -> Target<usize> {
    let parameters = (0..arity).fold(ParameterList::new(), |parameters, index| {
        parameters.positional(format!("pos{index}"))
    });
    Target::new(parameters, |arguments: Arguments| arguments.positional().len())
}

fn keyword_target(keys: usize) -> Target<usize> {
    let parameters = (0..keys).fold(ParameterList::new().positional("pos1"), |parameters, index| {
        parameters.named_required(format!("key{index}"))
    });
    Target::new(parameters, |arguments: Arguments| arguments.named().len())
}

fn benchmark_positional_one_at_a_time(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("keyword_curry_positional");

    for arity in ARITIES {
        let target = positional_target(arity);
        group.bench_with_input(BenchmarkId::new("one_at_a_time", arity), &arity, |bencher, &arity| {
            bencher.iter(|| {
                let mut curried = curry(target.clone());
                for index in 0..arity {
                    let step = curried.call([Value::from(index as i64)]);
                    match step.ok().and_then(|step| step.partial()) {
                        Some(next) => curried = next,
                        None => return,
                    }
                }
                black_box(curried);
            });
        });
    }

    group.finish();
}

fn benchmark_positional_all_at_once(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("keyword_curry_positional");

    for arity in ARITIES {
        let target = positional_target(arity);
        let arguments: Vec<Value> = (0..arity).map(|index| Value::from(index as i64)).collect();
        group.bench_with_input(BenchmarkId::new("all_at_once", arity), &arity, |bencher, _| {
            bencher.iter(|| black_box(curry(target.clone()).call(black_box(arguments.clone()))));
        });
    }

    group.finish();
}

fn benchmark_keyword_accumulation(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("keyword_curry_named");

    for keys in ARITIES {
        let target = keyword_target(keys);
        let chunks: Vec<Dictionary> = (0..keys)
            .map(|index| Dictionary::singleton(format!("key{index}"), index as i64))
            .collect();
        group.bench_with_input(BenchmarkId::new("one_key_per_call", keys), &keys, |bencher, _| {
            bencher.iter(|| {
                let Ok(mut step) = curry(target.clone()).call([Value::from(1)]) else {
                    return;
                };
                for chunk in &chunks {
                    let Some(curried) = step.partial() else {
                        return;
                    };
                    match curried.call_named(chunk.clone()) {
                        Ok(next) => step = next,
                        Err(_) => return,
                    }
                }
                black_box(step);
            });
        });
    }

    group.finish();
}

fn benchmark_branching(criterion: &mut Criterion) {
    let target = keyword_target(2);
    let Some(base) = curry(target)
        .call([Value::from(1)])
        .ok()
        .and_then(|step| step.partial())
    else {
        return;
    };

    criterion.bench_function("keyword_curry_branch", |bencher| {
        bencher.iter(|| {
            let left = base.clone().call_named(dictionary! { "key0" => 1 });
            let right = base.clone().call_named(dictionary! { "key1" => 2 });
            black_box((left, right))
        });
    });
}

criterion_group!(
    benches,
    benchmark_positional_one_at_a_time,
    benchmark_positional_all_at_once,
    benchmark_keyword_accumulation,
    benchmark_branching
);

criterion_main!(benches);
