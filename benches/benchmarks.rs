use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use rill::{create_store, Store};

fn store_creation_benchmark(c: &mut Criterion) {
    c.bench_function("store_creation", |b| {
        b.iter(|| {
            let store = create_store(|count: i32, step: i32| count + step, black_box(42));
            store
        });
    });
}

fn store_get_benchmark(c: &mut Criterion) {
    let store = create_store(|count: i32, step: i32| count + step, 42);

    c.bench_function("store_get", |b| {
        b.iter(|| {
            black_box(store.get());
        });
    });
}

fn dispatch_benchmark(c: &mut Criterion) {
    let store = create_store(|count: u64, step: u64| count.wrapping_add(step), 0);

    c.bench_function("dispatch", |b| {
        b.iter(|| {
            store.dispatch(black_box(1));
        });
    });
}

fn dispatch_struct_state_benchmark(c: &mut Criterion) {
    #[derive(Clone)]
    struct State {
        counter: usize,
        name: String,
    }

    let store = Store::new(
        |state: State, step: usize| State {
            counter: state.counter + step,
            ..state
        },
        State {
            counter: 0,
            name: "test".to_string(),
        },
    );

    c.bench_function("dispatch_struct_state", |b| {
        b.iter(|| {
            store.dispatch(black_box(1));
        });
    });
}

fn dispatch_with_listeners_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_with_listeners");

    for listener_count in [1, 10, 100].iter() {
        let store = create_store(|count: u64, step: u64| count.wrapping_add(step), 0);

        for _ in 0..*listener_count {
            store.subscribe(|| {
                // Empty listener
            });
        }

        group.bench_with_input(
            BenchmarkId::from_parameter(listener_count),
            listener_count,
            |b, _| {
                b.iter(|| {
                    store.dispatch(black_box(1));
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    store_creation_benchmark,
    store_get_benchmark,
    dispatch_benchmark,
    dispatch_struct_state_benchmark,
    dispatch_with_listeners_benchmark,
);
criterion_main!(benches);
