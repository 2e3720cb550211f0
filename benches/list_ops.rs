use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use simplelist::List;

const LIST_LEN: usize = 1024;

fn seeded_list(len: usize) -> List {
    let mut list = List::new();
    list.create(0);
    for i in 1..len as i64 {
        list.insert_end(i);
    }
    list
}

fn bench_insert_start(c: &mut Criterion) {
    c.bench_function("insert_start/1024", |b| {
        b.iter_batched(
            || seeded_list(LIST_LEN),
            |mut list| {
                list.insert_start(black_box(-1));
                list
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_end(c: &mut Criterion) {
    c.bench_function("insert_end/1024", |b| {
        b.iter_batched(
            || seeded_list(LIST_LEN),
            |mut list| {
                list.insert_end(black_box(-1));
                list
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_pos_middle(c: &mut Criterion) {
    c.bench_function("insert_pos/1024/mid", |b| {
        b.iter_batched(
            || seeded_list(LIST_LEN),
            |mut list| {
                list.insert_pos(black_box(-1), LIST_LEN / 2);
                list
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_middle(c: &mut Criterion) {
    let list = seeded_list(LIST_LEN);
    c.bench_function("find/1024/mid", |b| {
        b.iter(|| list.find(black_box(LIST_LEN / 2)))
    });
}

fn bench_delete_end(c: &mut Criterion) {
    c.bench_function("delete_end/1024", |b| {
        b.iter_batched(
            || seeded_list(LIST_LEN),
            |mut list| {
                list.delete_end();
                list
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_insert_start,
    bench_insert_end,
    bench_insert_pos_middle,
    bench_find_middle,
    bench_delete_end
);
criterion_main!(benches);
