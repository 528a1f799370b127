//! Lookup and insert/delete throughput at the default load factor.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bufhash::{BufferPool, BufferPoolConfig, FrameId, PageKey, PoolType};

fn filled_pool() -> (BufferPool, Vec<PageKey>) {
    let mut pool = BufferPool::new(BufferPoolConfig::default()).unwrap();
    let capacity = pool.capacity(PoolType::Page);
    let keys: Vec<_> = (0..capacity)
        .map(|i| PageKey::new((i % 3) as u16, (i * 7) as u32))
        .collect();
    for (fid, &key) in keys.iter().enumerate() {
        pool.register(key, FrameId::new(fid), PoolType::Page).unwrap();
    }
    (pool, keys)
}

fn bench_lookup(c: &mut Criterion) {
    let (pool, keys) = filled_pool();

    c.bench_function("lookup_hit", |b| {
        b.iter(|| {
            for &key in &keys {
                black_box(pool.lookup(black_box(key), PoolType::Page));
            }
        })
    });

    c.bench_function("lookup_miss", |b| {
        b.iter(|| {
            for &key in &keys {
                let miss = PageKey::new(key.vol_no + 10, key.page_no);
                black_box(pool.lookup(black_box(miss), PoolType::Page));
            }
        })
    });
}

fn bench_insert_delete(c: &mut Criterion) {
    let (mut pool, keys) = filled_pool();

    c.bench_function("delete_register_cycle", |b| {
        b.iter(|| {
            for (fid, &key) in keys.iter().enumerate() {
                pool.delete(key, PoolType::Page).unwrap();
                pool.register(key, FrameId::new(fid), PoolType::Page).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_lookup, bench_insert_delete);
criterion_main!(benches);
