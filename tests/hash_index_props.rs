//! Property tests for the hash index.

use std::collections::HashSet;

use bufhash::{BufferPool, BufferPoolConfig, Error, FrameId, PageKey, PoolConfig, PoolType};
use proptest::prelude::*;

const FRAMES: usize = 32;

/// Small key space over a small table so chains collide often.
fn keys_strategy() -> impl Strategy<Value = Vec<PageKey>> {
    prop::collection::hash_set((0u16..4, 0u32..64), 1..=FRAMES).prop_map(|set| {
        set.into_iter()
            .map(|(vol_no, page_no)| PageKey::new(vol_no, page_no))
            .collect()
    })
}

fn create_pool(table_size: usize) -> BufferPool {
    let config = BufferPoolConfig::new(
        PoolConfig::new(FRAMES, table_size),
        PoolConfig::new(FRAMES, table_size),
    );
    BufferPool::new(config).unwrap()
}

fn load_all(pool: &mut BufferPool, keys: &[PageKey], pool_type: PoolType) {
    for (fid, &key) in keys.iter().enumerate() {
        pool.frame_mut(pool_type, FrameId::new(fid))
            .unwrap()
            .set_key(Some(key));
        pool.insert(key, FrameId::new(fid), pool_type).unwrap();
    }
}

proptest! {
    #[test]
    fn prop_lookup_finds_every_inserted_key(keys in keys_strategy(), table_size in 1usize..16) {
        let mut pool = create_pool(table_size);
        load_all(&mut pool, &keys, PoolType::Page);

        for (fid, &key) in keys.iter().enumerate() {
            prop_assert_eq!(pool.lookup(key, PoolType::Page), Some(FrameId::new(fid)));
        }
        prop_assert_eq!(pool.indexed_count(PoolType::Page), keys.len());
    }

    #[test]
    fn prop_delete_removes_only_target(
        keys in keys_strategy(),
        table_size in 1usize..16,
        mask in prop::collection::vec(any::<bool>(), FRAMES),
    ) {
        let mut pool = create_pool(table_size);
        load_all(&mut pool, &keys, PoolType::Page);

        let mut deleted = HashSet::new();
        for (fid, &key) in keys.iter().enumerate() {
            if mask[fid] {
                pool.delete(key, PoolType::Page).unwrap();
                deleted.insert(fid);
            }
        }

        for (fid, &key) in keys.iter().enumerate() {
            let expected = if deleted.contains(&fid) { None } else { Some(FrameId::new(fid)) };
            prop_assert_eq!(pool.lookup(key, PoolType::Page), expected);
        }
        for fid in deleted {
            let err = pool.delete(keys[fid], PoolType::Page).unwrap_err();
            prop_assert!(err.is_not_found());
        }
    }

    #[test]
    fn prop_delete_all_empties_both_pools(keys in keys_strategy(), table_size in 1usize..16) {
        let mut pool = create_pool(table_size);
        load_all(&mut pool, &keys, PoolType::Page);
        load_all(&mut pool, &keys, PoolType::LargeObject);

        pool.delete_all();

        for &key in &keys {
            prop_assert_eq!(pool.lookup(key, PoolType::Page), None);
            prop_assert_eq!(pool.lookup(key, PoolType::LargeObject), None);
        }
    }

    #[test]
    fn prop_bad_index_is_rejected_without_mutation(
        keys in keys_strategy(),
        table_size in 1usize..16,
        bad in FRAMES..FRAMES * 4,
        vol_no in 4u16..8,
        page_no in 0u32..64,
    ) {
        let mut pool = create_pool(table_size);
        load_all(&mut pool, &keys, PoolType::Page);
        let heads: Vec<_> = (0..table_size).map(|b| pool.table(PoolType::Page).head(b)).collect();

        let outsider = PageKey::new(vol_no, page_no);
        let result = pool.insert(outsider, FrameId::new(bad), PoolType::Page);
        let is_bad_index = matches!(result, Err(Error::BadIndex { .. }));
        prop_assert!(is_bad_index);

        let after: Vec<_> = (0..table_size).map(|b| pool.table(PoolType::Page).head(b)).collect();
        prop_assert_eq!(heads, after);
        prop_assert_eq!(pool.lookup(outsider, PoolType::Page), None);
        for (fid, &key) in keys.iter().enumerate() {
            prop_assert_eq!(pool.lookup(key, PoolType::Page), Some(FrameId::new(fid)));
        }
    }
}
