use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use dashmap::DashMap;
use log::warn;
use lru::LruCache;

enum Storage<K: Eq + Hash, V: Clone> {
    Unbounded(DashMap<K, V>),
    Bounded(Mutex<LruCache<K, V>>),
}

/// 记忆化缓存。首次查询时计算并缓存，之后的查询直接返回缓存值。
///
/// 无界模式下条目永不淘汰，随观察到的键单调增长；有界模式下按LRU策略淘汰。
/// 两种模式都可以在多线程环境下安全地并发读写。
pub struct MetaCache<K: Eq + Hash, V: Clone> {
    storage: Storage<K, V>,
}

impl<K: Eq + Hash + Clone, V: Clone> MetaCache<K, V> {
    // 无界构造
    pub fn unbounded() -> Self {
        Self {
            storage: Storage::Unbounded(DashMap::new()),
        }
    }

    // 根据容量构造
    pub fn from_capacity(capacity: usize) -> Self {
        if capacity == 0 {
            panic!("调用from_capacity时指定的大小是0。如果需要无界缓存，请调用unbounded，而不是传入0");
        }
        Self {
            storage: Storage::Bounded(Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).unwrap(),
            ))),
        }
    }

    // 查询，未命中时计算并放入
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce() -> V) -> V {
        match &self.storage {
            Storage::Unbounded(map) => map.entry(key).or_insert_with(compute).clone(),
            Storage::Bounded(mutex) => {
                let mut guard = match mutex.lock() {
                    Ok(lock) => lock,
                    Err(poisoned) => {
                        warn!("缓存锁被污染，恢复并继续");
                        poisoned.into_inner()
                    }
                };
                if let Some(value) = guard.get(&key) {
                    return value.clone();
                }
                let value = compute();
                guard.put(key, value.clone());
                value
            }
        }
    }

    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Unbounded(map) => map.len(),
            Storage::Bounded(mutex) => match mutex.lock() {
                Ok(guard) => guard.len(),
                Err(poisoned) => poisoned.into_inner().len(),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
