use std::collections::HashMap;
use std::hash::Hash;

struct MemoEntry<V> {
    value: V,
    inserted_at: u64,
}

/// Hit/miss counters, surfaced in debug logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
}

/// Value memo keyed by input, with an optional time-to-live.
///
/// Entries are only replaced when they are read after expiring; there is no
/// other eviction. Failed computations are not stored. Runs on the single UI
/// thread, so no locking.
pub struct Memo<K, V> {
    entries: HashMap<K, MemoEntry<V>>,
    ttl_ms: Option<u64>,
    stats: MemoStats,
}

impl<K: Eq + Hash, V: Clone> Memo<K, V> {
    /// Entries live until the process ends.
    pub fn unbounded() -> Self {
        Self { entries: HashMap::new(), ttl_ms: None, stats: MemoStats::default() }
    }

    /// Entries older than `ttl_ms` are recomputed on next access.
    pub fn with_ttl(ttl_ms: u64) -> Self {
        Self { ttl_ms: Some(ttl_ms), ..Self::unbounded() }
    }

    fn is_fresh(&self, entry: &MemoEntry<V>, now_ms: u64) -> bool {
        match self.ttl_ms {
            Some(ttl) => now_ms.saturating_sub(entry.inserted_at) < ttl,
            None => true,
        }
    }

    pub fn get(&self, key: &K, now_ms: u64) -> Option<V> {
        self.entries
            .get(key)
            .filter(|entry| self.is_fresh(entry, now_ms))
            .map(|entry| entry.value.clone())
    }

    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: K,
        now_ms: u64,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        if let Some(value) = self.get(&key, now_ms) {
            self.stats.hits += 1;
            return Ok(value);
        }
        self.stats.misses += 1;
        let value = compute()?;
        self.entries.insert(key, MemoEntry { value: value.clone(), inserted_at: now_ms });
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> MemoStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_memo_never_recomputes() {
        let mut memo: Memo<(), u32> = Memo::unbounded();
        let mut calls = 0;
        for now in [0, 1_000, u64::MAX] {
            let v = memo
                .get_or_try_insert_with((), now, || {
                    calls += 1;
                    Ok::<_, ()>(7)
                })
                .unwrap();
            assert_eq!(v, 7);
        }
        assert_eq!(calls, 1);
        assert_eq!(memo.stats(), MemoStats { hits: 2, misses: 1 });
    }

    #[test]
    fn ttl_expiry_is_exclusive() {
        let mut memo: Memo<u8, u32> = Memo::with_ttl(100);
        memo.get_or_try_insert_with(1, 0, || Ok::<_, ()>(1)).unwrap();
        assert_eq!(memo.get(&1, 99), Some(1));
        assert_eq!(memo.get(&1, 100), None);

        let v = memo.get_or_try_insert_with(1, 100, || Ok::<_, ()>(2)).unwrap();
        assert_eq!(v, 2);
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn failures_are_not_stored() {
        let mut memo: Memo<u8, u32> = Memo::unbounded();
        let err = memo.get_or_try_insert_with(1, 0, || Err("boom"));
        assert_eq!(err, Err("boom"));
        assert!(memo.is_empty());
    }
}
