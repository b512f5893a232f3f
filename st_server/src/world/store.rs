use super::chunk::Chunk;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;

/// What to do with resident chunks when the store grows. Only [`Never`] is
/// implemented; the variant exists so callers state a policy explicitly.
///
/// [`Never`]: EvictionPolicy::Never
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvictionPolicy {
  /// Chunks stay resident for the lifetime of the store.
  Never,
}

/// Keyed chunk cache. A chunk is generated at most once per store; every
/// later access for the same index returns the resident copy.
///
/// The outer map is behind a [`RwLock`] so lookups of resident chunks only
/// take a read lock, and each chunk sits behind its own [`Mutex`] so two
/// threads can work on different chunks at once.
pub struct ChunkStore {
  chunks: RwLock<HashMap<i32, Mutex<Chunk>>>,
  policy: EvictionPolicy,
}

impl ChunkStore {
  pub fn new(policy: EvictionPolicy) -> Self {
    ChunkStore { chunks: RwLock::new(HashMap::new()), policy }
  }

  pub fn policy(&self) -> EvictionPolicy { self.policy }

  /// Runs `f` on the chunk at `index`, building it with `build` first if it
  /// isn't resident. The read lock is dropped and re-acquired as a write lock
  /// when building, so `build` runs at most once per index even under races:
  /// whoever wins the write lock inserts, and everyone else finds the entry.
  pub fn with<F, B, R>(&self, index: i32, build: B, f: F) -> R
  where
    B: FnOnce() -> Chunk,
    F: FnOnce(&mut Chunk) -> R,
  {
    let read = self.chunks.read();
    if !read.contains_key(&index) {
      drop(read);
      let mut write = self.chunks.write();
      write.entry(index).or_insert_with(|| Mutex::new(build()));
      drop(write);
      let read = self.chunks.read();
      return f(&mut read[&index].lock());
    }
    let r = f(&mut read[&index].lock());
    r
  }

  pub fn contains(&self, index: i32) -> bool { self.chunks.read().contains_key(&index) }

  /// Bulk insert for pre-generation. Indices that are already resident keep
  /// their resident chunk, so a player edit made while pre-generation was
  /// running is never clobbered.
  pub fn insert_no_overwrite(&self, chunks: Vec<(i32, Chunk)>) {
    let mut write = self.chunks.write();
    for (index, c) in chunks {
      write.entry(index).or_insert_with(|| Mutex::new(c));
    }
  }

  /// Visits every resident chunk. Holds the read lock for the duration, so
  /// `f` must not call back into the store.
  pub fn for_each<F>(&self, mut f: F)
  where
    F: FnMut(i32, &Chunk),
  {
    let read = self.chunks.read();
    let mut indices: Vec<_> = read.keys().copied().collect();
    indices.sort_unstable();
    for index in indices {
      f(index, &read[&index].lock());
    }
  }

  pub fn len(&self) -> usize { self.chunks.read().len() }
  pub fn is_empty(&self) -> bool { self.chunks.read().is_empty() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::block::{Kind, Layer};
  use st_common::math::Pos;
  use std::sync::atomic::{AtomicU32, Ordering};

  #[test]
  fn build_runs_once_per_index() {
    let store = ChunkStore::new(EvictionPolicy::Never);
    let builds = AtomicU32::new(0);
    let build = || {
      builds.fetch_add(1, Ordering::SeqCst);
      Chunk::new()
    };
    store.with(3, build, |_| {});
    store.with(3, build, |_| {});
    store.with(3, build, |_| {});
    assert_eq!(builds.load(Ordering::SeqCst), 1);
    store.with(-3, build, |_| {});
    assert_eq!(builds.load(Ordering::SeqCst), 2);
  }

  #[test]
  fn edits_survive_reaccess() {
    let store = ChunkStore::new(EvictionPolicy::Never);
    store.with(0, Chunk::new, |c| {
      c.set(Layer::Front, Pos::new(4, 9), Kind::Stone).unwrap();
    });
    let kind = store.with(0, Chunk::new, |c| c.get(Layer::Front, Pos::new(4, 9)).unwrap());
    assert_eq!(kind, Kind::Stone);
  }

  #[test]
  fn no_overwrite_keeps_resident_chunks() {
    let store = ChunkStore::new(EvictionPolicy::Never);
    store.with(1, Chunk::new, |c| {
      c.set(Layer::Front, Pos::new(0, 0), Kind::Dirt).unwrap();
    });
    let mut fresh = Chunk::new();
    fresh.set(Layer::Front, Pos::new(0, 0), Kind::Sand).unwrap();
    store.insert_no_overwrite(vec![(1, fresh.clone()), (2, fresh)]);
    let kept = store.with(1, Chunk::new, |c| c.get(Layer::Front, Pos::new(0, 0)).unwrap());
    assert_eq!(kept, Kind::Dirt);
    let inserted = store.with(2, Chunk::new, |c| c.get(Layer::Front, Pos::new(0, 0)).unwrap());
    assert_eq!(inserted, Kind::Sand);
    assert_eq!(store.len(), 2);
  }

  #[test]
  fn for_each_visits_in_index_order() {
    let store = ChunkStore::new(EvictionPolicy::Never);
    for idx in [5, -2, 0] {
      store.with(idx, Chunk::new, |_| {});
    }
    let mut seen = vec![];
    store.for_each(|idx, _| seen.push(idx));
    assert_eq!(seen, vec![-2, 0, 5]);
  }
}
