//! Path-local repetition tracking.
//!
//! A path history counts, for every position key, how many positions on
//! the current root-to-node path carry that key (the node itself
//! included). Counts are never totals across sibling branches: every
//! increment made on the way down is undone on the way back up.
//!
//! Two interchangeable strategies implement `PathHistory`:
//!
//! - `PathCounter`: one mutable `FxHashMap`, the engine default
//! - `PersistentPath`: an `im::HashMap` with O(1) snapshots, for callers
//!   that want to seed several independent trackers from one ancestor path
//!
//! ## Scoped descent
//!
//! `PathHistory::enter` pushes a key and returns a `PathGuard` that pops it
//! when dropped, so the pop happens on every exit path: normal return, a
//! pruning cutoff, or an error propagated with `?`.
//!
//! ```
//! use rust_alphabeta::search::{PathCounter, PathHistory};
//!
//! let mut path = PathCounter::new();
//! path.push("root");
//! {
//!     let child = path.enter("child");
//!     assert_eq!(child.count(&"child"), 1);
//! }
//! assert_eq!(path.count(&"child"), 0);
//! assert_eq!(path.len(), 1);
//! ```

use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use rustc_hash::FxHashMap;

/// Occurrence counts for the keys on the live search path.
pub trait PathHistory<K> {
    /// Occurrences of `key` on the path (0 if absent).
    fn count(&self, key: &K) -> u32;

    /// Record one more occurrence of `key`.
    fn push(&mut self, key: K);

    /// Remove one occurrence of `key`, dropping the entry at zero.
    ///
    /// Popping an absent key is a no-op.
    fn pop(&mut self, key: &K);

    /// Number of distinct keys currently tracked.
    fn len(&self) -> usize;

    /// No keys tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Push `key` and return a guard that pops it when dropped.
    fn enter(&mut self, key: K) -> PathGuard<'_, K, Self>
    where
        Self: Sized,
        K: Clone,
    {
        PathGuard::new(self, key)
    }
}

/// Scoped occurrence of a key on the path.
///
/// Dereferences to the underlying history so the recursion can keep
/// descending through it.
pub struct PathGuard<'a, K, H: PathHistory<K>> {
    history: &'a mut H,
    key: Option<K>,
}

impl<'a, K: Clone, H: PathHistory<K>> PathGuard<'a, K, H> {
    fn new(history: &'a mut H, key: K) -> Self {
        history.push(key.clone());
        Self {
            history,
            key: Some(key),
        }
    }
}

impl<K, H: PathHistory<K>> Deref for PathGuard<'_, K, H> {
    type Target = H;

    fn deref(&self) -> &H {
        &*self.history
    }
}

impl<K, H: PathHistory<K>> DerefMut for PathGuard<'_, K, H> {
    fn deref_mut(&mut self) -> &mut H {
        &mut *self.history
    }
}

impl<K, H: PathHistory<K>> Drop for PathGuard<'_, K, H> {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            self.history.pop(&key);
        }
    }
}

// =============================================================================
// Mutable counter
// =============================================================================

/// Path history backed by a single mutable hash map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathCounter<K: Eq + Hash> {
    counts: FxHashMap<K, u32>,
}

impl<K: Eq + Hash> PathCounter<K> {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: FxHashMap::default(),
        }
    }

    /// History containing only `root`, counted once.
    #[must_use]
    pub fn rooted_at(root: K) -> Self {
        let mut history = Self::new();
        history.counts.insert(root, 1);
        history
    }

    /// Iterate over `(key, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u32)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }
}

impl<K: Eq + Hash> Default for PathCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> PathHistory<K> for PathCounter<K> {
    fn count(&self, key: &K) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    fn push(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    fn pop(&mut self, key: &K) {
        if let Some(count) = self.counts.get_mut(key) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(key);
            }
        }
    }

    fn len(&self) -> usize {
        self.counts.len()
    }
}

impl<K: Eq + Hash> FromIterator<K> for PathCounter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut history = Self::new();
        for key in iter {
            history.push(key);
        }
        history
    }
}

// =============================================================================
// Persistent map
// =============================================================================

/// Path history backed by a persistent `im::HashMap`.
///
/// Cloning is O(1) and shares structure, so a snapshot taken at some
/// ancestor can seed any number of independent trackers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistentPath<K: Clone + Eq + Hash> {
    counts: im::HashMap<K, u32>,
}

impl<K: Clone + Eq + Hash> PersistentPath<K> {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: im::HashMap::new(),
        }
    }

    /// History containing only `root`, counted once.
    #[must_use]
    pub fn rooted_at(root: K) -> Self {
        let mut history = Self::new();
        history.push(root);
        history
    }

    /// Structure-sharing copy of the current path.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}

impl<K: Clone + Eq + Hash> Default for PersistentPath<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> PathHistory<K> for PersistentPath<K> {
    fn count(&self, key: &K) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    fn push(&mut self, key: K) {
        let next = self.count(&key) + 1;
        self.counts.insert(key, next);
    }

    fn pop(&mut self, key: &K) {
        match self.count(key) {
            0 => {}
            1 => {
                self.counts.remove(key);
            }
            n => {
                self.counts.insert(key.clone(), n - 1);
            }
        }
    }

    fn len(&self) -> usize {
        self.counts.len()
    }
}

impl<K: Clone + Eq + Hash> From<&PathCounter<K>> for PersistentPath<K> {
    fn from(counter: &PathCounter<K>) -> Self {
        Self {
            counts: counter.iter().map(|(k, c)| (k.clone(), c)).collect(),
        }
    }
}
