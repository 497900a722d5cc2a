//! Node storage with stable keys.
//!
//! Storage owns the nodes; a [`List`](crate::List) only holds the head key and
//! a count, and every link inside a node is a key into the same storage.
//! Keys stay valid until their slot is removed, after which the slot may be
//! handed out again by a later insert.
//!
//! # Implementations
//!
//! - [`Arena<T, K>`] - growable vector of slots with a free stack (default)
//! - `slab::Slab<T>` - `usize` keys (feature `slab`)

use crate::Key;

/// Slab-like storage with stable keys.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable keys**: a key remains valid until explicitly removed
/// - **Slot reuse**: removed slots can be reused by future inserts
/// - **Never `NONE`**: `insert` must not return the key type's sentinel
pub trait Storage<T> {
    /// Key type handed out by this storage.
    type Key: Key;

    /// Inserts a value, returning its stable key.
    fn insert(&mut self, value: T) -> Self::Key;

    /// Removes and returns the value at `key`, if present.
    fn remove(&mut self, key: Self::Key) -> Option<T>;

    /// Returns a reference to the value at `key`, if present.
    fn get(&self, key: Self::Key) -> Option<&T>;

    /// Returns a mutable reference to the value at `key`, if present.
    fn get_mut(&mut self, key: Self::Key) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored value.
    fn clear(&mut self);
}

// =============================================================================
// Arena - growable, vector of slots + free stack
// =============================================================================

#[derive(Debug, Clone)]
enum Entry<T> {
    Occupied(T),
    Vacant,
}

/// Growable storage backed by a `Vec` of slots.
///
/// Vacated slots go on a free stack and are reused LIFO before the vector
/// grows.
///
/// # Example
///
/// ```
/// use nexus_chain::{Arena, Storage};
///
/// let mut arena: Arena<&str> = Arena::with_capacity(8);
/// let a = arena.insert("a");
/// let b = arena.insert("b");
///
/// assert_eq!(arena.remove(a), Some("a"));
/// assert_eq!(arena.get(b), Some(&"b"));
///
/// // `a`'s slot is reused
/// assert_eq!(arena.insert("c"), a);
/// ```
#[derive(Debug, Clone)]
pub struct Arena<T, K: Key = u32> {
    entries: Vec<Entry<T>>,
    free: Vec<K>,
    len: usize,
}

impl<T, K: Key> Default for Arena<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Key> Arena<T, K> {
    /// Creates an empty arena.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty arena with room for `capacity` values before the
    /// slot vector reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Returns the number of slots allocated so far (occupied or vacant).
    #[inline]
    pub fn slots(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of values the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns `true` if `key` names an occupied slot.
    #[inline]
    pub fn contains(&self, key: K) -> bool {
        matches!(self.entries.get(key.as_usize()), Some(Entry::Occupied(_)))
    }
}

impl<T, K: Key> Storage<T> for Arena<T, K> {
    type Key = K;

    /// # Panics
    ///
    /// Panics if the arena would need a slot at or beyond `K::NONE`.
    fn insert(&mut self, value: T) -> K {
        if let Some(key) = self.free.pop() {
            self.entries[key.as_usize()] = Entry::Occupied(value);
            self.len += 1;
            return key;
        }

        let i = self.entries.len();
        assert!(i < K::NONE.as_usize(), "arena exceeds key type maximum");
        self.entries.push(Entry::Occupied(value));
        self.len += 1;
        K::from_usize(i)
    }

    fn remove(&mut self, key: K) -> Option<T> {
        let slot = self.entries.get_mut(key.as_usize())?;
        match core::mem::replace(slot, Entry::Vacant) {
            Entry::Occupied(value) => {
                self.free.push(key);
                self.len -= 1;
                Some(value)
            }
            Entry::Vacant => None,
        }
    }

    #[inline]
    fn get(&self, key: K) -> Option<&T> {
        match self.entries.get(key.as_usize()) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, key: K) -> Option<&mut T> {
        match self.entries.get_mut(key.as_usize()) {
            Some(Entry::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.free.clear();
        self.len = 0;
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Key = usize;

    #[inline]
    fn insert(&mut self, value: T) -> usize {
        self.insert(value)
    }

    #[inline]
    fn remove(&mut self, key: usize) -> Option<T> {
        self.try_remove(key)
    }

    #[inline]
    fn get(&self, key: usize) -> Option<&T> {
        self.get(key)
    }

    #[inline]
    fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        self.get_mut(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn clear(&mut self) {
        self.clear()
    }
}
