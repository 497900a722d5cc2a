//! Singly-linked list over owned arena storage.
//!
//! The list owns a [`Storage`] holding every node and tracks only the head
//! key and a size counter. Each node records its successor (and, for
//! bookkeeping, its predecessor) as a key into that storage, so a node's
//! identity is its key and no node is shared between lists.
//!
//! All traversal walks forward from the head. Positional operations are
//! O(n); `prepend` and the splice operations on an already-found [`Link`]
//! are O(1).
//!
//! # Link slots
//!
//! [`List::find_ref`] returns the *slot* that points at a match rather than
//! the match itself: [`Link::Head`] or [`Link::After`] the predecessor.
//! [`List::splice_in`] and [`List::splice_out`] act on that slot directly,
//! which is how `insert_at`, `delete_at` and `delete` avoid a second scan.
//! A `Link` is a cursor, not a borrow: any structural change may leave it
//! pointing somewhere else, and a stale `After` key is rejected with
//! [`ChainError::NotFound`] once its node is gone.
//!
//! # Example
//!
//! ```
//! use nexus_chain::{chain, ChainError, Value, ValueNode, ValueWrapper};
//!
//! let mut list = chain![10, 20, 30, 40];
//!
//! list.insert_at(1, ValueNode::new(Value::Int(15)));
//! list.delete_at(4).unwrap();
//! assert_eq!(list.size(), 4);
//!
//! let mut out: Vec<i64> = Vec::new();
//! list.collect_into(&mut out).unwrap();
//! assert_eq!(out, vec![10, 15, 20, 30]);
//!
//! assert_eq!(
//!     list.at(9).unwrap_err(),
//!     ChainError::OutOfBounds { index: 9, size: 4 }
//! );
//! assert_eq!(list.at(2).unwrap().unwrap(), &Value::Int(20));
//! ```

use core::marker::PhantomData;

use tracing::{debug, trace};

use crate::predicate::{at_index, by_value};
use crate::{Arena, ChainError, FromValue, GenericNode, Key, ListNode, Storage, Value};

/// Node type of a [`ValueList`].
pub type ValueNode = GenericNode<Value>;

/// List of mixed-type values, as built by [`chain!`](crate::chain).
pub type ValueList = List<ValueNode>;

/// A slot in the chain that holds a key: the list head, or a node's `next`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Link<K> {
    /// The list's head slot.
    Head,
    /// The `next` slot of the node with this key.
    After(K),
}

/// Singly-linked list that owns its nodes.
///
/// # Type Parameters
///
/// - `N`: Node type, anything implementing [`ListNode`]
/// - `S`: Storage type (default [`Arena<N>`], keyed by `u32`)
///
/// # Invariants
///
/// - `size()` equals the number of nodes reachable from the head
/// - every node in storage is reachable from the head
/// - each node's `prev` names its predecessor, or `NONE` at the head
#[derive(Debug, Clone)]
pub struct List<N, S = Arena<N>>
where
    S: Storage<N>,
    N: ListNode<S::Key>,
{
    storage: S,
    head: S::Key,
    len: usize,
    _marker: PhantomData<N>,
}

impl<N, S> Default for List<N, S>
where
    S: Storage<N> + Default,
    N: ListNode<S::Key>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, S> List<N, S>
where
    S: Storage<N> + Default,
    N: ListNode<S::Key>,
{
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self::with_storage(S::default())
    }

    /// Creates a list holding `values` in iteration order.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<N::Value>,
    {
        values.into_iter().collect()
    }
}

impl<N> List<N, Arena<N>>
where
    N: ListNode<u32>,
{
    /// Creates an empty list whose arena has room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_storage(Arena::with_capacity(capacity))
    }
}

// =============================================================================
// Core: size, access, positional insert/delete
// =============================================================================

impl<N, S> List<N, S>
where
    S: Storage<N>,
    N: ListNode<S::Key>,
{
    /// Creates an empty list over `storage`.
    ///
    /// Anything already in `storage` is dropped.
    pub fn with_storage(mut storage: S) -> Self {
        storage.clear();
        Self {
            storage,
            head: S::Key::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of nodes in the list. O(1).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Alias for [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn head(&self) -> Option<S::Key> {
        self.head.into_option()
    }

    /// Returns the backing storage.
    #[inline]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the node with this key.
    #[inline]
    pub fn get(&self, key: S::Key) -> Option<&N> {
        self.storage.get(key)
    }

    /// Returns the node with this key for in-place updates such as
    /// [`wrap`](crate::ValueWrapper::wrap).
    ///
    /// Relinking the node through its link slots breaks the list.
    #[inline]
    pub fn get_mut(&mut self, key: S::Key) -> Option<&mut N> {
        self.storage.get_mut(key)
    }

    /// Makes `node` the new head. O(1).
    ///
    /// Returns the new node's key.
    pub fn prepend(&mut self, node: N) -> S::Key {
        let key = self.storage.insert(node);
        self.link(Link::Head, key);
        key
    }

    /// Links `node` after the last node. O(n).
    ///
    /// Returns the new node's key.
    pub fn append(&mut self, node: N) -> S::Key {
        let tail = self.tail_link();
        let key = self.storage.insert(node);
        self.link(tail, key);
        key
    }

    /// Returns the node at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::OutOfBounds`] unless `0 <= index < size`.
    pub fn at(&self, index: isize) -> Result<&N, ChainError> {
        let index = self.check_index(index)?;
        self.find(at_index::<N>(index))
    }

    /// Returns the node at position `index` for in-place updates.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::OutOfBounds`] unless `0 <= index < size`.
    pub fn at_mut(&mut self, index: isize) -> Result<&mut N, ChainError> {
        let index = self.check_index(index)?;
        let key = self.find_key(at_index::<N>(index))?;
        Ok(self.node_mut(key))
    }

    /// Inserts `node` so that it ends up at position `index`.
    ///
    /// Out-of-range positions clamp instead of failing: `index < 0`
    /// prepends and `index >= size` appends.
    ///
    /// Returns the new node's key.
    pub fn insert_at(&mut self, index: isize, node: N) -> S::Key {
        if index < 0 {
            return self.prepend(node);
        }
        if index as usize >= self.len {
            return self.append(node);
        }

        let link = self.find_ref(at_index::<N>(index as usize)).unwrap_or(Link::Head);

        let key = self.storage.insert(node);
        self.link(link, key);
        key
    }

    /// Removes the node with this key, returning it unlinked.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotFound`] if no node in the chain has this key.
    pub fn delete(&mut self, key: S::Key) -> Result<N, ChainError> {
        let link = self.link_of(key).ok_or_else(|| {
            debug!(?key, "delete: key not in chain");
            ChainError::NotFound
        })?;
        self.release(link)
    }

    /// Removes the node at position `index`, returning it unlinked.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::OutOfBounds`] unless `0 <= index < size`; the
    /// list is left unchanged.
    pub fn delete_at(&mut self, index: isize) -> Result<N, ChainError> {
        let index = self.check_index(index)?;
        let link = self.find_ref(at_index::<N>(index))?;
        self.release(link)
    }

    /// Links `node` into the slot named by `link`, ahead of whatever the slot
    /// pointed at. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotFound`] if `link` names a node that is no
    /// longer in the list; `node` is dropped.
    pub fn splice_in(&mut self, link: Link<S::Key>, node: N) -> Result<S::Key, ChainError> {
        if !self.is_live(link) {
            debug!(?link, "splice_in: stale link");
            return Err(ChainError::NotFound);
        }

        let key = self.storage.insert(node);
        self.link(link, key);
        Ok(key)
    }

    /// Removes the node the slot named by `link` points at. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotFound`] if `link` is stale or points at no
    /// node (the slot after the tail, or the head of an empty list).
    pub fn splice_out(&mut self, link: Link<S::Key>) -> Result<N, ChainError> {
        if !self.is_live(link) || self.target(link).is_none() {
            debug!(?link, "splice_out: nothing to remove");
            return Err(ChainError::NotFound);
        }
        self.release(link)
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.head = S::Key::NONE;
        self.len = 0;
        trace!("cleared list");
    }

    // ========================================================================
    // Splicing internals
    // ========================================================================

    #[inline]
    fn node(&self, key: S::Key) -> &N {
        self.storage.get(key).expect("chain link names a vacant slot")
    }

    #[inline]
    fn node_mut(&mut self, key: S::Key) -> &mut N {
        self.storage
            .get_mut(key)
            .expect("chain link names a vacant slot")
    }

    /// Key held by the slot.
    #[inline]
    fn target(&self, link: Link<S::Key>) -> S::Key {
        match link {
            Link::Head => self.head,
            Link::After(prev) => self.node(prev).next(),
        }
    }

    #[inline]
    fn set_target(&mut self, link: Link<S::Key>, key: S::Key) {
        match link {
            Link::Head => self.head = key,
            Link::After(prev) => *self.node_mut(prev).next_ref() = key,
        }
    }

    #[inline]
    fn owner(link: Link<S::Key>) -> S::Key {
        match link {
            Link::Head => S::Key::NONE,
            Link::After(prev) => prev,
        }
    }

    #[inline]
    fn is_live(&self, link: Link<S::Key>) -> bool {
        match link {
            Link::Head => true,
            // every occupied slot is on the chain
            Link::After(prev) => prev.is_some() && self.storage.get(prev).is_some(),
        }
    }

    /// Splices the stored, unlinked node `key` into `link`.
    fn link(&mut self, link: Link<S::Key>, key: S::Key) {
        let next = self.target(link);
        let prev = Self::owner(link);

        let node = self.node_mut(key);
        node.assign_next(next);
        node.assign_prev(prev);

        if next.is_some() {
            self.node_mut(next).assign_prev(key);
        }
        self.set_target(link, key);
        self.len += 1;

        trace!(?link, ?key, size = self.len, "linked node");
    }

    /// Splices out the node `link` points at, leaving it stored but unlinked.
    fn unlink(&mut self, link: Link<S::Key>) -> S::Key {
        let key = self.target(link);
        debug_assert!(key.is_some(), "unlink from empty slot");

        let node = self.node_mut(key);
        let next = node.next();
        node.assign_next(S::Key::NONE);
        node.assign_prev(S::Key::NONE);

        self.set_target(link, next);
        if next.is_some() {
            self.node_mut(next).assign_prev(Self::owner(link));
        }
        self.len -= 1;

        trace!(?link, ?key, size = self.len, "unlinked node");
        key
    }

    fn release(&mut self, link: Link<S::Key>) -> Result<N, ChainError> {
        let key = self.unlink(link);
        self.storage.remove(key).ok_or(ChainError::NotFound)
    }

    /// The slot after the last node (the head slot when empty).
    fn tail_link(&self) -> Link<S::Key> {
        let mut link = Link::Head;
        let mut current = self.head;
        while current.is_some() {
            link = Link::After(current);
            current = self.node(current).next();
        }
        link
    }

    /// The slot holding `key`, found by identity.
    fn link_of(&self, key: S::Key) -> Option<Link<S::Key>> {
        if key.is_none() {
            return None;
        }
        if self.head == key {
            return Some(Link::Head);
        }

        let mut current = self.head;
        while current.is_some() {
            let node = self.node(current);
            if node.next_is(key) {
                return Some(Link::After(current));
            }
            current = node.next();
        }
        None
    }

    fn check_index(&self, index: isize) -> Result<usize, ChainError> {
        if index < 0 || index as usize >= self.len {
            debug!(index, size = self.len, "index out of bounds");
            return Err(ChainError::out_of_bounds(index, self.len));
        }
        Ok(index as usize)
    }

    /// Appends an unlinked stored node after `tail`, returning the new tail.
    fn push_after(&mut self, tail: Link<S::Key>, node: N) -> Link<S::Key> {
        let key = self.storage.insert(node);
        self.link(tail, key);
        Link::After(key)
    }
}

// =============================================================================
// Search and bulk operations
// =============================================================================

impl<N, S> List<N, S>
where
    S: Storage<N>,
    N: ListNode<S::Key>,
{
    /// First `(slot, key)` whose node satisfies `pred`.
    fn scan<P>(&self, mut pred: P) -> Option<(Link<S::Key>, S::Key)>
    where
        P: FnMut(&N, usize) -> bool,
    {
        let mut link = Link::Head;
        let mut current = self.head;
        let mut index = 0;

        while current.is_some() {
            let node = self.node(current);
            if pred(node, index) {
                return Some((link, current));
            }
            link = Link::After(current);
            current = node.next();
            index += 1;
        }

        debug!(size = self.len, "scan matched no node");
        None
    }

    /// Returns the first node for which `pred(node, position)` holds.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotFound`] if nothing matches.
    pub fn find<P>(&self, pred: P) -> Result<&N, ChainError>
    where
        P: FnMut(&N, usize) -> bool,
    {
        let (_, key) = self.scan(pred).ok_or(ChainError::NotFound)?;
        Ok(self.node(key))
    }

    /// Returns the key of the first node for which `pred` holds.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotFound`] if nothing matches.
    pub fn find_key<P>(&self, pred: P) -> Result<S::Key, ChainError>
    where
        P: FnMut(&N, usize) -> bool,
    {
        self.scan(pred)
            .map(|(_, key)| key)
            .ok_or(ChainError::NotFound)
    }

    /// Returns the slot pointing at the first node for which `pred` holds:
    /// [`Link::Head`] for the head, otherwise [`Link::After`] its predecessor.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotFound`] if nothing matches.
    pub fn find_ref<P>(&self, pred: P) -> Result<Link<S::Key>, ChainError>
    where
        P: FnMut(&N, usize) -> bool,
    {
        self.scan(pred)
            .map(|(link, _)| link)
            .ok_or(ChainError::NotFound)
    }

    /// Returns the first node whose value equals `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotFound`] if no value matches.
    pub fn find_by_value(&self, value: &N::Value) -> Result<&N, ChainError>
    where
        N::Value: PartialEq + Clone,
    {
        self.find(by_value::<N>(value.clone()))
    }

    /// Calls `action(node, position)` for every node in order.
    pub fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&N, usize),
    {
        for (index, node) in self.iter().enumerate() {
            action(node, index);
        }
    }

    /// Builds a new list of fresh nodes holding the values of every node for
    /// which `pred(node, position)` holds, in order. `self` is untouched.
    pub fn filter<P>(&self, mut pred: P) -> Self
    where
        P: FnMut(&N, usize) -> bool,
        N::Value: Clone,
        S: Default,
    {
        let mut out = Self::new_in(S::default());
        let mut tail = Link::Head;

        for (index, node) in self.iter().enumerate() {
            if pred(node, index) {
                tail = out.push_after(tail, N::with_value(node.unwrap().clone()));
            }
        }
        out
    }

    /// Builds a new list from `transform(node, position)` applied to every
    /// node in order.
    ///
    /// # Errors
    ///
    /// The first error returned by `transform` aborts the mapping and is
    /// returned as-is.
    pub fn map<M, S2, E, F>(&self, mut transform: F) -> Result<List<M, S2>, E>
    where
        S2: Storage<M> + Default,
        M: ListNode<S2::Key>,
        F: FnMut(&N, usize) -> Result<M, E>,
    {
        let mut out: List<M, S2> = List::new_in(S2::default());
        let mut tail = Link::Head;

        for (index, node) in self.iter().enumerate() {
            tail = out.push_after(tail, transform(node, index)?);
        }
        Ok(out)
    }

    /// Returns a snapshot of every value in order.
    pub fn collect(&self) -> Vec<N::Value>
    where
        N::Value: Clone,
    {
        self.values().cloned().collect()
    }

    /// Appends every value, converted to `U`, onto `dest`.
    ///
    /// All values are converted before any is appended, so on failure `dest`
    /// is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::TypeMismatch`] for the first value that cannot
    /// be converted.
    pub fn collect_into<U>(&self, dest: &mut Vec<U>) -> Result<(), ChainError>
    where
        U: FromValue<N::Value>,
    {
        let staged = self
            .values()
            .map(U::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        dest.extend(staged);
        Ok(())
    }

    /// Iterates nodes in chain order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, N, S> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Iterates values in chain order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &N::Value> {
        self.iter().map(|node| node.unwrap())
    }

    /// Iterates node keys in chain order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, N, S> {
        Keys { inner: self.iter() }
    }

    #[inline]
    fn new_in(storage: S) -> Self {
        Self::with_storage(storage)
    }
}

impl<N, S, V> FromIterator<V> for List<N, S>
where
    S: Storage<N> + Default,
    N: ListNode<S::Key>,
    V: Into<N::Value>,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut list = Self::new_in(S::default());
        list.extend(iter);
        list
    }
}

impl<N, S, V> Extend<V> for List<N, S>
where
    S: Storage<N>,
    N: ListNode<S::Key>,
    V: Into<N::Value>,
{
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        let mut tail = self.tail_link();
        for value in iter {
            tail = self.push_after(tail, N::with_value(value.into()));
        }
    }
}

impl<'a, N, S> IntoIterator for &'a List<N, S>
where
    S: Storage<N>,
    N: ListNode<S::Key>,
{
    type Item = &'a N;
    type IntoIter = Iter<'a, N, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over the nodes of a list, head first.
pub struct Iter<'a, N, S>
where
    S: Storage<N>,
    N: ListNode<S::Key>,
{
    list: &'a List<N, S>,
    current: S::Key,
    remaining: usize,
}

impl<'a, N, S> Iterator for Iter<'a, N, S>
where
    S: Storage<N>,
    N: ListNode<S::Key>,
{
    type Item = &'a N;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }

        let node = self.list.node(self.current);
        self.current = node.next();
        self.remaining -= 1;
        Some(node)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N, S> ExactSizeIterator for Iter<'_, N, S>
where
    S: Storage<N>,
    N: ListNode<S::Key>,
{
}

/// Iterator over the keys of a list, head first.
pub struct Keys<'a, N, S>
where
    S: Storage<N>,
    N: ListNode<S::Key>,
{
    inner: Iter<'a, N, S>,
}

impl<N, S> Iterator for Keys<'_, N, S>
where
    S: Storage<N>,
    N: ListNode<S::Key>,
{
    type Item = S::Key;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key = self.inner.current;
        self.inner.next().map(|_| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}


#[cfg(feature = "slab")]
#[cfg(test)]
mod tests_slab {
    use super::*;

    #[test]
    fn slab_backed_list() {
        let mut list: List<GenericNode<u64, usize>, slab::Slab<GenericNode<u64, usize>>> =
            List::new();

        let a = list.append(GenericNode::new(1));
        list.append(GenericNode::new(2));
        list.insert_at(1, GenericNode::new(3));

        assert_eq!(list.collect(), vec![1, 3, 2]);
        assert_eq!(a, 0);

        list.delete(a).unwrap();
        assert_eq!(list.collect(), vec![3, 2]);
        assert_eq!(list.size(), 2);
    }
}
