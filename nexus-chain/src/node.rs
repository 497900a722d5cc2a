//! Node capability traits and the default node type.
//!
//! A list never looks inside its nodes beyond these traits, so a caller can
//! supply any node type that can hold a value and record two links:
//!
//! ```text
//! ListNode<K>
//!     ├── ValueWrapper  - wrap / unwrap / unwrap_into
//!     ├── NextLink<K>   - forward link slot
//!     └── PrevLink<K>   - backward link slot
//! ```
//!
//! Links are [`Key`]s into the owning list's storage. A node never owns its
//! neighbours; `K::NONE` in a slot means "no node".

use crate::{ChainError, FromValue, Key};

/// Holds one payload value.
pub trait ValueWrapper {
    /// Payload type.
    type Value;

    /// Replaces the stored value.
    fn wrap(&mut self, value: Self::Value);

    /// Returns the stored value.
    fn unwrap(&self) -> &Self::Value;

    /// Consumes the node, returning its value.
    fn into_value(self) -> Self::Value
    where
        Self: Sized;

    /// Converts the stored value into `dest`.
    ///
    /// `dest` is only overwritten on success.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::TypeMismatch`] if the stored value cannot be
    /// converted into `U`.
    #[inline]
    fn unwrap_into<U>(&self, dest: &mut U) -> Result<(), ChainError>
    where
        U: FromValue<Self::Value>,
    {
        *dest = U::from_value(self.unwrap())?;
        Ok(())
    }
}

/// Forward link slot.
pub trait NextLink<K: Key> {
    /// Returns the next node's key, or `K::NONE` at the end of the chain.
    fn next(&self) -> K;

    /// Returns the link slot itself for in-place relinking.
    fn next_ref(&mut self) -> &mut K;

    /// Overwrites the forward link.
    #[inline]
    fn assign_next(&mut self, key: K) {
        *self.next_ref() = key;
    }

    /// Returns `true` if the forward link names `key`.
    #[inline]
    fn next_is(&self, key: K) -> bool {
        self.next() == key
    }
}

/// Backward link slot.
///
/// [`List`](crate::List) keeps this pointing at the predecessor (or
/// `K::NONE` at the head) but never walks it.
pub trait PrevLink<K: Key> {
    /// Returns the previous node's key, or `K::NONE` at the head.
    fn prev(&self) -> K;

    /// Returns the link slot itself for in-place relinking.
    fn prev_ref(&mut self) -> &mut K;

    /// Overwrites the backward link.
    #[inline]
    fn assign_prev(&mut self, key: K) {
        *self.prev_ref() = key;
    }

    /// Returns `true` if the backward link names `key`.
    #[inline]
    fn prev_is(&self, key: K) -> bool {
        self.prev() == key
    }
}

/// Everything a list needs from a node.
pub trait ListNode<K: Key>: ValueWrapper + NextLink<K> + PrevLink<K> {
    /// Creates an unlinked node holding `value`.
    fn with_value(value: Self::Value) -> Self;
}

/// Default node: a value and two links.
///
/// # Example
///
/// ```
/// use nexus_chain::{GenericNode, NextLink, ValueWrapper};
///
/// let mut node: GenericNode<&str> = GenericNode::new("a");
/// assert_eq!(*node.unwrap(), "a");
/// assert!(node.next_is(u32::MAX));
///
/// node.wrap("b");
/// node.assign_next(4);
/// assert_eq!(*node.unwrap(), "b");
/// assert_eq!(node.next(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GenericNode<T, K: Key = u32> {
    value: T,
    next: K,
    prev: K,
}

impl<T, K: Key> GenericNode<T, K> {
    /// Creates an unlinked node.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            next: K::NONE,
            prev: K::NONE,
        }
    }
}

impl<T, K: Key> ValueWrapper for GenericNode<T, K> {
    type Value = T;

    #[inline]
    fn wrap(&mut self, value: T) {
        self.value = value;
    }

    #[inline]
    fn unwrap(&self) -> &T {
        &self.value
    }

    #[inline]
    fn into_value(self) -> T {
        self.value
    }
}

impl<T, K: Key> NextLink<K> for GenericNode<T, K> {
    #[inline]
    fn next(&self) -> K {
        self.next
    }

    #[inline]
    fn next_ref(&mut self) -> &mut K {
        &mut self.next
    }
}

impl<T, K: Key> PrevLink<K> for GenericNode<T, K> {
    #[inline]
    fn prev(&self) -> K {
        self.prev
    }

    #[inline]
    fn prev_ref(&mut self) -> &mut K {
        &mut self.prev
    }
}

impl<T, K: Key> ListNode<K> for GenericNode<T, K> {
    #[inline]
    fn with_value(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, K: Key> From<T> for GenericNode<T, K> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
