//! Singly-linked list over arena storage.
//!
//! A [`List`] owns its nodes in a [`Storage`] and chains them through keys
//! rather than pointers:
//!
//! ```text
//! Storage (Arena)  - owns nodes, hands out stable keys
//! List             - head key + size, walks `next` keys from the head
//! Node             - one value + next/prev keys (never owns a neighbour)
//! ```
//!
//! A node's identity is its key. Deleting by identity, comparing links and
//! splicing at a found position all work on keys, so there are no aliasing
//! hazards and no per-node allocations.
//!
//! # Quick Start
//!
//! ```
//! use nexus_chain::{GenericNode, List, ValueWrapper};
//!
//! let mut list: List<GenericNode<u64>> = List::new();
//!
//! list.append(GenericNode::new(2));
//! let head = list.prepend(GenericNode::new(1));
//! list.insert_at(100, GenericNode::new(3)); // clamps to append
//!
//! assert_eq!(list.collect(), vec![1, 2, 3]);
//! assert_eq!(list.at(1).unwrap().unwrap(), &2);
//!
//! // Identity, not value
//! list.delete(head).unwrap();
//! assert_eq!(list.size(), 2);
//! ```
//!
//! # Mixed Values
//!
//! Lists are generic over one payload type. For a list that mixes types, use
//! [`Value`] as the payload; the [`chain!`] macro builds one from literals
//! and [`List::collect_into`] converts back out, checking each tag:
//!
//! ```
//! use nexus_chain::{chain, ChainError};
//!
//! let list = chain![1, 2, "three"];
//!
//! let mut ints: Vec<i64> = Vec::new();
//! assert!(matches!(
//!     list.collect_into(&mut ints),
//!     Err(ChainError::TypeMismatch { expected: "i64", found: "str" })
//! ));
//! assert!(ints.is_empty());
//! ```
//!
//! # Custom Nodes
//!
//! The list only needs the [`ListNode`] capability set, so callers can bring
//! their own node type:
//!
//! ```
//! use nexus_chain::{Key, List, ListNode, NextLink, PrevLink, ValueWrapper};
//!
//! #[derive(Debug)]
//! struct Order {
//!     qty: u64,
//!     next: u32,
//!     prev: u32,
//! }
//!
//! impl ValueWrapper for Order {
//!     type Value = u64;
//!     fn wrap(&mut self, qty: u64) { self.qty = qty; }
//!     fn unwrap(&self) -> &u64 { &self.qty }
//!     fn into_value(self) -> u64 { self.qty }
//! }
//!
//! impl NextLink<u32> for Order {
//!     fn next(&self) -> u32 { self.next }
//!     fn next_ref(&mut self) -> &mut u32 { &mut self.next }
//! }
//!
//! impl PrevLink<u32> for Order {
//!     fn prev(&self) -> u32 { self.prev }
//!     fn prev_ref(&mut self) -> &mut u32 { &mut self.prev }
//! }
//!
//! impl ListNode<u32> for Order {
//!     fn with_value(qty: u64) -> Self {
//!         Order { qty, next: u32::NONE, prev: u32::NONE }
//!     }
//! }
//!
//! let book: List<Order> = [100u64, 50, 25].into_iter().collect();
//! let small = book.filter(|order, _| order.qty < 75);
//! assert_eq!(small.collect(), vec![50, 25]);
//! ```
//!
//! # Feature Flags
//!
//! - `slab` - Enable [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod error;
pub mod key;
pub mod list;
pub mod node;
pub mod predicate;
pub mod storage;
pub mod value;

pub use error::ChainError;
pub use key::Key;
pub use list::{Iter, Keys, Link, List, ValueList, ValueNode};
pub use node::{GenericNode, ListNode, NextLink, PrevLink, ValueWrapper};
pub use storage::{Arena, Storage};
pub use value::{FromValue, Value};

/// Builds a [`ValueList`] from a mixed list of literals, in order.
///
/// Each element goes through `Value::from`, so anything with a
/// `From<_> for Value` impl is accepted.
///
/// ```
/// use nexus_chain::{chain, Value};
///
/// let list = chain![1, "two", 3.0, 'c', true, ()];
/// assert_eq!(list.size(), 6);
/// assert_eq!(list.collect()[1], Value::from("two"));
///
/// assert!(chain![].is_empty());
/// ```
#[macro_export]
macro_rules! chain {
    () => {
        $crate::ValueList::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::ValueList::from_values([$($crate::Value::from($value)),+])
    };
}
