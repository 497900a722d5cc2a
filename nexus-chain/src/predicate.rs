//! Predicate builders for [`List::find`](crate::List::find) and friends.
//!
//! Every predicate receives a node and its zero-based position in the chain.
//! The node type is a type parameter of the builder, so name it when the
//! call site does not pin it down:
//!
//! ```
//! use nexus_chain::predicate::by_value;
//! use nexus_chain::{GenericNode, List, ValueWrapper};
//!
//! let list: List<GenericNode<u64>> = [10u64, 20, 30].into_iter().collect();
//! let node = list.find(by_value::<GenericNode<u64>>(20)).unwrap();
//! assert_eq!(node.unwrap(), &20);
//! ```

use crate::ValueWrapper;

/// Matches nodes whose value equals `value`.
#[inline]
pub fn by_value<N>(value: N::Value) -> impl Fn(&N, usize) -> bool
where
    N: ValueWrapper,
    N::Value: PartialEq,
{
    move |node, _| *node.unwrap() == value
}

/// Matches the node at position `target`.
#[inline]
pub fn at_index<N>(target: usize) -> impl Fn(&N, usize) -> bool {
    move |_, index| index == target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenericNode, Value};

    type Node = GenericNode<Value>;

    #[test]
    fn by_value_compares_values() {
        let pred = by_value::<Node>(Value::Int(20));
        assert!(pred(&Node::new(Value::Int(20)), 5));
        assert!(!pred(&Node::new(Value::Int(21)), 5));
        assert!(!pred(&Node::new(Value::from("20")), 0));
    }

    #[test]
    fn at_index_ignores_node() {
        let pred = at_index::<Node>(2);
        assert!(pred(&Node::new(Value::Nil), 2));
        assert!(!pred(&Node::new(Value::Nil), 1));
    }
}
