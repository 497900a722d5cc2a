use nexus_chain::predicate::by_value;
use nexus_chain::{
    ChainError, GenericNode, Link, List, NextLink, Value, ValueList, ValueNode, ValueWrapper, chain,
};

fn ints(list: &ValueList) -> Vec<i64> {
    let mut out = Vec::new();
    list.collect_into(&mut out).unwrap();
    out
}

fn node(v: i64) -> ValueNode {
    ValueNode::new(Value::Int(v))
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn construct_then_append() {
    let mut list = chain![];
    list.append(node(10));
    list.append(node(20));

    assert_eq!(ints(&list), vec![10, 20]);
}

#[test]
fn construct_from_literals() {
    let list = chain![1, 2, 3, 4, 5];
    assert_eq!(ints(&list), vec![1, 2, 3, 4, 5]);
    assert_eq!(list.size(), 5);
}

#[test]
fn construct_mixed_literals() {
    let list = chain!["a", 1, 2.5, false];
    assert_eq!(
        list.collect(),
        vec![
            Value::from("a"),
            Value::Int(1),
            Value::Float(2.5),
            Value::Bool(false)
        ]
    );
}

#[test]
fn nodes_chain_by_hand() {
    let mut root: GenericNode<&str> = GenericNode::new("test1");
    let mut next1: GenericNode<&str> = GenericNode::new("test2");

    root.assign_next(1);
    next1.assign_next(2);

    assert_eq!(*root.unwrap(), "test1");
    assert!(root.next_is(1));
    assert!(!next1.next_is(1));
}

// =============================================================================
// Positional operations
// =============================================================================

#[test]
fn delete_at_scenario() {
    let mut list = chain![1, 2, 3, 4, 5];

    list.delete_at(0).unwrap();
    assert_eq!(ints(&list), vec![2, 3, 4, 5]);

    list.delete_at(3).unwrap();
    assert_eq!(ints(&list), vec![2, 3, 4]);

    assert!(matches!(
        list.delete_at(5),
        Err(ChainError::OutOfBounds { index: 5, size: 3 })
    ));
    assert_eq!(list.size(), 3);

    list.delete_at(1).unwrap();
    assert_eq!(ints(&list), vec![2, 4]);
    assert_eq!(list.size(), 2);
}

#[test]
fn insert_at_scenario() {
    let mut list = chain![10, 20, 30, 40];

    list.insert_at(1, node(15));
    assert_eq!(ints(&list), vec![10, 15, 20, 30, 40]);

    list.insert_at(100, node(100));
    assert_eq!(ints(&list), vec![10, 15, 20, 30, 40, 100]);

    list.insert_at(-1, node(-1));
    assert_eq!(ints(&list), vec![-1, 10, 15, 20, 30, 40, 100]);
}

#[test]
fn at_scenario() {
    let list = chain![10, 20, 30, 40];

    assert_eq!(list.at(0).unwrap().unwrap(), &Value::Int(10));
    assert_eq!(list.at(2).unwrap().unwrap(), &Value::Int(30));
    assert!(matches!(list.at(4), Err(ChainError::OutOfBounds { .. })));
    assert!(matches!(list.at(-3), Err(ChainError::OutOfBounds { .. })));
}

#[test]
fn prepend_scenario() {
    let mut list = chain![];
    list.prepend(ValueNode::new(Value::from("world")));
    list.prepend(ValueNode::new(Value::from("Hello")));

    let mut words: Vec<String> = Vec::new();
    list.collect_into(&mut words).unwrap();
    assert_eq!(words, vec!["Hello", "world"]);
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn find_by_value_scenario() {
    let list = chain![10, 20, 30];

    let found = list.find(by_value::<ValueNode>(Value::Int(20))).unwrap();
    assert_eq!(found.unwrap(), &Value::Int(20));

    assert_eq!(
        list.find(by_value::<ValueNode>(Value::Int(99))).unwrap_err(),
        ChainError::NotFound
    );
    assert_eq!(
        list.find_by_value(&Value::Int(99)).unwrap_err(),
        ChainError::NotFound
    );
}

#[test]
fn find_on_empty_list() {
    let list = chain![];
    assert_eq!(list.find(|_, _| true).unwrap_err(), ChainError::NotFound);
    assert_eq!(list.find_ref(|_, _| true).unwrap_err(), ChainError::NotFound);
}

#[test]
fn find_by_value_is_not_by_type() {
    let list = chain![1, "1", 1.0];
    let key = list
        .find_key(by_value::<ValueNode>(Value::from("1")))
        .unwrap();
    assert_eq!(list.keys().position(|k| k == key), Some(1));
}

#[test]
fn unwrap_into_from_found_node() {
    let list = chain!["testing123", 7];
    let found = list.at(0).unwrap();

    let mut s = String::new();
    found.unwrap_into(&mut s).unwrap();
    assert_eq!(s, "testing123");

    let mut n = 0i64;
    assert!(matches!(
        found.unwrap_into(&mut n),
        Err(ChainError::TypeMismatch { expected: "i64", found: "str" })
    ));
    assert_eq!(n, 0);
}

// =============================================================================
// Splicing through link slots
// =============================================================================

#[test]
fn find_ref_then_splice() {
    let mut list = chain![1, 2, 4];

    let link = list.find_ref(|n, _| n.unwrap() == &Value::Int(4)).unwrap();
    assert!(matches!(link, Link::After(_)));

    list.splice_in(link, node(3)).unwrap();
    assert_eq!(ints(&list), vec![1, 2, 3, 4]);

    let head = list.find_ref(|_, i| i == 0).unwrap();
    assert_eq!(head, Link::Head);
    list.splice_out(head).unwrap();
    assert_eq!(ints(&list), vec![2, 3, 4]);
    assert_eq!(list.size(), 3);
}

#[test]
fn delete_by_identity_after_find() {
    let mut list = chain![5, 6, 5];

    let second_five = list.keys().nth(2).unwrap();
    let removed = list.delete(second_five).unwrap();
    assert_eq!(removed.into_value(), Value::Int(5));
    assert_eq!(ints(&list), vec![5, 6]);

    assert_eq!(list.delete(second_five).unwrap_err(), ChainError::NotFound);
}

// =============================================================================
// Bulk operations
// =============================================================================

#[test]
fn filter_leaves_source_alone() {
    let list = chain![1, "x", 2, "y", 3];

    let numbers = list.filter(|n, _| matches!(n.unwrap(), Value::Int(_)));
    assert_eq!(ints(&numbers), vec![1, 2, 3]);

    assert_eq!(list.size(), 5);
    assert_eq!(list.collect()[1], Value::from("x"));
}

#[test]
fn map_to_another_payload() {
    let list = chain![1, 2, 3];

    let squares: List<GenericNode<i64>> = list
        .map(|n, _| {
            let mut v = 0i64;
            n.unwrap_into(&mut v)?;
            Ok::<_, ChainError>(GenericNode::new(v * v))
        })
        .unwrap();

    assert_eq!(squares.collect(), vec![1, 4, 9]);
}

#[test]
fn map_failure_aborts() {
    let list = chain![1, "two", 3];

    let result: Result<List<GenericNode<i64>>, ChainError> = list.map(|n, _| {
        let mut v = 0i64;
        n.unwrap_into(&mut v)?;
        Ok(GenericNode::new(v))
    });

    assert_eq!(
        result.unwrap_err(),
        ChainError::TypeMismatch {
            expected: "i64",
            found: "str"
        }
    );
}

#[test]
fn for_each_sees_positions() {
    let list = chain!['a', 'b', 'c'];
    let mut seen = String::new();
    list.for_each(|n, i| {
        seen.push_str(&format!("{i}{}", n.unwrap()));
    });
    assert_eq!(seen, "0a1b2c");
}

#[test]
fn collect_into_round_trip() {
    let list = chain![1, "two", 3.5, 'c'];

    let mut dest: Vec<Value> = Vec::new();
    list.collect_into(&mut dest).unwrap();

    let rebuilt = ValueList::from_values(dest);
    assert_eq!(rebuilt.collect(), list.collect());
}

#[test]
fn collect_into_narrow_integers() {
    let bytes = chain![1u8, 2u8, 255u8];
    let mut out: Vec<u8> = Vec::new();
    bytes.collect_into(&mut out).unwrap();
    assert_eq!(out, vec![1, 2, 255]);

    let too_wide = chain![1u8, 300, 2u8];
    let mut out: Vec<u8> = vec![9];
    assert!(matches!(
        too_wide.collect_into(&mut out),
        Err(ChainError::TypeMismatch { expected: "u8", found: "int" })
    ));
    assert_eq!(out, vec![9]);
}
