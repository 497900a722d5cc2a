//! Model tests: every list operation is checked against a `Vec` doing the
//! same thing.

use nexus_chain::{
    ChainError, GenericNode, Key, List, PrevLink, Storage, Value, ValueList, ValueWrapper,
};
use proptest::prelude::*;

type IntList = List<GenericNode<i64>>;

#[derive(Clone, Debug)]
enum Op {
    Append(i64),
    Prepend(i64),
    InsertAt(isize, i64),
    DeleteAt(isize),
    DeleteFirst(i64),
    Wrap(isize, i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i64>().prop_map(Op::Append),
        2 => any::<i64>().prop_map(Op::Prepend),
        3 => (-3isize..40, any::<i64>()).prop_map(|(i, v)| Op::InsertAt(i, v)),
        3 => (-3isize..40).prop_map(Op::DeleteAt),
        1 => (-4i64..4).prop_map(Op::DeleteFirst),
        1 => (-3isize..40, any::<i64>()).prop_map(|(i, v)| Op::Wrap(i, v)),
    ]
}

fn apply(list: &mut IntList, model: &mut Vec<i64>, op: &Op) {
    match *op {
        Op::Append(v) => {
            list.append(GenericNode::new(v));
            model.push(v);
        }
        Op::Prepend(v) => {
            list.prepend(GenericNode::new(v));
            model.insert(0, v);
        }
        Op::InsertAt(i, v) => {
            list.insert_at(i, GenericNode::new(v));
            let at = i.clamp(0, model.len() as isize) as usize;
            model.insert(at, v);
        }
        Op::DeleteAt(i) => {
            let result = list.delete_at(i);
            if i >= 0 && (i as usize) < model.len() {
                let expected = model.remove(i as usize);
                assert_eq!(result.unwrap().into_value(), expected);
            } else {
                assert_eq!(
                    result.unwrap_err(),
                    ChainError::OutOfBounds {
                        index: i,
                        size: model.len()
                    }
                );
            }
        }
        Op::DeleteFirst(v) => {
            let found = list.find_key(|n, _| *n.unwrap() == v);
            match model.iter().position(|&x| x == v) {
                Some(pos) => {
                    list.delete(found.unwrap()).unwrap();
                    model.remove(pos);
                }
                None => assert_eq!(found.unwrap_err(), ChainError::NotFound),
            }
        }
        Op::Wrap(i, v) => match list.at_mut(i) {
            Ok(node) => {
                node.wrap(v);
                model[i as usize] = v;
            }
            Err(_) => assert!(i < 0 || i as usize >= model.len()),
        },
    }
}

fn assert_matches_model(list: &IntList, model: &[i64]) {
    assert_eq!(list.size(), model.len());
    assert_eq!(list.collect(), model);
    assert_eq!(list.storage().len(), model.len());

    let mut prev = u32::NONE;
    for key in list.keys() {
        assert!(list.get(key).unwrap().prev_is(prev));
        prev = key;
    }
}

proptest! {
    #[test]
    fn ops_match_vec_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut list = IntList::new();
        let mut model = Vec::new();

        for op in &ops {
            apply(&mut list, &mut model, op);
            assert_matches_model(&list, &model);
        }
    }

    #[test]
    fn append_then_collect(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut list = IntList::new();
        for &v in &values {
            list.append(GenericNode::new(v));
        }
        prop_assert_eq!(list.size(), values.len());
        prop_assert_eq!(list.collect(), values);
    }

    #[test]
    fn prepend_reverses(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut list = IntList::new();
        for &v in &values {
            list.prepend(GenericNode::new(v));
        }
        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(list.collect(), reversed);
    }

    #[test]
    fn at_agrees_with_collect(
        values in prop::collection::vec(any::<i64>(), 0..32),
        index in -4isize..40,
    ) {
        let list = IntList::from_values(values.clone());
        let snapshot = list.collect();

        match list.at(index) {
            Ok(node) => prop_assert_eq!(*node.unwrap(), snapshot[index as usize]),
            Err(err) => {
                prop_assert!(index < 0 || index as usize >= snapshot.len());
                prop_assert_eq!(err, ChainError::OutOfBounds { index, size: snapshot.len() });
            }
        }
    }

    #[test]
    fn insert_at_clamps_to_ends(
        values in prop::collection::vec(any::<i64>(), 0..32),
        below in -50isize..0,
        above in 0isize..50,
        v in any::<i64>(),
    ) {
        let base = IntList::from_values(values.clone());

        let mut low = base.clone();
        let mut prepended = base.clone();
        low.insert_at(below, GenericNode::new(v));
        prepended.prepend(GenericNode::new(v));
        prop_assert_eq!(low.collect(), prepended.collect());

        let past_end = values.len() as isize + above;
        let mut high = base.clone();
        let mut appended = base;
        high.insert_at(past_end, GenericNode::new(v));
        appended.append(GenericNode::new(v));
        prop_assert_eq!(high.collect(), appended.collect());
    }

    #[test]
    fn filter_matches_vec_filter(values in prop::collection::vec(-100i64..100, 0..64)) {
        let list = IntList::from_values(values.clone());

        let kept = list.filter(|n, _| *n.unwrap() >= 0);
        let expected: Vec<i64> = values.iter().copied().filter(|&v| v >= 0).collect();

        prop_assert_eq!(kept.collect(), expected);
        prop_assert_eq!(list.collect(), values);
    }

    #[test]
    fn collect_into_round_trips(ints in prop::collection::vec(any::<i64>(), 0..32)) {
        let list = ValueList::from_values(ints.iter().map(|&i| Value::Int(i)));

        let mut out: Vec<i64> = Vec::new();
        list.collect_into(&mut out).unwrap();
        prop_assert_eq!(&out, &ints);

        let rebuilt = ValueList::from_values(out.into_iter().map(Value::Int));
        prop_assert_eq!(rebuilt.collect(), list.collect());
    }
}
