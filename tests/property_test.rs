// Property-based tests pitting Vector against the standard library vector
//
// Random operation sequences must keep both containers observationally
// identical, and targeted properties pin down insertion, removal, and exact
// reservation at arbitrary offsets.

use oxivec::Vector;
use proptest::prelude::*;

/// One step of the randomized container workload. Indices are reduced
/// modulo the live length when the step is applied.
#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Remove(usize),
    Reserve(usize),
    Resize(usize),
    Truncate(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        3 => (any::<usize>(), any::<i32>()).prop_map(|(index, value)| Op::Insert(index, value)),
        2 => any::<usize>().prop_map(Op::Remove),
        1 => (0usize..64).prop_map(Op::Reserve),
        1 => (0usize..48).prop_map(Op::Resize),
        1 => (0usize..32).prop_map(Op::Truncate),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    /// Replaying an arbitrary workload against both containers never
    /// produces an observable difference.
    #[test]
    fn vector_matches_std_vec(ops in proptest::collection::vec(op_strategy(), 1..100)) {
        let mut ours: Vector<i32> = Vector::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    ours.push(value);
                    model.push(value);
                }
                Op::Pop => {
                    prop_assert_eq!(ours.pop(), model.pop());
                }
                Op::Insert(index, value) => {
                    let at = index % (model.len() + 1);
                    let written = *ours.insert(at, value);
                    prop_assert_eq!(written, value);
                    model.insert(at, value);
                }
                Op::Remove(index) => {
                    if !model.is_empty() {
                        let at = index % model.len();
                        prop_assert_eq!(ours.remove(at), model.remove(at));
                    }
                }
                Op::Reserve(capacity) => {
                    ours.reserve(capacity);
                    prop_assert!(ours.capacity() >= capacity);
                }
                Op::Resize(len) => {
                    ours.resize(len);
                    model.resize(len, 0);
                }
                Op::Truncate(len) => {
                    ours.truncate(len);
                    model.truncate(len);
                }
                Op::Clear => {
                    ours.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(ours.len(), model.len());
            prop_assert!(ours.len() <= ours.capacity());
        }
        prop_assert_eq!(ours.as_slice(), model.as_slice());
    }

    /// Insertion keeps the prefix, writes the value, and shifts the suffix.
    #[test]
    fn insert_splices_at_offset(
        base in proptest::collection::vec(any::<i32>(), 0..24),
        index in any::<usize>(),
        value in any::<i32>(),
    ) {
        let at = index % (base.len() + 1);
        let mut v: Vector<i32> = base.iter().copied().collect();
        v.insert(at, value);
        prop_assert_eq!(v.len(), base.len() + 1);
        prop_assert_eq!(&v[..at], &base[..at]);
        prop_assert_eq!(v[at], value);
        prop_assert_eq!(&v[at + 1..], &base[at..]);
    }

    /// Removal returns the element and closes the gap.
    #[test]
    fn remove_splices_at_offset(
        base in proptest::collection::vec(any::<i32>(), 1..24),
        index in any::<usize>(),
    ) {
        let at = index % base.len();
        let mut v: Vector<i32> = base.iter().copied().collect();
        prop_assert_eq!(v.remove(at), base[at]);
        prop_assert_eq!(v.len(), base.len() - 1);
        prop_assert_eq!(&v[..at], &base[..at]);
        prop_assert_eq!(&v[at..], &base[at + 1..]);
    }

    /// Insertion followed by removal at the same offset is an identity.
    #[test]
    fn insert_then_remove_is_identity(
        base in proptest::collection::vec(any::<i32>(), 0..24),
        index in any::<usize>(),
        value in any::<i32>(),
    ) {
        let at = index % (base.len() + 1);
        let mut v: Vector<i32> = base.iter().copied().collect();
        v.insert(at, value);
        prop_assert_eq!(v.remove(at), value);
        prop_assert_eq!(v.as_slice(), base.as_slice());
    }

    /// Reserving above the current capacity lands on the exact target.
    #[test]
    fn reserve_is_exact_above_capacity(len in 0usize..16, extra in 1usize..32) {
        let mut v: Vector<u8> = (0..len).map(|x| x as u8).collect();
        let target = v.capacity() + extra;
        v.reserve(target);
        prop_assert_eq!(v.capacity(), target);
        prop_assert!(v.iter().copied().eq((0..len).map(|x| x as u8)));
    }

    /// A clone carries equal contents in exactly-sized storage.
    #[test]
    fn clone_is_equal_and_tight(values in proptest::collection::vec(any::<i32>(), 0..40)) {
        let v: Vector<i32> = values.iter().copied().collect();
        let copy = v.clone();
        prop_assert_eq!(copy.as_slice(), v.as_slice());
        prop_assert_eq!(copy.capacity(), copy.len());
    }
}

#[cfg(test)]
mod boundary_tests {
    use super::*;

    /// Every insertion offset at every small size, checked exhaustively.
    #[test]
    fn test_insert_every_offset() {
        for len in 0..5 {
            for at in 0..=len {
                let mut v: Vector<usize> = (0..len).collect();
                v.insert(at, 999);
                assert_eq!(v.len(), len + 1);
                assert!(v[..at].iter().copied().eq(0..at));
                assert_eq!(v[at], 999);
                assert!(v[at + 1..].iter().copied().eq(at..len));
            }
        }
    }

    /// Every removal offset at every small size, checked exhaustively.
    #[test]
    fn test_remove_every_offset() {
        for len in 1..5 {
            for at in 0..len {
                let mut v: Vector<usize> = (0..len).collect();
                assert_eq!(v.remove(at), at);
                assert_eq!(v.len(), len - 1);
                assert!(v[..at].iter().copied().eq(0..at));
                assert!(v[at..].iter().copied().eq(at + 1..len));
            }
        }
    }
}
