use std::cell::Cell;
use std::collections::{LinkedList, VecDeque};

use lazyseq::prelude::*;
use lazyseq::{action, view};
use proptest::prelude::*;

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

proptest! {
    #[test]
    fn test_pulls_stay_proportional_to_demand(k in 0usize..64) {
        let pulls = Cell::new(0usize);
        let counted = from_iter((0u64..).inspect(|_| pulls.set(pulls.get() + 1)));
        let out = (counted
            | view::filter(|x: &u64| x % 2 == 0)
            | view::transform(|x: u64| x * 3)
            | view::take(k))
        .to_vec();
        prop_assert_eq!(out.len(), k);
        prop_assert!(pulls.get() <= 2 * k);
    }

    #[test]
    fn test_composition_is_associative(v in small_vec(), a in 0usize..50, b in 0usize..50) {
        let stepwise = ((all(&v) | view::drop(a)) | view::take(b)).cloned().to_vec();
        let fused = (all(&v) | compose(view::drop(a), view::take(b))).cloned().to_vec();
        let chained = (all(&v) | view::drop(a) | view::take(b)).cloned().to_vec();
        prop_assert_eq!(&stepwise, &fused);
        prop_assert_eq!(&stepwise, &chained);
    }

    #[test]
    fn test_random_access_and_generic_paths_agree(v in small_vec(), n in 0usize..50) {
        let list: LinkedList<i32> = v.iter().copied().collect();

        let dropped = (all(&v) | view::drop(n)).cloned().to_vec();
        prop_assert_eq!(&dropped, &(all(&list) | view::drop(n)).cloned().to_vec());
        prop_assert_eq!(&dropped, &(single_pass(v.clone()) | view::drop(n)).to_vec());

        let taken = (all(&v) | view::take(n)).cloned().to_vec();
        prop_assert_eq!(&taken, &(all(&list) | view::take(n)).cloned().to_vec());
        prop_assert_eq!(&taken, &(single_pass(v.clone()) | view::take(n)).to_vec());

        let last = (all(&v) | view::take_last(n)).cloned().to_vec();
        prop_assert_eq!(&last, &(all(&list) | view::take_last(n)).cloned().to_vec());
        prop_assert_eq!(&last, &(from_iter(list.iter()) | view::take_last(n)).cloned().to_vec());

        let reversed = (all(&v) | view::reverse()).cloned().to_vec();
        prop_assert_eq!(&reversed, &(all(&list) | view::reverse()).cloned().to_vec());
    }

    #[test]
    fn test_sort_and_reverse_are_stable_under_repetition(v in small_vec()) {
        let mut once = v.clone();
        once.act(action::sort()).unwrap();
        let mut twice = once.clone();
        twice.act(action::sort()).unwrap();
        prop_assert_eq!(&once, &twice);

        let mut list: LinkedList<i32> = v.iter().copied().collect();
        list.act(action::reverse()).unwrap().act(action::reverse()).unwrap();
        prop_assert_eq!(list.into_iter().collect::<Vec<_>>(), v);
    }

    #[test]
    fn test_materialize_round_trips(v in small_vec()) {
        let back: Vec<i32> = all(&v).cloned().to();
        prop_assert_eq!(&back, &v);

        let list: LinkedList<i32> = all(&v).cloned().to();
        let again: Vec<i32> = all(&list).cloned() | to();
        prop_assert_eq!(&again, &v);

        let dq: VecDeque<i32> = all(&v) | view::cloned() | to();
        prop_assert_eq!(dq.into_iter().collect::<Vec<_>>(), v);
    }

    #[test]
    fn test_chunks_flatten_back(v in small_vec(), width in 1usize..8) {
        let chunked = (all(&v) | view::chunk(width).unwrap() | view::flatten()).cloned().to_vec();
        prop_assert_eq!(chunked, v);
    }

    #[test]
    fn test_remove_if_action_matches_view(v in small_vec()) {
        let kept = all(&v).remove_if(|x: &&i32| **x < 0).cloned().to_vec();
        let mut in_place = v.clone();
        in_place.act(action::remove_if(|x: &i32| *x < 0)).unwrap();
        prop_assert_eq!(kept, in_place);
    }
}
