use lazyseq::prelude::*;
use lazyseq::{action, view};

#[test]
fn test_drop_four() {
    let v: Vec<i32> = (0..10).collect();
    let out = (all(&v) | view::drop(4)).cloned().to_vec();
    assert_eq!(out, vec![4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_filter_even_to_vector() {
    let v: Vec<i32> = (0..10).collect();
    let out: Vec<i32> = all(&v) | view::filter(|x: &&i32| **x % 2 == 0) | view::cloned() | to();
    assert_eq!(out, vec![0, 2, 4, 6, 8]);
}

#[test]
fn test_zip_two_inputs() {
    let a = vec![0, 1, 2, 3, 4];
    let b = vec![5, 6, 7, 8, 9];
    let out = (all(&a) | view::zip(&b))
        .transform(|(x, y): (&i32, &i32)| (*x, *y))
        .to_vec();
    assert_eq!(out, vec![(0, 5), (1, 6), (2, 7), (3, 8), (4, 9)]);
}

#[test]
fn test_chunk_pairs() -> lazyseq::Result<()> {
    let v = vec![1, 2, 3, 4, 5, 6];
    let groups = (all(&v) | view::chunk(2)?)
        .transform(|group| group.cloned().to_vec())
        .to_vec();
    assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    Ok(())
}

#[test]
fn test_intersperse_zero() {
    let v = vec![1, 2, 3, 4, 5, 6];
    let out = (all(&v).cloned() | view::intersperse(0)).to_vec();
    assert_eq!(out, vec![1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6]);
}

#[test]
fn test_remove_if_in_place_shrinks() {
    let mut v = Mutable::new((0..10).collect::<Vec<i32>>());
    v |= action::remove_if(|x: &i32| x % 2 == 0);
    assert_eq!(v.len(), 5);
    assert_eq!(v.finish(), Ok(vec![1, 3, 5, 7, 9]));
}

#[test]
fn test_view_then_action_then_view() -> lazyseq::Result<()> {
    let mut words: Vec<&str> = "the quick brown fox jumps over the lazy dog"
        .split(' ')
        .collect();
    words.act(action::sort())?.act(action::unique())?;
    let lengths = (all(&words) | view::transform(|w: &&str| w.len()) | view::take(3)).to_vec();
    assert_eq!(lengths, vec![5, 3, 3]);
    Ok(())
}

#[test]
fn test_range_errors_surface_as_values() {
    assert!(view::chunk(0).is_err());
    assert!(view::sliding(0).is_err());
    assert!(view::stride(0).is_err());
    assert!(view::slice(3, 1).is_err());

    let mut v = vec![1, 2, 3];
    assert_eq!(
        v.act(action::insert(7, 0)).err(),
        Some(RangeError::OutOfBounds { index: 7, len: 3 })
    );
}
