//! Mutation capabilities of owned containers.
//!
//! Actions state what they need as bounds on these traits, the way views bound on cursor
//! capabilities: `sort` needs [`Permute`], `drop` needs [`Erase`], `remove_if` needs
//! [`Compact`]. Front operations on a `Vec` fall back to shifting, which is O(n); the
//! deque and list impls are native.

use std::collections::{linked_list, vec_deque};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::{mem, slice};

/// Anything holding a known number of elements.
pub trait Container {
    type Elem;

    fn size(&self) -> usize;
}

/// Removal of a contiguous run of positions.
pub trait Erase: Container {
    /// Remove positions `from..to`. Callers guarantee `from <= to <= size()`.
    fn erase_range(&mut self, from: usize, to: usize);
}

/// Insertion at an arbitrary position.
pub trait Insert: Container {
    /// Insert before position `at`. Callers guarantee `at <= size()`.
    fn insert_at(&mut self, at: usize, value: Self::Elem);
}

pub trait PushBack: Container {
    fn push_back(&mut self, value: Self::Elem);
}

pub trait PushFront: Container {
    fn push_front(&mut self, value: Self::Elem);
}

pub trait PopBack: Container {
    fn pop_back(&mut self) -> Option<Self::Elem>;
}

pub trait PopFront: Container {
    fn pop_front(&mut self) -> Option<Self::Elem>;
}

/// Capacity hint used when the final size is known up front. A no-op unless overridden.
pub trait Reserve: Container {
    #[inline]
    fn reserve_for(&mut self, _additional: usize) {}
}

/// Random-access storage whose elements can be swapped in place.
pub trait Permute: Container {
    fn elems(&mut self) -> &mut [Self::Elem];
}

/// Order-preserving removal in a single pass.
pub trait Compact: Container {
    fn retain_elems<F>(&mut self, keep: F)
    where
        F: FnMut(&Self::Elem) -> bool;

    fn dedup_elems(&mut self)
    where
        Self::Elem: PartialEq;
}

/// In-place access to every element from either end.
pub trait Overwrite: Container {
    type IterMut<'a>: DoubleEndedIterator<Item = &'a mut Self::Elem>
    where
        Self: 'a;

    fn elems_mut(&mut self) -> Self::IterMut<'_>;
}

impl<T> Container for Vec<T> {
    type Elem = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Erase for Vec<T> {
    #[inline]
    fn erase_range(&mut self, from: usize, to: usize) {
        self.drain(from..to);
    }
}

impl<T> Insert for Vec<T> {
    #[inline]
    fn insert_at(&mut self, at: usize, value: T) {
        self.insert(at, value);
    }
}

impl<T> PushBack for Vec<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        self.push(value);
    }
}

impl<T> PushFront for Vec<T> {
    #[inline]
    fn push_front(&mut self, value: T) {
        self.insert(0, value);
    }
}

impl<T> PopBack for Vec<T> {
    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }
}

impl<T> PopFront for Vec<T> {
    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.remove(0))
        }
    }
}

impl<T> Reserve for Vec<T> {
    #[inline]
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T> Permute for Vec<T> {
    #[inline]
    fn elems(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Compact for Vec<T> {
    #[inline]
    fn retain_elems<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }

    #[inline]
    fn dedup_elems(&mut self)
    where
        T: PartialEq,
    {
        self.dedup();
    }
}

impl<T> Overwrite for Vec<T> {
    type IterMut<'a> = slice::IterMut<'a, T> where Self: 'a;

    #[inline]
    fn elems_mut(&mut self) -> slice::IterMut<'_, T> {
        self.iter_mut()
    }
}

impl<T> Container for VecDeque<T> {
    type Elem = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Erase for VecDeque<T> {
    #[inline]
    fn erase_range(&mut self, from: usize, to: usize) {
        self.drain(from..to);
    }
}

impl<T> Insert for VecDeque<T> {
    #[inline]
    fn insert_at(&mut self, at: usize, value: T) {
        self.insert(at, value);
    }
}

impl<T> PushBack for VecDeque<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }
}

impl<T> PushFront for VecDeque<T> {
    #[inline]
    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value);
    }
}

impl<T> PopBack for VecDeque<T> {
    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }
}

impl<T> PopFront for VecDeque<T> {
    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }
}

impl<T> Reserve for VecDeque<T> {
    #[inline]
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T> Permute for VecDeque<T> {
    #[inline]
    fn elems(&mut self) -> &mut [T] {
        self.make_contiguous()
    }
}

impl<T> Compact for VecDeque<T> {
    #[inline]
    fn retain_elems<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }

    fn dedup_elems(&mut self)
    where
        T: PartialEq,
    {
        let mut flat = Vec::from(mem::take(self));
        flat.dedup();
        *self = VecDeque::from(flat);
    }
}

impl<T> Overwrite for VecDeque<T> {
    type IterMut<'a> = vec_deque::IterMut<'a, T> where Self: 'a;

    #[inline]
    fn elems_mut(&mut self) -> vec_deque::IterMut<'_, T> {
        self.iter_mut()
    }
}

impl<T> Container for LinkedList<T> {
    type Elem = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Erase for LinkedList<T> {
    fn erase_range(&mut self, from: usize, to: usize) {
        let mut tail = self.split_off(from);
        let mut rest = tail.split_off(to - from);
        self.append(&mut rest);
    }
}

impl<T> Insert for LinkedList<T> {
    fn insert_at(&mut self, at: usize, value: T) {
        let mut tail = self.split_off(at);
        LinkedList::push_back(self, value);
        self.append(&mut tail);
    }
}

impl<T> PushBack for LinkedList<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }
}

impl<T> PushFront for LinkedList<T> {
    #[inline]
    fn push_front(&mut self, value: T) {
        LinkedList::push_front(self, value);
    }
}

impl<T> PopBack for LinkedList<T> {
    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        LinkedList::pop_back(self)
    }
}

impl<T> PopFront for LinkedList<T> {
    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        LinkedList::pop_front(self)
    }
}

impl<T> Reserve for LinkedList<T> {}

impl<T> Compact for LinkedList<T> {
    fn retain_elems<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        for item in mem::take(self) {
            if keep(&item) {
                LinkedList::push_back(self, item);
            }
        }
    }

    fn dedup_elems(&mut self)
    where
        T: PartialEq,
    {
        for item in mem::take(self) {
            if self.back() != Some(&item) {
                LinkedList::push_back(self, item);
            }
        }
    }
}

impl<T> Overwrite for LinkedList<T> {
    type IterMut<'a> = linked_list::IterMut<'a, T> where Self: 'a;

    #[inline]
    fn elems_mut(&mut self) -> linked_list::IterMut<'_, T> {
        self.iter_mut()
    }
}

impl<T> Container for [T] {
    type Elem = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Permute for [T] {
    #[inline]
    fn elems(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Overwrite for [T] {
    type IterMut<'a> = slice::IterMut<'a, T> where Self: 'a;

    #[inline]
    fn elems_mut(&mut self) -> slice::IterMut<'_, T> {
        self.iter_mut()
    }
}

impl<T, const N: usize> Container for [T; N] {
    type Elem = T;

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Permute for [T; N] {
    #[inline]
    fn elems(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Overwrite for [T; N] {
    type IterMut<'a> = slice::IterMut<'a, T> where Self: 'a;

    #[inline]
    fn elems_mut(&mut self) -> slice::IterMut<'_, T> {
        self.iter_mut()
    }
}

impl Container for String {
    type Elem = char;

    #[inline]
    fn size(&self) -> usize {
        self.chars().count()
    }
}

impl PushBack for String {
    #[inline]
    fn push_back(&mut self, value: char) {
        self.push(value);
    }
}

impl PopBack for String {
    #[inline]
    fn pop_back(&mut self) -> Option<char> {
        self.pop()
    }
}

impl Reserve for String {
    #[inline]
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<K, V> Container for BTreeMap<K, V> {
    type Elem = (K, V);

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K: Ord, V> PushBack for BTreeMap<K, V> {
    #[inline]
    fn push_back(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K, V> Reserve for BTreeMap<K, V> {}

impl<T> Container for BTreeSet<T> {
    type Elem = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> PushBack for BTreeSet<T> {
    #[inline]
    fn push_back(&mut self, value: T) {
        self.insert(value);
    }
}

impl<T> Reserve for BTreeSet<T> {}

impl<K, V, H> Container for HashMap<K, V, H> {
    type Elem = (K, V);

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K: Eq + Hash, V, H: BuildHasher> PushBack for HashMap<K, V, H> {
    #[inline]
    fn push_back(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K: Eq + Hash, V, H: BuildHasher> Reserve for HashMap<K, V, H> {
    #[inline]
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<T, H> Container for HashSet<T, H> {
    type Elem = T;

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: Eq + Hash, H: BuildHasher> PushBack for HashSet<T, H> {
    #[inline]
    fn push_back(&mut self, value: T) {
        self.insert(value);
    }
}

impl<T: Eq + Hash, H: BuildHasher> Reserve for HashSet<T, H> {
    #[inline]
    fn reserve_for(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_erase_and_insert_by_position() {
        let mut list: LinkedList<i32> = (0..6).collect();
        list.erase_range(1, 4);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 4, 5]);
        list.insert_at(1, 9);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 9, 4, 5]);
    }

    #[test]
    fn test_front_ops_on_vec_shift() {
        let mut v = vec![2, 3];
        PushFront::push_front(&mut v, 1);
        assert_eq!(v, vec![1, 2, 3]);
        assert_eq!(PopFront::pop_front(&mut v), Some(1));
        assert_eq!(PopFront::pop_front(&mut Vec::<i32>::new()), None);
    }

    #[test]
    fn test_compact_list_and_deque() {
        let mut list: LinkedList<i32> = [1, 1, 2, 3, 3, 3, 1].into_iter().collect();
        list.dedup_elems();
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 1]);
        list.retain_elems(|x| *x != 1);
        assert_eq!(list.len(), 2);

        let mut dq: VecDeque<i32> = [4, 4, 5].into_iter().collect();
        dq.dedup_elems();
        assert_eq!(dq, VecDeque::from(vec![4, 5]));
    }

    #[test]
    fn test_deque_permute_sees_everything() {
        let mut dq = VecDeque::new();
        VecDeque::push_back(&mut dq, 2);
        VecDeque::push_front(&mut dq, 3);
        VecDeque::push_back(&mut dq, 1);
        dq.elems().sort();
        assert_eq!(dq, VecDeque::from(vec![1, 2, 3]));
    }

    #[test]
    fn test_string_counts_chars() {
        let mut s = String::from("héllo");
        assert_eq!(s.size(), 5);
        PushBack::push_back(&mut s, '!');
        assert_eq!(PopBack::pop_back(&mut s), Some('!'));
    }
}
