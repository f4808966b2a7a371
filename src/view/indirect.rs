//! Pointer views: `address_of`, `indirect`, `ptr`.
//!
//! Each one is a [`Transform`] with a fixed function, so they keep every capability of the
//! input. What can be dereferenced is described by [`Resolve`], one impl per ownership
//! flavour.

use std::ptr;
use std::rc::{self, Rc};
use std::sync::{self, Arc};

use super::transform::Transform;
use crate::cursor::Sequence;
use crate::pipe::Stage;

/// How a pointer-like element holds its referent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// A plain reference.
    Borrowed,
    /// `Box`: sole owner.
    Unique,
    /// `Rc` or `Arc`: one of several owners.
    Shared,
    /// `rc::Weak` or `sync::Weak`: may have expired.
    Weak,
}

/// A pointer-like element that can be followed to its referent.
pub trait Resolve {
    /// The pointed-to type.
    type Pointee: ?Sized;
    /// What following the pointer produces.
    type Target;
    const OWNERSHIP: Ownership;

    fn resolve(self) -> Self::Target;

    /// Address of the referent; null for an expired weak pointer.
    fn address(&self) -> *const Self::Pointee;
}

impl<'a, 'b, T: ?Sized> Resolve for &'a &'b T {
    type Pointee = T;
    type Target = &'b T;
    const OWNERSHIP: Ownership = Ownership::Borrowed;

    #[inline]
    fn resolve(self) -> &'b T {
        *self
    }

    #[inline]
    fn address(&self) -> *const T {
        **self
    }
}

impl<'a, T: ?Sized> Resolve for &'a Box<T> {
    type Pointee = T;
    type Target = &'a T;
    const OWNERSHIP: Ownership = Ownership::Unique;

    #[inline]
    fn resolve(self) -> &'a T {
        self
    }

    #[inline]
    fn address(&self) -> *const T {
        &***self
    }
}

impl<'a, T: ?Sized> Resolve for &'a Rc<T> {
    type Pointee = T;
    type Target = &'a T;
    const OWNERSHIP: Ownership = Ownership::Shared;

    #[inline]
    fn resolve(self) -> &'a T {
        self
    }

    #[inline]
    fn address(&self) -> *const T {
        Rc::as_ptr(self)
    }
}

impl<'a, T: ?Sized> Resolve for &'a Arc<T> {
    type Pointee = T;
    type Target = &'a T;
    const OWNERSHIP: Ownership = Ownership::Shared;

    #[inline]
    fn resolve(self) -> &'a T {
        self
    }

    #[inline]
    fn address(&self) -> *const T {
        Arc::as_ptr(self)
    }
}

impl<'a, T> Resolve for &'a rc::Weak<T> {
    type Pointee = T;
    type Target = Option<Rc<T>>;
    const OWNERSHIP: Ownership = Ownership::Weak;

    #[inline]
    fn resolve(self) -> Option<Rc<T>> {
        self.upgrade()
    }

    #[inline]
    fn address(&self) -> *const T {
        if self.strong_count() == 0 {
            ptr::null()
        } else {
            self.as_ptr()
        }
    }
}

impl<'a, T> Resolve for &'a sync::Weak<T> {
    type Pointee = T;
    type Target = Option<Arc<T>>;
    const OWNERSHIP: Ownership = Ownership::Weak;

    #[inline]
    fn resolve(self) -> Option<Arc<T>> {
        self.upgrade()
    }

    #[inline]
    fn address(&self) -> *const T {
        if self.strong_count() == 0 {
            ptr::null()
        } else {
            self.as_ptr()
        }
    }
}

#[inline]
pub(crate) fn address_of_ref<T: ?Sized>(item: &T) -> *const T {
    item
}

#[inline]
pub(crate) fn address_by_value<R: Resolve>(item: R) -> *const R::Pointee {
    item.address()
}

/// Addresses of referenced elements.
pub type AddressOf<C, T> = Transform<C, fn(&T) -> *const T>;

/// Referents of pointer-like elements.
pub type Indirect<C, R> = Transform<C, fn(R) -> <R as Resolve>::Target>;

/// Referent addresses of pointer-like elements.
pub type Ptr<C, R> = Transform<C, fn(R) -> *const <R as Resolve>::Pointee>;

/// Bound form of `address_of`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressOfFn;

/// Turn each `&T` element into a `*const T`.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
///
/// let v = vec![1, 2];
/// let addrs = (all(&v) | view::address_of()).to_vec();
/// assert_eq!(addrs[1], &v[1] as *const i32);
/// ```
#[inline]
pub fn address_of() -> AddressOfFn {
    AddressOfFn
}

impl<'a, S, T: 'a + ?Sized> Stage<S> for AddressOfFn
where
    S: Sequence<Item = &'a T>,
{
    type Output = AddressOf<S::Cursor, T>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Transform::new(seq.into_cursor(), address_of_ref as fn(&T) -> *const T)
    }
}

/// Bound form of `indirect`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndirectFn;

/// Follow each pointer-like element to its referent.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::view;
/// use std::rc::Rc;
///
/// let owners = vec![Rc::new(1), Rc::new(2)];
/// let values = (all(&owners) | view::indirect()).cloned().to_vec();
/// assert_eq!(values, vec![1, 2]);
/// ```
#[inline]
pub fn indirect() -> IndirectFn {
    IndirectFn
}

impl<S> Stage<S> for IndirectFn
where
    S: Sequence,
    S::Item: Resolve,
{
    type Output = Indirect<S::Cursor, S::Item>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Transform::new(
            seq.into_cursor(),
            Resolve::resolve as fn(S::Item) -> <S::Item as Resolve>::Target,
        )
    }
}

/// Bound form of `ptr`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PtrFn;

/// Map each pointer-like element to the address of its referent.
#[inline]
pub fn ptr() -> PtrFn {
    PtrFn
}

impl<S> Stage<S> for PtrFn
where
    S: Sequence,
    S::Item: Resolve,
{
    type Output = Ptr<S::Cursor, S::Item>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Transform::new(
            seq.into_cursor(),
            address_by_value as fn(S::Item) -> *const <S::Item as Resolve>::Pointee,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn ownership_of<R: Resolve>(_: &R) -> Ownership {
        R::OWNERSHIP
    }

    #[test]
    fn test_indirect_through_boxes_and_refs() {
        let boxes = vec![Box::new(3), Box::new(4)];
        assert_eq!(all(&boxes).indirect().cloned().to_vec(), vec![3, 4]);

        let (a, b) = (5, 6);
        let refs = vec![&a, &b];
        assert_eq!(all(&refs).indirect().cloned().to_vec(), vec![5, 6]);
        assert_eq!(ownership_of(&&refs[0]), Ownership::Borrowed);
    }

    #[test]
    fn test_indirect_weak_yields_none_once_expired() {
        let alive = Rc::new(1);
        let gone = Rc::new(2);
        let weak = vec![Rc::downgrade(&alive), Rc::downgrade(&gone)];
        drop(gone);
        let out = all(&weak).indirect().to_vec();
        assert_eq!(out[0].as_deref(), Some(&1));
        assert!(out[1].is_none());
    }

    #[test]
    fn test_ptr_is_null_for_expired_weak() {
        let alive = Arc::new("a");
        let gone = Arc::new("b");
        let weak = vec![Arc::downgrade(&alive), Arc::downgrade(&gone)];
        drop(gone);
        let addrs = all(&weak).ptr().to_vec();
        assert_eq!(addrs[0], Arc::as_ptr(&alive));
        assert!(addrs[1].is_null());
        assert_eq!(ownership_of(&&weak[0]), Ownership::Weak);
    }

    #[test]
    fn test_ptr_matches_shared_owner() {
        let shared = vec![Rc::new(7u8)];
        let addr = (all(&shared) | ptr()).to_vec();
        assert_eq!(addr, vec![Rc::as_ptr(&shared[0])]);
        assert_eq!(ownership_of(&&shared[0]), Ownership::Shared);
    }

    #[test]
    fn test_address_of_keeps_random_access() {
        let v = [1u16, 2, 3];
        let c = all(&v).address_of();
        assert_eq!(c.len(), 3);
        assert_eq!(c.peek_at(2), Some(&v[2] as *const u16));
    }
}
