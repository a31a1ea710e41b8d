// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Composable accessors from a parent value into one of its fields.
//!
//! A [`Getter<T, F>`] turns a reference to a `T` into a reference to an `F`
//! stored inside it, for both shared and unique borrows. Getters never copy:
//! calling the same getter twice on the same parent yields the same storage,
//! so writes through [`Getter::get_mut`] land in the original value.
//!
//! Getters compose. [`compose`] chains a getter into a struct with a getter
//! into one of its fields, which is how visitors reach nested data relative to
//! the root of a traversal.
//!
//! ```
//! use typewalk_core::{compose, field, Getter};
//!
//! struct Inner { value: String }
//! struct Outer { inner: Inner }
//!
//! let to_value = compose(field!(Outer, inner: Inner), field!(Inner, value: String));
//!
//! let mut outer = Outer { inner: Inner { value: "a".to_string() } };
//! to_value.get_mut(&mut outer).push('b');
//! assert_eq!(to_value.get(&outer), "ab");
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Projection from a parent `T` to a field `F` reachable from it.
///
/// Implementations must be pure structural projections: both methods return
/// the same location for the same parent.
pub trait Getter<T, F>: Clone {
    /// Borrow the field immutably.
    fn get<'a>(&self, parent: &'a T) -> &'a F
    where
        Self: 'a;

    /// Borrow the field mutably.
    fn get_mut<'a>(&self, parent: &'a mut T) -> &'a mut F
    where
        Self: 'a;
}

/// The getter that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T> Getter<T, T> for Identity {
    fn get<'a>(&self, parent: &'a T) -> &'a T
    where
        Self: 'a,
    {
        parent
    }

    fn get_mut<'a>(&self, parent: &'a mut T) -> &'a mut T
    where
        Self: 'a,
    {
        parent
    }
}

/// A getter into a single field, built from two projection functions.
///
/// Usually constructed with the [`field!`](crate::field) macro.
pub struct Field<T, F> {
    get: fn(&T) -> &F,
    get_mut: fn(&mut T) -> &mut F,
}

impl<T, F> Field<T, F> {
    /// Create a field getter from a shared and a unique projection.
    ///
    /// Both projections must point at the same field.
    pub const fn new(get: fn(&T) -> &F, get_mut: fn(&mut T) -> &mut F) -> Self {
        Self { get, get_mut }
    }
}

impl<T, F> Clone for Field<T, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, F> Copy for Field<T, F> {}

impl<T, F> fmt::Debug for Field<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("parent", &std::any::type_name::<T>())
            .field("field", &std::any::type_name::<F>())
            .finish()
    }
}

impl<T, F> Getter<T, F> for Field<T, F> {
    fn get<'a>(&self, parent: &'a T) -> &'a F
    where
        Self: 'a,
    {
        (self.get)(parent)
    }

    fn get_mut<'a>(&self, parent: &'a mut T) -> &'a mut F
    where
        Self: 'a,
    {
        (self.get_mut)(parent)
    }
}

/// Build a [`Field`] getter for a named struct field.
///
/// ```
/// use typewalk_core::{field, Getter};
///
/// struct Point { x: i32 }
///
/// let x = field!(Point, x: i32);
/// let mut p = Point { x: 1 };
/// *x.get_mut(&mut p) += 1;
/// assert_eq!(*x.get(&p), 2);
/// ```
#[macro_export]
macro_rules! field {
    ($parent:ty, $name:ident : $field:ty) => {
        $crate::getter::Field::<$parent, $field>::new(
            |parent| &parent.$name,
            |parent| &mut parent.$name,
        )
    };
}

/// Two getters applied one after the other.
///
/// `B` is the intermediate type the outer getter lands on.
pub struct Compose<G1, G2, B> {
    outer: G1,
    inner: G2,
    _via: PhantomData<fn(&B)>,
}

impl<G1, G2, B> Compose<G1, G2, B> {
    /// Chain `outer` (parent to `B`) with `inner` (`B` to field).
    pub fn new(outer: G1, inner: G2) -> Self {
        Self {
            outer,
            inner,
            _via: PhantomData,
        }
    }
}

impl<G1: Clone, G2: Clone, B> Clone for Compose<G1, G2, B> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<G1: Copy, G2: Copy, B> Copy for Compose<G1, G2, B> {}

impl<G1: fmt::Debug, G2: fmt::Debug, B> fmt::Debug for Compose<G1, G2, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<A, B, C, G1, G2> Getter<A, C> for Compose<G1, G2, B>
where
    G1: Getter<A, B>,
    G2: Getter<B, C>,
{
    fn get<'a>(&self, parent: &'a A) -> &'a C
    where
        Self: 'a,
    {
        self.inner.get(self.outer.get(parent))
    }

    fn get_mut<'a>(&self, parent: &'a mut A) -> &'a mut C
    where
        Self: 'a,
    {
        self.inner.get_mut(self.outer.get_mut(parent))
    }
}

/// Compose two getters: the result applies `outer`, then `inner`.
pub fn compose<A, B, C, G1, G2>(outer: G1, inner: G2) -> Compose<G1, G2, B>
where
    G1: Getter<A, B>,
    G2: Getter<B, C>,
{
    Compose::new(outer, inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Inner {
        value: String,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Outer {
        count: i32,
        inner: Inner,
    }

    fn sample() -> Outer {
        Outer {
            count: 1,
            inner: Inner {
                value: "x".to_string(),
            },
        }
    }

    #[test]
    fn test_identity_returns_same_location() {
        let mut outer = sample();
        let ptr = &outer as *const Outer;
        assert!(std::ptr::eq(Identity.get(&outer), ptr));
        Identity.get_mut(&mut outer).count = 7;
        assert_eq!(outer.count, 7);
    }

    #[test]
    fn test_field_reads_and_writes_in_place() {
        let count = field!(Outer, count: i32);
        let mut outer = sample();
        *count.get_mut(&mut outer) += 41;
        assert_eq!(*count.get(&outer), 42);
        assert_eq!(outer.count, 42);
    }

    #[test]
    fn test_field_twice_yields_same_storage() {
        let value = compose(field!(Outer, inner: Inner), field!(Inner, value: String));
        let outer = sample();
        assert!(std::ptr::eq(value.get(&outer), value.get(&outer)));
        assert!(std::ptr::eq(value.get(&outer), &outer.inner.value));
    }

    #[test]
    fn test_compose_matches_sequential_application() {
        let outer_get = field!(Outer, inner: Inner);
        let inner_get = field!(Inner, value: String);
        let composed = compose(outer_get, inner_get);

        let mut through_composed = sample();
        composed.get_mut(&mut through_composed).push('!');

        let mut sequential = sample();
        inner_get
            .get_mut(outer_get.get_mut(&mut sequential))
            .push('!');

        assert_eq!(through_composed, sequential);
    }

    #[test]
    fn test_compose_identity_laws() {
        let g = field!(Outer, count: i32);

        let mut expected = sample();
        *g.get_mut(&mut expected) = 9;

        let mut left = sample();
        *compose(Identity, g).get_mut(&mut left) = 9;

        let mut right = sample();
        *compose(g, Identity).get_mut(&mut right) = 9;

        assert_eq!(left, expected);
        assert_eq!(right, expected);
    }

    #[test]
    fn test_compose_is_clone_and_reusable() {
        let composed = compose(field!(Outer, inner: Inner), field!(Inner, value: String));
        let copy = composed;
        let mut outer = sample();
        copy.get_mut(&mut outer).push('1');
        composed.get_mut(&mut outer).push('2');
        assert_eq!(outer.inner.value, "x12");
    }

    struct Borrowed<'s> {
        label: &'s str,
    }

    struct Holder<'s> {
        borrowed: Borrowed<'s>,
    }

    #[test]
    fn test_compose_through_borrowing_intermediate() {
        let text = String::from("scoped");
        let mut holder = Holder {
            borrowed: Borrowed { label: &text },
        };
        let label = compose(
            compose(Identity, field!(Holder<'_>, borrowed: Borrowed<'_>)),
            field!(Borrowed<'_>, label: &str),
        );
        assert_eq!(*label.get(&holder), "scoped");
        *label.get_mut(&mut holder) = "other";
        assert_eq!(holder.borrowed.label, "other");
    }
}
