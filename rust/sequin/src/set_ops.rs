//! Set algebra over sequences: complement, intersection, membership and
//! runtime-type filtering.
//!
//! The `items` argument of these operations accepts anything that views as a
//! slice: a plain slice, an array (a one-element array covers the
//! single-item case), a `Vec` or another `Sequence`.

use std::any::{Any, TypeId};

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Returns the elements of `self` that are NOT found among `items`.
    pub fn except(&self, items: impl AsRef<[T]>) -> Sequence<T>
    where
        T: Clone + PartialEq,
    {
        let items = items.as_ref();
        self.where_by(|x| !items.contains(x))
    }

    /// Returns the elements of `self` whose selector-derived key is not
    /// found among the selector-derived keys of `items`. The selector is
    /// applied to both sides.
    pub fn except_by<K, S>(&self, items: impl AsRef<[T]>, mut selector: S) -> Sequence<T>
    where
        T: Clone,
        K: PartialEq,
        S: FnMut(&T) -> K,
    {
        let keys: Vec<K> = items.as_ref().iter().map(|x| selector(x)).collect();
        self.where_by(|x| !keys.contains(&selector(x)))
    }

    /// Returns the elements of `self` that ARE found among `items`.
    pub fn intersect(&self, items: impl AsRef<[T]>) -> Sequence<T>
    where
        T: Clone + PartialEq,
    {
        let items = items.as_ref();
        self.where_by(|x| items.contains(x))
    }

    /// Returns the elements of `self` whose selector-derived key is found
    /// among the selector-derived keys of `items`.
    pub fn intersect_by<K, S>(&self, items: impl AsRef<[T]>, mut selector: S) -> Sequence<T>
    where
        T: Clone,
        K: PartialEq,
        S: FnMut(&T) -> K,
    {
        let keys: Vec<K> = items.as_ref().iter().map(|x| selector(x)).collect();
        self.where_by(|x| keys.contains(&selector(x)))
    }

    /// Membership test under a key selector: `true` iff some element's key
    /// equals `value`'s key. The plain `contains(&value)` form comes from
    /// the slice surface.
    pub fn contains_by<K, S>(&self, value: &T, mut selector: S) -> bool
    where
        K: PartialEq,
        S: FnMut(&T) -> K,
    {
        let key = selector(value);
        self.0.iter().any(|x| selector(x) == key)
    }

    /// Returns `true` iff every value of `items` is contained in `self`.
    pub fn contains_all(&self, items: impl AsRef<[T]>) -> bool
    where
        T: PartialEq,
    {
        items.as_ref().iter().all(|x| self.0.contains(x))
    }

    /// Returns `true` iff every value of `items` is contained in `self`
    /// under the key selector.
    pub fn contains_all_by<K, S>(&self, items: impl AsRef<[T]>, mut selector: S) -> bool
    where
        K: PartialEq,
        S: FnMut(&T) -> K,
    {
        let keys: Vec<K> = self.0.iter().map(|x| selector(x)).collect();
        items.as_ref().iter().all(|x| keys.contains(&selector(x)))
    }

    /// Keeps the elements whose probed value is of runtime type `U`.
    ///
    /// The probe maps an element to the type-erased value whose runtime
    /// type is checked; for a sequence of trait objects it is typically
    /// `|x| x.as_any()`.
    pub fn of_type<U, S>(&self, probe: S) -> Sequence<T>
    where
        T: Clone,
        U: Any,
        S: FnMut(&T) -> &dyn Any,
    {
        self.of_types(&[TypeId::of::<U>()], probe)
    }

    /// Keeps the elements whose probed value's runtime type is one of the
    /// given type ids.
    pub fn of_types<S>(&self, type_ids: &[TypeId], mut probe: S) -> Sequence<T>
    where
        T: Clone,
        S: FnMut(&T) -> &dyn Any,
    {
        // UFCS keeps the call on the erased value rather than on the
        // `&dyn Any` reference itself.
        self.where_in_select_with(
            |x| Any::type_id(probe(x)),
            |_, _| (),
            |type_id, _, _, _| type_ids.contains(type_id),
        )
    }
}
