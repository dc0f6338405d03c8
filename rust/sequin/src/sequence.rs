//! The core [`Sequence`] container: construction, conversion, equality and
//! the structural passthrough operations.

use sequin_common::{Result, verify_arg};

/// An ordered, index-addressable container of elements of a single type,
/// supporting the fluent query method set of this crate.
///
/// `Sequence<T>` owns its backing store exclusively: construction from a
/// slice copies the elements, and construction from a `Vec` takes ownership,
/// so a caller can never mutate a buffer out from under a sequence.
///
/// It dereferences to `[T]`, so the standard slice surface (`seq[i]`,
/// `len()`, `iter()`, `first()`, `last()`, `get()`, `contains()`) is
/// available directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<T>(pub(crate) Vec<T>);

impl<T> Sequence<T> {
    /// Creates a new, empty sequence.
    pub fn new() -> Sequence<T> {
        Sequence(Vec::new())
    }

    /// Creates a new, empty sequence with capacity for at least `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> Sequence<T> {
        Sequence(Vec::with_capacity(capacity))
    }

    /// Creates a sequence that takes ownership of `items`.
    pub fn from_vec(items: Vec<T>) -> Sequence<T> {
        Sequence(items)
    }

    /// Creates a sequence by copying the elements of `items`.
    pub fn from_slice(items: &[T]) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence(items.to_vec())
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Consumes the sequence and returns the backing `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Appends an element to the end of the sequence.
    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    /// Identity comparison: `true` iff `self` and `other` are the same
    /// sequence instance. This is NOT value equality; use
    /// [`eq_values`](Sequence::eq_values) for that.
    pub fn ptr_eq(&self, other: &Sequence<T>) -> bool {
        std::ptr::eq(self, other)
    }

    /// Value-based comparison: same length and equal elements at every
    /// index, in order. Identity ([`ptr_eq`](Sequence::ptr_eq))
    /// short-circuits to `true`.
    pub fn eq_values(&self, other: &Sequence<T>) -> bool
    where
        T: PartialEq,
    {
        self.ptr_eq(other) || self.0 == other.0
    }

    /// Value-based comparison under a key selector: same length and equal
    /// selected keys at every index, in order.
    pub fn eq_values_by<K, S>(&self, other: &Sequence<T>, mut selector: S) -> bool
    where
        K: PartialEq,
        S: FnMut(&T) -> K,
    {
        if self.ptr_eq(other) {
            return true;
        }
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(other.0.iter())
                .all(|(a, b)| selector(a) == selector(b))
    }

    /// Reverses the order of the sequence's own backing store and returns
    /// the sequence for chaining.
    pub fn reverse(mut self) -> Sequence<T> {
        self.0.reverse();
        self
    }

    /// Returns a new sequence holding the elements of `self` followed by the
    /// elements of `items`.
    ///
    /// `items` may be a slice, an array (a one-element array for the
    /// single-item case), a `Vec` or another `Sequence`.
    pub fn concat(&self, items: impl AsRef<[T]>) -> Sequence<T>
    where
        T: Clone,
    {
        let mut combined = self.0.clone();
        combined.extend_from_slice(items.as_ref());
        Sequence(combined)
    }

    /// Returns a new sequence copied from the given sub-range. Bounds beyond
    /// the sequence length are clamped, never an error.
    pub fn slice(&self, range: impl std::ops::RangeBounds<usize>) -> Sequence<T>
    where
        T: Clone,
    {
        let (start, end) = self.clamp_range(range);
        Sequence(self.0[start..end].to_vec())
    }

    /// Removes the given sub-range from the receiver in place, inserting
    /// `replacement` in its position, and returns the removed elements.
    /// Bounds beyond the sequence length are clamped.
    pub fn splice(
        &mut self,
        range: impl std::ops::RangeBounds<usize>,
        replacement: Vec<T>,
    ) -> Sequence<T> {
        let (start, end) = self.clamp_range(range);
        Sequence(self.0.splice(start..end, replacement).collect())
    }

    /// Maps each element through `f` into a new sequence. Alias for
    /// [`select`](Sequence::select) with the standard library's name, so
    /// chains read naturally in either style.
    pub fn map<K, S>(&self, f: S) -> Sequence<K>
    where
        S: FnMut(&T) -> K,
    {
        self.select(f)
    }

    /// Keeps the elements matching `predicate`. Alias for
    /// [`where_by`](Sequence::where_by) with the standard library's name.
    pub fn filter<P>(&self, predicate: P) -> Sequence<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.where_by(predicate)
    }

    /// Returns the first element matching `predicate`, or `None`. The
    /// no-predicate form is `first()` from the slice surface.
    pub fn first_where<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.0.iter().find(|&x| predicate(x))
    }

    /// Returns the last element matching `predicate`, or `None`.
    pub fn last_where<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.0.iter().rev().find(|&x| predicate(x))
    }

    /// Strict single-element accessor: returns the only element of the
    /// sequence, `NotFound` if it is empty, `AmbiguousMatch` if it holds
    /// more than one element.
    pub fn single(&self) -> Result<&T> {
        match self.0.len() {
            0 => Err(sequin_common::error::Error::not_found("single")),
            1 => Ok(&self.0[0]),
            count => Err(sequin_common::error::Error::ambiguous_match("single", count)),
        }
    }

    /// Strict single-element accessor under a predicate: exactly one element
    /// must match.
    pub fn single_where<P>(&self, mut predicate: P) -> Result<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut matches = self.0.iter().filter(|&x| predicate(x));
        let first = matches
            .next()
            .ok_or_else(|| sequin_common::error::Error::not_found("single_where"))?;
        match matches.count() {
            0 => Ok(first),
            rest => Err(sequin_common::error::Error::ambiguous_match(
                "single_where",
                rest + 1,
            )),
        }
    }

    /// Counts the elements matching `predicate`. The unconditional count is
    /// `len()` from the slice surface.
    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.0.iter().filter(|&x| predicate(x)).count()
    }

    /// Returns `true` if any element matches `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.0.iter().any(predicate)
    }

    /// Returns `true` if every element matches `predicate`.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.0.iter().all(predicate)
    }

    /// Projects the elements at the given indices, in the given order.
    /// Duplicate indices are allowed; an out-of-bounds index is an
    /// `InvalidArgument` error.
    pub fn elements_at(&self, indices: &[usize]) -> Result<Sequence<T>>
    where
        T: Clone,
    {
        let mut items = Vec::with_capacity(indices.len());
        for &index in indices {
            verify_arg!(index, index < self.0.len());
            items.push(self.0[index].clone());
        }
        Ok(Sequence(items))
    }

    fn clamp_range(&self, range: impl std::ops::RangeBounds<usize>) -> (usize, usize) {
        use std::ops::Bound;
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.0.len(),
        };
        let start = start.min(self.0.len());
        let end = end.min(self.0.len()).max(start);
        (start, end)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Sequence<T> {
        Sequence::new()
    }
}

impl<T> std::ops::Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> std::ops::DerefMut for Sequence<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Sequence<T> {
        Sequence(items)
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Sequence<T> {
        Sequence(items.to_vec())
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Sequence<T> {
        Sequence(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
