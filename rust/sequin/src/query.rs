//! Filtering, projection, distinctness and ordering operations.
//!
//! The projected-filter family ([`Sequence::where_in_select`] and
//! [`Sequence::where_in_select_with`]) is the workhorse behind several other
//! operations: the filter decision is made against a fully materialized
//! projection of the sequence (and, in the `_with` form, against a single
//! accumulator value reduced from that projection), while the elements kept
//! in the result are always the original ones.

use std::cmp::Ordering;

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Keeps the elements for which `predicate` returns `true`, in order.
    pub fn where_by<P>(&self, mut predicate: P) -> Sequence<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        Sequence(self.0.iter().filter(|&x| predicate(x)).cloned().collect())
    }

    /// Filters based on a derived projection rather than the raw element:
    /// the full projected sequence is computed once, then element `i` is
    /// kept iff `predicate(&projected[i], i, &projected)` holds. The result
    /// holds the original elements.
    pub fn where_in_select<K, S, P>(&self, selector: S, mut predicate: P) -> Sequence<T>
    where
        T: Clone,
        S: FnMut(&T) -> K,
        P: FnMut(&K, usize, &Sequence<K>) -> bool,
    {
        let projected = self.select(selector);
        Sequence(
            self.0
                .iter()
                .enumerate()
                .filter(|&(i, _)| predicate(&projected.0[i], i, &projected))
                .map(|(_, x)| x.clone())
                .collect(),
        )
    }

    /// Like [`where_in_select`](Sequence::where_in_select), but first reduces
    /// the entire projected sequence to a single accumulator value via
    /// `accumulate`, then filters with
    /// `predicate(&projected[i], i, &projected, &accum)`.
    ///
    /// This is the mechanism underlying [`max`](Sequence::max),
    /// [`min`](Sequence::min) and [`of_type`](Sequence::of_type).
    pub fn where_in_select_with<K, A, S, G, P>(
        &self,
        selector: S,
        accumulate: G,
        mut predicate: P,
    ) -> Sequence<T>
    where
        T: Clone,
        S: FnMut(&T) -> K,
        G: FnOnce(&Sequence<K>, &Sequence<T>) -> A,
        P: FnMut(&K, usize, &Sequence<K>, &A) -> bool,
    {
        let projected = self.select(selector);
        let accum = accumulate(&projected, self);
        Sequence(
            self.0
                .iter()
                .enumerate()
                .filter(|&(i, _)| predicate(&projected.0[i], i, &projected, &accum))
                .map(|(_, x)| x.clone())
                .collect(),
        )
    }

    /// Maps each element to a new value, materializing the projected
    /// sequence eagerly.
    pub fn select<K, S>(&self, selector: S) -> Sequence<K>
    where
        S: FnMut(&T) -> K,
    {
        Sequence(self.0.iter().map(selector).collect())
    }

    /// Projects each element to a sub-sequence and flattens one level by
    /// plain concatenation, in order. Duplicates are kept.
    pub fn select_many<K, I, S>(&self, mut selector: S) -> Sequence<K>
    where
        I: IntoIterator<Item = K>,
        S: FnMut(&T) -> I,
    {
        Sequence(self.0.iter().flat_map(|x| selector(x)).collect())
    }

    /// Returns the first `count` elements. A count beyond the sequence
    /// length saturates and returns everything.
    pub fn take(&self, count: usize) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence(self.0[..count.min(self.0.len())].to_vec())
    }

    /// Returns the elements after the first `count`. A count beyond the
    /// sequence length saturates and returns an empty sequence.
    pub fn skip(&self, count: usize) -> Sequence<T>
    where
        T: Clone,
    {
        Sequence(self.0[count.min(self.0.len())..].to_vec())
    }

    /// Keeps the original elements for which `probe` yields `Some`.
    pub fn not_null_by<K, S>(&self, mut probe: S) -> Sequence<T>
    where
        T: Clone,
        S: FnMut(&T) -> Option<K>,
    {
        self.where_by(|x| probe(x).is_some())
    }

    /// Drops the elements equal to the type's default value (`0`, the empty
    /// string, and so on).
    pub fn not_empty(&self) -> Sequence<T>
    where
        T: Clone + Default + PartialEq,
    {
        let empty = T::default();
        self.where_by(|x| *x != empty)
    }

    /// Keeps the original elements whose probed value differs from that
    /// value type's default.
    pub fn not_empty_by<K, S>(&self, mut probe: S) -> Sequence<T>
    where
        T: Clone,
        K: Default + PartialEq,
        S: FnMut(&T) -> K,
    {
        let empty = K::default();
        self.where_by(|x| probe(x) != empty)
    }

    /// Returns the indices at which `predicate` holds, in ascending order.
    pub fn indices_where<P>(&self, mut predicate: P) -> Sequence<usize>
    where
        P: FnMut(&T) -> bool,
    {
        Sequence(
            self.0
                .iter()
                .enumerate()
                .filter(|&(_, x)| predicate(x))
                .map(|(i, _)| i)
                .collect(),
        )
    }

    /// Keeps only the first occurrence of each value, in encounter order.
    pub fn distinct(&self) -> Sequence<T>
    where
        T: Clone + PartialEq,
    {
        let mut seen: Vec<T> = Vec::new();
        for item in &self.0 {
            if !seen.contains(item) {
                seen.push(item.clone());
            }
        }
        Sequence(seen)
    }

    /// Keeps only the first occurrence of each selector-derived key, in
    /// encounter order. The result holds the original elements.
    pub fn distinct_by<K, S>(&self, selector: S) -> Sequence<T>
    where
        T: Clone,
        K: PartialEq,
        S: FnMut(&T) -> K,
    {
        self.where_in_select(selector, |key, i, keys| {
            keys.0.iter().position(|k| k == key) == Some(i)
        })
    }

    /// Stable-sorts the sequence's own backing store in ascending element
    /// order and returns the sequence for chaining. Ties keep their
    /// original relative order.
    pub fn order_by_ascending(mut self) -> Sequence<T>
    where
        T: PartialOrd,
    {
        self.0.sort_by(|a, b| three_way(a, b));
        self
    }

    /// Stable-sorts in ascending order of the selector-derived key.
    pub fn order_by_ascending_key<K, S>(mut self, mut selector: S) -> Sequence<T>
    where
        K: PartialOrd,
        S: FnMut(&T) -> K,
    {
        self.0.sort_by(|a, b| three_way(&selector(a), &selector(b)));
        self
    }

    /// Stable-sorts the sequence's own backing store in descending element
    /// order and returns the sequence for chaining.
    pub fn order_by_descending(mut self) -> Sequence<T>
    where
        T: PartialOrd,
    {
        self.0.sort_by(|a, b| three_way(b, a));
        self
    }

    /// Stable-sorts in descending order of the selector-derived key.
    pub fn order_by_descending_key<K, S>(mut self, mut selector: S) -> Sequence<T>
    where
        K: PartialOrd,
        S: FnMut(&T) -> K,
    {
        self.0.sort_by(|a, b| three_way(&selector(b), &selector(a)));
        self
    }
}

impl<T: Clone> Sequence<Option<T>> {
    /// Drops the `None` elements and unwraps the rest.
    pub fn not_null(&self) -> Sequence<T> {
        self.0.iter().filter_map(|x| x.clone()).collect()
    }
}

/// Three-way comparison producing a total order over a `PartialOrd` key
/// space. Comparable pairs order by `partial_cmp`; keys that are not equal
/// to themselves (NaN) compare equal to each other and greater than every
/// comparable key, so an ascending sort gathers them at the end.
fn three_way<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => match (a.partial_cmp(a).is_none(), b.partial_cmp(b).is_none()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_where_by() {
        let seq = Sequence::from(vec![4, 2, 1, 5, 8, -1]);
        let even = seq.where_by(|x| x % 2 == 0);
        assert_eq!(even.as_slice(), &[4, 2, 8]);
        assert!(even.len() <= seq.len());
        assert!(even.iter().all(|x| x % 2 == 0));
    }

    #[test]
    fn test_where_in_select() {
        let seq = Sequence::from(vec!["a", "bb", "ccc", "dd"]);
        let kept = seq.where_in_select(|s| s.len(), |len, _, _| *len >= 2);
        assert_eq!(kept.as_slice(), &["bb", "ccc", "dd"]);

        // the predicate sees the whole projected sequence
        let kept = seq.where_in_select(|s| s.len(), |len, _, lens| {
            lens.iter().filter(|l| *l == len).count() == 1
        });
        assert_eq!(kept.as_slice(), &["a", "ccc"]);
    }

    #[test]
    fn test_where_in_select_with() {
        let seq = Sequence::from(vec![3, 7, 2, 7, 5]);
        // running-maximum accumulator, as used by max()
        let at_max = seq.where_in_select_with(
            |x| *x,
            |keys, _| keys.iter().copied().max().unwrap_or(0),
            |key, _, _, max| key == max,
        );
        assert_eq!(at_max.as_slice(), &[7, 7]);
    }

    #[test]
    fn test_select_composition() {
        let seq = Sequence::from(vec![1, 2, 3]);
        let two_step = seq.select(|x| x + 1).select(|x| x * 2);
        let one_step = seq.select(|x| (x + 1) * 2);
        assert_eq!(two_step, one_step);
    }

    #[test]
    fn test_select_many_keeps_duplicates() {
        let seq = Sequence::from(vec![vec![1, 2], vec![2, 3], vec![]]);
        let flat = seq.select_many(|v| v.clone());
        assert_eq!(flat.as_slice(), &[1, 2, 2, 3]);
    }

    #[test]
    fn test_take_skip_saturate() {
        let seq = Sequence::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(seq.take(2).as_slice(), &[1, 2]);
        assert_eq!(seq.take(10).as_slice(), &[1, 2, 3, 4, 5]);
        assert_eq!(seq.skip(3).as_slice(), &[4, 5]);
        assert!(seq.skip(10).is_empty());
        assert_eq!(seq.skip(2).len() + seq.take(2).len(), seq.len());
    }

    #[test]
    fn test_not_null() {
        let seq = Sequence::from(vec![Some(1), None, Some(3), None]);
        assert_eq!(seq.not_null().as_slice(), &[1, 3]);
    }

    #[test]
    fn test_not_null_by_keeps_original() {
        let seq = Sequence::from(vec![1, 2, 3, 4]);
        let kept = seq.not_null_by(|x| if x % 2 == 0 { Some(x * 10) } else { None });
        assert_eq!(kept.as_slice(), &[2, 4]);
    }

    #[test]
    fn test_not_empty() {
        let seq = Sequence::from(vec!["a".to_string(), String::new(), "b".to_string()]);
        assert_eq!(seq.not_empty().len(), 2);

        let nums = Sequence::from(vec![0, 1, 0, 2]);
        assert_eq!(nums.not_empty().as_slice(), &[1, 2]);

        let by_probe = Sequence::from(vec![(1, 0), (2, 5)]);
        assert_eq!(by_probe.not_empty_by(|pair| pair.1).as_slice(), &[(2, 5)]);
    }

    #[test]
    fn test_indices_where() {
        let seq = Sequence::from(vec![5, 0, 7, 0, 9]);
        let indices = seq.indices_where(|x| *x > 0);
        assert_eq!(indices.as_slice(), &[0, 2, 4]);
    }

    #[test]
    fn test_distinct_first_occurrence() {
        let seq = Sequence::from(vec![3, 1, 3, 2, 1]);
        assert_eq!(seq.distinct().as_slice(), &[3, 1, 2]);
        // idempotent
        assert_eq!(seq.distinct().distinct(), seq.distinct());
    }

    #[test]
    fn test_distinct_by() {
        let seq = Sequence::from(vec![(1, "a"), (2, "b"), (1, "c")]);
        let unique = seq.distinct_by(|pair| pair.0);
        assert_eq!(unique.as_slice(), &[(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_order_by_ascending() {
        let seq = Sequence::from(vec![4, 2, 1, 5, 8, -1]);
        assert_eq!(seq.order_by_ascending().as_slice(), &[-1, 1, 2, 4, 5, 8]);
    }

    #[test]
    fn test_order_by_descending() {
        let seq = Sequence::from(vec![4, 2, 1, 5, 8, -1]);
        assert_eq!(seq.order_by_descending().as_slice(), &[8, 5, 4, 2, 1, -1]);
    }

    #[test]
    fn test_ordering_directions_mirror() {
        let seq = Sequence::from(vec![4, 2, 1, 5, 8, -1]);
        let ascending = seq.clone().order_by_ascending();
        let descending = seq.order_by_descending();
        assert_eq!(ascending.reverse(), descending);
    }

    #[test]
    fn test_order_by_key_is_stable() {
        let seq = Sequence::from(vec![(2, "first"), (1, "x"), (2, "second")]);
        let ordered = seq.order_by_ascending_key(|pair| pair.0);
        assert_eq!(
            ordered.as_slice(),
            &[(1, "x"), (2, "first"), (2, "second")]
        );
    }

    #[test]
    fn test_order_with_nan_keys_keeps_all_elements() {
        let seq = Sequence::from(vec![2.0, f64::NAN, 1.0]);
        let ordered = seq.order_by_ascending();
        assert_eq!(ordered.len(), 3);
        assert_eq!(&ordered.as_slice()[..2], &[1.0, 2.0]);
        assert!(ordered.as_slice()[2].is_nan());
    }

    #[test]
    fn test_order_nan_heavy_sequence() {
        // Enough elements to engage the sort's total-order sanity checks.
        let mut state = 0x243f_6a88_85a3_08d3_u64;
        let mut values = Vec::new();
        for i in 0..64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            if i % 4 == 0 {
                values.push(f64::NAN);
            } else {
                values.push((state % 1000) as f64 - 500.0);
            }
        }
        let nan_count = values.iter().filter(|v| v.is_nan()).count();
        assert_eq!(nan_count, 16);

        let ordered = Sequence::from(values.clone()).order_by_ascending();
        assert_eq!(ordered.len(), 64);
        let finite = &ordered.as_slice()[..64 - nan_count];
        assert!(finite.windows(2).all(|w| w[0] <= w[1]));
        assert!(ordered.as_slice()[64 - nan_count..].iter().all(|v| v.is_nan()));

        let descending = Sequence::from(values).order_by_descending();
        assert_eq!(descending.len(), 64);
        let finite = &descending.as_slice()[nan_count..];
        assert!(finite.windows(2).all(|w| w[0] >= w[1]));
    }
}
