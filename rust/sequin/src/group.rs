//! Grouping of sequence elements by a selector-derived key.

use crate::sequence::Sequence;

/// A group tuple: a key paired with the sub-sequence of elements that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, T> {
    /// The key shared by every member of the group.
    pub key: K,
    /// The members, in source order.
    pub items: Sequence<T>,
}

impl<T> Sequence<T> {
    /// Partitions the elements into groups keyed by `selector`, using `==`
    /// for key identity.
    ///
    /// One group is produced per distinct key, ordered by the first
    /// occurrence of that key in the source sequence; members keep their
    /// source order.
    pub fn group_by<K, S>(&self, selector: S) -> Sequence<Group<K, T>>
    where
        T: Clone,
        K: Clone + PartialEq,
        S: FnMut(&T) -> K,
    {
        self.group_by_cmp(selector, |a, b| a == b)
    }

    /// Partitions the elements into groups keyed by `selector`, with
    /// `key_eq` deciding key identity. This enables grouping by
    /// structural or custom-equal keys, not just `PartialEq` ones.
    ///
    /// The projected key sequence is computed once up front; each key not
    /// yet seen then materializes its full member sub-sequence in a single
    /// pass over the projection.
    pub fn group_by_cmp<K, S, C>(&self, selector: S, mut key_eq: C) -> Sequence<Group<K, T>>
    where
        T: Clone,
        K: Clone,
        S: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> bool,
    {
        let keys = self.select(selector);
        let mut groups: Vec<Group<K, T>> = Vec::new();
        for key in keys.iter() {
            if groups.iter().any(|group| key_eq(&group.key, key)) {
                continue;
            }
            let items: Sequence<T> = self
                .0
                .iter()
                .zip(keys.iter())
                .filter(|&(_, k)| key_eq(k, key))
                .map(|(x, _)| x.clone())
                .collect();
            groups.push(Group {
                key: key.clone(),
                items,
            });
        }
        Sequence::from_vec(groups)
    }
}
