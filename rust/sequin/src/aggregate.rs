//! Decimal-precise numeric aggregation.
//!
//! All reductions in this module accumulate and compare in 128-bit decimal
//! floating point ([`d128`]) rather than in native binary floats. Summing a
//! long run of values like `0.1` in an `f64` accumulator picks up binary
//! round-off; accumulating in decimal keeps such sums exact. The
//! [`ToDecimal`] trait is the conversion seam between element (or
//! selector-derived) values and the decimal domain.

use amudai_decimal::d128;
use sequin_common::{Result, error::Error};

use crate::sequence::Sequence;

/// Conversion of a numeric value into the 128-bit decimal domain used by
/// the aggregation methods.
pub trait ToDecimal {
    /// Returns the decimal rendering of this value.
    fn to_decimal(&self) -> d128;
}

macro_rules! impl_to_decimal {
    ($($t:ty => $via:ty),* $(,)?) => {
        $(
            impl ToDecimal for $t {
                fn to_decimal(&self) -> d128 {
                    d128::from(*self as $via)
                }
            }
        )*
    };
}

impl_to_decimal!(
    i8 => i32,
    i16 => i32,
    i32 => i32,
    i64 => i64,
    isize => i64,
    u8 => u32,
    u16 => u32,
    u32 => u32,
    u64 => u64,
    usize => u64,
    f32 => f32,
    f64 => f64,
);

impl ToDecimal for d128 {
    fn to_decimal(&self) -> d128 {
        *self
    }
}

impl<T> Sequence<T> {
    /// Sums the elements, accumulating in decimal. An empty sequence sums
    /// to zero.
    pub fn sum(&self) -> d128
    where
        T: ToDecimal,
    {
        self.0
            .iter()
            .fold(d128::zero(), |acc, x| acc + x.to_decimal())
    }

    /// Sums the selector-derived values, accumulating in decimal.
    pub fn sum_by<K, S>(&self, mut selector: S) -> d128
    where
        K: ToDecimal,
        S: FnMut(&T) -> K,
    {
        self.0
            .iter()
            .fold(d128::zero(), |acc, x| acc + selector(x).to_decimal())
    }

    /// Arithmetic mean of the elements: precise sum divided by count.
    ///
    /// Averaging an empty sequence is a `DivisionByZero` error.
    pub fn average(&self) -> Result<d128>
    where
        T: ToDecimal,
    {
        if self.0.is_empty() {
            return Err(Error::division_by_zero("average"));
        }
        Ok(self.sum() / d128::from(self.0.len() as u64))
    }

    /// Arithmetic mean of the selector-derived values.
    pub fn average_by<K, S>(&self, selector: S) -> Result<d128>
    where
        K: ToDecimal,
        S: FnMut(&T) -> K,
    {
        if self.0.is_empty() {
            return Err(Error::division_by_zero("average_by"));
        }
        Ok(self.sum_by(selector) / d128::from(self.0.len() as u64))
    }

    /// Restricts the sequence with `predicate` first, then averages the
    /// remaining elements. An empty-after-filter sequence is a
    /// `DivisionByZero` error.
    pub fn average_where<P>(&self, predicate: P) -> Result<d128>
    where
        T: Clone + ToDecimal,
        P: FnMut(&T) -> bool,
    {
        self.where_by(predicate).average()
    }

    /// Restricts the sequence with `predicate` first, then averages the
    /// selector-derived values of the remaining elements.
    pub fn average_where_by<K, S, P>(&self, predicate: P, selector: S) -> Result<d128>
    where
        T: Clone,
        K: ToDecimal,
        S: FnMut(&T) -> K,
        P: FnMut(&T) -> bool,
    {
        self.where_by(predicate).average_by(selector)
    }

    /// Returns the subset of elements whose value equals the maximum; ties
    /// are all included, in source order. NaN values never participate in
    /// the extremum.
    pub fn max(&self) -> Sequence<T>
    where
        T: Clone + ToDecimal,
    {
        self.max_by(|x| x.to_decimal())
    }

    /// Returns the subset of elements whose selector-derived value equals
    /// the maximum.
    pub fn max_by<K, S>(&self, mut selector: S) -> Sequence<T>
    where
        T: Clone,
        K: ToDecimal,
        S: FnMut(&T) -> K,
    {
        self.where_in_select_with(
            |x| selector(x).to_decimal(),
            |keys, _| extremum(keys, Direction::Max),
            |key, _, _, max| matches!(max, Some(m) if key == m),
        )
    }

    /// Returns the subset of elements whose value equals the minimum; ties
    /// are all included, in source order.
    pub fn min(&self) -> Sequence<T>
    where
        T: Clone + ToDecimal,
    {
        self.min_by(|x| x.to_decimal())
    }

    /// Returns the subset of elements whose selector-derived value equals
    /// the minimum.
    pub fn min_by<K, S>(&self, mut selector: S) -> Sequence<T>
    where
        T: Clone,
        K: ToDecimal,
        S: FnMut(&T) -> K,
    {
        self.where_in_select_with(
            |x| selector(x).to_decimal(),
            |keys, _| extremum(keys, Direction::Min),
            |key, _, _, min| matches!(min, Some(m) if key == m),
        )
    }

    /// Returns the bare maximum value, or `None` on an empty sequence (or
    /// when every value is NaN).
    pub fn max_value(&self) -> Option<d128>
    where
        T: ToDecimal,
    {
        self.max_value_by(|x| x.to_decimal())
    }

    /// Returns the bare maximum of the selector-derived values.
    pub fn max_value_by<K, S>(&self, mut selector: S) -> Option<d128>
    where
        K: ToDecimal,
        S: FnMut(&T) -> K,
    {
        extremum(&self.select(|x| selector(x).to_decimal()), Direction::Max)
    }

    /// Returns the bare minimum value, or `None` on an empty sequence.
    pub fn min_value(&self) -> Option<d128>
    where
        T: ToDecimal,
    {
        self.min_value_by(|x| x.to_decimal())
    }

    /// Returns the bare minimum of the selector-derived values.
    pub fn min_value_by<K, S>(&self, mut selector: S) -> Option<d128>
    where
        K: ToDecimal,
        S: FnMut(&T) -> K,
    {
        extremum(&self.select(|x| selector(x).to_decimal()), Direction::Min)
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Min,
    Max,
}

/// Folds a decimal key sequence to its extremum, skipping NaN keys.
fn extremum(keys: &Sequence<d128>, direction: Direction) -> Option<d128> {
    let mut best: Option<d128> = None;
    for key in keys.iter() {
        if key.is_nan() {
            continue;
        }
        match best {
            Some(current) => {
                let replace = match direction {
                    Direction::Max => *key > current,
                    Direction::Min => *key < current,
                };
                if replace {
                    best = Some(*key);
                }
            }
            None => best = Some(*key),
        }
    }
    best
}
