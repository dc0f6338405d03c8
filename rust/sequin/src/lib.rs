//! Fluent query operations over in-memory ordered sequences.
//!
//! This crate provides [`Sequence<T>`], an ordered, index-addressable
//! container wrapping a `Vec<T>` that exposes a chainable, LINQ-inspired
//! query surface: filtering, projection, grouping, set algebra, ordering and
//! numeric aggregation. Every operation materializes eagerly into a new
//! `Sequence`, so chains compose without deferred state:
//!
//! ```
//! use sequin::Sequence;
//!
//! let seq = Sequence::from(vec![4, 2, 1, 5, 8, -1]);
//! let result = seq
//!     .where_by(|x| *x > 0)
//!     .select(|x| x * 10)
//!     .order_by_ascending();
//! assert_eq!(result.as_slice(), &[10, 20, 40, 50, 80]);
//! ```
//!
//! # Core Concepts
//!
//! ## Eager, non-mutating transformations
//!
//! Transformation methods take `&self` and build a fresh `Sequence`. The
//! exceptions reorder or edit the receiver's own backing store and are
//! documented as such: [`Sequence::reverse`], [`Sequence::order_by_ascending`]
//! and [`Sequence::order_by_descending`] consume `self` and return it after
//! reordering in place, and [`Sequence::splice`] edits through `&mut self`.
//!
//! ## Selector method pairs
//!
//! Operations that accept an optional key selector follow the standard
//! library's `sort` / `sort_by_key` convention: `op()` uses the element value
//! itself (with the trait bound on `T`), and `op_by(selector)` derives a key
//! per element. The ordering methods name their selector forms `_key`
//! ([`Sequence::order_by_ascending_key`]), mirroring `sort_by_key` rather
//! than doubling up on "by". The selector only ever receives a shared
//! reference to the element; it never gets mutable access into the backing
//! store.
//!
//! ## Decimal-precise aggregation
//!
//! [`Sequence::sum`], [`Sequence::average`], [`Sequence::max`] and
//! [`Sequence::min`] accumulate and compare in 128-bit decimal floating point
//! ([`d128`]) rather than in native binary floats. The [`ToDecimal`] trait is
//! the conversion seam; it is implemented for the primitive integer and float
//! types and for `d128` itself.
//!
//! ## Array-like surface
//!
//! `Sequence<T>` dereferences to `[T]`, so indexed access (`seq[i]`),
//! `len()`, `iter()`, `first()`, `last()` and `contains()` come from the
//! slice type, matching the native-array idiom the query methods extend.

pub mod aggregate;
pub mod group;
pub mod query;
pub mod sequence;
pub mod set_ops;

pub use aggregate::ToDecimal;
pub use amudai_decimal::d128;
pub use group::Group;
pub use sequence::Sequence;
