//! Sources: the leaf of every enumerator chain.

use std::ops::Deref;

use tracing::trace;

use crate::{enumerator::Enumerator, error::exhausted};

/// An enumerator over the elements borrowed from an existing sequence.
///
/// The wrapped iterator plays the role of the `[begin, end)` pair: the
/// range has a value while `begin` has not reached `end`.
#[derive(Debug)]
pub struct Range<I>
where
    I: Iterator,
{
    iter: I,
    head: Option<I::Item>,
}

impl<I> Range<I>
where
    I: Iterator,
{
    pub fn new(mut iter: I) -> Self {
        let head = iter.next();
        Self { iter, head }
    }
}

// Elements are lent straight out of the source, so `current` derefs the
// stored `&T` instead of handing out a reference to it.
impl<I> Enumerator for Range<I>
where
    I: Iterator,
    I::Item: Deref,
    <I::Item as Deref>::Target: Sized,
{
    type Item = <I::Item as Deref>::Target;

    #[track_caller]
    fn current(&mut self) -> &Self::Item {
        match &self.head {
            Some(item) => item,
            None => exhausted(),
        }
    }

    #[track_caller]
    fn advance(&mut self) {
        if self.head.is_none() {
            exhausted();
        }
        self.head = self.iter.next();
    }

    fn has_value(&mut self) -> bool {
        self.head.is_some()
    }
}

/// An enumerator that owns the values it produces.
#[derive(Debug)]
pub struct Values<I>
where
    I: Iterator,
{
    iter: I,
    head: Option<I::Item>,
}

impl<I> Values<I>
where
    I: Iterator,
{
    pub fn new(mut iter: I) -> Self {
        let head = iter.next();
        Self { iter, head }
    }
}

impl<I> Enumerator for Values<I>
where
    I: Iterator,
{
    type Item = I::Item;

    #[track_caller]
    fn current(&mut self) -> &I::Item {
        match &self.head {
            Some(item) => item,
            None => exhausted(),
        }
    }

    #[track_caller]
    fn advance(&mut self) {
        if self.head.is_none() {
            exhausted();
        }
        self.head = self.iter.next();
    }

    fn has_value(&mut self) -> bool {
        self.head.is_some()
    }
}

/// Starts a chain over any borrowed sequence: slices, `&Vec`, `&VecDeque`,
/// `&BTreeSet`, or a container's `iter()`.
pub fn from<'a, T, C>(source: C) -> Range<C::IntoIter>
where
    T: 'a,
    C: IntoIterator<Item = &'a T>,
{
    Range::new(source.into_iter())
}

/// Starts a chain over `source[begin..end]`.
///
/// # Panics
///
/// Panics if the positions are out of order or out of bounds.
pub fn from_positions<T>(source: &[T], begin: usize, end: usize) -> Range<std::slice::Iter<'_, T>> {
    trace!(begin, end, len = source.len(), "enumerating slice positions");
    Range::new(source[begin..end].iter())
}

/// Starts a chain that owns its values, e.g. `from_values(0..10)`.
pub fn from_values<I>(values: I) -> Values<I::IntoIter>
where
    I: IntoIterator,
{
    Values::new(values.into_iter())
}
