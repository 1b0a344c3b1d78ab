use std::iter::FusedIterator;

use crate::{
    adapters::{Select, Skip, Take, Until, Where},
    error::{EnumeratorError, Result},
    predicate::{EqualTo, NotEqualTo},
};

/// A stateful cursor over a lazy sequence.
///
/// Consumers alternate between [`has_value`](Enumerator::has_value),
/// [`current`](Enumerator::current) and [`advance`](Enumerator::advance).
/// Reading or advancing once `has_value` reports `false` is a contract
/// violation and panics. An enumerator is never restartable.
///
/// Combinators take the enumerator by value. Use
/// [`by_ref`](Enumerator::by_ref) to build a chain on top of a borrowed
/// enumerator that remains usable once the chain is gone.
pub trait Enumerator {
    type Item;

    /// The element at the current position.
    fn current(&mut self) -> &Self::Item;

    /// Moves to the next position.
    fn advance(&mut self);

    /// Whether [`current`](Enumerator::current) may be called.
    fn has_value(&mut self) -> bool;

    /// Advances and returns the enumerator for further calls.
    fn step(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.advance();
        self
    }

    fn try_current(&mut self) -> Result<&Self::Item> {
        if self.has_value() {
            Ok(self.current())
        } else {
            Err(EnumeratorError::Exhausted)
        }
    }

    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Bounds the sequence to at most `count` elements.
    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    /// Like [`take`](Enumerator::take), rejecting negative counts.
    fn try_take(self, count: i64) -> Result<Take<Self>>
    where
        Self: Sized,
    {
        let count = EnumeratorError::check_count("take", count)?;
        Ok(Take::new(self, count))
    }

    /// Skips the first `count` elements right away.
    fn drop(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Like [`drop`](Enumerator::drop), rejecting negative counts.
    fn try_drop(self, count: i64) -> Result<Skip<Self>>
    where
        Self: Sized,
    {
        let count = EnumeratorError::check_count("drop", count)?;
        Ok(Skip::new(self, count))
    }

    /// Maps each element through `func`, at most once per position.
    fn select<U, F>(self, func: F) -> Select<Self, F, U>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> U,
    {
        Select::new(self, func)
    }

    /// Ends the sequence before the first element matching `predicate`.
    fn until<F>(self, predicate: F) -> Until<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        Until::new(self, predicate)
    }

    /// Keeps only the elements matching `predicate`.
    fn where_<F>(self, predicate: F) -> Where<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        Where::new(self, predicate)
    }

    fn until_eq(self, value: Self::Item) -> Until<Self, EqualTo<Self::Item>>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        Until::new(self, EqualTo::new(value))
    }

    fn where_neq(self, value: Self::Item) -> Where<Self, NotEqualTo<Self::Item>>
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        Where::new(self, NotEqualTo::new(value))
    }

    /// Drains the enumerator into a vector, in yield order.
    fn to_vec(mut self) -> Vec<Self::Item>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        let mut result = Vec::new();
        while self.has_value() {
            result.push(self.current().clone());
            self.advance();
        }
        tracing::trace!(len = result.len(), "collected enumerator");
        result
    }

    fn collect<C>(self) -> C
    where
        Self: Sized,
        Self::Item: Clone,
        C: FromIterator<Self::Item>,
    {
        self.cloned().collect()
    }

    /// Writes every remaining element into `sink`, one at a time.
    fn copy_to<C>(mut self, sink: &mut C)
    where
        Self: Sized,
        Self::Item: Clone,
        C: Extend<Self::Item>,
    {
        let mut copied = 0usize;
        while self.has_value() {
            sink.extend(std::iter::once(self.current().clone()));
            self.advance();
            copied += 1;
        }
        tracing::trace!(copied, "copied enumerator into sink");
    }

    /// A std [`Iterator`] yielding clones of the remaining elements.
    fn cloned(self) -> Cloned<Self>
    where
        Self: Sized,
    {
        Cloned { inner: self }
    }

    /// Erases the chain type, for chains assembled at run time.
    fn boxed<'a>(self) -> Box<dyn Enumerator<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<E> Enumerator for &mut E
where
    E: Enumerator + ?Sized,
{
    type Item = E::Item;

    fn current(&mut self) -> &Self::Item {
        (**self).current()
    }

    fn advance(&mut self) {
        (**self).advance()
    }

    fn has_value(&mut self) -> bool {
        (**self).has_value()
    }
}

impl<E> Enumerator for Box<E>
where
    E: Enumerator + ?Sized,
{
    type Item = E::Item;

    fn current(&mut self) -> &Self::Item {
        (**self).current()
    }

    fn advance(&mut self) {
        (**self).advance()
    }

    fn has_value(&mut self) -> bool {
        (**self).has_value()
    }
}

#[derive(Debug)]
pub struct Cloned<E> {
    inner: E,
}

impl<E> Iterator for Cloned<E>
where
    E: Enumerator,
    E::Item: Clone,
{
    type Item = E::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.inner.has_value() {
            return None;
        }
        let item = self.inner.current().clone();
        self.inner.advance();
        Some(item)
    }
}

impl<E> FusedIterator for Cloned<E>
where
    E: Enumerator,
    E::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use crate::{from, from_values, Enumerator, EnumeratorError};

    #[test]
    fn manual_cursor_protocol() {
        let source = [1, 2, 3];
        let mut e = from(&source);
        assert!(e.has_value());
        assert_eq!(*e.current(), 1);
        assert_eq!(*e.step().current(), 2);
        e.step().advance();
        assert!(!e.has_value());
    }

    #[test]
    fn try_current_reports_exhaustion() -> anyhow::Result<()> {
        let source = [7];
        let mut e = from(&source);
        assert_eq!(*e.try_current()?, 7);
        e.advance();
        assert_eq!(e.try_current(), Err(EnumeratorError::Exhausted));
        Ok(())
    }

    #[test]
    fn by_ref_leaves_source_usable() {
        let source = [1, 2, 3, 4, 5];
        let mut e = from(&source);
        assert_eq!(e.by_ref().take(2).to_vec(), vec![1, 2]);
        assert_eq!(e.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn copy_to_appends_in_order() {
        let source = [3, 1, 2];
        let mut sink = VecDeque::from([0]);
        from(&source).copy_to(&mut sink);
        assert_eq!(sink, VecDeque::from([0, 3, 1, 2]));

        let mut text = String::from(">");
        from_values("abc".chars()).copy_to(&mut text);
        assert_eq!(text, ">abc");
    }

    #[test]
    fn collect_into_any_container() {
        let source = [3, 1, 3, 2];
        let set: BTreeSet<i32> = from(&source).collect();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn cloned_bridges_to_std_iterators() {
        let source = [1, 2, 3, 4];
        let sum: i32 = from(&source).where_(|x| x % 2 == 0).cloned().sum();
        assert_eq!(sum, 6);

        let mut iter = from(&source).take(1).cloned();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn boxed_chains_share_a_type() {
        let source: &'static [i32] = &[1, 2, 3, 4, 5, 6];
        let chains: Vec<Box<dyn Enumerator<Item = i32>>> = vec![
            from(source).take(2).boxed(),
            from(source).where_(|x| x % 3 == 0).boxed(),
            from(source).drop(4).boxed(),
        ];
        let results: Vec<Vec<i32>> = chains.into_iter().map(|chain| chain.to_vec()).collect();
        assert_eq!(results, vec![vec![1, 2], vec![3, 6], vec![5, 6]]);
    }

    #[test]
    fn negative_counts_are_rejected() -> anyhow::Result<()> {
        let source = [1, 2, 3];
        assert!(matches!(
            from(&source).try_take(-1),
            Err(EnumeratorError::NegativeCount {
                operation: "take",
                count: -1
            })
        ));
        assert!(matches!(
            from(&source).try_drop(-2),
            Err(EnumeratorError::NegativeCount {
                operation: "drop",
                count: -2
            })
        ));
        assert_eq!(from(&source).try_take(0)?.to_vec(), Vec::<i32>::new());
        assert_eq!(from(&source).try_drop(1)?.try_take(5)?.to_vec(), vec![2, 3]);
        Ok(())
    }
}
