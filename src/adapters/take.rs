use crate::{enumerator::Enumerator, error::exhausted};

/// Yields at most `remaining` elements of its parent.
///
/// Every advance is forwarded, including the one that uses up the count, so
/// a borrowed parent resumes right after the last element taken.
#[derive(Debug)]
pub struct Take<E> {
    parent: E,
    remaining: usize,
}

impl<E> Take<E> {
    pub(crate) fn new(parent: E, remaining: usize) -> Self {
        Self { parent, remaining }
    }
}

impl<E> Enumerator for Take<E>
where
    E: Enumerator,
{
    type Item = E::Item;

    #[track_caller]
    fn current(&mut self) -> &Self::Item {
        if self.remaining == 0 {
            exhausted();
        }
        self.parent.current()
    }

    #[track_caller]
    fn advance(&mut self) {
        if self.remaining == 0 {
            exhausted();
        }
        self.remaining -= 1;
        self.parent.advance();
    }

    fn has_value(&mut self) -> bool {
        self.remaining > 0 && self.parent.has_value()
    }
}
