use crate::{enumerator::Enumerator, error::exhausted, predicate::Predicate};

/// Ends the sequence right before the first element matching `predicate`.
///
/// The predicate is evaluated lazily from [`has_value`](Enumerator::has_value),
/// at most once per position.
#[derive(Debug)]
pub struct Until<E, P> {
    parent: E,
    predicate: P,
    // `Some(true)` while the current position is before the cutoff.
    verdict: Option<bool>,
}

impl<E, P> Until<E, P> {
    pub(crate) fn new(parent: E, predicate: P) -> Self {
        Self {
            parent,
            predicate,
            verdict: None,
        }
    }
}

impl<E, P> Enumerator for Until<E, P>
where
    E: Enumerator,
    P: Predicate<E::Item>,
{
    type Item = E::Item;

    fn current(&mut self) -> &Self::Item {
        self.parent.current()
    }

    #[track_caller]
    fn advance(&mut self) {
        if self.verdict == Some(false) {
            exhausted();
        }
        self.parent.advance();
        self.verdict = None;
    }

    fn has_value(&mut self) -> bool {
        if !self.parent.has_value() {
            return false;
        }
        let Self {
            parent,
            predicate,
            verdict,
        } = self;
        *verdict.get_or_insert_with(|| !predicate.test(parent.current()))
    }
}
