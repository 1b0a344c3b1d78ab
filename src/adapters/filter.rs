use crate::{enumerator::Enumerator, predicate::Predicate};

/// Yields only the elements of its parent that match `predicate`.
///
/// The parent is kept parked on a matching element (or exhausted) from
/// construction on, so every exposed position satisfies the predicate.
#[derive(Debug)]
pub struct Where<E, P> {
    parent: E,
    predicate: P,
}

impl<E, P> Where<E, P>
where
    E: Enumerator,
    P: Predicate<E::Item>,
{
    pub(crate) fn new(mut parent: E, mut predicate: P) -> Self {
        skip_rejected(&mut parent, &mut predicate);
        Self { parent, predicate }
    }
}

fn skip_rejected<E, P>(parent: &mut E, predicate: &mut P)
where
    E: Enumerator,
    P: Predicate<E::Item>,
{
    while parent.has_value() && !predicate.test(parent.current()) {
        parent.advance();
    }
}

impl<E, P> Enumerator for Where<E, P>
where
    E: Enumerator,
    P: Predicate<E::Item>,
{
    type Item = E::Item;

    fn current(&mut self) -> &Self::Item {
        self.parent.current()
    }

    fn advance(&mut self) {
        self.parent.advance();
        skip_rejected(&mut self.parent, &mut self.predicate);
    }

    fn has_value(&mut self) -> bool {
        self.parent.has_value()
    }
}
