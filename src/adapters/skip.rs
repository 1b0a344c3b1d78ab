use tracing::trace;

use crate::enumerator::Enumerator;

/// Skips a prefix of its parent when constructed, then passes everything
/// through.
#[derive(Debug)]
pub struct Skip<E> {
    parent: E,
}

impl<E> Skip<E>
where
    E: Enumerator,
{
    pub(crate) fn new(mut parent: E, count: usize) -> Self {
        let mut skipped = 0;
        while skipped < count && parent.has_value() {
            parent.advance();
            skipped += 1;
        }
        if skipped < count {
            trace!(requested = count, skipped, "source ran out while dropping");
        }
        Self { parent }
    }
}

impl<E> Enumerator for Skip<E>
where
    E: Enumerator,
{
    type Item = E::Item;

    fn current(&mut self) -> &Self::Item {
        self.parent.current()
    }

    fn advance(&mut self) {
        self.parent.advance()
    }

    fn has_value(&mut self) -> bool {
        self.parent.has_value()
    }
}
