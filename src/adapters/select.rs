use crate::enumerator::Enumerator;

/// Maps each element of its parent through `func`.
///
/// The mapped value is computed on the first [`current`](Enumerator::current)
/// after each position change and cached until the next
/// [`advance`](Enumerator::advance), so `func` runs at most once per position
/// and never for positions that are skipped over unread.
#[derive(Debug)]
pub struct Select<E, F, U> {
    parent: E,
    func: F,
    cached: Option<U>,
}

impl<E, F, U> Select<E, F, U> {
    pub(crate) fn new(parent: E, func: F) -> Self {
        Self {
            parent,
            func,
            cached: None,
        }
    }
}

impl<E, F, U> Enumerator for Select<E, F, U>
where
    E: Enumerator,
    F: FnMut(&E::Item) -> U,
{
    type Item = U;

    fn current(&mut self) -> &U {
        let Self {
            parent,
            func,
            cached,
        } = self;
        cached.get_or_insert_with(|| func(parent.current()))
    }

    fn advance(&mut self) {
        self.parent.advance();
        self.cached = None;
    }

    fn has_value(&mut self) -> bool {
        self.parent.has_value()
    }
}
