//! Predicates accepted by [`Until`](crate::adapters::Until) and
//! [`Where`](crate::adapters::Where).

/// A test applied to one element at a time.
///
/// Every `FnMut(&T) -> bool` is a predicate. [`EqualTo`] and [`NotEqualTo`]
/// back the `until_eq` and `where_neq` shorthands.
pub trait Predicate<T>
where
    T: ?Sized,
{
    fn test(&mut self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    T: ?Sized,
    F: FnMut(&T) -> bool,
{
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

#[derive(Debug, Clone)]
pub struct EqualTo<T>(T);

impl<T> EqualTo<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }
}

impl<T> Predicate<T> for EqualTo<T>
where
    T: PartialEq,
{
    fn test(&mut self, item: &T) -> bool {
        *item == self.0
    }
}

#[derive(Debug, Clone)]
pub struct NotEqualTo<T>(T);

impl<T> NotEqualTo<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }
}

impl<T> Predicate<T> for NotEqualTo<T>
where
    T: PartialEq,
{
    fn test(&mut self, item: &T) -> bool {
        *item != self.0
    }
}
