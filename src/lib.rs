//! Lazy enumerator combinators.
//!
//! An [`Enumerator`] is a stateful cursor over a lazy sequence. Chains are
//! built from a source ([`from`], [`from_positions`], [`from_values`]) and
//! any number of adapters, and are only driven when a materializer such as
//! [`Enumerator::to_vec`] or [`Enumerator::copy_to`] runs.
//!
//! ```rust
//! use linq::Enumerator;
//!
//! let source = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
//! let evens = linq::from(&source)
//!     .drop(2)
//!     .take(5)
//!     .select(|x| x * x)
//!     .where_(|v| v % 2 == 0)
//!     .to_vec();
//! assert_eq!(evens, vec![16, 36]);
//! ```

pub mod adapters;
mod enumerator;
mod error;
pub mod predicate;
mod source;

pub use enumerator::{Cloned, Enumerator};
pub use error::{EnumeratorError, Result};
pub use source::{from, from_positions, from_values, Range, Values};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readme_chain() {
        let source = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let result = from(&source)
            .drop(2)
            .take(5)
            .select(|x| x * x)
            .where_(|v| v % 2 == 0)
            .to_vec();
        assert_eq!(result, vec![16, 36]);
    }

    #[test]
    #[should_panic(expected = "enumerator has no current element")]
    fn reading_past_the_end_panics() {
        let source: [i32; 0] = [];
        let mut e = from(&source);
        e.current();
    }
}
