//! Adapters wrap a parent enumerator and reshape the sequence it produces.
//!
//! Each adapter owns its parent. Wrap `parent.by_ref()` instead to leave the
//! parent with its caller.

mod filter;
mod select;
mod skip;
mod take;
mod until;

pub use filter::Where;
pub use select::Select;
pub use skip::Skip;
pub use take::Take;
pub use until::Until;
