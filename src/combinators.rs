//! Sequence Combinators
//!
//! Lazy pipeline stages. Each one exclusively owns its upstream, exposes the same pull
//! contract, and passes `End` and `Error` through unchanged.

mod each_with_index;
mod map;
mod select;
mod skip;
mod take;

pub use each_with_index::EachWithIndex;
pub use map::Map;
pub use select::Select;
pub use skip::Skip;
pub use take::Take;
