//! Lazyseq: Lazy Sequence Engine
//!
//! Turns a production procedure (a routine that emits values one at a time, possibly
//! forever) into a pull-based, restartable sequence composable with `map`, `select`,
//! `take`, `skip`, `each_with_index` and folding operations. Values are produced strictly
//! on demand: the procedure is parked at each `emit` until the consumer pulls again.

pub mod combinators;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod materialize;
pub mod pulled;
pub mod sequence;
pub mod source;
pub mod suspension;

pub use error::{EngineError, SequenceError};
pub use generator::{Generator, GeneratorState};
pub use pulled::PulledValue;
pub use sequence::{BoxedSequence, Sequence, SequenceIter};
pub use suspension::Yielder;
