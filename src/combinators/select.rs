use crate::pulled::PulledValue;
use crate::sequence::Sequence;
use std::fmt;

/// Keeps values matching a predicate.
///
/// A single pull may consume any number of rejected upstream values, but never pulls past
/// the first accepted value or terminal signal.
pub struct Select<S, P> {
    upstream: S,
    predicate: P,
}

impl<S, P> Select<S, P> {
    pub(crate) fn new(upstream: S, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<S, P> Sequence for Select<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next_value(&mut self) -> PulledValue<S::Item> {
        loop {
            match self.upstream.next_value() {
                PulledValue::Value(v) if (self.predicate)(&v) => return PulledValue::Value(v),
                PulledValue::Value(_) => continue,
                terminal => return terminal,
            }
        }
    }

    fn rewind(&mut self) {
        self.upstream.rewind();
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Select<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("upstream", &self.upstream)
            .finish()
    }
}
