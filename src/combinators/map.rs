use crate::pulled::PulledValue;
use crate::sequence::Sequence;
use std::fmt;

/// Applies a function to every pulled value.
pub struct Map<S, F> {
    upstream: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(crate) fn new(upstream: S, f: F) -> Self {
        Self { upstream, f }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn next_value(&mut self) -> PulledValue<U> {
        self.upstream.next_value().map(&mut self.f)
    }

    fn rewind(&mut self) {
        self.upstream.rewind();
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Map<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("upstream", &self.upstream).finish()
    }
}
