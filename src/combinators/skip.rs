use crate::pulled::PulledValue;
use crate::sequence::Sequence;

/// Discards the first `count` values, lazily on the first pull.
#[derive(Debug)]
pub struct Skip<S> {
    upstream: S,
    count: usize,
    pending: usize,
}

impl<S> Skip<S> {
    pub(crate) fn new(upstream: S, count: usize) -> Self {
        Self {
            upstream,
            count,
            pending: count,
        }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;

    fn next_value(&mut self) -> PulledValue<S::Item> {
        while self.pending > 0 {
            match self.upstream.next_value() {
                PulledValue::Value(_) => self.pending -= 1,
                terminal => return terminal,
            }
        }
        self.upstream.next_value()
    }

    fn rewind(&mut self) {
        self.pending = self.count;
        self.upstream.rewind();
    }
}
