use crate::pulled::PulledValue;
use crate::sequence::Sequence;

/// Yields at most `limit` values.
#[derive(Debug)]
pub struct Take<S> {
    upstream: S,
    limit: usize,
    remaining: usize,
}

impl<S> Take<S> {
    pub(crate) fn new(upstream: S, limit: usize) -> Self {
        Self {
            upstream,
            limit,
            remaining: limit,
        }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;

    fn next_value(&mut self) -> PulledValue<S::Item> {
        // Once the budget is spent upstream is never touched again.
        if self.remaining == 0 {
            return PulledValue::End;
        }
        let pulled = self.upstream.next_value();
        if pulled.is_value() {
            self.remaining -= 1;
        }
        pulled
    }

    fn rewind(&mut self) {
        self.remaining = self.limit;
        self.upstream.rewind();
    }
}
