use crate::pulled::PulledValue;
use crate::sequence::Sequence;

/// Pairs each value with its zero-based position in this stage's output.
#[derive(Debug)]
pub struct EachWithIndex<S> {
    upstream: S,
    index: usize,
}

impl<S> EachWithIndex<S> {
    pub(crate) fn new(upstream: S) -> Self {
        Self { upstream, index: 0 }
    }
}

impl<S: Sequence> Sequence for EachWithIndex<S> {
    type Item = (S::Item, usize);

    fn next_value(&mut self) -> PulledValue<(S::Item, usize)> {
        match self.upstream.next_value() {
            PulledValue::Value(v) => {
                let index = self.index;
                self.index += 1;
                PulledValue::Value((v, index))
            }
            PulledValue::End => PulledValue::End,
            PulledValue::Error(e) => PulledValue::Error(e),
        }
    }

    fn rewind(&mut self) {
        self.index = 0;
        self.upstream.rewind();
    }
}
