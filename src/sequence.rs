//! The pull contract shared by generators, sources and combinators.

use crate::combinators::{EachWithIndex, Map, Select, Skip, Take};
use crate::error::SequenceError;
use crate::materialize;
use crate::pulled::PulledValue;
use std::iter::FusedIterator;

/// Anything that yields values one pull at a time.
///
/// Implementations must be idempotent once finished: after `End` or `Error`, further pulls
/// return the same signal without doing any work. Pulls and rewinds take `&mut self`, which
/// rules out reentrant use.
pub trait Sequence {
    type Item;

    /// Pull the next value.
    fn next_value(&mut self) -> PulledValue<Self::Item>;

    /// Restart from the beginning. Effects already performed while producing earlier values
    /// are not undone.
    fn rewind(&mut self);

    /// Transform every value with `f`. `f` only runs for values actually pulled.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Keep only values for which `predicate` holds.
    fn select<P>(self, predicate: P) -> Select<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Select::new(self, predicate)
    }

    /// Yield at most `n` values.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Discard the first `n` values.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Pair each value with its zero-based position.
    fn each_with_index(self) -> EachWithIndex<Self>
    where
        Self: Sized,
    {
        EachWithIndex::new(self)
    }

    /// Borrow this sequence as a pipeline stage without consuming it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Erase the concrete pipeline type.
    fn boxed<'a>(self) -> BoxedSequence<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Adapt into a standard iterator of `Result`s.
    fn iter(self) -> SequenceIter<Self>
    where
        Self: Sized,
    {
        SequenceIter::new(self)
    }

    /// Pull until `End`. Never returns on an unbounded sequence.
    fn to_vec(&mut self) -> Result<Vec<Self::Item>, SequenceError> {
        materialize::to_vec(self)
    }

    /// The next value, or `None` if the sequence is already exhausted.
    fn first(&mut self) -> Result<Option<Self::Item>, SequenceError> {
        materialize::first(self)
    }

    /// Pull at most `n` values. Safe on unbounded sequences.
    fn take_n(&mut self, n: usize) -> Result<Vec<Self::Item>, SequenceError> {
        materialize::take_n(self, n)
    }

    /// Fold every remaining value into `initial`. Never returns on an unbounded sequence.
    fn inject<A, F>(&mut self, initial: A, f: F) -> Result<A, SequenceError>
    where
        Self: Sized,
        F: FnMut(A, Self::Item) -> A,
    {
        materialize::inject(self, initial, f)
    }

    /// Fold using the first value as the seed; an empty sequence is
    /// [`SequenceError::EmptyReduce`].
    fn reduce<F>(&mut self, f: F) -> Result<Self::Item, SequenceError>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        materialize::reduce(self, f)
    }
}

/// A type-erased pipeline stage.
pub type BoxedSequence<'a, T> = Box<dyn Sequence<Item = T> + 'a>;

impl<S: Sequence + ?Sized> Sequence for &mut S {
    type Item = S::Item;

    fn next_value(&mut self) -> PulledValue<Self::Item> {
        (**self).next_value()
    }

    fn rewind(&mut self) {
        (**self).rewind()
    }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
    type Item = S::Item;

    fn next_value(&mut self) -> PulledValue<Self::Item> {
        (**self).next_value()
    }

    fn rewind(&mut self) {
        (**self).rewind()
    }
}

/// Iterator over a sequence. Yields an error at most once, then stays exhausted.
#[derive(Debug)]
pub struct SequenceIter<S> {
    inner: S,
    finished: bool,
}

impl<S> SequenceIter<S> {
    fn new(inner: S) -> Self {
        Self {
            inner,
            finished: false,
        }
    }
}

impl<S: Sequence> Iterator for SequenceIter<S> {
    type Item = Result<S::Item, SequenceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.inner.next_value() {
            PulledValue::Value(v) => Some(Ok(v)),
            PulledValue::End => {
                self.finished = true;
                None
            }
            PulledValue::Error(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: Sequence> FusedIterator for SequenceIter<S> {}
