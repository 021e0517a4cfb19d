//! Coroutine-free sequence sources.
//!
//! [`iter`] adapts an existing collection; [`unfold`] drives an explicit state machine.
//! Both resume from plain state instead of a parked procedure, and both rewind by
//! rebuilding that state from what they were created with.

use crate::pulled::PulledValue;
use crate::sequence::Sequence;
use std::fmt;
use std::iter::Fuse;

/// Sequence over a cloneable collection or iterator.
pub fn iter<I>(items: I) -> IterSource<I>
where
    I: IntoIterator + Clone,
{
    IterSource {
        items,
        current: None,
    }
}

/// Sequence produced by repeatedly stepping `seed` until the step returns `None`.
pub fn unfold<S, T, F>(seed: S, step: F) -> Unfold<S, F>
where
    S: Clone,
    F: FnMut(&mut S) -> Option<T>,
{
    Unfold {
        state: seed.clone(),
        seed,
        step,
        done: false,
    }
}

pub struct IterSource<I: IntoIterator> {
    items: I,
    current: Option<Fuse<I::IntoIter>>,
}

impl<I> Sequence for IterSource<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn next_value(&mut self) -> PulledValue<I::Item> {
        let items = &self.items;
        let current = self.current.get_or_insert_with(|| items.clone().into_iter().fuse());
        match current.next() {
            Some(v) => PulledValue::Value(v),
            None => PulledValue::End,
        }
    }

    fn rewind(&mut self) {
        self.current = None;
    }
}

impl<I: IntoIterator + fmt::Debug> fmt::Debug for IterSource<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterSource")
            .field("items", &self.items)
            .field("started", &self.current.is_some())
            .finish()
    }
}

pub struct Unfold<S, F> {
    seed: S,
    state: S,
    step: F,
    done: bool,
}

impl<S, T, F> Sequence for Unfold<S, F>
where
    S: Clone,
    F: FnMut(&mut S) -> Option<T>,
{
    type Item = T;

    fn next_value(&mut self) -> PulledValue<T> {
        if self.done {
            return PulledValue::End;
        }
        match (self.step)(&mut self.state) {
            Some(v) => PulledValue::Value(v),
            None => {
                self.done = true;
                PulledValue::End
            }
        }
    }

    fn rewind(&mut self) {
        self.state = self.seed.clone();
        self.done = false;
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Unfold<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unfold")
            .field("state", &self.state)
            .field("done", &self.done)
            .finish()
    }
}
