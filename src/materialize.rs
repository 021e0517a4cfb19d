//! Materialization
//!
//! Terminal operations that drive a pipeline. Everything here pulls from the current
//! position; only [`take_n`] and [`first`] are bounded. The rest need a sequence the caller
//! knows to be finite.

use crate::error::SequenceError;
use crate::pulled::PulledValue;
use crate::sequence::Sequence;

/// Pull until `End`, failing on the first `Error`.
pub fn to_vec<S>(seq: &mut S) -> Result<Vec<S::Item>, SequenceError>
where
    S: Sequence + ?Sized,
{
    let mut values = Vec::new();
    while let Some(v) = seq.next_value().into_result()? {
        values.push(v);
    }
    Ok(values)
}

/// Pull once.
pub fn first<S>(seq: &mut S) -> Result<Option<S::Item>, SequenceError>
where
    S: Sequence + ?Sized,
{
    seq.next_value().into_result()
}

/// Pull at most `n` values; stops early at `End`.
pub fn take_n<S>(seq: &mut S, n: usize) -> Result<Vec<S::Item>, SequenceError>
where
    S: Sequence + ?Sized,
{
    let mut values = Vec::with_capacity(n.min(1024));
    while values.len() < n {
        match seq.next_value() {
            PulledValue::Value(v) => values.push(v),
            PulledValue::End => break,
            PulledValue::Error(e) => return Err(e),
        }
    }
    Ok(values)
}

/// Fold every remaining value, starting from `initial`.
pub fn inject<S, A, F>(seq: &mut S, initial: A, mut f: F) -> Result<A, SequenceError>
where
    S: Sequence + ?Sized,
    F: FnMut(A, S::Item) -> A,
{
    let mut acc = initial;
    while let Some(v) = seq.next_value().into_result()? {
        acc = f(acc, v);
    }
    Ok(acc)
}

/// Fold every remaining value, seeded with the first one.
pub fn reduce<S, F>(seq: &mut S, f: F) -> Result<S::Item, SequenceError>
where
    S: Sequence + ?Sized,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    match seq.next_value() {
        PulledValue::Value(seed) => inject(seq, seed, f),
        PulledValue::End => Err(SequenceError::EmptyReduce),
        PulledValue::Error(e) => Err(e),
    }
}
