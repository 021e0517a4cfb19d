//! Generator
//!
//! Restartable, pull-based handle over a production procedure. The procedure runs behind a
//! [`Suspension`] that is created lazily on the first pull and torn down on completion,
//! failure, rewind or drop.

use crate::config::ProducerConfig;
use crate::error::SequenceError;
use crate::pulled::PulledValue;
use crate::sequence::Sequence;
use crate::suspension::{Procedure, Suspension, Yielder};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Observable lifecycle of a [`Generator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    NotStarted,
    Suspended,
    Completed,
    Failed,
}

enum RunState<'a, T> {
    NotStarted,
    Suspended(Suspension<'a, T>),
    Completed,
    Failed(SequenceError),
}

/// A lazy, possibly infinite sequence produced by a procedure.
///
/// The procedure may capture borrowed or non-`Send` state; it runs on the consumer's thread.
///
/// ```
/// use lazyseq::{Generator, Sequence};
///
/// let mut fibonacci: Generator<'_, u64> = Generator::new(|y| {
///     let (mut a, mut b) = (1, 1);
///     loop {
///         y.emit(a);
///         (a, b) = (b, a + b);
///     }
/// });
///
/// assert_eq!(fibonacci.take_n(5).unwrap(), vec![1, 1, 2, 3, 5]);
/// ```
pub struct Generator<'a, T> {
    procedure: Procedure<'a, T>,
    config: ProducerConfig,
    state: RunState<'a, T>,
    peeked: Option<T>,
    emitted: u64,
}

impl<'a, T: 'a> Generator<'a, T> {
    /// Build a generator with the default producer settings.
    pub fn new<F>(procedure: F) -> Self
    where
        F: Fn(&mut Yielder<'_, T>) -> anyhow::Result<()> + 'a,
    {
        Self::with_config(procedure, ProducerConfig::default())
    }

    pub fn with_config<F>(procedure: F, config: ProducerConfig) -> Self
    where
        F: Fn(&mut Yielder<'_, T>) -> anyhow::Result<()> + 'a,
    {
        Self {
            procedure: Rc::new(procedure),
            config,
            state: RunState::NotStarted,
            peeked: None,
            emitted: 0,
        }
    }

    pub fn state(&self) -> GeneratorState {
        match self.state {
            RunState::NotStarted => GeneratorState::NotStarted,
            RunState::Suspended(_) => GeneratorState::Suspended,
            RunState::Completed => GeneratorState::Completed,
            RunState::Failed(_) => GeneratorState::Failed,
        }
    }

    /// Replace the producer settings. Takes effect at the next start, so a running
    /// procedure keeps its current settings until [`Sequence::rewind`].
    pub fn set_config(&mut self, config: ProducerConfig) {
        self.config = config;
    }

    /// Values received from the procedure since the last (re)start.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Look at the next value without consuming it.
    pub fn peek(&mut self) -> PulledValue<&T> {
        if self.peeked.is_none() {
            match self.pull() {
                PulledValue::Value(v) => self.peeked = Some(v),
                PulledValue::End => return PulledValue::End,
                PulledValue::Error(e) => return PulledValue::Error(e),
            }
        }
        self.peeked
            .as_ref()
            .map_or(PulledValue::End, PulledValue::Value)
    }

    fn pull(&mut self) -> PulledValue<T> {
        let state = std::mem::replace(&mut self.state, RunState::NotStarted);

        let (pulled, state) = match state {
            RunState::NotStarted => {
                match Suspension::start(Rc::clone(&self.procedure), &self.config) {
                    Ok(suspension) => advance(suspension),
                    Err(err) => (PulledValue::Error(err.clone()), RunState::Failed(err)),
                }
            }
            RunState::Suspended(suspension) => advance(suspension),
            RunState::Completed => (PulledValue::End, RunState::Completed),
            RunState::Failed(err) => (PulledValue::Error(err.clone()), RunState::Failed(err)),
        };

        self.state = state;
        if pulled.is_value() {
            self.emitted += 1;
        }
        pulled
    }
}

fn advance<'a, T: 'a>(mut suspension: Suspension<'a, T>) -> (PulledValue<T>, RunState<'a, T>) {
    match suspension.resume() {
        PulledValue::Value(v) => (PulledValue::Value(v), RunState::Suspended(suspension)),
        PulledValue::End => {
            debug!("Generator completed");
            (PulledValue::End, RunState::Completed)
        }
        PulledValue::Error(err) => {
            debug!(error = %err, "Generator failed");
            (PulledValue::Error(err.clone()), RunState::Failed(err))
        }
    }
}

impl<'a, T: 'a> Sequence for Generator<'a, T> {
    type Item = T;

    fn next_value(&mut self) -> PulledValue<T> {
        match self.peeked.take() {
            Some(v) => PulledValue::Value(v),
            None => self.pull(),
        }
    }

    fn rewind(&mut self) {
        debug!(state = ?self.state(), emitted = self.emitted, "Generator rewound");
        // Dropping a suspended run cancels its coroutine and unwinds the procedure.
        self.state = RunState::NotStarted;
        self.peeked = None;
        self.emitted = 0;
    }
}

impl<'a, T: 'a> fmt::Debug for Generator<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("state", &self.state())
            .field("emitted", &self.emitted)
            .field("stack_size", &self.config.stack_size)
            .finish()
    }
}
