//! Suspension Point
//!
//! Runs a production procedure as a stackful coroutine on the consumer's own thread. Each
//! `resume` switches onto the coroutine stack and runs the procedure until its next `emit`,
//! which switches back. Control alternates strictly between the two sides; no OS thread is
//! involved, so thread-locals and non-`Send` captures behave as in ordinary code.

use crate::config::{ProducerConfig, MIN_STACK_SIZE};
use crate::error::SequenceError;
use crate::pulled::PulledValue;
use generator::{Gn, LocalGenerator};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// A production procedure: emits values through the [`Yielder`], possibly forever.
pub type Procedure<'a, T> = Rc<dyn Fn(&mut Yielder<'_, T>) -> anyhow::Result<()> + 'a>;

/// What the coroutine hands back on each switch.
enum Signal<T> {
    Emit(T),
    Done,
    Failed(SequenceError),
}

/// Handle passed to a production procedure for emitting values.
pub struct Yielder<'y, T> {
    hand_over: &'y mut dyn FnMut(T),
}

impl<T> Yielder<'_, T> {
    /// Hand `value` to the consumer and park until the next value is requested.
    ///
    /// Returns only when the consumer pulls again. If the generator is rewound or dropped
    /// instead, the procedure is unwound from this call and never resumes.
    pub fn emit(&mut self, value: T) {
        (self.hand_over)(value)
    }

    /// Emit every item of `values` in order.
    pub fn emit_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.emit(value);
        }
    }
}

/// A production procedure parked at its last `emit`.
///
/// Dropping a suspension cancels the coroutine: the parked `emit` unwinds, so the
/// procedure's locals are released before the drop returns.
pub(crate) struct Suspension<'a, T> {
    coroutine: LocalGenerator<'a, (), Signal<T>>,
}

impl<'a, T: 'a> Suspension<'a, T> {
    /// Allocate the coroutine. Nothing of the procedure runs until the first [`resume`].
    ///
    /// [`resume`]: Suspension::resume
    pub(crate) fn start(
        procedure: Procedure<'a, T>,
        config: &ProducerConfig,
    ) -> Result<Self, SequenceError> {
        if config.stack_size < MIN_STACK_SIZE {
            return Err(SequenceError::Start(format!(
                "stack size {} is below the minimum of {} words",
                config.stack_size, MIN_STACK_SIZE
            )));
        }

        let coroutine = Gn::<()>::new_scoped_opt_local(config.stack_size, move |mut scope| {
            let mut hand_over = |value: T| scope.yield_with(Signal::Emit(value));
            let mut yielder = Yielder {
                hand_over: &mut hand_over,
            };
            run_procedure(&*procedure, &mut yielder)
        });

        debug!(stack_size = config.stack_size, "Producer created");
        Ok(Self { coroutine })
    }

    /// Let the procedure run until it emits again or terminates.
    pub(crate) fn resume(&mut self) -> PulledValue<T> {
        match self.coroutine.resume() {
            Some(Signal::Emit(value)) => {
                trace!("Producer emitted");
                PulledValue::Value(value)
            }
            Some(Signal::Done) | None => PulledValue::End,
            Some(Signal::Failed(err)) => PulledValue::Error(err),
        }
    }
}

fn run_procedure<T>(
    procedure: &dyn Fn(&mut Yielder<'_, T>) -> anyhow::Result<()>,
    yielder: &mut Yielder<'_, T>,
) -> Signal<T> {
    match panic::catch_unwind(AssertUnwindSafe(|| procedure(yielder))) {
        Ok(Ok(())) => Signal::Done,
        Ok(Err(err)) => {
            warn!(error = %err, "Producer failed");
            Signal::Failed(SequenceError::producer(err))
        }
        // Cancellation of a parked coroutine; the unwind belongs to the coroutine runtime.
        Err(payload) if payload.is::<generator::Error>() => {
            debug!("Producer abandoned by consumer");
            panic::resume_unwind(payload)
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!(panic = %message, "Producer panicked");
            Signal::Failed(SequenceError::Panicked(message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
