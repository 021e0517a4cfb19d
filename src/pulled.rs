//! Result of a single pull.

use crate::error::SequenceError;

/// Outcome of one `next_value` call: a value, end of sequence, or an error.
#[derive(Debug, Clone)]
pub enum PulledValue<T> {
    Value(T),
    End,
    Error(SequenceError),
}

impl<T> PulledValue<T> {
    pub fn is_value(&self) -> bool {
        matches!(self, PulledValue::Value(_))
    }

    pub fn is_end(&self) -> bool {
        matches!(self, PulledValue::End)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PulledValue::Error(_))
    }

    /// Transform the carried value; `End` and `Error` pass through untouched.
    pub fn map<U, F>(self, f: F) -> PulledValue<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            PulledValue::Value(v) => PulledValue::Value(f(v)),
            PulledValue::End => PulledValue::End,
            PulledValue::Error(e) => PulledValue::Error(e),
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            PulledValue::Value(v) => Some(v),
            _ => None,
        }
    }

    /// `Value(v)` becomes `Ok(Some(v))`, `End` becomes `Ok(None)`.
    pub fn into_result(self) -> Result<Option<T>, SequenceError> {
        match self {
            PulledValue::Value(v) => Ok(Some(v)),
            PulledValue::End => Ok(None),
            PulledValue::Error(e) => Err(e),
        }
    }
}
