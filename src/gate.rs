use crate::error::{JsonShapeError, Result};
use crate::shape::{classify, Shape};
use serde_json::Value;

/// Outcome of running a message through the gate.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Failed the shape check; no decode was attempted.
    Skipped,
    /// Passed the shape check and decoded cleanly.
    Decoded(Value),
    /// Passed the shape check but the decoder rejected it.
    Malformed(String),
}

/// Decodes messages only when they look like a JSON object or array.
#[derive(Debug, Clone, Copy)]
pub struct MessageGate {
    strict: bool,
}

impl MessageGate {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn inspect(&self, message: &str) -> Verdict {
        self.inspect_classified(classify(message), message)
    }

    /// Runs the gate with a shape the caller already computed for `message`.
    pub fn inspect_classified(&self, shape: Option<Shape>, message: &str) -> Verdict {
        if shape.is_none() {
            return Verdict::Skipped;
        }
        match serde_json::from_str::<Value>(message) {
            Ok(value) => Verdict::Decoded(value),
            Err(e) => Verdict::Malformed(e.to_string()),
        }
    }

    /// Like [`inspect`](Self::inspect), but turns rejections into errors in
    /// strict mode. `line` is 1-based and only used for error reporting.
    pub fn decode(&self, line: usize, message: &str) -> Result<Option<Value>> {
        match self.inspect(message) {
            Verdict::Decoded(value) => Ok(Some(value)),
            Verdict::Skipped if self.strict => Err(JsonShapeError::NotJsonShaped { line }),
            Verdict::Malformed(reason) if self.strict => Err(JsonShapeError::JsonParse {
                line,
                message: reason,
            }),
            Verdict::Skipped | Verdict::Malformed(_) => Ok(None),
        }
    }
}

impl Default for MessageGate {
    fn default() -> Self {
        Self::new(true)
    }
}
