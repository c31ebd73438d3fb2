use serde::Serialize;
use std::fmt;

/// Container kind implied by a matching outer bracket pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Object,
    Array,
}

impl Shape {
    pub fn open(self) -> u8 {
        match self {
            Shape::Object => b'{',
            Shape::Array => b'[',
        }
    }

    pub fn close(self) -> u8 {
        match self {
            Shape::Object => b'}',
            Shape::Array => b']',
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Object => write!(f, "object"),
            Shape::Array => write!(f, "array"),
        }
    }
}

/// Classifies the outer shape of `input` by its first and last non-whitespace
/// characters. The interior is never inspected, so `{key: value}` is an object.
pub fn classify(input: &str) -> Option<Shape> {
    let trimmed = input.trim().as_bytes();
    let (&first, &last) = (trimmed.first()?, trimmed.last()?);

    // A single byte is both first and last, and no bracket closes itself.
    [Shape::Object, Shape::Array]
        .into_iter()
        .find(|shape| first == shape.open() && last == shape.close())
}

/// Returns true if `input`, once trimmed, starts and ends with `{}` or `[]`.
///
/// This is a shape check, not a validator: it is meant as a fast path before
/// handing the text to a real JSON decoder.
pub fn looks_like_json(input: &str) -> bool {
    classify(input).is_some()
}
