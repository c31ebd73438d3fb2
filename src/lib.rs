pub mod error;
pub mod gate;
pub mod input;
pub mod shape;
pub mod summary;

pub use shape::{classify, looks_like_json, Shape};
