mod source;

pub use source::LineSource;
