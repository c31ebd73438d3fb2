use crate::shape::Shape;
use serde::Serialize;

/// Per-run counts reported by `--count`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub shaped: usize,
    pub objects: usize,
    pub arrays: usize,
    pub unshaped: usize,
    pub malformed: usize,
}

impl Summary {
    pub fn record(&mut self, shape: Option<Shape>) {
        self.total += 1;
        match shape {
            Some(Shape::Object) => {
                self.shaped += 1;
                self.objects += 1;
            }
            Some(Shape::Array) => {
                self.shaped += 1;
                self.arrays += 1;
            }
            None => self.unshaped += 1,
        }
    }

    pub fn record_malformed(&mut self) {
        self.malformed += 1;
    }

    pub fn to_text(&self) -> String {
        format!(
            "total: {}\nshaped: {} (objects: {}, arrays: {})\nunshaped: {}\nmalformed: {}",
            self.total, self.shaped, self.objects, self.arrays, self.unshaped, self.malformed
        )
    }
}
