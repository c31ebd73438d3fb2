use crate::error::Result;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Numbered lines from a file, stdin, or any reader.
pub struct LineSource {
    reader: Box<dyn BufRead>,
}

impl LineSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_reader(file))
    }

    pub fn stdin() -> Self {
        Self {
            reader: Box::new(BufReader::new(io::stdin())),
        }
    }

    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Self {
            reader: Box::new(BufReader::new(reader)),
        }
    }

    /// Yields `(line_number, bytes)` pairs, 1-based, without `\n` or `\r\n`.
    /// Lines are not required to be UTF-8.
    pub fn numbered(self) -> impl Iterator<Item = io::Result<(usize, Vec<u8>)>> {
        self.reader.split(b'\n').enumerate().map(|(idx, line)| {
            line.map(|mut bytes| {
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
                (idx + 1, bytes)
            })
        })
    }
}
