//! Reading documents from JSON and JSON Lines files.
//!
//! A file whose first non-blank character is `[` is read as one JSON array;
//! anything else is read as JSON Lines, one document per non-empty line:
//!
//! ```jsonl
//! {"title": "Rust Programming", "body": "This is a tutorial"}
//! {"title": "Python Basics", "body": "Learn Python"}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SynotrieError};

/// Iterator over the documents of a JSON Lines reader.
pub struct JsonlReader<R> {
    reader: R,
    line_number: usize,
}

impl<R: BufRead> JsonlReader<R> {
    /// Read documents from `reader`.
    pub fn new(reader: R) -> Self {
        JsonlReader {
            reader,
            line_number: 0,
        }
    }
}

impl JsonlReader<BufReader<File>> {
    /// Open a JSON Lines file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(JsonlReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for JsonlReader<R> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            self.line_number += 1;
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Some(serde_json::from_str(line).map_err(|e| {
                        SynotrieError::other(format!("line {}: {e}", self.line_number))
                    }));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Load every document of a JSON array or JSON Lines file.
pub fn load_documents<P: AsRef<Path>>(path: P) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let mut content = String::new();
    File::open(path)?.read_to_string(&mut content)?;

    let documents = if content.trim_start().starts_with('[') {
        serde_json::from_str(&content)?
    } else {
        JsonlReader::new(content.as_bytes()).collect::<Result<Vec<_>>>()?
    };

    log::debug!("loaded {} documents from {}", documents.len(), path.display());
    Ok(documents)
}
