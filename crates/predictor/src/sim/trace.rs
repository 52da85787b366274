//! Branch trace reader.
//!
//! A trace is plain text, one conditional branch per line:
//!
//! ```text
//! 0x40a2f4 1
//! 40a2fc 0
//! ```
//!
//! The first field is the branch PC in hex (the `0x` prefix is optional) and
//! the second is the resolved outcome, `1` for taken and `0` for not taken.
//! Blank lines are skipped; anything else is a parse error carrying the line
//! number.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::common::{Outcome, TraceError};

/// One resolved conditional branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchRecord {
    /// Address of the branch instruction.
    pub pc: u32,
    /// Direction the branch actually went.
    pub outcome: Outcome,
}

impl BranchRecord {
    /// Creates a record.
    pub const fn new(pc: u32, outcome: Outcome) -> Self {
        Self { pc, outcome }
    }
}

/// Parses a single non-blank trace line.
pub fn parse_line(line: &str, line_no: usize) -> Result<BranchRecord, TraceError> {
    let err = |reason: &'static str| TraceError::Parse {
        line: line_no,
        content: line.trim().to_string(),
        reason,
    };

    let mut fields = line.split_whitespace();
    let pc_field = fields.next().ok_or_else(|| err("missing pc"))?;
    let outcome_field = fields.next().ok_or_else(|| err("missing outcome"))?;
    if fields.next().is_some() {
        return Err(err("trailing fields"));
    }

    let hex = pc_field
        .strip_prefix("0x")
        .or_else(|| pc_field.strip_prefix("0X"))
        .unwrap_or(pc_field);
    let pc = u32::from_str_radix(hex, 16).map_err(|_| err("pc is not a 32-bit hex value"))?;

    let outcome = match outcome_field {
        "1" => Outcome::Taken,
        "0" => Outcome::NotTaken,
        _ => return Err(err("outcome must be 0 or 1")),
    };

    Ok(BranchRecord { pc, outcome })
}

/// Streaming iterator over the records of a trace.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    buf: String,
    line_no: usize,
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps a buffered reader.
    pub const fn new(reader: R) -> Self {
        Self { reader, buf: String::new(), line_no: 0 }
    }
}

impl TraceReader<BufReader<File>> {
    /// Opens the trace file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl TraceReader<io::StdinLock<'static>> {
    /// Reads the trace from standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<BranchRecord, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    if self.buf.trim().is_empty() {
                        continue;
                    }
                    return Some(parse_line(&self.buf, self.line_no));
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
