// SPDX-FileCopyrightText: (C) 2025 Jason Ish <jason@codemonkey.net>
// SPDX-License-Identifier: MIT

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::prelude::*;

/// Number of bytes read from an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ByteCount(u64);

impl ByteCount {
    pub fn new(n: u64) -> Self {
        Self(n)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ByteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read the whole of `input` into memory and return its length.
pub fn read_byte_count(input: &Path) -> Result<ByteCount, CountError> {
    let buf = std::fs::read(input).map_err(|err| CountError::read(input, err))?;
    trace!("Read {} bytes into memory from {}", buf.len(), input.display());
    Ok(ByteCount(buf.len() as u64))
}

pub fn format_report(count: ByteCount) -> String {
    format!("bytes: {}\n", count)
}

/// Create (or truncate) `output` and write the report line to it.
pub fn write_report(output: &Path, count: ByteCount) -> Result<(), CountError> {
    let mut file = File::create(output).map_err(|err| CountError::write(output, err))?;
    file.write_all(format_report(count).as_bytes())
        .and_then(|_| file.flush())
        .map_err(|err| CountError::write(output, err))?;
    drop(file);
    debug!("Wrote byte count {} to {}", count, output.display());
    Ok(())
}

/// Count the bytes in `input` and write the report to `output`.
///
/// The input is read in full before the output is opened, so a failed
/// read leaves the output untouched.
pub fn run(input: &Path, output: &Path) -> Result<ByteCount, CountError> {
    info!("Counting bytes in {}", input.display());
    let count = read_byte_count(input)?;
    write_report(output, count)?;
    Ok(count)
}
