//! Delimited table I/O: the header record and the reader/writer pair.
//!
//! The first record of a table is its header; every later record is a
//! data row. The csv machinery is configured without automatic header
//! handling so the header row stays an ordinary record and duplicate
//! column names survive untouched.

use std::io::{Read, Write};

use anyhow::{bail, Context, Result};

/// The ordered list of column names from the first record of a table.
///
/// Duplicate names are kept as-is; lookups return the first match.
#[derive(Debug, Clone, PartialEq)]
pub struct Header(Vec<String>);

impl Header {
    pub fn new(columns: Vec<String>) -> Self {
        Self(columns)
    }

    /// Index of the first column with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|column| column == name)
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The field delimiter is the first character of the flag value. The
/// csv reader works on byte delimiters, so it must be ASCII.
pub fn parse_delimiter(flag: &str) -> Result<u8> {
    let first = flag.chars().next().context("empty field delimiter")?;
    if !first.is_ascii() {
        bail!("field delimiter must be an ASCII character, found {:?}", first);
    }
    Ok(first as u8)
}

/// Build a table reader over an input stream.
pub fn reader<R: Read>(input: R, delimiter: u8) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_reader(input)
}

/// Build a table writer over an output stream. Records end in CRLF.
pub fn writer<W: Write>(output: W, delimiter: u8) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(csv::Terminator::CRLF)
        .from_writer(output)
}

/// Read the header record. An input without one is an error.
pub fn read_header<R: Read>(reader: &mut csv::Reader<R>) -> Result<Header> {
    let mut record = csv::StringRecord::new();
    if !reader
        .read_record(&mut record)
        .context("reading table header")?
    {
        bail!("empty input, expected a header record");
    }
    Ok(Header::new(record.iter().map(str::to_string).collect()))
}

/// Read the next data row. `None` signals end of input; a malformed
/// record surfaces as an error and ends the row loop.
pub fn read_row<R: Read>(reader: &mut csv::Reader<R>) -> Result<Option<Vec<String>>> {
    let mut record = csv::StringRecord::new();
    if reader
        .read_record(&mut record)
        .context("reading table row")?
    {
        Ok(Some(record.iter().map(str::to_string).collect()))
    } else {
        Ok(None)
    }
}
