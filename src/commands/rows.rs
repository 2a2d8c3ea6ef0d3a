//! The `rows` command: select rows matching conditional expressions.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use log::debug;

use super::TableOptions;
use crate::expr;
use crate::filter::RowFilter;
use crate::table;

pub fn run(
    options: &TableOptions,
    no_header: bool,
    invert: bool,
    expressions: &[String],
) -> Result<()> {
    let input = options.open_input()?;
    let output = options.open_output()?;
    filter_table(
        input,
        output,
        options.delimiter,
        no_header,
        invert,
        expressions,
    )
}

/// Filter a whole table: parse every expression against the header,
/// then copy through the rows the filter passes.
///
/// Expressions are parsed before any output is produced, so a parse
/// error aborts the run without a partial table.
pub fn filter_table<R: Read, W: Write>(
    input: R,
    output: W,
    delimiter: u8,
    no_header: bool,
    invert: bool,
    expressions: &[String],
) -> Result<()> {
    let mut reader = table::reader(input, delimiter);
    let header = table::read_header(&mut reader)?;

    let mut conditions = Vec::with_capacity(expressions.len());
    for text in expressions {
        let condition = expr::parse(&header, text.trim())
            .with_context(|| format!("parsing expression {:?}", text))?;
        conditions.push(condition);
    }
    debug!(
        "parsed {} conditions against {} columns",
        conditions.len(),
        header.len()
    );
    let filter = RowFilter::new(conditions, invert);

    let mut writer = table::writer(output, delimiter);
    if !no_header {
        writer.write_record(header.columns())?;
    }
    while let Some(row) = table::read_row(&mut reader)? {
        if filter.matches(&row) {
            writer.write_record(&row)?;
        }
    }
    writer.flush()?;
    Ok(())
}
