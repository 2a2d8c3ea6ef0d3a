//! The `cols` command: select, reorder, add, or delete columns by name.

use std::io::{Read, Write};

use anyhow::Result;
use log::debug;

use super::TableOptions;
use crate::table::{self, Header};

pub fn run(options: &TableOptions, no_header: bool, invert: bool, names: &[String]) -> Result<()> {
    let input = options.open_input()?;
    let output = options.open_output()?;
    project_table(
        input,
        output,
        options.delimiter,
        no_header,
        invert,
        names,
    )
}

/// Column selection: the output column names plus, per output column,
/// the source index in the input table. A requested name missing from
/// the header maps to `None` and becomes a new, empty column. With no
/// names every column is selected in order.
pub fn select_columns(header: &Header, names: &[String]) -> (Vec<String>, Vec<Option<usize>>) {
    if names.is_empty() {
        let mapping = (0..header.len()).map(Some).collect();
        return (header.columns().to_vec(), mapping);
    }
    let mapping = names.iter().map(|name| header.index_of(name)).collect();
    (names.to_vec(), mapping)
}

/// Column deletion: every header column whose name was not requested,
/// in header order. With no names nothing is retained.
pub fn delete_columns(header: &Header, names: &[String]) -> (Vec<String>, Vec<Option<usize>>) {
    if names.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let mut columns = Vec::new();
    let mut mapping = Vec::new();
    for (index, column) in header.columns().iter().enumerate() {
        if names.iter().any(|name| name == column) {
            continue;
        }
        columns.push(column.clone());
        mapping.push(Some(index));
    }
    (columns, mapping)
}

/// Pick the mapped fields out of a row; an unmapped output column
/// yields an empty field.
pub fn project(row: &[String], mapping: &[Option<usize>]) -> Vec<String> {
    mapping
        .iter()
        .map(|source| match source {
            Some(index) => row.get(*index).cloned().unwrap_or_default(),
            None => String::new(),
        })
        .collect()
}

/// Project a whole table onto the selected (or retained) columns.
pub fn project_table<R: Read, W: Write>(
    input: R,
    output: W,
    delimiter: u8,
    no_header: bool,
    invert: bool,
    names: &[String],
) -> Result<()> {
    let mut reader = table::reader(input, delimiter);
    let header = table::read_header(&mut reader)?;

    let (columns, mapping) = if invert {
        delete_columns(&header, names)
    } else {
        select_columns(&header, names)
    };
    debug!("projecting {} of {} columns", mapping.len(), header.len());
    if mapping.is_empty() {
        return Ok(());
    }

    let mut writer = table::writer(output, delimiter);
    if !no_header {
        writer.write_record(&columns)?;
    }
    while let Some(row) = table::read_row(&mut reader)? {
        writer.write_record(&project(&row, &mapping))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Header {
        Header::new(
            ["Item", "Amount", "Cost", "Value", "Description"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    const TABLE: &str = "Item\tAmount\tCost\tValue\tDescription\n\
                         1\t3\t50\t150\trubber gloves\n\
                         2\t100\t5\t500\ttest tubes\n\
                         3\t5\t80\t400\tclamps\n";

    #[test]
    fn test_select_reorders() {
        let (columns, mapping) = select_columns(&header(), &names(&["Item", "Cost", "Amount"]));
        assert_eq!(columns, ["Item", "Cost", "Amount"]);
        assert_eq!(mapping, [Some(0), Some(2), Some(1)]);
    }

    #[test]
    fn test_select_all_by_default() {
        let (columns, mapping) = select_columns(&header(), &[]);
        assert_eq!(columns, header().columns());
        assert_eq!(mapping, [Some(0), Some(1), Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn test_select_unknown_creates_empty_column() {
        let (columns, mapping) =
            select_columns(&header(), &names(&["Item", "Cost", "Amount", "Total"]));
        assert_eq!(columns, ["Item", "Cost", "Amount", "Total"]);
        assert_eq!(mapping, [Some(0), Some(2), Some(1), None]);

        let row = names(&["1", "3", "50", "150", "rubber gloves"]);
        assert_eq!(project(&row, &mapping), ["1", "50", "3", ""]);
    }

    #[test]
    fn test_delete_retains_the_rest() {
        let (columns, mapping) = delete_columns(&header(), &names(&["Item", "Cost", "Amount"]));
        assert_eq!(columns, ["Value", "Description"]);
        assert_eq!(mapping, [Some(3), Some(4)]);
    }

    #[test]
    fn test_delete_nothing_retains_nothing() {
        let (columns, mapping) = delete_columns(&header(), &[]);
        assert!(columns.is_empty());
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_project_table() -> Result<()> {
        let mut output = Vec::new();
        project_table(
            TABLE.as_bytes(),
            &mut output,
            b'\t',
            false,
            false,
            &names(&["Item", "Cost"]),
        )?;
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Item\tCost\r\n1\t50\r\n2\t5\r\n3\t80\r\n"
        );
        Ok(())
    }

    #[test]
    fn test_project_table_invert_deletes() -> Result<()> {
        let mut output = Vec::new();
        project_table(
            TABLE.as_bytes(),
            &mut output,
            b'\t',
            false,
            true,
            &names(&["Amount", "Value", "Description"]),
        )?;
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Item\tCost\r\n1\t50\r\n2\t5\r\n3\t80\r\n"
        );
        Ok(())
    }

    #[test]
    fn test_delete_without_names_produces_no_output() -> Result<()> {
        let mut output = Vec::new();
        project_table(TABLE.as_bytes(), &mut output, b'\t', false, true, &[])?;
        assert!(output.is_empty());
        Ok(())
    }
}
