//! The `stats` command: basic statistics of numeric columns.

use std::io::{Read, Write};

use anyhow::Result;
use log::debug;

use super::cols::select_columns;
use super::TableOptions;
use crate::table;

pub fn run(
    options: &TableOptions,
    precision: usize,
    empty_as_zero: bool,
    names: &[String],
) -> Result<()> {
    let input = options.open_input()?;
    let output = options.open_output()?;
    stats_table(
        input,
        output,
        options.delimiter,
        precision,
        empty_as_zero,
        names,
    )
}

/// Online accumulator for one column's basic statistics.
///
/// Mean and variance use Welford's update, so one pass over the rows
/// is enough.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnStats {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
    mean: f64,
    sum_sq_diff: f64,
}

impl ColumnStats {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        if self.count == 0 {
            self.min = value;
            self.max = value;
        }
        self.count += 1;
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
        let previous_mean = self.mean;
        self.mean += (value - self.mean) / self.count as f64;
        self.sum_sq_diff += (value - previous_mean) * (value - self.mean);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// The sum is defined even over zero values.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    pub fn min(&self) -> Option<f64> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max)
    }

    pub fn range(&self) -> Option<f64> {
        (self.count > 0).then_some(self.max - self.min)
    }

    /// Sample standard deviation; needs at least two values.
    pub fn stdev(&self) -> Option<f64> {
        if self.count < 2 {
            return None;
        }
        Some((self.sum_sq_diff / (self.count - 1) as f64).sqrt())
    }
}

/// Summarize the selected columns of a whole table.
///
/// Cells that do not decode as a number (and cells of a requested but
/// absent column) are skipped, or counted as zero with `empty_as_zero`.
pub fn stats_table<R: Read, W: Write>(
    input: R,
    output: W,
    delimiter: u8,
    precision: usize,
    empty_as_zero: bool,
    names: &[String],
) -> Result<()> {
    let mut reader = table::reader(input, delimiter);
    let header = table::read_header(&mut reader)?;
    let (columns, mapping) = select_columns(&header, names);
    debug!("summarizing {} columns", mapping.len());

    let mut stats = vec![ColumnStats::default(); mapping.len()];
    while let Some(row) = table::read_row(&mut reader)? {
        for (calc, source) in stats.iter_mut().zip(&mapping) {
            let value = source
                .and_then(|index| row.get(index))
                .and_then(|field| field.parse::<f64>().ok());
            match value {
                Some(value) => calc.push(value),
                None if empty_as_zero => calc.push(0.0),
                None => {}
            }
        }
    }

    let mut writer = table::writer(output, delimiter);
    let mut head = vec!["Stat".to_string()];
    head.extend(columns.iter().cloned());
    writer.write_record(&head)?;

    write_stat_row(&mut writer, "Sum", &stats, |s| Some(s.sum()), precision)?;
    write_stat_row(&mut writer, "Mean", &stats, ColumnStats::mean, precision)?;
    write_stat_row(&mut writer, "Max", &stats, ColumnStats::max, precision)?;
    write_stat_row(&mut writer, "Min", &stats, ColumnStats::min, precision)?;
    write_stat_row(&mut writer, "StDev", &stats, ColumnStats::stdev, precision)?;
    write_stat_row(&mut writer, "Range", &stats, ColumnStats::range, precision)?;
    writer.flush()?;
    Ok(())
}

fn write_stat_row<W: Write>(
    writer: &mut csv::Writer<W>,
    label: &str,
    stats: &[ColumnStats],
    value: impl Fn(&ColumnStats) -> Option<f64>,
    precision: usize,
) -> Result<()> {
    let mut record = vec![label.to_string()];
    for calc in stats {
        record.push(match value(calc) {
            Some(value) => format_value(value, precision),
            None => "NaN".to_string(),
        });
    }
    writer.write_record(&record)?;
    Ok(())
}

/// Fixed-precision formatting with the trailing zeros trimmed, so whole
/// numbers print without a decimal tail.
fn format_value(value: f64, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
