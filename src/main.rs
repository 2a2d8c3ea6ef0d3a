//! tably - command-line management of text-based tables.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tably::commands::{cols, rows, stats, TableOptions};
use tably::table;

/// A tool for management of text-based tables.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// I/O flags shared by every subcommand.
#[derive(Args, Debug)]
struct IoArgs {
    /// Field separation character
    #[arg(short = 'f', default_value = "\t", value_name = "char")]
    field_sep: String,

    /// Read the table from <file> instead of stdin
    #[arg(short, long, value_name = "file")]
    input: Option<PathBuf>,

    /// Write the resulting table to <file> instead of stdout
    #[arg(short, long, value_name = "file")]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Select rows matching an expression
    ///
    /// An expression starts with a column name followed by a conditional
    /// operand ("==", "!=", "<", "<=", ">", ">=") and then a column name,
    /// a string bounded by quotes ("), or a number. Multiple expressions
    /// are taken as an or condition; to implement and, pipe this command
    /// into itself. Enclose each expression in single quotes (') to
    /// protect it from the shell.
    Rows {
        #[command(flatten)]
        io: IoArgs,

        /// Print the table without a header
        #[arg(short, long)]
        no_header: bool,

        /// Output only the rows NOT selected by the expressions
        #[arg(short = 'v', long)]
        invert: bool,

        /// Conditional expressions to evaluate
        #[arg(required = true, value_name = "expression")]
        expressions: Vec<String>,
    },

    /// Select columns by name
    ///
    /// Outputs a table with the named columns, in the order given; a name
    /// that matches no column becomes a new empty column. With no names
    /// all columns are selected. Can be used to select, sort, add, or
    /// delete columns.
    Cols {
        #[command(flatten)]
        io: IoArgs,

        /// Print the table without a header
        #[arg(short, long)]
        no_header: bool,

        /// Delete the named columns instead of selecting them
        #[arg(short = 'v', long)]
        invert: bool,

        /// Column names
        #[arg(value_name = "column")]
        columns: Vec<String>,
    },

    /// Calculate basic stats of columns
    ///
    /// Prints a new table with the basic statistics (sum, mean, max, min,
    /// standard deviation, range) of the named columns, or of every
    /// column when none are named.
    Stats {
        #[command(flatten)]
        io: IoArgs,

        /// Precision in number of decimals
        #[arg(short, default_value_t = 3, value_name = "number")]
        precision: usize,

        /// Count empty or non-numeric cells as zero instead of skipping them
        #[arg(short = 'z', long)]
        empty_as_zero: bool,

        /// Column names
        #[arg(value_name = "column")]
        columns: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Rows {
            io,
            no_header,
            invert,
            expressions,
        } => rows::run(&table_options(io)?, no_header, invert, &expressions),
        Command::Cols {
            io,
            no_header,
            invert,
            columns,
        } => cols::run(&table_options(io)?, no_header, invert, &columns),
        Command::Stats {
            io,
            precision,
            empty_as_zero,
            columns,
        } => stats::run(&table_options(io)?, precision, empty_as_zero, &columns),
    }
}

fn table_options(io: IoArgs) -> Result<TableOptions> {
    Ok(TableOptions {
        delimiter: table::parse_delimiter(&io.field_sep)?,
        input: io.input,
        output: io.output,
    })
}
