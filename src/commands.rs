//! Subcommand implementations.
//!
//! Each command has a thin `run` wrapper that opens the configured
//! streams and a stream-generic body that does the work, so the bodies
//! are testable against in-memory buffers.

pub mod cols;
pub mod rows;
pub mod stats;

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

/// I/O settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Input file; stdin when absent.
    pub input: Option<PathBuf>,
    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl TableOptions {
    pub fn open_input(&self) -> Result<Box<dyn Read>> {
        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening input file {}", path.display()))?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(io::stdin())),
        }
    }

    pub fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("creating output file {}", path.display()))?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}
